//! Default catalog of substitutions, staples and shelf lives.
//!
//! This module provides the built-in reference data the ledger and the
//! engines consult. A catalog never changes once built.

use crate::config::CatalogConfig;
use crate::ItemName;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Shelf life assumed for items missing from the table
pub const DEFAULT_SHELF_LIFE_DAYS: u32 = 7;

/// Longest shelf life a catalog accepts (about a century)
pub const MAX_SHELF_LIFE_DAYS: u32 = 36_500;

const HEALTHIER_ALTERNATIVES: &[(&str, &str)] = &[
    ("white bread", "brown bread"),
    ("full cream milk", "low fat milk"),
    ("sugar", "brown sugar"),
    ("instant noodles", "whole wheat pasta"),
    ("soft drink", "sparkling water"),
];

const STAPLE_ITEMS: &[&str] = &["milk", "bread", "eggs", "rice", "oil"];

const SHELF_LIFE: &[(&str, u32)] = &[
    ("milk", 1),
    ("bread", 3),
    ("eggs", 14),
    ("yogurt", 10),
    ("chicken", 3),
    ("rice", 180),
    ("oil", 365),
];

/// Static reference data for the grocery rules
#[derive(Clone, Debug)]
pub struct Catalog {
    pub alternatives: HashMap<ItemName, ItemName>,
    /// Staples in the order the suggestion engine evaluates them
    pub staples: Vec<ItemName>,
    pub shelf_life: HashMap<ItemName, u32>,
    pub default_shelf_life_days: u32,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog from the built-in tables
pub fn build_default_catalog() -> Catalog {
    let alternatives = HEALTHIER_ALTERNATIVES
        .iter()
        .filter_map(|(from, to)| Some((ItemName::parse(from).ok()?, ItemName::parse(to).ok()?)))
        .collect();

    let staples = STAPLE_ITEMS
        .iter()
        .filter_map(|s| ItemName::parse(s).ok())
        .collect();

    let shelf_life = SHELF_LIFE
        .iter()
        .filter_map(|(name, days)| Some((ItemName::parse(name).ok()?, *days)))
        .collect();

    Catalog {
        alternatives,
        staples,
        shelf_life,
        default_shelf_life_days: DEFAULT_SHELF_LIFE_DAYS,
    }
}

impl Catalog {
    /// Healthier alternative for an item, if the table has one
    pub fn alternative_for(&self, name: &str) -> Option<&ItemName> {
        self.alternatives.get(normalize(name).as_str())
    }

    pub fn is_staple(&self, name: &str) -> bool {
        let key = normalize(name);
        self.staples.iter().any(|s| s.as_str() == key)
    }

    pub fn staples(&self) -> &[ItemName] {
        &self.staples
    }

    /// Assumed days an item stays fresh, falling back to the default
    pub fn shelf_life_days(&self, name: &str) -> u32 {
        self.shelf_life
            .get(normalize(name).as_str())
            .copied()
            .unwrap_or(self.default_shelf_life_days)
    }

    /// Layer config-file entries over this catalog
    ///
    /// Alternatives and shelf lives are merged entry by entry; a configured
    /// staple list replaces the built-in one. Blank names are skipped.
    pub fn with_overrides(&self, overrides: &CatalogConfig) -> Catalog {
        let mut catalog = self.clone();

        for (from, to) in &overrides.alternatives {
            match (ItemName::parse(from), ItemName::parse(to)) {
                (Ok(from), Ok(to)) => {
                    catalog.alternatives.insert(from, to);
                }
                _ => tracing::warn!("Ignoring blank alternative '{}' -> '{}'", from, to),
            }
        }

        for (name, days) in &overrides.shelf_life {
            match ItemName::parse(name) {
                Ok(name) => {
                    catalog.shelf_life.insert(name, *days);
                }
                Err(_) => tracing::warn!("Ignoring shelf life for blank item name"),
            }
        }

        if let Some(ref staples) = overrides.staples {
            catalog.staples = staples
                .iter()
                .filter_map(|s| ItemName::parse(s).ok())
                .collect();
        }

        if let Some(days) = overrides.default_shelf_life_days {
            catalog.default_shelf_life_days = days;
        }

        tracing::debug!(
            "Catalog has {} alternatives, {} staples, {} shelf lives",
            catalog.alternatives.len(),
            catalog.staples.len(),
            catalog.shelf_life.len()
        );

        catalog
    }

    /// Validate the catalog for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (from, to) in &self.alternatives {
            if from == to {
                errors.push(format!("Alternative for '{}' maps to itself", from));
            }
        }

        let mut seen = HashSet::new();
        for staple in &self.staples {
            if !seen.insert(staple) {
                errors.push(format!("Staple '{}' is listed more than once", staple));
            }
        }

        if self.default_shelf_life_days == 0 {
            errors.push("Default shelf life must be at least 1 day".to_string());
        }
        if self.default_shelf_life_days > MAX_SHELF_LIFE_DAYS {
            errors.push(format!(
                "Default shelf life {} exceeds {} days",
                self.default_shelf_life_days, MAX_SHELF_LIFE_DAYS
            ));
        }

        for (name, days) in &self.shelf_life {
            if *days > MAX_SHELF_LIFE_DAYS {
                errors.push(format!(
                    "Shelf life for '{}' ({}) exceeds {} days",
                    name, days, MAX_SHELF_LIFE_DAYS
                ));
            }
        }

        errors
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
