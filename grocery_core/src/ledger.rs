//! The grocery ledger: active list, purchase history and inventory.
//!
//! The ledger is the only thing that mutates these collections. Purchasing
//! moves an item off the active list and records it in both the history and
//! the inventory in one step, so every purchase record has exactly one
//! matching inventory entry.

use crate::expiry::compute_expiry;
use crate::{
    AddOutcome, Catalog, InventoryEntry, ItemName, Purchase, PurchaseRecord, Result, Substitution,
};
use chrono::NaiveDate;

#[derive(Clone, Debug, Default)]
pub struct Ledger {
    active: Vec<ItemName>,
    history: Vec<PurchaseRecord>,
    inventory: Vec<InventoryEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw` and append it to the active list
    ///
    /// When the catalog knows a healthier alternative, `decide` is asked
    /// whether to add that instead. Blank input fails with
    /// `Error::EmptyInput` and leaves the list untouched.
    pub fn add_to_list<F>(&mut self, raw: &str, catalog: &Catalog, decide: F) -> Result<AddOutcome>
    where
        F: FnOnce(&Substitution) -> bool,
    {
        let requested = ItemName::parse(raw)?;

        let offered = catalog.alternative_for(requested.as_str()).cloned();
        let added = match offered {
            Some(ref alternative) => {
                let offer = Substitution {
                    requested: requested.clone(),
                    alternative: alternative.clone(),
                };
                if decide(&offer) {
                    tracing::debug!("Substituting '{}' with '{}'", requested, alternative);
                    alternative.clone()
                } else {
                    requested
                }
            }
            None => requested,
        };

        self.active.push(added.clone());
        tracing::debug!("Added '{}' to list ({} items)", added, self.active.len());

        Ok(AddOutcome { added, offered })
    }

    /// Append a name without consulting the substitution table
    pub fn accept_suggestion(&mut self, name: &ItemName) {
        self.active.push(name.clone());
        tracing::debug!("Accepted suggestion '{}'", name);
    }

    pub fn list_items(&self) -> &[ItemName] {
        &self.active
    }

    /// True if the active list holds `name` (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.active.iter().any(|item| item.matches(name))
    }

    /// Mark the items at the given 1-based positions as purchased
    ///
    /// Positions outside the list are ignored and a repeated position counts
    /// once. Positions are resolved to names before anything is removed; each
    /// resolved name then removes the first matching occurrence from the list.
    /// Returns the purchased names with their expiry dates, in selection order.
    pub fn mark_purchased(
        &mut self,
        indices: &[usize],
        today: NaiveDate,
        catalog: &Catalog,
    ) -> Vec<Purchase> {
        let mut positions: Vec<usize> = Vec::with_capacity(indices.len());
        for &index in indices {
            if (1..=self.active.len()).contains(&index) && !positions.contains(&index) {
                positions.push(index);
            } else {
                tracing::debug!("Ignoring selection {}", index);
            }
        }

        let selected: Vec<ItemName> = positions
            .iter()
            .map(|&index| self.active[index - 1].clone())
            .collect();

        let mut purchases = Vec::with_capacity(selected.len());
        for name in selected {
            let expiry_date = compute_expiry(catalog, &name, today);

            self.history.push(PurchaseRecord {
                name: name.clone(),
                date: today,
            });
            self.inventory.push(InventoryEntry {
                name: name.clone(),
                purchase_date: today,
                expiry_date,
            });

            if let Some(pos) = self.active.iter().position(|item| item == &name) {
                self.active.remove(pos);
            }

            tracing::debug!("Purchased '{}', expires {}", name, expiry_date);
            purchases.push(Purchase { name, expiry_date });
        }

        purchases
    }

    /// Most recent purchase of `name`
    ///
    /// When several purchases share the latest date, the one recorded first
    /// wins.
    pub fn find_last_purchase(&self, name: &str) -> Option<&PurchaseRecord> {
        self.history
            .iter()
            .filter(|record| record.name.matches(name))
            .fold(None, |best: Option<&PurchaseRecord>, record| match best {
                Some(b) if b.date >= record.date => Some(b),
                _ => Some(record),
            })
    }

    pub fn purchase_history(&self) -> &[PurchaseRecord] {
        &self.history
    }

    pub fn inventory(&self) -> &[InventoryEntry] {
        &self.inventory
    }
}

/// Parse a selection such as `"1, 3,x"` into positions
///
/// Parts that are not plain non-negative integers are dropped.
pub fn parse_selection(input: &str) -> Vec<usize> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|part| part.parse().ok())
        .collect()
}
