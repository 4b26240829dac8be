//! Core domain types for the grocery assistant.
//!
//! This module defines the fundamental types used throughout the system:
//! - Normalized item names
//! - Purchase records and inventory entries
//! - Expiry classification results
//! - Replenishment suggestions

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// ============================================================================
// Item Names
// ============================================================================

/// A grocery item name, trimmed and lowercased.
///
/// Names are the only identity an item has: two items with the same name are
/// indistinguishable across the list, history and inventory.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    /// Normalize raw input into an item name
    ///
    /// Returns `Error::EmptyInput` if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against an arbitrary string
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other.trim().to_lowercase()
    }
}

impl TryFrom<String> for ItemName {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::parse(&raw)
    }
}

impl From<ItemName> for String {
    fn from(name: ItemName) -> Self {
        name.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Ledger Records
// ============================================================================

/// One entry in the append-only purchase log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseRecord {
    pub name: ItemName,
    pub date: NaiveDate,
}

/// A purchased item tracked for expiry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    pub name: ItemName,
    pub purchase_date: NaiveDate,
    pub expiry_date: NaiveDate,
}

/// Result of marking one list item as purchased
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Purchase {
    pub name: ItemName,
    pub expiry_date: NaiveDate,
}

/// A healthier alternative offered while adding an item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    pub requested: ItemName,
    pub alternative: ItemName,
}

/// What `add_to_list` actually did
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddOutcome {
    /// The name appended to the active list
    pub added: ItemName,
    /// The alternative that was offered, whether or not it was taken
    pub offered: Option<ItemName>,
}

impl AddOutcome {
    /// True if the offered alternative replaced the requested item
    pub fn substituted(&self) -> bool {
        self.offered.as_ref() == Some(&self.added)
    }
}

// ============================================================================
// Expiry Classification
// ============================================================================

/// Freshness of an inventory entry relative to a given day
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired { days_overdue: i64 },
    ExpiringSoon { days_left: i64 },
    Fresh,
}

impl ExpiryStatus {
    pub fn is_alert(&self) -> bool {
        !matches!(self, ExpiryStatus::Fresh)
    }
}

/// An inventory entry paired with its status
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedEntry {
    pub entry: InventoryEntry,
    pub status: ExpiryStatus,
}

// ============================================================================
// Suggestions
// ============================================================================

/// Why an item was suggested
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuggestionReason {
    /// The item has been bought before; `days_ago` is its most recent purchase
    LastBought { days_ago: i64 },
    /// A staple that has never been bought
    CommonStaple,
}

impl fmt::Display for SuggestionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionReason::LastBought { days_ago } => {
                write!(f, "last bought {} days ago", days_ago)
            }
            SuggestionReason::CommonStaple => f.write_str("common staple item"),
        }
    }
}

/// A proposed addition to the active list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub name: ItemName,
    pub reason: SuggestionReason,
}
