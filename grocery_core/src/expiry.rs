//! Expiry tracking for purchased items.
//!
//! Expiry dates are fixed at purchase time from the catalog's shelf life.
//! Classification is a pure function of the inventory and a reference day:
//! - `days_left < 0` → expired
//! - `0 <= days_left <= soon_days` → expiring soon
//! - otherwise fresh

use crate::{Catalog, ClassifiedEntry, ExpiryStatus, InventoryEntry, ItemName};
use chrono::{Days, NaiveDate};

/// Days-left threshold at or below which an item counts as expiring soon
pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 2;

/// Expiry date for an item bought on `purchase_date`
///
/// Saturates at the latest representable date.
pub fn compute_expiry(catalog: &Catalog, name: &ItemName, purchase_date: NaiveDate) -> NaiveDate {
    let days = catalog.shelf_life_days(name.as_str());
    purchase_date
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or_else(|| {
            tracing::warn!("Expiry for '{}' is past the last representable date", name);
            NaiveDate::MAX
        })
}

/// Status of a single expiry date relative to `today`
pub fn status_for(expiry_date: NaiveDate, today: NaiveDate, soon_days: i64) -> ExpiryStatus {
    let days_left = (expiry_date - today).num_days();

    if days_left < 0 {
        ExpiryStatus::Expired {
            days_overdue: -days_left,
        }
    } else if days_left <= soon_days {
        ExpiryStatus::ExpiringSoon { days_left }
    } else {
        ExpiryStatus::Fresh
    }
}

/// Classify every inventory entry, preserving inventory order
pub fn classify(
    inventory: &[InventoryEntry],
    today: NaiveDate,
    soon_days: i64,
) -> Vec<ClassifiedEntry> {
    inventory
        .iter()
        .map(|entry| ClassifiedEntry {
            entry: entry.clone(),
            status: status_for(entry.expiry_date, today, soon_days),
        })
        .collect()
}

/// The expired and expiring-soon subset of a classification
pub fn alerts(classified: &[ClassifiedEntry]) -> Vec<&ClassifiedEntry> {
    classified.iter().filter(|c| c.status.is_alert()).collect()
}
