//! Suggestion engine for replenishing the grocery list.
//!
//! Rules are applied in order and their results merged, keeping the first
//! occurrence of each name (windows shown are the defaults):
//!
//! 1. **Recency**: anything bought between 5 and 9 days ago (inclusive)
//! 2. **Staleness**: each staple never bought, or last bought more than
//!    14 days ago
//!
//! Items already on the active list are never suggested.

use crate::config::RulesConfig;
use crate::{Catalog, ItemName, Ledger, Suggestion, SuggestionReason};
use chrono::NaiveDate;

/// Lower bound of the recency window, in days since purchase
pub const DEFAULT_RECENT_MIN_DAYS: i64 = 5;

/// Upper bound of the recency window, inclusive
pub const DEFAULT_RECENT_MAX_DAYS: i64 = 9;

/// Staples last bought longer ago than this are suggested again
pub const DEFAULT_STAPLE_STALE_DAYS: i64 = 14;

/// Propose items to add to the active list
///
/// Pure function of the ledger, the catalog and `today`; calling it twice
/// with the same inputs yields the same ordered list.
pub fn suggest(
    ledger: &Ledger,
    catalog: &Catalog,
    today: NaiveDate,
    rules: &RulesConfig,
) -> Vec<Suggestion> {
    let mut names: Vec<ItemName> = Vec::new();

    let mut propose = |name: &ItemName, rule: &str| {
        if ledger.contains(name.as_str()) || names.contains(name) {
            return;
        }
        tracing::debug!("{} rule suggests '{}'", rule, name);
        names.push(name.clone());
    };

    // Rule 1: bought within the recent window
    for record in ledger.purchase_history() {
        let days_ago = (today - record.date).num_days();
        if (rules.recent_min_days..=rules.recent_max_days).contains(&days_ago) {
            propose(&record.name, "Recency");
        }
    }

    // Rule 2: staples never bought or not bought for a while
    for staple in catalog.staples() {
        match ledger.find_last_purchase(staple.as_str()) {
            None => propose(staple, "Staple"),
            Some(last) => {
                if (today - last.date).num_days() > rules.staple_stale_days {
                    propose(staple, "Staleness");
                }
            }
        }
    }

    let suggestions: Vec<Suggestion> = names
        .into_iter()
        .map(|name| {
            let reason = match ledger.find_last_purchase(name.as_str()) {
                Some(last) => SuggestionReason::LastBought {
                    days_ago: (today - last.date).num_days(),
                },
                None => SuggestionReason::CommonStaple,
            };
            Suggestion { name, reason }
        })
        .collect();

    tracing::info!("Generated {} suggestions", suggestions.len());
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_default_catalog;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 6, 30)
    }

    /// Buy each item `days_ago` days before `today()`
    fn buy(ledger: &mut Ledger, catalog: &Catalog, items: &[&str], days_ago: i64) {
        for item in items {
            ledger.accept_suggestion(&ItemName::parse(item).unwrap());
            let last = ledger.list_items().len();
            ledger.mark_purchased(&[last], today() - Duration::days(days_ago), catalog);
        }
    }

    fn names(suggestions: &[Suggestion]) -> Vec<&str> {
        suggestions.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_empty_history_suggests_all_staples() {
        let catalog = build_default_catalog();
        let ledger = Ledger::new();

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(names(&suggestions), vec!["milk", "bread", "eggs", "rice", "oil"]);
        assert!(suggestions
            .iter()
            .all(|s| s.reason == SuggestionReason::CommonStaple));
    }

    #[test]
    fn test_recency_window_is_inclusive() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["milk", "bread", "eggs", "rice", "oil"], 1);
        buy(&mut ledger, &catalog, &["apples"], 4);
        buy(&mut ledger, &catalog, &["yogurt"], 5);
        buy(&mut ledger, &catalog, &["cheese"], 9);
        buy(&mut ledger, &catalog, &["chicken"], 10);

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(names(&suggestions), vec!["yogurt", "cheese"]);
        assert_eq!(
            suggestions[0].reason,
            SuggestionReason::LastBought { days_ago: 5 }
        );
        assert_eq!(
            suggestions[1].reason,
            SuggestionReason::LastBought { days_ago: 9 }
        );
    }

    #[test]
    fn test_stale_staple_suggested_after_fourteen_days() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["bread", "eggs", "oil"], 1);
        buy(&mut ledger, &catalog, &["milk"], 14);
        buy(&mut ledger, &catalog, &["rice"], 15);

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(names(&suggestions), vec!["rice"]);
        assert_eq!(
            suggestions[0].reason,
            SuggestionReason::LastBought { days_ago: 15 }
        );
    }

    #[test]
    fn test_never_bought_staple_has_staple_reason() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["milk", "bread", "eggs", "oil"], 2);

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(names(&suggestions), vec!["rice"]);
        assert_eq!(suggestions[0].reason, SuggestionReason::CommonStaple);
        assert_eq!(suggestions[0].reason.to_string(), "common staple item");
    }

    #[test]
    fn test_items_on_list_are_never_suggested() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["yogurt"], 6);
        buy(&mut ledger, &catalog, &["eggs"], 30);
        for item in ["yogurt", "eggs", "rice"] {
            ledger.accept_suggestion(&ItemName::parse(item).unwrap());
        }

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        let suggested = names(&suggestions);
        assert!(!suggested.contains(&"yogurt"));
        assert!(!suggested.contains(&"eggs"));
        assert!(!suggested.contains(&"rice"));
        assert_eq!(suggested, vec!["milk", "bread", "oil"]);
    }

    #[test]
    fn test_suggestions_are_deduplicated_across_rules() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        // Bought twice inside the window and also a staple
        buy(&mut ledger, &catalog, &["bread"], 8);
        buy(&mut ledger, &catalog, &["bread"], 6);
        buy(&mut ledger, &catalog, &["milk", "eggs", "rice", "oil"], 1);

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(names(&suggestions), vec!["bread"]);
        assert_eq!(
            suggestions[0].reason,
            SuggestionReason::LastBought { days_ago: 6 }
        );
    }

    #[test]
    fn test_recency_reason_reports_latest_purchase() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["milk", "bread", "eggs", "rice", "oil"], 0);
        buy(&mut ledger, &catalog, &["yogurt"], 7);
        buy(&mut ledger, &catalog, &["yogurt"], 2);

        let suggestions = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(names(&suggestions), vec!["yogurt"]);
        assert_eq!(suggestions[0].reason.to_string(), "last bought 2 days ago");
    }

    #[test]
    fn test_suggest_is_idempotent() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["yogurt", "milk"], 7);
        buy(&mut ledger, &catalog, &["rice"], 40);

        let first = suggest(&ledger, &catalog, today(), &RulesConfig::default());
        let second = suggest(&ledger, &catalog, today(), &RulesConfig::default());

        assert_eq!(first, second);
        assert_eq!(names(&first), vec!["yogurt", "milk", "bread", "eggs", "rice", "oil"]);
    }

    #[test]
    fn test_custom_rules_window() {
        let catalog = build_default_catalog();
        let mut ledger = Ledger::new();
        buy(&mut ledger, &catalog, &["milk", "bread", "eggs", "rice", "oil"], 3);

        let rules = RulesConfig {
            recent_min_days: 2,
            recent_max_days: 3,
            staple_stale_days: 30,
            ..RulesConfig::default()
        };
        let suggestions = suggest(&ledger, &catalog, today(), &rules);

        assert_eq!(names(&suggestions), vec!["milk", "bread", "eggs", "rice", "oil"]);
    }
}
