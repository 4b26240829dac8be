//! The operation set a presentation layer drives.
//!
//! `Assistant` bundles the catalog, the ledger, the rule thresholds and a
//! clock. Each operation that depends on the date samples the clock once.

use crate::config::{Config, RulesConfig};
use crate::engine::suggest;
use crate::expiry::classify;
use crate::{
    get_default_catalog, AddOutcome, Catalog, ClassifiedEntry, Clock, Error, ItemName, Ledger,
    Purchase, PurchaseRecord, Result, Substitution, Suggestion, SystemClock,
};

pub struct Assistant<C: Clock = SystemClock> {
    catalog: Catalog,
    rules: RulesConfig,
    ledger: Ledger,
    clock: C,
}

impl<C: Clock> Assistant<C> {
    /// Assistant with the built-in catalog and default rules
    pub fn new(clock: C) -> Self {
        Self::with_parts(get_default_catalog().clone(), RulesConfig::default(), clock)
    }

    pub fn with_parts(catalog: Catalog, rules: RulesConfig, clock: C) -> Self {
        Self {
            catalog,
            rules,
            ledger: Ledger::new(),
            clock,
        }
    }

    /// Build from a loaded config, layering its catalog entries over the
    /// built-in tables
    pub fn from_config(config: &Config, clock: C) -> Result<Self> {
        config.validate()?;

        let catalog = get_default_catalog().with_overrides(&config.catalog);
        let errors = catalog.validate();
        if !errors.is_empty() {
            for error in &errors {
                tracing::warn!("Catalog problem: {}", error);
            }
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        Ok(Self::with_parts(catalog, config.rules.clone(), clock))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn add_to_list<F>(&mut self, raw: &str, decide: F) -> Result<AddOutcome>
    where
        F: FnOnce(&Substitution) -> bool,
    {
        self.ledger.add_to_list(raw, &self.catalog, decide)
    }

    pub fn list_items(&self) -> &[ItemName] {
        self.ledger.list_items()
    }

    pub fn mark_purchased(&mut self, indices: &[usize]) -> Vec<Purchase> {
        let today = self.clock.today();
        self.ledger.mark_purchased(indices, today, &self.catalog)
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        suggest(&self.ledger, &self.catalog, self.clock.today(), &self.rules)
    }

    pub fn accept_suggestion(&mut self, name: &ItemName) {
        self.ledger.accept_suggestion(name)
    }

    pub fn classify_inventory(&self) -> Vec<ClassifiedEntry> {
        classify(
            self.ledger.inventory(),
            self.clock.today(),
            self.rules.expiring_soon_days,
        )
    }

    pub fn purchase_history(&self) -> &[PurchaseRecord] {
        self.ledger.purchase_history()
    }
}
