//! The inventory store: live counts, validation, write-through persistence.

use thiserror::Error;
use tracing::{debug, warn};

use partstock_catalog::Catalog;
use partstock_core::{DomainError, InventoryState, Quantity};
use partstock_storage::{StateStore, StorageError};

/// Error surface of [`InventoryStore`] operations.
///
/// Domain rejections (unknown keys, insufficient or invalid quantities)
/// and infrastructure faults (load/save failures) are kept distinguishable
/// for the caller. Every error leaves both the in-memory and the persisted
/// state unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the live quantities for a fixed catalog of parts.
///
/// Constructed via [`InventoryStore::load`]; a constructed store is always
/// ready, there is no observable uninitialized state. Every successful
/// mutation synchronously persists the full state through the storage
/// collaborator. If that persist fails, the in-memory change is rolled back
/// before the error is returned, so `snapshot()` never shows a count that
/// durable storage does not hold.
#[derive(Debug)]
pub struct InventoryStore<S> {
    catalog: Catalog,
    state: InventoryState,
    store: S,
}

impl<S: StateStore> InventoryStore<S> {
    /// Load prior persisted state, falling back to a zeroed baseline.
    ///
    /// Persisted state is reconciled against the catalog: pairs the catalog
    /// no longer defines are dropped, newly defined pairs start at zero.
    /// A read failure (malformed or unreadable data) aborts construction;
    /// the caller decides fallback policy.
    pub fn load(catalog: Catalog, store: S) -> Result<Self, StoreError> {
        let state = match store.load()? {
            Some(mut persisted) => {
                let dropped = persisted.reconcile(catalog.entries());
                if dropped > 0 {
                    warn!(dropped, "dropped persisted pairs no longer in the catalog");
                }
                persisted
            }
            None => {
                debug!("no persisted state, starting from a zeroed inventory");
                InventoryState::zeroed(catalog.entries())
            }
        };

        Ok(Self {
            catalog,
            state,
            store,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    /// Current count for a pair, if the catalog defines it.
    pub fn quantity_of(&self, category: &str, item: &str) -> Option<Quantity> {
        self.state.quantity(category, item)
    }

    /// Increase the count of a catalog-defined pair and persist.
    pub fn add_item(
        &mut self,
        category: &str,
        item: &str,
        quantity: Quantity,
    ) -> Result<(), StoreError> {
        let current = self.validated(category, item, quantity)?;
        let next = current.checked_add(quantity).ok_or_else(|| {
            DomainError::invalid_quantity(format!(
                "adding {quantity} to {current} overflows the stored count"
            ))
        })?;
        self.apply(category, item, current, next)
    }

    /// Decrease the count of a catalog-defined pair and persist.
    ///
    /// Fails if the current count is smaller than the requested amount;
    /// a count never goes negative.
    pub fn remove_item(
        &mut self,
        category: &str,
        item: &str,
        quantity: Quantity,
    ) -> Result<(), StoreError> {
        let current = self.validated(category, item, quantity)?;
        let next = current.checked_sub(quantity).ok_or_else(|| {
            DomainError::insufficient_quantity(category, item, current, quantity)
        })?;
        self.apply(category, item, current, next)
    }

    /// Deterministic human-readable rendering of the full state.
    ///
    /// One block per category in state iteration order: the category name
    /// with a trailing colon, one indented `item: quantity` line per item,
    /// and a blank line after each block. Pure and idempotent.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        for (category, items) in self.state.iter() {
            out.push_str(category);
            out.push_str(":\n");
            for (item, quantity) in items {
                out.push_str(&format!("  {item}: {quantity}\n"));
            }
            out.push('\n');
        }
        out
    }

    /// Common precondition checks; returns the current count on success.
    fn validated(
        &self,
        category: &str,
        item: &str,
        quantity: Quantity,
    ) -> Result<Quantity, DomainError> {
        if quantity.is_zero() {
            return Err(DomainError::invalid_quantity("quantity must be positive"));
        }
        match self.state.quantity(category, item) {
            Some(current) => Ok(current),
            None if self.catalog.items_of(category).is_err() => {
                Err(DomainError::unknown_category(category))
            }
            None => Err(DomainError::unknown_item(category, item)),
        }
    }

    /// Commit a single-count change, rolling back if the persist fails.
    fn apply(
        &mut self,
        category: &str,
        item: &str,
        previous: Quantity,
        next: Quantity,
    ) -> Result<(), StoreError> {
        self.state.set(category, item, next);
        if let Err(e) = self.store.save(&self.state) {
            self.state.set(category, item, previous);
            warn!(
                category,
                item,
                error = %e,
                "persist failed, rolled back in-memory change"
            );
            return Err(e.into());
        }
        debug!(category, item, quantity = %next, "inventory updated");
        Ok(())
    }
}
