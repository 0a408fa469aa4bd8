use std::sync::Arc;

use thiserror::Error;

use partstock_core::InventoryState;

/// Storage operation error.
///
/// These are **infrastructure errors** (unreadable data, failed writes) as
/// opposed to domain errors (validation, invariants). "Nothing persisted
/// yet" is not an error; [`StateStore::load`] reports it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Persisted data exists but could not be read or parsed.
    #[error("failed to load inventory state: {0}")]
    Load(String),

    /// The state could not be written durably.
    #[error("failed to save inventory state: {0}")]
    Save(String),
}

impl StorageError {
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    pub fn save(msg: impl Into<String>) -> Self {
        Self::Save(msg.into())
    }
}

/// Durable whole-state store for [`InventoryState`].
///
/// The contract is deliberately coarse: one document, read in full on load,
/// overwritten in full on every save. No partial writes are modeled; a save
/// either replaces the whole persisted representation or fails.
///
/// Implementations must guarantee that `save` followed by `load` reproduces
/// the exact mapping (round-trip fidelity).
pub trait StateStore {
    /// Read the persisted state, or `None` if nothing was ever persisted.
    fn load(&self) -> Result<Option<InventoryState>, StorageError>;

    /// Overwrite the entire persisted representation with `state`.
    fn save(&self, state: &InventoryState) -> Result<(), StorageError>;
}

impl<S> StateStore for Arc<S>
where
    S: StateStore + ?Sized,
{
    fn load(&self) -> Result<Option<InventoryState>, StorageError> {
        (**self).load()
    }

    fn save(&self, state: &InventoryState) -> Result<(), StorageError> {
        (**self).save(state)
    }
}
