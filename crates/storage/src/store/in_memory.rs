use std::sync::RwLock;

use partstock_core::InventoryState;

use super::r#trait::{StateStore, StorageError};

/// In-memory whole-state store.
///
/// Intended for tests/dev. Holds at most one persisted state, exactly like
/// the single document a file-backed store would hold.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: RwLock<Option<InventoryState>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted state, as if a prior process had
    /// saved it.
    pub fn with_state(state: InventoryState) -> Self {
        Self {
            state: RwLock::new(Some(state)),
        }
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self) -> Result<Option<InventoryState>, StorageError> {
        let guard = self
            .state
            .read()
            .map_err(|_| StorageError::load("lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, state: &InventoryState) -> Result<(), StorageError> {
        let mut guard = self
            .state
            .write()
            .map_err(|_| StorageError::save("lock poisoned"))?;
        *guard = Some(state.clone());
        Ok(())
    }
}
