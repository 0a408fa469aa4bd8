//! `partstock-storage` — durable persistence for inventory state.
//!
//! The [`store::StateStore`] trait is the persistence collaborator consumed
//! by the inventory store: full-state read on load, full-state overwrite on
//! every mutation. Implementations here cover the JSON file used in
//! production and an in-memory store for tests/dev.

pub mod store;

pub use store::{InMemoryStateStore, JsonFileStore, StateStore, StorageError};
