//! Inventory domain module.
//!
//! This crate contains the inventory data manager: validation of add/remove
//! requests against the catalog, write-through persistence of every
//! successful mutation, and the human-readable snapshot rendering.

pub mod store;

pub use store::{InventoryStore, StoreError};
