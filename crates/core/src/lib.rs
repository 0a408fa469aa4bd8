//! `partstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the domain error model, the `Quantity` count value object, and the
//! `InventoryState` category/item count map.

pub mod error;
pub mod quantity;
pub mod state;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use quantity::Quantity;
pub use state::InventoryState;
pub use value_object::ValueObject;
