//! Domain error model.

use thiserror::Error;

use crate::quantity::Quantity;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The category is not defined by the catalog.
    #[error("unknown category '{category}'")]
    UnknownCategory { category: String },

    /// The item is not defined within the given category.
    #[error("unknown item '{item}' in category '{category}'")]
    UnknownItem { category: String, item: String },

    /// A removal asked for more than is currently on hand.
    #[error(
        "insufficient quantity of '{item}' in '{category}': \
         available {available}, requested {requested}"
    )]
    InsufficientQuantity {
        category: String,
        item: String,
        available: Quantity,
        requested: Quantity,
    },

    /// A quantity was malformed or out of range (zero, negative, non-integer).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// A value failed validation (e.g. a malformed catalog definition).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }

    pub fn unknown_item(category: impl Into<String>, item: impl Into<String>) -> Self {
        Self::UnknownItem {
            category: category.into(),
            item: item.into(),
        }
    }

    pub fn insufficient_quantity(
        category: impl Into<String>,
        item: impl Into<String>,
        available: Quantity,
        requested: Quantity,
    ) -> Self {
        Self::InsufficientQuantity {
            category: category.into(),
            item: item.into(),
            available,
            requested,
        }
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
