//! Static catalog of categories and their items.

use serde::{Deserialize, Serialize};

use partstock_core::{DomainError, DomainResult};

/// One category and its items, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CategoryEntry {
    name: String,
    items: Vec<String>,
}

/// Fixed definition of valid categories and their items.
///
/// Created once at process start from a fixed configuration and never
/// mutated. Declaration order is preserved so selection controls list
/// categories and items the way the configuration spelled them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<CategoryEntry>,
}

impl Catalog {
    /// Build a catalog, validating the definition.
    ///
    /// Category names must be non-blank and unique; item names must be
    /// non-blank and unique within their category.
    pub fn new(
        entries: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> DomainResult<Self> {
        let mut categories: Vec<CategoryEntry> = Vec::new();

        for (name, items) in entries {
            if name.trim().is_empty() {
                return Err(DomainError::validation("category name cannot be blank"));
            }
            if categories.iter().any(|c| c.name == name) {
                return Err(DomainError::validation(format!(
                    "duplicate category '{name}'"
                )));
            }
            for (idx, item) in items.iter().enumerate() {
                if item.trim().is_empty() {
                    return Err(DomainError::validation(format!(
                        "blank item name in category '{name}'"
                    )));
                }
                if items[..idx].contains(item) {
                    return Err(DomainError::validation(format!(
                        "duplicate item '{item}' in category '{name}'"
                    )));
                }
            }
            categories.push(CategoryEntry { name, items });
        }

        Ok(Self { categories })
    }

    /// Ordered category names.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Ordered item names of a category.
    pub fn items_of(&self, category: &str) -> DomainResult<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
            .ok_or_else(|| DomainError::unknown_category(category))
    }

    /// Whether the catalog defines the given (category, item) pair.
    pub fn contains(&self, category: &str, item: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name == category && c.items.iter().any(|i| i == item))
    }

    /// Ordered (category, items) entries, for building or reconciling an
    /// inventory state.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|c| (c.name.as_str(), c.items.as_slice()))
    }
}
