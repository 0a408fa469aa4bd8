//! Live inventory counts, keyed by category and item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;
use crate::value_object::ValueObject;

/// The live mapping of category name → item name → [`Quantity`].
///
/// Backed by `BTreeMap` so iteration order is deterministic and the
/// serialized form (a JSON object of objects of integers) round-trips
/// exactly. The catalog, not this type, decides which keys are valid;
/// [`InventoryState::reconcile`] realigns a persisted state with it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryState {
    counts: BTreeMap<String, BTreeMap<String, Quantity>>,
}

impl InventoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state with every catalog-defined pair at quantity zero.
    pub fn zeroed<'a>(entries: impl IntoIterator<Item = (&'a str, &'a [String])>) -> Self {
        let mut state = Self::new();
        for (category, items) in entries {
            let bucket = state.counts.entry(category.to_owned()).or_default();
            for item in items {
                bucket.insert(item.clone(), Quantity::ZERO);
            }
        }
        state
    }

    /// Number of (category, item) pairs tracked.
    pub fn pair_count(&self) -> usize {
        self.counts.values().map(BTreeMap::len).sum()
    }

    pub fn contains(&self, category: &str, item: &str) -> bool {
        self.quantity(category, item).is_some()
    }

    pub fn quantity(&self, category: &str, item: &str) -> Option<Quantity> {
        self.counts.get(category).and_then(|b| b.get(item)).copied()
    }

    /// Set the count for a pair, creating it if absent.
    pub fn set(&mut self, category: &str, item: &str, quantity: Quantity) {
        self.counts
            .entry(category.to_owned())
            .or_default()
            .insert(item.to_owned(), quantity);
    }

    /// Iterate categories and their item counts in deterministic order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&str, impl Iterator<Item = (&str, Quantity)>)> {
        self.counts.iter().map(|(category, bucket)| {
            (
                category.as_str(),
                bucket.iter().map(|(item, q)| (item.as_str(), *q)),
            )
        })
    }

    /// Realign this state with the given catalog entries.
    ///
    /// Pairs absent from the catalog are dropped; catalog pairs absent from
    /// this state are inserted at zero. Counts of surviving pairs are kept.
    /// Returns the number of pairs that were dropped.
    pub fn reconcile<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (&'a str, &'a [String])>,
    ) -> usize {
        let before = self.pair_count();
        let mut next: BTreeMap<String, BTreeMap<String, Quantity>> = BTreeMap::new();
        let mut carried = 0usize;

        for (category, items) in entries {
            let old = self.counts.get(category);
            let bucket = next.entry(category.to_owned()).or_default();
            for item in items {
                match old.and_then(|b| b.get(item)).copied() {
                    Some(quantity) => {
                        carried += 1;
                        bucket.insert(item.clone(), quantity);
                    }
                    None => {
                        bucket.insert(item.clone(), Quantity::ZERO);
                    }
                }
            }
        }

        self.counts = next;
        before - carried
    }
}

impl ValueObject for InventoryState {}
