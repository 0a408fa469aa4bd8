//! Catalog domain module.
//!
//! This crate defines the fixed universe of valid categories and the items
//! within each category. It is the source of truth for which
//! (category, item) pairs the inventory may track.

pub mod catalog;

pub use catalog::Catalog;
