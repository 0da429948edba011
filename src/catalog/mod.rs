//! Catalog components.

pub mod filter;
