//! Order components.

pub mod summary;

pub use summary::OrderSummary;
