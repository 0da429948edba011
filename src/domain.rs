//! Domain items the shipped components display.
//!
//! These are deliberately small stand-ins for the shop's business objects.
//! Callers load them from wherever their data lives and put them into view
//! slots as serialized values; the components only ever read the fields
//! modeled here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payment states of an order, ordered by how far the payment got.
///
/// The numeric values are part of the configuration surface: the guard
/// threshold for the PDF attachment is configured as one of these numbers.
pub mod payment_status {
    pub const UNFINISHED: i64 = -1;
    pub const DELETED: i64 = 0;
    pub const CANCELED: i64 = 1;
    pub const REFUSED: i64 = 2;
    pub const REFUND: i64 = 3;
    pub const PENDING: i64 = 4;
    pub const AUTHORIZED: i64 = 5;
    pub const RECEIVED: i64 = 6;
}

/// A supplier the catalog can be filtered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub label: String,
}

/// A product attribute (color, size, ...) the catalog can be filtered by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    /// Attribute type code the filter groups by, e.g. `color`.
    #[serde(rename = "type")]
    pub type_code: String,
    pub label: String,
}

/// A node of the category tree shown in the catalog filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    /// End of the category's current promotion period, if any. Pages
    /// listing the category must not be cached beyond this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
}

/// A single ordered product position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
    /// Unit price in minor currency units (cents).
    pub price: i64,
}

impl OrderLine {
    pub fn total(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }
}

/// A placed order as the summary and payment email components need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer: String,
    /// ISO currency code, printed as text next to the amounts.
    pub currency: String,
    pub payment_status: i64,
    pub created: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
}

impl Order {
    pub fn total(&self) -> i64 {
        self.lines.iter().map(OrderLine::total).sum()
    }
}

/// Formats minor currency units as a decimal amount, `5990` becomes
/// `59.90`. The currency code is printed separately by the templates.
pub fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
