use serde_json::{Value, json};

/// Deployment configuration for the test shop.
pub fn sample_config() -> Value {
    json!({
        "shop": {
            "name": "Test Shop",
            "locale": "en",
            "base_url": "http://shop.test"
        }
    })
}

pub fn sample_suppliers() -> Value {
    json!([
        { "id": "12", "label": "Acme Textiles" },
        { "id": "15", "label": "Nordwind GmbH" },
        { "id": "19", "label": "Brio & Co" },
    ])
}

/// Three categories, two of them with a promotion end date. The earliest
/// date caps the page's cache lifetime.
pub fn sample_categories() -> Value {
    json!([
        { "id": "101", "label": "Summer Dresses", "until": "2026-07-01T00:00:00Z" },
        { "id": "102", "label": "Shoes", "until": "2026-06-15T00:00:00Z" },
        { "id": "103", "label": "Accessories" },
    ])
}

pub fn sample_attributes() -> Value {
    json!([
        { "id": "7", "type": "color", "label": "Red" },
        { "id": "8", "type": "color", "label": "Blue" },
        { "id": "9", "type": "size", "label": "M" },
    ])
}

/// A two-line order for Erika, total 132.30 EUR.
pub fn sample_order(payment_status: i64) -> Value {
    json!({
        "id": "1003",
        "customer": "Erika Mustermann",
        "currency": "EUR",
        "payment_status": payment_status,
        "created": "2026-08-20T10:30:00Z",
        "lines": [
            { "product": "Summer dress", "quantity": 2, "price": 5990 },
            { "product": "Belt", "quantity": 1, "price": 1250 },
        ]
    })
}
