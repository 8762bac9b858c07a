//! Scenario builders for integration tests.

use facture::InvoiceRenderRequest;
use serde_json::{json, Value};

/// A plain English invoice with one customer and no template or profile.
pub fn base_request() -> InvoiceRenderRequest {
    from_json(json!({
        "invoice": {
            "id": "inv-1",
            "number": "42",
            "currency": "USD",
            "title": "Invoice for website design",
            "line_items": [
                {"description": "Website redesign", "quantity": 1, "rate": 2500}
            ],
            "tax_rate": 20,
            "issue_date": "2025-03-01",
            "due_date": "2025-03-15"
        },
        "customer": {
            "name": "Jane Smith",
            "address": "1 High Street\nSpringfield",
            "email": "jane@example.com"
        }
    }))
}

pub fn from_json(value: Value) -> InvoiceRenderRequest {
    serde_json::from_value(value).expect("fixture JSON must deserialize")
}

/// Replace the line items with `count` generated service rows.
pub fn with_item_count(mut request: InvoiceRenderRequest, count: usize) -> InvoiceRenderRequest {
    let items = (0..count)
        .map(|i| facture::LineItem::new(format!("Service {}", i + 1), 1.0, 100.0))
        .collect();
    request.invoice.line_items = Some(items);
    request
}

/// Attach a template with the given data payload.
pub fn with_template(mut request: InvoiceRenderRequest, data: Value) -> InvoiceRenderRequest {
    request.template = Some(
        serde_json::from_value(json!({
            "id": "tpl-1",
            "name": "Brand",
            "data": data
        }))
        .expect("template fixture must deserialize"),
    );
    request
}

/// Attach a company profile.
pub fn with_profile(mut request: InvoiceRenderRequest, profile: Value) -> InvoiceRenderRequest {
    request.profile = Some(serde_json::from_value(profile).expect("profile fixture must deserialize"));
    request
}
