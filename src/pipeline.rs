//! The one pipeline both surfaces share.
//!
//! The interactive preview and the offline document generator used to carry
//! their own copies of resolution and layout; here they are the same
//! [`render_invoice`] call followed by a thin adapter, so they cannot drift
//! apart.

use chrono::NaiveDate;
use facture_layout::{layout_invoice, InvoiceHeaderFields, LaidOutDocument, LayoutError};
use facture_model::{CustomerRecord, InvoiceRecord, LineItem, ProfileRecord, TemplateRecord};
use facture_render_core::SharedData;
use facture_render_pdf::render_to_pdf;
use facture_render_svg::render_to_svg;
use facture_resolve::{detect, resolve};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::PipelineError;

/// Everything one render needs, fetched and validated by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRenderRequest {
    pub invoice: InvoiceRecord,
    pub customer: CustomerRecord,
    #[serde(default)]
    pub template: Option<TemplateRecord>,
    #[serde(default)]
    pub profile: Option<ProfileRecord>,
    /// Reference date for displaying a sent invoice as overdue. `None`
    /// shows the stored status unchanged, keeping renders reproducible.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Finished document bytes plus the metadata a delivery layer needs.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

/// Resolve, total, detect, and lay out one invoice.
pub fn render_invoice(request: &InvoiceRenderRequest) -> Result<LaidOutDocument, PipelineError> {
    let invoice = &request.invoice;
    let items = invoice
        .line_items
        .as_deref()
        .ok_or(LayoutError::MissingRequiredData("line items"))?;

    let presentation = resolve(
        request.template.as_ref().map(|t| &t.data),
        request.profile.as_ref(),
    );
    let totals = facture_resolve::compute(items, invoice.tax_rate);
    let language = detect(&detection_text(invoice, items));
    let header = header_fields(invoice, &request.customer, request.today);

    let document = layout_invoice(
        &presentation,
        &header,
        items,
        &totals,
        &request.customer,
        language,
    )?;
    Ok(document)
}

/// Generate the paginated PDF. `resources` maps the resolved logo URL to
/// its already-fetched bytes; pass an empty map to render without a logo.
pub fn generate_pdf(
    request: &InvoiceRenderRequest,
    resources: &HashMap<String, SharedData>,
) -> Result<GeneratedDocument, PipelineError> {
    let document = render_invoice(request)?;
    let bytes = render_to_pdf(&document, resources)?;
    let number = request
        .invoice
        .display_number()
        .unwrap_or_else(|| request.invoice.id.clone());
    let filename = format!("invoice-{}.pdf", number);
    log::debug!("generated {} ({} bytes)", filename, bytes.len());
    Ok(GeneratedDocument {
        bytes,
        content_type: "application/pdf",
        filename,
    })
}

/// Generate the on-screen preview: one SVG string per page, scaled from
/// logical millimeters to CSS pixels.
pub fn preview_svg(
    request: &InvoiceRenderRequest,
    px_per_mm: f32,
) -> Result<Vec<String>, PipelineError> {
    let document = render_invoice(request)?;
    Ok(render_to_svg(&document, px_per_mm)?)
}

/// Language detection reads the invoice's own content only: title,
/// description, and the first line item. The user's stored display
/// preference is deliberately not consulted.
fn detection_text(invoice: &InvoiceRecord, items: &[LineItem]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(title) = invoice.title.as_deref() {
        parts.push(title);
    }
    if let Some(description) = invoice.description.as_deref() {
        parts.push(description);
    }
    if let Some(first) = items.first() {
        parts.push(&first.description);
    }
    parts.join("\n")
}

fn header_fields(
    invoice: &InvoiceRecord,
    customer: &CustomerRecord,
    today: Option<NaiveDate>,
) -> InvoiceHeaderFields {
    let status = match today {
        Some(today) => invoice.status.effective(invoice.due_date, today),
        None => invoice.status,
    };
    // Payment terms: the customer's configured terms, or the span between
    // the invoice's own dates when both are present.
    let payment_terms_days = customer.payment_terms_days.or_else(|| {
        match (invoice.issue_date, invoice.due_date) {
            (Some(issued), Some(due)) if due >= issued => {
                Some((due - issued).num_days() as u32)
            }
            _ => None,
        }
    });
    InvoiceHeaderFields {
        number: invoice.display_number(),
        title: invoice.title.clone(),
        description: invoice.description.clone(),
        currency: invoice.currency.clone(),
        tax_rate: invoice.tax_rate,
        issue_date: invoice.issue_date,
        due_date: invoice.due_date,
        payment_terms_days,
        status,
        notes: invoice.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facture_model::InvoiceStatus;

    fn minimal_request() -> InvoiceRenderRequest {
        serde_json::from_str(
            r#"{
                "invoice": {
                    "id": "inv-1",
                    "number": "42",
                    "currency": "USD",
                    "line_items": [
                        {"description": "Website redesign", "quantity": 1, "rate": 2500}
                    ],
                    "tax_rate": 20
                },
                "customer": {"name": "Jane Smith"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn absent_line_items_fail_before_layout() {
        let mut request = minimal_request();
        request.invoice.line_items = None;
        let err = render_invoice(&request).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Layout(LayoutError::MissingRequiredData("line items"))
        ));
    }

    #[test]
    fn empty_line_items_render_fine() {
        let mut request = minimal_request();
        request.invoice.line_items = Some(Vec::new());
        assert!(render_invoice(&request).is_ok());
    }

    #[test]
    fn detection_ignores_customer_and_company_data() {
        // Danish customer name, English invoice content: stays English.
        let mut request = minimal_request();
        request.customer.name = "Søren Kierkegaard Byggefirma".to_string();
        request.invoice.title = Some("Invoice for consulting".to_string());
        let document = render_invoice(&request).unwrap();
        assert!(document.text_contents().contains(&"INVOICE"));
    }

    #[test]
    fn effective_status_needs_a_reference_date() {
        let mut request = minimal_request();
        request.invoice.status = InvoiceStatus::Sent;
        request.invoice.due_date = NaiveDate::from_ymd_opt(2025, 1, 1);

        let stored = render_invoice(&request).unwrap();
        assert!(stored.text_contents().contains(&"Sent"));

        request.today = NaiveDate::from_ymd_opt(2025, 2, 1);
        let effective = render_invoice(&request).unwrap();
        assert!(effective.text_contents().contains(&"Overdue"));
    }
}
