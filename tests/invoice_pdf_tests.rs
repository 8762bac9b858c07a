mod common;

use common::fixtures::*;
use common::{generate_pdf, TestResult};
use serde_json::json;
use std::collections::HashMap;

#[test]
fn generates_a_single_page_invoice() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&base_request())?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_contains_text!(pdf, "INVOICE");
    assert_pdf_contains_text!(pdf, "INV-0042");
    assert_pdf_contains_text!(pdf, "Jane Smith");
    Ok(())
}

#[test]
fn totals_follow_the_reference_scenario() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // 2500 at 20% tax: subtotal 2500, tax 500, total 3000.
    let pdf = generate_pdf(&base_request())?;
    assert_pdf_contains_text!(pdf, "USD 2500.00");
    assert_pdf_contains_text!(pdf, "USD 500.00");
    assert_pdf_contains_text!(pdf, "USD 3000.00");
    assert_pdf_contains_text!(pdf, "(20.0%)");
    Ok(())
}

#[test]
fn missing_sources_fall_back_to_hard_defaults() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&base_request())?;
    assert_pdf_contains_text!(pdf, "Your Company");
    assert_pdf_contains_text!(pdf, "123 Business Street");
    assert_pdf_contains_text!(pdf, "your@company.com");
    assert_pdf_has_font!(pdf, "Helvetica");
    Ok(())
}

#[test]
fn filename_and_content_type_follow_the_invoice_number() -> TestResult {
    let document = facture::generate_pdf(&base_request(), &HashMap::new())?;
    assert_eq!(document.filename, "invoice-INV-0042.pdf");
    assert_eq!(document.content_type, "application/pdf");
    Ok(())
}

#[test]
fn payment_method_and_notes_blocks_render_when_present() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut request = base_request();
    request.customer.payment_method = Some(facture::PaymentMethod::Bank {
        bank_name: Some("Nordbank".to_string()),
        reg_no: Some("1234".to_string()),
        account_no: Some("567890".to_string()),
        iban: None,
    });
    request.invoice.notes = Some("Payable within 14 days.".to_string());

    let pdf = generate_pdf(&request)?;
    assert_pdf_contains_text!(pdf, "Payment method");
    assert_pdf_contains_text!(pdf, "Nordbank, 1234 567890");
    assert_pdf_contains_text!(pdf, "Notes");
    assert_pdf_contains_text!(pdf, "Payable within 14 days.");
    Ok(())
}

#[test]
fn absent_optional_blocks_are_omitted() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let request = from_json(json!({
        "invoice": {
            "id": "inv-2",
            "number": "7",
            "currency": "EUR",
            "line_items": [],
            "tax_rate": 0
        },
        "customer": {"name": "Bare Customer"}
    }));
    let pdf = generate_pdf(&request)?;
    assert_pdf_page_count!(pdf, 1);
    assert_pdf_not_contains_text!(pdf, "Payment method");
    assert_pdf_not_contains_text!(pdf, "Notes");
    Ok(())
}

#[test]
fn mono_template_switches_the_document_font() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let request = with_template(base_request(), json!({"font_family": "mono"}));
    let pdf = generate_pdf(&request)?;
    assert_pdf_has_font!(pdf, "Courier");
    Ok(())
}
