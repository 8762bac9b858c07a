use crate::engine::{layout_invoice, InvoiceHeaderFields};
use crate::instruction::{DrawInstruction, LaidOutDocument};
use crate::labels::labels_for;
use crate::LayoutError;
use facture_model::{CustomerRecord, LineItem};
use facture_resolve::{presentation, LanguageCode};

fn test_presentation() -> presentation::ResolvedPresentation {
    presentation::resolve(None, None)
}

fn test_header(number: &str) -> InvoiceHeaderFields {
    InvoiceHeaderFields {
        number: Some(number.to_string()),
        currency: "USD".to_string(),
        tax_rate: 20.0,
        ..Default::default()
    }
}

fn test_customer() -> CustomerRecord {
    CustomerRecord {
        name: "Jane Smith".to_string(),
        address: Some("1 High Street".to_string()),
        ..Default::default()
    }
}

fn test_items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| LineItem::new(format!("Service {}", i + 1), 1.0, 100.0))
        .collect()
}

fn layout(
    header: &InvoiceHeaderFields,
    items: &[LineItem],
    customer: &CustomerRecord,
) -> LaidOutDocument {
    let totals = facture_resolve::compute(items, header.tax_rate);
    layout_invoice(
        &test_presentation(),
        header,
        items,
        &totals,
        customer,
        LanguageCode::En,
    )
    .unwrap()
}

fn text_y(doc: &LaidOutDocument, needle: &str) -> Option<f32> {
    doc.pages.iter().flatten().find_map(|i| match i {
        DrawInstruction::Text { content, y, .. } if content.starts_with(needle) => Some(*y),
        _ => None,
    })
}

#[test]
fn missing_invoice_number_is_an_error() {
    let items = test_items(1);
    let totals = facture_resolve::compute(&items, 0.0);
    let mut header = test_header("INV-0001");
    header.number = None;
    let err = layout_invoice(
        &test_presentation(),
        &header,
        &items,
        &totals,
        &test_customer(),
        LanguageCode::En,
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::MissingRequiredData("invoice number"));

    header.number = Some("   ".to_string());
    let err = layout_invoice(
        &test_presentation(),
        &header,
        &items,
        &totals,
        &test_customer(),
        LanguageCode::En,
    )
    .unwrap_err();
    assert_eq!(err, LayoutError::MissingRequiredData("invoice number"));
}

#[test]
fn single_page_invoice_has_one_page() {
    let doc = layout(&test_header("INV-0001"), &test_items(3), &test_customer());
    assert_eq!(doc.page_count(), 1);
    assert!(doc.text_contents().contains(&"INVOICE"));
}

#[test]
fn absent_customer_email_is_omitted_without_a_gap() {
    let labels = labels_for(LanguageCode::En);
    let header = {
        let mut h = test_header("INV-0002");
        h.issue_date = chrono::NaiveDate::from_ymd_opt(2025, 4, 1);
        h
    };
    let items = test_items(2);

    let without_email = layout(&header, &items, &test_customer());
    let with_email = {
        let mut customer = test_customer();
        customer.email = Some("jane@example.com".to_string());
        layout(&header, &items, &customer)
    };

    // No email line exists at all for the email-less customer.
    assert!(!without_email
        .text_contents()
        .iter()
        .any(|t| t.contains("jane@example.com")));

    // The company column is taller than the customer column in both
    // renders, so everything after the From/To block sits at the same
    // height whether or not the email line was emitted.
    let y_without = text_y(&without_email, labels.issue_date).unwrap();
    let y_with = text_y(&with_email, labels.issue_date).unwrap();
    assert_eq!(y_without, y_with);
}

#[test]
fn monetary_cells_carry_currency_and_two_decimals() {
    let items = vec![LineItem::new("Website redesign", 1.0, 2500.0)];
    let doc = layout(&test_header("INV-0003"), &items, &test_customer());
    let texts = doc.text_contents();
    assert!(texts.contains(&"USD 2500.00"));
    // Totals: subtotal, 20% tax, grand total.
    assert!(texts.contains(&"USD 500.00"));
    assert!(texts.contains(&"USD 3000.00"));
    assert!(texts.iter().any(|t| t.contains("(20.0%)")));
}

#[test]
fn long_item_lists_paginate_and_reprint_the_table_header() {
    let labels = labels_for(LanguageCode::En);
    let doc = layout(&test_header("INV-0004"), &test_items(80), &test_customer());
    assert!(doc.page_count() > 1, "80 rows must not fit one page");

    // Every page that carries item rows opens with the header band.
    for page in &doc.pages[1..] {
        let has_rows = page.iter().any(|i| match i {
            DrawInstruction::Text { content, .. } => content.starts_with("Service "),
            _ => false,
        });
        if has_rows {
            assert!(
                page.iter().any(|i| match i {
                    DrawInstruction::Text { content, .. } => content == labels.description,
                    _ => false,
                }),
                "continuation page is missing the reprinted table header"
            );
        }
    }

    // All 80 rows survived pagination.
    let row_count = doc
        .text_contents()
        .iter()
        .filter(|t| t.starts_with("Service "))
        .count();
    assert_eq!(row_count, 80);
}

#[test]
fn danish_layout_uses_danish_labels() {
    let doc = layout(&test_header("INV-0005"), &test_items(1), &test_customer());
    assert!(doc.text_contents().contains(&"Description"));

    let items = test_items(1);
    let totals = facture_resolve::compute(&items, 20.0);
    let danish = layout_invoice(
        &test_presentation(),
        &test_header("INV-0005"),
        &items,
        &totals,
        &test_customer(),
        LanguageCode::Da,
    )
    .unwrap();
    let texts = danish.text_contents();
    assert!(texts.contains(&"FAKTURA"));
    assert!(texts.contains(&"Beskrivelse"));
    assert!(texts.contains(&"I alt"));
}

#[test]
fn payment_block_is_omitted_without_a_method() {
    let labels = labels_for(LanguageCode::En);
    let doc = layout(&test_header("INV-0006"), &test_items(1), &test_customer());
    assert!(!doc.text_contents().contains(&labels.payment_method));

    let mut customer = test_customer();
    customer.payment_method = Some(facture_model::PaymentMethod::Card {
        brand: Some("Visa".to_string()),
        last4: "4242".to_string(),
    });
    let doc = layout(&test_header("INV-0006"), &test_items(1), &customer);
    let texts = doc.text_contents();
    assert!(texts.contains(&labels.payment_method));
    assert!(texts.contains(&"Visa **** 4242"));
}

#[test]
fn logo_emits_an_image_instruction() {
    let mut p = test_presentation();
    p.logo_url = Some("https://cdn.example.com/logo.png".to_string());
    let items = test_items(1);
    let totals = facture_resolve::compute(&items, 0.0);
    let doc = layout_invoice(
        &p,
        &test_header("INV-0007"),
        &items,
        &totals,
        &test_customer(),
        LanguageCode::En,
    )
    .unwrap();
    let has_image = doc.pages.iter().flatten().any(|i| {
        matches!(i, DrawInstruction::Image { url, .. } if url == "https://cdn.example.com/logo.png")
    });
    assert!(has_image);
}
