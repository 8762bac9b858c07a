mod common;

use common::fixtures::*;
use common::pdf_assertions::extract_page_text;
use common::{generate_pdf, TestResult};

#[test]
fn long_item_lists_flow_onto_additional_pages() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&with_item_count(base_request(), 80))?;
    assert_pdf_min_pages!(pdf, 2);
    assert_pdf_contains_text!(pdf, "Service 1");
    assert_pdf_contains_text!(pdf, "Service 80");
    Ok(())
}

#[test]
fn the_table_header_reprints_on_every_continuation_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&with_item_count(base_request(), 80))?;
    for page_num in 1..=pdf.page_count() as u32 {
        let text = extract_page_text(&pdf.doc, page_num);
        if text.contains("Service ") {
            assert!(
                text.contains("Description"),
                "page {} has item rows but no table header:\n{}",
                page_num,
                text
            );
        }
    }
    Ok(())
}

#[test]
fn short_invoices_stay_on_one_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pdf = generate_pdf(&with_item_count(base_request(), 5))?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}
