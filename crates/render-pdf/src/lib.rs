//! PDF adapter for the invoice layout engine.
//!
//! Interprets the renderer-agnostic instruction stream into lopdf content
//! streams, one logical millimeter mapped straight to PDF points. No layout
//! decisions happen here.

mod renderer;
mod writer;

pub use renderer::PdfRenderer;
pub use writer::PdfWriter;

use facture_layout::LaidOutDocument;
use facture_render_core::{render_document, RenderError, SharedData};
use std::collections::HashMap;

/// Render a laid-out document into PDF bytes. `resources` maps image URLs
/// (the resolved logo) to their already-fetched bytes; the adapter does no
/// I/O of its own.
pub fn render_to_pdf(
    document: &LaidOutDocument,
    resources: &HashMap<String, SharedData>,
) -> Result<Vec<u8>, RenderError> {
    let mut renderer = PdfRenderer::new(document.page, document.font_family, resources);
    render_document(document, &mut renderer)?;
    renderer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use facture_layout::{DrawInstruction, FontFamily, TextAlign};
    use facture_types::{Color, PageMetrics};

    fn text(content: &str, x: f32, y: f32) -> DrawInstruction {
        DrawInstruction::Text {
            content: content.to_string(),
            x,
            y,
            size: 10.0,
            color: Color::new(0x1f, 0x29, 0x37),
            align: TextAlign::Left,
        }
    }

    #[test]
    fn produces_a_loadable_pdf_with_one_page_per_instruction_page() {
        let _ = env_logger::builder().is_test(true).try_init();
        let document = LaidOutDocument {
            pages: vec![
                vec![
                    text("Hello invoice", 18.0, 18.0),
                    DrawInstruction::Rule {
                        x1: 18.0,
                        y1: 30.0,
                        x2: 192.0,
                        y2: 30.0,
                        color: Color::gray(0xe1),
                        width: 0.2,
                    },
                ],
                vec![text("Second page", 18.0, 18.0)],
            ],
            page: PageMetrics::a4(),
            font_family: FontFamily::Sans,
        };
        let bytes = render_to_pdf(&document, &HashMap::new()).unwrap();
        let parsed = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(parsed.get_pages().len(), 2);
    }

    #[test]
    fn unknown_image_resources_are_skipped_not_fatal() {
        let document = LaidOutDocument {
            pages: vec![vec![DrawInstruction::Image {
                url: "https://cdn.example.com/logo.png".to_string(),
                x: 18.0,
                y: 18.0,
                w: 36.0,
                h: 14.0,
            }]],
            page: PageMetrics::a4(),
            font_family: FontFamily::Sans,
        };
        let bytes = render_to_pdf(&document, &HashMap::new()).unwrap();
        assert!(lopdf::Document::load_mem(&bytes).is_ok());
    }
}
