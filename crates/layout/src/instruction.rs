//! Output types from the layout engine.
//!
//! A `LaidOutDocument` contains pages of renderer-agnostic draw
//! instructions; starting a new inner `Vec` is the page-break marker.

use facture_model::FontFamily;
use facture_types::{Color, PageMetrics};
use serde::Serialize;

/// Horizontal anchoring of a text instruction. `x` is the anchor point:
/// left edge, center, or right edge of the rendered run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// One primitive positioning command. Coordinates and dimensions are
/// logical millimeters from the page's top-left corner; font sizes are
/// points. The same stream maps onto a screen preview (mm scaled to CSS
/// pixels) and a paginated document (mm mapped to document units).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawInstruction {
    Text {
        content: String,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    },
    Rule {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    },
    FilledRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Image {
        url: String,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
}

/// The result of laying out one invoice: positioned instructions grouped
/// by page, plus the page geometry renderers need for scaling.
#[derive(Debug, Clone, Serialize)]
pub struct LaidOutDocument {
    pub pages: Vec<Vec<DrawInstruction>>,
    pub page: PageMetrics,
    /// The resolved font family, applied document-wide by each renderer.
    pub font_family: FontFamily,
}

impl LaidOutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn instruction_count(&self) -> usize {
        self.pages.iter().map(|p| p.len()).sum()
    }

    /// All text content in emission order, for assertions and debugging.
    pub fn text_contents(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flatten()
            .filter_map(|i| match i {
                DrawInstruction::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}
