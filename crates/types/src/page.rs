use serde::{Deserialize, Serialize};

/// Logical page geometry in millimeters.
///
/// The layout engine positions everything in this coordinate space; renderers
/// scale it to their own units (PDF points, CSS pixels) without reflowing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageMetrics {
    /// ISO A4 with a 18mm margin on all sides.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin_top: 18.0,
            margin_bottom: 18.0,
            margin_left: 18.0,
            margin_right: 18.0,
        }
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Y coordinate past which content must move to the next page.
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }

    pub fn content_left(&self) -> f32 {
        self.margin_left
    }

    pub fn content_right(&self) -> f32 {
        self.width - self.margin_right
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self::a4()
    }
}
