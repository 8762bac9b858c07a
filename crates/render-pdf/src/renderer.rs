use crate::writer::PdfWriter;
use facture_layout::{FontFamily, TextAlign};
use facture_render_core::{
    baseline_offset_mm, estimate_text_width, flip_y, to_win_ansi, InstructionRenderer,
    RenderError, SharedData,
};
use facture_types::{Color, PageMetrics};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream, StringFormat};
use std::collections::HashMap;

const MM_TO_PT: f32 = 72.0 / 25.4;
const FONT_NAME: &str = "F1";

/// Built-in Type1 face for each resolved family; nothing is embedded.
pub(crate) fn base_font(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Sans => "Helvetica",
        FontFamily::Serif => "Times-Roman",
        FontFamily::Mono => "Courier",
    }
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_size: f32,
    fill_color: Option<Color>,
}

/// An [`InstructionRenderer`] that draws into lopdf content streams.
///
/// Text/fill state is tracked per page so repeated `Tf`/`rg` operators are
/// only emitted on change, matching how the content stream would be written
/// by hand.
pub struct PdfRenderer<'a> {
    writer: PdfWriter,
    page: PageMetrics,
    resources: &'a HashMap<String, SharedData>,
    ops: Vec<Operation>,
    state: PageRenderState,
    /// url -> XObject resource name, so a logo repeated across pages is
    /// embedded once.
    images: HashMap<String, String>,
}

impl<'a> PdfRenderer<'a> {
    pub fn new(
        page: PageMetrics,
        font_family: FontFamily,
        resources: &'a HashMap<String, SharedData>,
    ) -> Self {
        Self {
            writer: PdfWriter::new(base_font(font_family)),
            page,
            resources,
            ops: Vec::new(),
            state: PageRenderState::default(),
            images: HashMap::new(),
        }
    }

    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.writer.finish()
    }

    fn set_font(&mut self, size: f32) {
        if self.state.font_size != size {
            self.ops.push(Operation::new(
                "Tf",
                vec![Object::Name(FONT_NAME.as_bytes().to_vec()), size.into()],
            ));
            self.state.font_size = size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.ops.push(Operation::new("rg", rgb_operands(color)));
            self.state.fill_color = Some(color);
        }
    }

    fn ensure_image(&mut self, url: &str) -> Option<String> {
        if let Some(name) = self.images.get(url) {
            return Some(name.clone());
        }
        let Some(bytes) = self.resources.get(url) else {
            log::warn!("image resource not provided, skipping: {}", url);
            return None;
        };
        let decoded = match image::load_from_memory(bytes) {
            Ok(decoded) => decoded.to_rgb8(),
            Err(err) => {
                log::warn!("failed to decode image {}: {}", url, err);
                return None;
            }
        };
        let (width, height) = decoded.dimensions();
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            decoded.into_raw(),
        );
        let name = format!("Im{}", self.images.len() + 1);
        self.writer.add_image(&name, stream);
        self.images.insert(url.to_string(), name.clone());
        Some(name)
    }
}

fn rgb_operands(color: Color) -> Vec<Object> {
    vec![
        (color.r as f32 / 255.0).into(),
        (color.g as f32 / 255.0).into(),
        (color.b as f32 / 255.0).into(),
    ]
}

impl InstructionRenderer for PdfRenderer<'_> {
    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.ops.clear();
        self.state = PageRenderState::default();
        Ok(())
    }

    fn text(
        &mut self,
        content: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    ) -> Result<(), RenderError> {
        if content.trim().is_empty() {
            return Ok(());
        }
        let run_width_pt = estimate_text_width(content, size);
        let x_pt = match align {
            TextAlign::Left => x * MM_TO_PT,
            TextAlign::Center => x * MM_TO_PT - run_width_pt / 2.0,
            TextAlign::Right => x * MM_TO_PT - run_width_pt,
        };
        // `y` is the top of the line box; drop to the baseline before the
        // coordinate flip.
        let baseline_mm = y + baseline_offset_mm(size);
        let y_pt = flip_y(baseline_mm, self.page.height) * MM_TO_PT;

        self.ops.push(Operation::new("BT", vec![]));
        self.set_font(size);
        self.set_fill_color(color);
        self.ops
            .push(Operation::new("Td", vec![x_pt.into(), y_pt.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(content), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
        Ok(())
    }

    fn rule(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    ) -> Result<(), RenderError> {
        self.ops
            .push(Operation::new("w", vec![(width * MM_TO_PT).into()]));
        self.ops.push(Operation::new("RG", rgb_operands(color)));
        self.ops.push(Operation::new(
            "m",
            vec![
                (x1 * MM_TO_PT).into(),
                (flip_y(y1, self.page.height) * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new(
            "l",
            vec![
                (x2 * MM_TO_PT).into(),
                (flip_y(y2, self.page.height) * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new("S", vec![]));
        Ok(())
    }

    fn filled_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        // The fill operator uses the same color state as text.
        self.set_fill_color(color);
        self.ops.push(Operation::new(
            "re",
            vec![
                (x * MM_TO_PT).into(),
                (flip_y(y + h, self.page.height) * MM_TO_PT).into(),
                (w * MM_TO_PT).into(),
                (h * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new("f", vec![]));
        Ok(())
    }

    fn image(&mut self, url: &str, x: f32, y: f32, w: f32, h: f32) -> Result<(), RenderError> {
        let Some(name) = self.ensure_image(url) else {
            return Ok(());
        };
        self.ops.push(Operation::new("q", vec![]));
        self.ops.push(Operation::new(
            "cm",
            vec![
                (w * MM_TO_PT).into(),
                0.0.into(),
                0.0.into(),
                (h * MM_TO_PT).into(),
                (x * MM_TO_PT).into(),
                (flip_y(y + h, self.page.height) * MM_TO_PT).into(),
            ],
        ));
        self.ops.push(Operation::new(
            "Do",
            vec![Object::Name(name.into_bytes())],
        ));
        self.ops.push(Operation::new("Q", vec![]));
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        let content = Content {
            operations: std::mem::take(&mut self.ops),
        };
        self.writer.add_page(
            content,
            self.page.width * MM_TO_PT,
            self.page.height * MM_TO_PT,
        )?;
        Ok(())
    }
}
