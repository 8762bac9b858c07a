//! On-screen preview adapter.
//!
//! Emits one `<svg>` element per page with a millimeter viewBox, so the
//! preview scales to any CSS pixel density without reflowing. The markup is
//! a stateless interpretation of the same instruction stream the PDF
//! adapter consumes; the shared baseline rule keeps the two visually
//! aligned.

use facture_layout::{FontFamily, LaidOutDocument, TextAlign};
use facture_render_core::{baseline_offset_mm, render_document, InstructionRenderer, RenderError};
use facture_types::{Color, PageMetrics};

const PT_TO_MM: f32 = 25.4 / 72.0;

fn css_font_family(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Sans => "Helvetica, Arial, sans-serif",
        FontFamily::Serif => "Georgia, 'Times New Roman', serif",
        FontFamily::Mono => "'Courier New', monospace",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_fragment(buf: &mut String, args: std::fmt::Arguments<'_>) -> Result<(), RenderError> {
    use std::fmt::Write;
    buf.write_fmt(args)
        .map_err(|e| RenderError::Other(e.to_string()))
}

/// An [`InstructionRenderer`] that builds SVG markup strings.
pub struct SvgRenderer {
    page: PageMetrics,
    px_per_mm: f32,
    font_family: &'static str,
    pages: Vec<String>,
    current: String,
}

impl SvgRenderer {
    pub fn new(page: PageMetrics, font_family: FontFamily, px_per_mm: f32) -> Self {
        Self {
            page,
            px_per_mm,
            font_family: css_font_family(font_family),
            pages: Vec::new(),
            current: String::new(),
        }
    }

    /// The finished per-page markup.
    pub fn finish(self) -> Vec<String> {
        self.pages
    }
}

impl InstructionRenderer for SvgRenderer {
    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.current.clear();
        write_fragment(
            &mut self.current,
            format_args!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" \
                 viewBox=\"0 0 {} {}\" font-family=\"{}\">\n",
                self.page.width * self.px_per_mm,
                self.page.height * self.px_per_mm,
                self.page.width,
                self.page.height,
                self.font_family,
            ),
        )
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
        let anchor = match align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        };
        write_fragment(
            &mut self.current,
            format_args!(
                "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{:.2}\" fill=\"{}\" \
                 text-anchor=\"{}\">{}</text>\n",
                x,
                y + baseline_offset_mm(size),
                size * PT_TO_MM,
                color.to_hex(),
                anchor,
                escape_xml(content),
            ),
        )
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
        write_fragment(
            &mut self.current,
            format_args!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" \
                 stroke-width=\"{:.2}\"/>\n",
                x1,
                y1,
                x2,
                y2,
                color.to_hex(),
                width,
            ),
        )
    }

    fn filled_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    ) -> Result<(), RenderError> {
        write_fragment(
            &mut self.current,
            format_args!(
                "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
                x,
                y,
                w,
                h,
                color.to_hex(),
            ),
        )
    }

    fn image(&mut self, url: &str, x: f32, y: f32, w: f32, h: f32) -> Result<(), RenderError> {
        write_fragment(
            &mut self.current,
            format_args!(
                "  <image href=\"{}\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" \
                 preserveAspectRatio=\"xMidYMid meet\"/>\n",
                escape_xml(url),
                x,
                y,
                w,
                h,
            ),
        )
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.current.push_str("</svg>\n");
        self.pages.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

/// Render a laid-out document to one SVG string per page.
pub fn render_to_svg(
    document: &LaidOutDocument,
    px_per_mm: f32,
) -> Result<Vec<String>, RenderError> {
    let mut renderer = SvgRenderer::new(document.page, document.font_family, px_per_mm);
    render_document(document, &mut renderer)?;
    Ok(renderer.finish())
}
