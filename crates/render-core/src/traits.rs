use crate::error::RenderError;
use facture_layout::{DrawInstruction, LaidOutDocument, TextAlign};
use facture_types::Color;

/// The drawing primitives an instruction sink must provide.
///
/// Coordinates arrive in logical millimeters exactly as the layout engine
/// emitted them; each adapter applies its own scaling and never reflows.
pub trait InstructionRenderer {
    fn begin_page(&mut self) -> Result<(), RenderError>;

    #[allow(clippy::too_many_arguments)]
    fn text(
        &mut self,
        content: &str,
        x: f32,
        y: f32,
        size: f32,
        color: Color,
        align: TextAlign,
    ) -> Result<(), RenderError>;

    fn rule(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
    ) -> Result<(), RenderError>;

    fn filled_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color)
    -> Result<(), RenderError>;

    fn image(&mut self, url: &str, x: f32, y: f32, w: f32, h: f32) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;
}

/// Feed every page of a laid-out document through a sink, in order.
pub fn render_document<R: InstructionRenderer>(
    document: &LaidOutDocument,
    renderer: &mut R,
) -> Result<(), RenderError> {
    for page in &document.pages {
        renderer.begin_page()?;
        for instruction in page {
            match instruction {
                DrawInstruction::Text {
                    content,
                    x,
                    y,
                    size,
                    color,
                    align,
                } => renderer.text(content, *x, *y, *size, *color, *align)?,
                DrawInstruction::Rule {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                    width,
                } => renderer.rule(*x1, *y1, *x2, *y2, *color, *width)?,
                DrawInstruction::FilledRect { x, y, w, h, color } => {
                    renderer.filled_rect(*x, *y, *w, *h, *color)?
                }
                DrawInstruction::Image { url, x, y, w, h } => {
                    renderer.image(url, *x, *y, *w, *h)?
                }
            }
        }
        renderer.end_page()?;
    }
    Ok(())
}
