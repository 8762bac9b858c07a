//! # facture
//!
//! Invoice presentation resolution and document layout.
//!
//! The core is a pure, synchronous pipeline over already-fetched records:
//!
//! 1. **resolve** — merge template, profile, and hard defaults into one
//!    [`ResolvedPresentation`] (template wins, profile next, defaults last).
//! 2. **totals** — recompute subtotal, tax, and total from the line items;
//!    stored totals on the invoice row are never trusted.
//! 3. **detect** — infer the document language from the invoice's own
//!    free text.
//! 4. **layout** — place every block onto fixed-size pages as a
//!    renderer-agnostic instruction stream, paginating long item tables.
//! 5. **render** — interpret the stream as PDF bytes or SVG preview
//!    markup; both adapters consume the identical instructions.
//!
//! The surrounding application owns storage, authentication, uploads, and
//! delivery; this crate never performs I/O beyond writing the bytes it is
//! asked for.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{
    generate_pdf, preview_svg, render_invoice, GeneratedDocument, InvoiceRenderRequest,
};

// Re-export member crates under stable names.
pub use facture_layout as layout;
pub use facture_model as model;
pub use facture_render_core as render_core;
pub use facture_render_pdf as render_pdf;
pub use facture_render_svg as render_svg;
pub use facture_resolve as resolve;
pub use facture_types as types;

// Re-export the types most callers touch.
pub use facture_layout::{DrawInstruction, LaidOutDocument, LayoutError, TextAlign};
pub use facture_model::{
    CustomerRecord, FontFamily, InvoiceRecord, InvoiceStatus, LineItem, PaymentMethod,
    ProfileRecord, TemplateData, TemplateRecord,
};
pub use facture_render_core::{RenderError, SharedData};
pub use facture_resolve::{LanguageCode, ResolvedPresentation, Totals};
pub use facture_types::{Color, PageMetrics};
