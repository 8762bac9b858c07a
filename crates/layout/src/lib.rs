//! The document layout engine.
//!
//! Takes a resolved presentation, invoice header fields, line items, and
//! totals, and produces pages of positioned draw instructions in a fixed
//! logical coordinate space (millimeters on A4). Renderers interpret the
//! instruction stream without any business logic of their own.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Missing required invoice data: {0}")]
    MissingRequiredData(&'static str),
}

pub mod engine;
pub mod instruction;
pub mod labels;

pub use engine::{layout_invoice, InvoiceHeaderFields};
pub use instruction::{DrawInstruction, LaidOutDocument, TextAlign};
pub use labels::{labels_for, Labels};

// Re-export so renderer crates can consume documents without a direct
// model dependency.
pub use facture_model::FontFamily;

#[cfg(test)]
mod engine_test;
