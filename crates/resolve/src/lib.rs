//! Pure resolution functions: merge styling sources into one presentation,
//! derive totals from line items, and infer a display language from content.
//!
//! Everything here is total and side-effect-free; callers hand in plain
//! records and get plain values back.

pub mod language;
pub mod presentation;
pub mod totals;

pub use language::{detect, LanguageCode};
pub use presentation::{resolve, ResolvedPresentation};
pub use totals::{compute, Totals};
