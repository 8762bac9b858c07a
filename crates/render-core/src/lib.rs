//! Renderer abstractions.
//!
//! Both consumers of the layout engine's instruction stream, the paginated
//! document adapter and the on-screen preview adapter, implement
//! [`InstructionRenderer`] and are driven by the same [`render_document`]
//! walk. Keeping the walk here is what guarantees the two outputs stay
//! visually equivalent: neither adapter re-derives layout decisions.

pub mod error;
pub mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{render_document, InstructionRenderer};
pub use utils::{baseline_offset_mm, estimate_text_width, flip_y, to_win_ansi};

/// A reference-counted container for shared, immutable data like images.
pub type SharedData = std::sync::Arc<Vec<u8>>;
