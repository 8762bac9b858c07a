//! Plain domain records for invoice rendering.
//!
//! These are the already-fetched, already-validated rows the surrounding
//! application hands to the core. Field aliases accept both the canonical
//! snake_case spellings and the legacy camelCase spellings found in older
//! stored rows, so one canonical name per concept exists past this boundary.

pub mod customer;
pub mod font;
pub mod invoice;
pub mod payment;
pub mod profile;
pub mod template;

pub use customer::CustomerRecord;
pub use font::FontFamily;
pub use invoice::{InvoiceRecord, InvoiceStatus, LineItem};
pub use payment::PaymentMethod;
pub use profile::ProfileRecord;
pub use template::{TemplateData, TemplateRecord};
