pub mod fixtures;
pub mod pdf_assertions;

use facture::{InvoiceRenderRequest, PipelineError};
use lopdf::Document as LopdfDocument;
use std::collections::HashMap;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Generate a PDF for a render request with no image resources.
pub fn generate_pdf(request: &InvoiceRenderRequest) -> Result<GeneratedPdf, PipelineError> {
    let document = facture::generate_pdf(request, &HashMap::new())?;
    GeneratedPdf::from_bytes(document.bytes).map_err(|e| PipelineError::Other(e.to_string()))
}
