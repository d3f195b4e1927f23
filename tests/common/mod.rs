#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use tessera::{Template, TemplateService, TesseraError};

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

    /// Text runs drawn on each page, in drawing order
    pub fn page_texts(&self) -> Vec<Vec<String>> {
        pdf_assertions::page_texts(&self.doc)
    }

    /// Save PDF to a file for manual debugging
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render `template` to PDF through the default service
pub fn generate_pdf(template: &Template) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let result = TemplateService::new().render_as_pdf(template)?;
    GeneratedPdf::from_bytes(result.into_content())
}

/// Render `template` to HTML and return it as a string
pub fn render_html(template: &Template) -> Result<String, TesseraError> {
    let result = TemplateService::new().render_as_html(template)?;
    Ok(result.content_as_string().into_owned())
}

/// Render `template` to CSV and return it as a string
pub fn render_csv(template: &Template) -> Result<String, TesseraError> {
    let result = TemplateService::new().render_as_csv(template)?;
    Ok(result.content_as_string().into_owned())
}
