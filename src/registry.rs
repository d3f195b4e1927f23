//! Lookup of renderers by output format.
use crate::error::TesseraError;
use std::collections::HashMap;
use tessera_render_core::TemplateRenderer;
use tessera_render_csv::CsvRenderer;
use tessera_render_html::HtmlRenderer;
use tessera_render_lopdf::PdfRenderer;
use tessera_types::RenderFormat;

/// Holds at most one renderer per [`RenderFormat`].
pub struct RendererRegistry {
    renderers: HashMap<RenderFormat, Box<dyn TemplateRenderer>>,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererRegistry {
    /// A registry with the built-in HTML, PDF and CSV renderers.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(HtmlRenderer::new()));
        registry.register(Box::new(PdfRenderer::new()));
        registry.register(Box::new(CsvRenderer::new()));
        registry
    }

    pub fn empty() -> Self {
        Self { renderers: HashMap::new() }
    }

    /// Registers `renderer` under its own format, replacing any previous one.
    pub fn register(&mut self, renderer: Box<dyn TemplateRenderer>) {
        let format = renderer.format();
        if self.renderers.insert(format, renderer).is_some() {
            log::debug!("Replaced renderer for {}", format);
        }
    }

    pub fn get(&self, format: RenderFormat) -> Result<&dyn TemplateRenderer, TesseraError> {
        self.renderers
            .get(&format)
            .map(|r| r.as_ref())
            .ok_or(TesseraError::UnsupportedFormat(format))
    }

    pub fn has_renderer(&self, format: RenderFormat) -> bool {
        self.renderers.contains_key(&format)
    }

    /// Registered formats in declaration order.
    pub fn formats(&self) -> Vec<RenderFormat> {
        RenderFormat::ALL
            .into_iter()
            .filter(|f| self.has_renderer(*f))
            .collect()
    }
}
