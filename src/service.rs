use crate::error::TesseraError;
use crate::registry::RendererRegistry;
use tessera_types::{RenderFormat, RenderResult, Template};

/// Entry point for rendering templates by format.
#[derive(Default)]
pub struct TemplateService {
    registry: RendererRegistry,
}

impl TemplateService {
    pub fn new() -> Self {
        Self::with_registry(RendererRegistry::new())
    }

    pub fn with_registry(registry: RendererRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn render(&self, template: &Template, format: RenderFormat) -> Result<RenderResult, TesseraError> {
        let renderer = self.registry.get(format)?;
        log::debug!("Rendering template '{}' as {}", template.name(), format);
        Ok(renderer.render(template)?)
    }

    pub fn render_as_html(&self, template: &Template) -> Result<RenderResult, TesseraError> {
        self.render(template, RenderFormat::Html)
    }

    pub fn render_as_pdf(&self, template: &Template) -> Result<RenderResult, TesseraError> {
        self.render(template, RenderFormat::Pdf)
    }

    pub fn render_as_csv(&self, template: &Template) -> Result<RenderResult, TesseraError> {
        self.render(template, RenderFormat::Csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_render_core::RenderError;

    fn greeting() -> Template {
        Template::builder()
            .name("greeting")
            .heading("Hello {{name}}")
            .table(["greeting"], ["{{name}}"])
            .data("name", "World")
            .build()
            .unwrap()
    }

    #[test]
    fn dispatches_by_format() {
        let service = TemplateService::new();
        let template = greeting();
        assert_eq!(service.render_as_html(&template).unwrap().format(), RenderFormat::Html);
        assert_eq!(service.render_as_pdf(&template).unwrap().format(), RenderFormat::Pdf);
        assert_eq!(
            service.render_as_csv(&template).unwrap().content_as_string(),
            "greeting\nWorld"
        );
    }

    #[test]
    fn missing_renderer_is_unsupported() {
        let service = TemplateService::with_registry(RendererRegistry::empty());
        let err = service.render_as_html(&greeting()).unwrap_err();
        assert!(matches!(err, TesseraError::UnsupportedFormat(RenderFormat::Html)));
        assert_eq!(err.to_string(), "No renderer registered for HTML");
    }

    #[test]
    fn render_errors_are_wrapped() {
        let template = Template::builder().name("t").heading("only").build().unwrap();
        let err = TemplateService::new().render_as_csv(&template).unwrap_err();
        assert!(matches!(err, TesseraError::Render(RenderError::MissingTable { .. })));
    }
}
