use crate::error::RenderError;
use tessera_types::{RenderFormat, RenderResult, Template};

/// A backend turning a [`Template`] into bytes of one [`RenderFormat`].
///
/// Implementations hold no per-render state, so one instance can serve
/// concurrent callers.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &Template) -> Result<RenderResult, RenderError>;

    fn format(&self) -> RenderFormat;

    fn supports(&self, format: RenderFormat) -> bool {
        self.format() == format
    }
}
