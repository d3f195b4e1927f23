//! Tessera renders structured document templates to HTML, CSV and PDF.
//!
//! A [`Template`] is a named list of sections plus a data map whose values
//! fill `{{placeholder}}` tokens. [`TemplateService`] dispatches a template to
//! the renderer registered for the requested [`RenderFormat`].
//!
//! ```no_run
//! use tessera::{Template, TemplateService};
//!
//! let template = Template::builder()
//!     .name("greeting")
//!     .heading("Hello {{name}}")
//!     .data("name", "World")
//!     .build()?;
//! let html = TemplateService::new().render_as_html(&template)?;
//! assert_eq!(html.content_as_string(), "<html><body><h1>Hello World</h1></body></html>");
//! # Ok::<(), tessera::TesseraError>(())
//! ```

pub mod definition;
pub mod error;
pub mod registry;
pub mod service;

pub use error::TesseraError;
pub use registry::RendererRegistry;
pub use service::TemplateService;

pub use tessera_render_core::{RenderError, TemplateRenderer};
pub use tessera_render_csv::CsvRenderer;
pub use tessera_render_html::HtmlRenderer;
pub use tessera_render_lopdf::PdfRenderer;
pub use tessera_types::{
    ConstructionError, DataMap, ParseFormatError, RenderFormat, RenderResult, Section,
    TableSection, Template, TemplateBuilder, Value,
};
