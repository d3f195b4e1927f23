//! Foundation types shared by every Tessera crate.
//!
//! - [`Template`] and [`Section`]: the immutable document to render
//! - [`Value`]: the dynamically-typed data used for placeholder substitution
//! - [`RenderFormat`] and [`RenderResult`]: what a renderer produces

pub mod error;
pub mod format;
pub mod template;
pub mod value;

pub use error::ConstructionError;
pub use format::{ParseFormatError, RenderFormat, RenderResult};
pub use template::{Section, TableSection, Template, TemplateBuilder};
pub use value::{DataMap, Value};
