use thiserror::Error;

/// Errors raised while building a [`Template`](crate::Template) or a
/// [`RenderResult`](crate::RenderResult). Detected before any render runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Template name is required")]
    MissingName,

    #[error("Template must have at least one section")]
    NoSections,

    #[error("Table section at index {index} has no headers")]
    EmptyTable { index: usize },

    #[error("Render result template name cannot be blank")]
    BlankResultName,
}
