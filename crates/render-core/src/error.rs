use tessera_types::{ConstructionError, RenderFormat};
use thiserror::Error;

/// A failed render. Always fatal for that call; no partial output is returned.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Template '{template}' has no sections to render")]
    NoSections { template: String },

    #[error("{format} rendering requires at least one table section; template '{template}' has none")]
    MissingTable {
        template: String,
        format: RenderFormat,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF generation error: {0}")]
    Pdf(String),

    #[error("Invalid render result: {0}")]
    Result(#[from] ConstructionError),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
