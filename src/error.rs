use tessera_render_core::RenderError;
use tessera_types::{ConstructionError, RenderFormat};
use thiserror::Error;

/// Error type for the service, registry, definition loading and CLI.
#[derive(Error, Debug)]
pub enum TesseraError {
    #[error("Invalid template: {0}")]
    Construction(#[from] ConstructionError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Template definition error: {0}")]
    Definition(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No renderer registered for {0}")]
    UnsupportedFormat(RenderFormat),
}
