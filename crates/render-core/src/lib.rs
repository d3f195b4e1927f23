//! Core rendering abstractions.
//!
//! This crate provides what every output backend shares:
//! - `TemplateRenderer` trait implemented by the HTML, CSV and PDF backends
//! - `RenderError` for failures during a render call
//! - Precondition helpers so backends reject bad input the same way

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::TemplateRenderer;
