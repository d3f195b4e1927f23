//! Renders the first table section of a template as CSV.

mod renderer;

pub use renderer::CsvRenderer;
