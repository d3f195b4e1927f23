//! Renders templates as a minimal HTML document.

mod renderer;

pub use renderer::HtmlRenderer;
