//! Paginated PDF renderer built on lopdf.
//!
//! Sections are laid out top to bottom on fixed A4 pages using the two
//! built-in Helvetica faces. The page graph is assembled as a
//! `lopdf::Document` and serialized once the last page is closed.

mod canvas;
mod helpers;
pub mod layout;
mod renderer;

pub use helpers::to_win_ansi;
pub use renderer::PdfRenderer;
