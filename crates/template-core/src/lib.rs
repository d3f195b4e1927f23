//! Text-level building blocks shared by every Tessera renderer.
//!
//! ## Key Abstractions
//!
//! - **Placeholder resolution**: [`resolve`] and [`resolve_with`] substitute
//!   `{{identifier}}` tokens from a data set, optionally escaping each
//!   substituted value.
//! - **Row extraction**: [`extract_rows`] decides which data sets a table
//!   section is expanded against.
//! - **Table cells**: [`resolve_cells`] applies the column/header width policy.
//! - **Escapers**: [`escape::escape_html`], [`escape::escape_csv`] and
//!   [`escape::identity`], one per output format.

pub mod escape;
mod placeholder;
mod rows;
mod table;

pub use placeholder::{resolve, resolve_with};
pub use rows::{ROWS_KEY, extract_rows};
pub use table::resolve_cells;
