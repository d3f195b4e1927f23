use itertools::Itertools;
use tessera_render_core::utils::require_table;
use tessera_render_core::{RenderError, TemplateRenderer};
use tessera_template_core::escape::escape_csv;
use tessera_template_core::{extract_rows, resolve_cells};
use tessera_types::{RenderFormat, RenderResult, Template};

/// Renders the first table section as comma-separated values.
///
/// Headings, paragraphs and any later tables are ignored. Lines are joined
/// with `\n` and the output has no trailing newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Quotes `value` when it contains a comma, double quote, CR or LF.
    pub fn escape_csv_value(&self, value: &str) -> String {
        escape_csv(value).into_owned()
    }
}

impl TemplateRenderer for CsvRenderer {
    fn render(&self, template: &Template) -> Result<RenderResult, RenderError> {
        let table = require_table(template, RenderFormat::Csv)?;

        let header = table.headers.iter().map(|h| escape_csv(h)).join(",");
        let rows = extract_rows(template.data());
        let row_count = rows.len();
        let csv = std::iter::once(header)
            .chain(
                rows.into_iter()
                    .map(|row| resolve_cells(table, row, escape_csv).join(",")),
            )
            .join("\n");

        log::debug!(
            "Rendered template '{}' to CSV ({} rows, {} bytes)",
            template.name(),
            row_count,
            csv.len()
        );
        Ok(RenderResult::new(
            csv.into_bytes(),
            RenderFormat::Csv,
            template.name(),
        )?)
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Csv
    }
}
