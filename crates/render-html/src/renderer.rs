use tessera_render_core::utils::require_sections;
use tessera_render_core::{RenderError, TemplateRenderer};
use tessera_template_core::escape::escape_html;
use tessera_template_core::{extract_rows, resolve_cells, resolve_with};
use tessera_types::{DataMap, RenderFormat, RenderResult, Section, TableSection, Template};

/// Renders a template as `<html><body>…</body></html>` with no doctype or
/// attributes. Substituted values and table headers are HTML-escaped;
/// literal template text is emitted as written.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Escapes the five HTML-significant characters of `value`.
    pub fn escape_html(&self, value: &str) -> String {
        escape_html(value).into_owned()
    }

    fn write_section(out: &mut String, section: &Section, data: &DataMap) {
        match section {
            Section::Heading { text } => {
                out.push_str("<h1>");
                out.push_str(&resolve_with(text, data, escape_html));
                out.push_str("</h1>");
            }
            Section::Paragraph { text } => {
                out.push_str("<p>");
                out.push_str(&resolve_with(text, data, escape_html));
                out.push_str("</p>");
            }
            Section::Table(table) => Self::write_table(out, table, data),
        }
    }

    fn write_table(out: &mut String, table: &TableSection, data: &DataMap) {
        out.push_str("<table><thead><tr>");
        for header in &table.headers {
            out.push_str("<th>");
            out.push_str(&escape_html(header));
            out.push_str("</th>");
        }
        out.push_str("</tr></thead><tbody>");
        for row in extract_rows(data) {
            out.push_str("<tr>");
            for cell in resolve_cells(table, row, escape_html) {
                out.push_str("<td>");
                out.push_str(&cell);
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table>");
    }
}

impl TemplateRenderer for HtmlRenderer {
    fn render(&self, template: &Template) -> Result<RenderResult, RenderError> {
        require_sections(template)?;

        let mut html = String::from("<html><body>");
        for section in template.sections() {
            Self::write_section(&mut html, section, template.data());
        }
        html.push_str("</body></html>");

        log::debug!(
            "Rendered template '{}' to HTML ({} sections, {} bytes)",
            template.name(),
            template.sections().len(),
            html.len()
        );
        Ok(RenderResult::new(
            html.into_bytes(),
            RenderFormat::Html,
            template.name(),
        )?)
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Html
    }
}
