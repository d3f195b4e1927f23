use crate::canvas::PdfCanvas;
use crate::layout::{self, HEADING, PARAGRAPH, TABLE_HEADER, TABLE_ROW};
use std::io::Write;
use tessera_render_core::utils::require_sections;
use tessera_render_core::{RenderError, TemplateRenderer};
use tessera_template_core::escape::identity;
use tessera_template_core::{extract_rows, resolve, resolve_cells};
use tessera_types::{DataMap, RenderFormat, RenderResult, Section, TableSection, Template};

/// Lays sections out top to bottom on A4 pages.
///
/// Values are placed literally. Text wider than its column slot is not
/// wrapped or clipped and runs into the next column.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    fn draw_section(
        canvas: &mut PdfCanvas,
        section: &Section,
        data: &DataMap,
    ) -> Result<(), RenderError> {
        match section {
            Section::Heading { text } => {
                let text = resolve(text, data);
                canvas.draw_line(&HEADING, &[(layout::MARGIN, text.as_str())])
            }
            Section::Paragraph { text } => {
                let text = resolve(text, data);
                canvas.draw_line(&PARAGRAPH, &[(layout::MARGIN, text.as_str())])
            }
            Section::Table(table) => Self::draw_table(canvas, table, data),
        }
    }

    fn draw_table(
        canvas: &mut PdfCanvas,
        table: &TableSection,
        data: &DataMap,
    ) -> Result<(), RenderError> {
        let width = table.width();
        let header: Vec<(f32, &str)> = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| (layout::column_x(i, width), h.as_str()))
            .collect();
        canvas.draw_line(&TABLE_HEADER, &header)?;

        for row in extract_rows(data) {
            let cells = resolve_cells(table, row, identity);
            let runs: Vec<(f32, &str)> = cells
                .iter()
                .enumerate()
                .map(|(i, cell)| (layout::column_x(i, width), cell.as_str()))
                .collect();
            canvas.draw_line(&TABLE_ROW, &runs)?;
        }
        Ok(())
    }

    /// Renders the complete document into `target`. Nothing is written
    /// unless every section lays out successfully.
    pub fn render_to<W: Write>(&self, template: &Template, target: &mut W) -> Result<(), RenderError> {
        require_sections(template)?;

        let mut canvas = PdfCanvas::new();
        for section in template.sections() {
            Self::draw_section(&mut canvas, section, template.data())?;
        }
        let pages = canvas.page_count();
        canvas.finish(target)?;
        log::debug!("Rendered template '{}' to PDF ({} pages)", template.name(), pages);
        Ok(())
    }
}

impl TemplateRenderer for PdfRenderer {
    fn render(&self, template: &Template) -> Result<RenderResult, RenderError> {
        let mut bytes = Vec::new();
        self.render_to(template, &mut bytes)?;
        Ok(RenderResult::new(bytes, RenderFormat::Pdf, template.name())?)
    }

    fn format(&self) -> RenderFormat {
        RenderFormat::Pdf
    }
}
