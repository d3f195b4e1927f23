use crate::error::RenderError;
use tessera_types::{RenderFormat, TableSection, Template};

/// Fails with [`RenderError::NoSections`] before any output is produced.
pub fn require_sections(template: &Template) -> Result<(), RenderError> {
    if template.sections().is_empty() {
        return Err(RenderError::NoSections {
            template: template.name().to_string(),
        });
    }
    Ok(())
}

/// The first table section, or [`RenderError::MissingTable`] for `format`.
pub fn require_table(
    template: &Template,
    format: RenderFormat,
) -> Result<&TableSection, RenderError> {
    template
        .first_table()
        .ok_or_else(|| RenderError::MissingTable {
            template: template.name().to_string(),
            format,
        })
}
