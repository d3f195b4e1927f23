use crate::error::ConstructionError;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderFormat {
    Html,
    Pdf,
    Csv,
}

impl RenderFormat {
    pub const ALL: [RenderFormat; 3] = [RenderFormat::Html, RenderFormat::Pdf, RenderFormat::Csv];

    pub fn mime_type(self) -> &'static str {
        match self {
            RenderFormat::Html => "text/html",
            RenderFormat::Pdf => "application/pdf",
            RenderFormat::Csv => "text/csv",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            RenderFormat::Html => ".html",
            RenderFormat::Pdf => ".pdf",
            RenderFormat::Csv => ".csv",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderFormat::Html => "HTML",
            RenderFormat::Pdf => "PDF",
            RenderFormat::Csv => "CSV",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown render format '{0}' (expected html, pdf or csv)")]
pub struct ParseFormatError(pub String);

impl FromStr for RenderFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(RenderFormat::Html),
            "pdf" => Ok(RenderFormat::Pdf),
            "csv" => Ok(RenderFormat::Csv),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// The bytes produced by one render call, tagged with their format and the
/// name of the template they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    content: Vec<u8>,
    format: RenderFormat,
    template_name: String,
}

impl RenderResult {
    pub fn new(
        content: Vec<u8>,
        format: RenderFormat,
        template_name: impl Into<String>,
    ) -> Result<Self, ConstructionError> {
        let template_name = template_name.into();
        if template_name.trim().is_empty() {
            return Err(ConstructionError::BlankResultName);
        }
        Ok(Self {
            content,
            format,
            template_name,
        })
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    pub fn format(&self) -> RenderFormat {
        self.format
    }

    pub fn template_name(&self) -> &str {
        &self.template_name
    }

    /// The content as text. Meant for the text formats (HTML, CSV).
    pub fn content_as_string(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn suggested_filename(&self) -> String {
        format!("{}{}", self.template_name, self.format.file_extension())
    }
}
