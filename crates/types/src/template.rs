//! The document model: a named, ordered list of sections plus a data set.

use crate::error::ConstructionError;
use crate::value::{DataMap, Value};
use serde::{Deserialize, Serialize};

/// A table whose body is produced by resolving `columns` once per row context.
///
/// `headers` defines the table width. A missing column template renders as an
/// empty cell; column templates beyond the header count are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSection {
    pub headers: Vec<String>,
    pub columns: Vec<String>,
}

impl TableSection {
    pub fn new<H, C>(headers: H, columns: C) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of columns rendered.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// The cell template for column `index`, or `""` when none was given.
    pub fn column(&self, index: usize) -> &str {
        self.columns.get(index).map_or("", String::as_str)
    }
}

/// One structural unit of a document. Every renderer matches on this
/// exhaustively, so a new kind of section must be handled everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Section {
    Heading { text: String },
    Paragraph { text: String },
    Table(TableSection),
}

impl Section {
    pub fn heading(text: impl Into<String>) -> Self {
        Section::Heading { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Section::Paragraph { text: text.into() }
    }
}

/// An immutable document ready to be rendered.
///
/// Built through [`Template::builder`], which enforces that the template
/// has a name and at least one section. Contains no interior mutability, so
/// one instance can be rendered from many threads at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TemplateDefinition", into = "TemplateDefinition")]
pub struct Template {
    name: String,
    sections: Vec<Section>,
    data: DataMap,
}

impl Template {
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn data(&self) -> &DataMap {
        &self.data
    }

    /// Looks up a single data value.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// The first table section, if the template has one.
    pub fn first_table(&self) -> Option<&TableSection> {
        self.sections.iter().find_map(|section| match section {
            Section::Table(table) => Some(table),
            Section::Heading { .. } | Section::Paragraph { .. } => None,
        })
    }
}

/// Fluent builder for [`Template`].
#[derive(Debug, Clone, Default)]
pub struct TemplateBuilder {
    name: Option<String>,
    sections: Vec<Section>,
    data: DataMap,
}

impl TemplateBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn heading(self, text: impl Into<String>) -> Self {
        self.section(Section::heading(text))
    }

    pub fn paragraph(self, text: impl Into<String>) -> Self {
        self.section(Section::paragraph(text))
    }

    pub fn table<H, C>(self, headers: H, columns: C) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.section(Section::Table(TableSection::new(headers, columns)))
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Merges every entry of `data`, overwriting existing keys.
    pub fn data_map(mut self, data: DataMap) -> Self {
        self.data.extend(data);
        self
    }

    pub fn build(self) -> Result<Template, ConstructionError> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ConstructionError::MissingName),
        };
        if self.sections.is_empty() {
            return Err(ConstructionError::NoSections);
        }
        for (index, section) in self.sections.iter().enumerate() {
            match section {
                Section::Table(table) if table.headers.is_empty() => {
                    return Err(ConstructionError::EmptyTable { index });
                }
                Section::Table(_) | Section::Heading { .. } | Section::Paragraph { .. } => {}
            }
        }
        Ok(Template {
            name,
            sections: self.sections,
            data: self.data,
        })
    }
}

/// Serialized shape of a template; validated through the builder on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TemplateDefinition {
    name: String,
    sections: Vec<Section>,
    #[serde(default)]
    data: DataMap,
}

impl TryFrom<TemplateDefinition> for Template {
    type Error = ConstructionError;

    fn try_from(def: TemplateDefinition) -> Result<Self, Self::Error> {
        def.sections
            .into_iter()
            .fold(Template::builder().name(def.name), TemplateBuilder::section)
            .data_map(def.data)
            .build()
    }
}

impl From<Template> for TemplateDefinition {
    fn from(template: Template) -> Self {
        Self {
            name: template.name,
            sections: template.sections,
            data: template.data,
        }
    }
}
