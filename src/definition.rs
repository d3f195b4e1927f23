//! Loading templates from JSON definitions.
//!
//! A definition is the serde form of [`Template`]: a `name`, a list of
//! `sections` tagged by `type`, and an optional `data` object. Definitions
//! go through the same validation as [`Template::builder`].
use crate::error::TesseraError;
use std::fs;
use std::path::Path;
use tessera_types::Template;

pub fn parse_template(json: &str) -> Result<Template, TesseraError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_template(path: impl AsRef<Path>) -> Result<Template, TesseraError> {
    let path = path.as_ref();
    log::info!("Loading template definition from {}", path.display());
    let json = fs::read_to_string(path)?;
    parse_template(&json)
}
