//! Decoders for translation file formats.
//!
//! Each decoder turns file content into a `serde_json::Value` tree whose root
//! is an object or an array. Flattening happens in `core::merge`.

pub mod json;
pub mod toml;

use std::fs;

use serde_json::Value;

use super::error::GenerateError;
use super::source::{ResourceFile, SourceFormat};

/// Read and decode a translation file.
pub fn parse_resource(file: &ResourceFile) -> Result<Value, GenerateError> {
    let bytes = fs::read(&file.path).map_err(|source| GenerateError::Io {
        path: file.path.clone(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|err| GenerateError::parse(&file.path, err))?;
    parse_content(file, &content)
}

/// Decode already-loaded content according to the file's format.
pub fn parse_content(file: &ResourceFile, content: &str) -> Result<Value, GenerateError> {
    let value = match file.format {
        SourceFormat::Json => self::json::parse_json(content),
        SourceFormat::Toml => self::toml::parse_toml(content),
    }
    .map_err(|message| GenerateError::parse(&file.path, message))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        _ => Err(GenerateError::parse(
            &file.path,
            "root must be an object or an array",
        )),
    }
}
