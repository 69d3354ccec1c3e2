use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Parses a JSON object. Anything other than an object is rejected.
pub fn parse_string_to_json(
    buf: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_json::from_str::<serde_json::Value>(buf)? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::ContextParseError(format!(
            "expected a JSON object, found '{other}'"
        ))),
    }
}

/// Parses a YAML mapping into a JSON object.
pub fn parse_string_to_yaml(
    buf: &str,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    match serde_yaml::from_str::<serde_json::Value>(buf)? {
        serde_json::Value::Object(map) => Ok(map),
        serde_json::Value::Null => Ok(serde_json::Map::new()),
        other => Err(Error::ContextParseError(format!(
            "expected a YAML mapping, found '{other}'"
        ))),
    }
}

/// Reads a context file, choosing the format by extension (`.json`, otherwise YAML).
pub fn read_context_file<P: AsRef<Path>>(
    path: P,
) -> Result<serde_json::Map<String, serde_json::Value>> {
    let path = path.as_ref();
    let buf = std::fs::read_to_string(path)?;
    if path.extension().is_some_and(|ext| ext == "json") {
        parse_string_to_json(&buf)
    } else {
        parse_string_to_yaml(&buf)
    }
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
