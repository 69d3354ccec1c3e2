use crate::{
    constants::STDIN_INDICATOR,
    error::Result,
    ioutils::{parse_string_to_json, read_context_file, read_from},
};
use log::debug;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;

/// Assembles the template context for a generation run.
///
/// Sources are merged at the top level, later ones winning:
/// configuration `context`, then `context_file`, then `inline`
/// (a JSON string, or `-` to read JSON from stdin).
pub fn build_context(
    config_context: &Map<String, Value>,
    context_file: Option<&Path>,
    inline: Option<&str>,
) -> Result<Value> {
    build_context_with_input(config_context, context_file, inline, std::io::stdin())
}

/// Same as [`build_context`], reading `-` from `input` instead of stdin.
pub fn build_context_with_input(
    config_context: &Map<String, Value>,
    context_file: Option<&Path>,
    inline: Option<&str>,
    input: impl Read,
) -> Result<Value> {
    let mut context = config_context.clone();

    if let Some(path) = context_file {
        debug!("Reading context file '{}'", path.display());
        context.extend(read_context_file(path)?);
    }

    if let Some(inline) = inline {
        let buf = if inline == STDIN_INDICATOR {
            read_from(input)?
        } else {
            inline.to_string()
        };
        context.extend(parse_string_to_json(&buf)?);
    }

    Ok(Value::Object(context))
}
