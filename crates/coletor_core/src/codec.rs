use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::record::Collection;

const INDENT: &[u8] = b"    ";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Bytes are not syntactically valid JSON.
    #[error("not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// Valid JSON whose top-level value is not an array.
    #[error("expected a JSON array at the top level, found {found}")]
    Format { found: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("serializer produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Parses an uploaded document; only a top-level array is accepted.
pub fn load_from_json(bytes: &[u8]) -> Result<Collection, LoadError> {
    match serde_json::from_slice::<Value>(bytes)? {
        Value::Array(items) => Ok(items),
        other => Err(LoadError::Format {
            found: kind_name(&other),
        }),
    }
}

pub fn start_empty() -> Collection {
    Vec::new()
}

/// Serializes the collection with 4-space indentation, non-ASCII kept literal.
pub fn export_json(collection: &[Value]) -> Result<String, ExportError> {
    to_pretty_json(collection)
}

pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_top_level_is_a_format_error() {
        let err = load_from_json(br#"{"titulo": "x"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Format { found: "an object" }));
    }

    #[test]
    fn indentation_is_four_spaces() {
        let text = export_json(&[json!({"a": [1]})]).unwrap();
        assert_eq!(text, "[\n    {\n        \"a\": [\n            1\n        ]\n    }\n]");
    }
}
