//! JSON adapter over `serde_json`

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::Value;

/// Indentation used for every JSON document trivert writes
pub const INDENT: &[u8] = b"    ";

/// Parse JSON text into a neutral value
pub fn load(text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|err| Error::parse(Format::Json, err))
}

/// Write a value as JSON indented by four spaces, followed by a newline
pub fn save<W: Write>(value: &Value, mut writer: W) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|err| Error::serialize(Format::Json, err))?;
    writer
        .write_all(b"\n")
        .map_err(|err| Error::serialize(Format::Json, err))
}

/// Render a value as JSON text
pub fn to_string(value: &Value) -> Result<String> {
    let mut buffer = Vec::new();
    save(value, &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| Error::serialize(Format::Json, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Mapping;

    #[test]
    fn test_load_object_keeps_order() -> Result<()> {
        let value = load(r#"{"z": 1, "a": {"m": true, "b": null}}"#)?;
        let root = value.as_mapping().cloned().unwrap_or_default();
        let keys: Vec<_> = root.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a"]);
        let inner = root.get("a").and_then(Value::as_mapping).cloned().unwrap_or_default();
        let keys: Vec<_> = inner.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["m", "b"]);
        Ok(())
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let result = load(r#"{"a":}"#);
        assert!(matches!(
            result,
            Err(Error::Parse {
                format: Format::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_load_accepts_non_object_roots() -> Result<()> {
        assert_eq!(load("[1, 2]")?, Value::from(vec![Value::from(1), Value::from(2)]));
        assert_eq!(load("\"text\"")?, Value::from("text"));
        Ok(())
    }

    #[test]
    fn test_save_uses_four_space_indent() -> Result<()> {
        let mut inner = Mapping::new();
        inner.insert("c", "x");
        let mut root = Mapping::new();
        root.insert("a", 1);
        root.insert("b", inner);

        let text = to_string(&Value::Mapping(root))?;
        assert_eq!(
            text,
            "{\n    \"a\": 1,\n    \"b\": {\n        \"c\": \"x\"\n    }\n}\n"
        );
        Ok(())
    }
}
