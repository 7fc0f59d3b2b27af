//! YAML adapter over `serde_yaml`.
//!
//! `serde_yaml` never executes code or constructs host types; custom tags are
//! dropped and only the tagged value is kept.

use std::io::Write;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::Value;

/// Parse a single YAML document into a neutral value
pub fn load(text: &str) -> Result<Value> {
    serde_yaml::from_str(text).map_err(|err| Error::parse(Format::Yaml, err))
}

/// Write a value as a YAML document
pub fn save<W: Write>(value: &Value, writer: W) -> Result<()> {
    serde_yaml::to_writer(writer, value).map_err(|err| Error::serialize(Format::Yaml, err))
}

/// Render a value as YAML text
pub fn to_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(|err| Error::serialize(Format::Yaml, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Mapping, Scalar};

    #[test]
    fn test_load_keeps_native_scalar_types() -> Result<()> {
        let value = load("a: 1\nb: two\nc: 2.5\nd: true\ne: ~\n")?;
        let root = value.as_mapping().cloned().unwrap_or_default();
        assert_eq!(root.get("a"), Some(&Value::from(1)));
        assert_eq!(root.get("b"), Some(&Value::from("two")));
        assert_eq!(root.get("c"), Some(&Value::from(2.5)));
        assert_eq!(root.get("d"), Some(&Value::from(true)));
        assert_eq!(root.get("e"), Some(&Value::Scalar(Scalar::Null)));
        Ok(())
    }

    #[test]
    fn test_load_malformed_is_parse_error() {
        let result = load("a: [1, 2\n");
        assert!(matches!(
            result,
            Err(Error::Parse {
                format: Format::Yaml,
                ..
            })
        ));
    }

    #[test]
    fn test_load_empty_document_is_null() -> Result<()> {
        assert!(load("")?.is_null());
        Ok(())
    }

    #[test]
    fn test_save_round_trips() -> Result<()> {
        let mut inner = Mapping::new();
        inner.insert("city", "X");
        let mut root = Mapping::new();
        root.insert("name", "Ann");
        root.insert("tags", vec![Value::from("a"), Value::from("b")]);
        root.insert("address", inner);
        let value = Value::Mapping(root);

        let text = to_string(&value)?;
        assert!(text.starts_with("name: Ann\n"));
        assert_eq!(load(&text)?, value);
        Ok(())
    }
}
