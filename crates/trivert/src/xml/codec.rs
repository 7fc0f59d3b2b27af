//! Mapping between neutral values and XML element trees.
//!
//! The convention is one element per mapping key:
//!
//! - a nested mapping becomes an element whose children are its entries;
//! - a scalar becomes a leaf element whose text is the scalar rendered as a
//!   string, except `null`, which becomes an empty element rather than the
//!   text `null` so that it decodes back to `null`;
//! - a sequence becomes one sibling element per item, all named after the key.
//!
//! Decoding reverses this, with losses: every leaf comes back as a string (or
//! `null` when the element has no text), and when siblings share a tag the
//! last one wins while the key keeps the position of the first. Attributes,
//! comments and processing instructions never reach the neutral model.

use crate::error::{Error, Result};
use crate::value::{Mapping, Scalar, Value};
use crate::xml::model::Element;

/// Tag wrapping the top-level mapping when no other is given
pub const DEFAULT_ROOT_TAG: &str = "root";

/// Decode the children of `element` into a mapping keyed by tag name.
///
/// The tag of `element` itself is not part of the result.
pub fn xml_to_neutral(element: &Element) -> Mapping {
    let mut mapping = Mapping::with_capacity(element.children().len());
    for child in element.children() {
        let value = if child.is_leaf() {
            child
                .text()
                .map_or(Value::Scalar(Scalar::Null), Value::from)
        } else {
            Value::Mapping(xml_to_neutral(child))
        };
        mapping.insert(child.name(), value);
    }
    mapping
}

/// Encode a top-level mapping as an element tree rooted at `root_tag`.
///
/// Any other kind of top-level value is rejected with
/// [`Error::UnsupportedRootValue`].
pub fn neutral_to_xml(value: &Value, root_tag: &str) -> Result<Element> {
    match value {
        Value::Mapping(mapping) => Ok(mapping_to_xml(mapping, root_tag)),
        other => Err(Error::UnsupportedRootValue {
            found: other.kind(),
        }),
    }
}

/// Encode a mapping as an element tree rooted at `root_tag`
pub fn mapping_to_xml(mapping: &Mapping, root_tag: &str) -> Element {
    let mut root = Element::new(root_tag);
    append_entries(&mut root, mapping);
    root
}

fn append_entries(parent: &mut Element, mapping: &Mapping) {
    for (key, value) in mapping {
        append_value(parent, key, value);
    }
}

fn append_value(parent: &mut Element, name: &str, value: &Value) {
    match value {
        Value::Mapping(mapping) => {
            let mut child = Element::new(name);
            append_entries(&mut child, mapping);
            parent.append_child(child);
        }
        Value::Sequence(items) => {
            for item in items {
                append_value(parent, name, item);
            }
        }
        Value::Scalar(Scalar::Null) => parent.append_child(Element::new(name)),
        Value::Scalar(scalar) => parent.append_child(Element::with_text(name, scalar.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{parser::Parser, writer};

    fn decode(input: &str) -> Result<Mapping> {
        let root = Parser::new(input.as_bytes()).parse()?;
        Ok(xml_to_neutral(&root))
    }

    fn keys(mapping: &Mapping) -> Vec<&str> {
        mapping.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_decode_leaves_and_nesting() -> Result<()> {
        let mapping = decode("<root><name>Ann</name><address><city>X</city></address><none/></root>")?;

        assert_eq!(keys(&mapping), vec!["name", "address", "none"]);
        assert_eq!(mapping.get("name"), Some(&Value::from("Ann")));
        assert_eq!(mapping.get("none"), Some(&Value::Scalar(Scalar::Null)));
        let address = mapping.get("address").and_then(Value::as_mapping);
        assert_eq!(address.and_then(|a| a.get("city")), Some(&Value::from("X")));
        Ok(())
    }

    #[test]
    fn test_decode_last_duplicate_wins() -> Result<()> {
        let mapping = decode("<root><a>1</a><b>x</b><a>2</a></root>")?;
        assert_eq!(keys(&mapping), vec!["a", "b"]);
        assert_eq!(mapping.get("a"), Some(&Value::from("2")));
        Ok(())
    }

    #[test]
    fn test_decode_duplicate_can_change_shape() -> Result<()> {
        let mapping = decode("<root><a><b>1</b></a><a>leaf</a></root>")?;
        assert_eq!(mapping.get("a"), Some(&Value::from("leaf")));
        Ok(())
    }

    #[test]
    fn test_decode_drops_root_tag() -> Result<()> {
        let mapping = decode("<anything><k>v</k></anything>")?;
        assert_eq!(keys(&mapping), vec!["k"]);
        Ok(())
    }

    #[test]
    fn test_decode_ignores_attributes() -> Result<()> {
        let mapping = decode(r#"<root><a id="7">v</a><b only="attr"/></root>"#)?;
        assert_eq!(mapping.get("a"), Some(&Value::from("v")));
        assert_eq!(mapping.get("b"), Some(&Value::Scalar(Scalar::Null)));
        Ok(())
    }

    #[test]
    fn test_whitespace_only_leaf_is_a_string() -> Result<()> {
        let mapping = decode("<root><a>  </a><b>\n\t</b><c></c></root>")?;
        assert_eq!(mapping.get("a"), Some(&Value::from("  ")));
        assert_eq!(mapping.get("b"), Some(&Value::from("\n\t")));
        assert_eq!(mapping.get("c"), Some(&Value::Scalar(Scalar::Null)));

        let mut blank = Mapping::new();
        blank.insert("a", "  ");
        let text = writer::to_string(&mapping_to_xml(&blank, DEFAULT_ROOT_TAG))?;
        assert_eq!(text, "<root><a>  </a></root>");
        assert_eq!(decode(&text)?, blank);
        Ok(())
    }

    #[test]
    fn test_encode_nested_mapping() -> Result<()> {
        let mut address = Mapping::new();
        address.insert("city", "X");
        let mut person = Mapping::new();
        person.insert("name", "Ann");
        person.insert("address", address);

        let element = neutral_to_xml(&Value::Mapping(person), DEFAULT_ROOT_TAG)?;
        assert_eq!(
            writer::to_string(&element)?,
            "<root><name>Ann</name><address><city>X</city></address></root>"
        );
        Ok(())
    }

    #[test]
    fn test_encode_stringifies_scalars() -> Result<()> {
        let mut mapping = Mapping::new();
        mapping.insert("int", 42);
        mapping.insert("float", 2.5);
        mapping.insert("flag", false);
        mapping.insert("nothing", Value::Scalar(Scalar::Null));

        let element = mapping_to_xml(&mapping, "data");
        assert_eq!(
            writer::to_string(&element)?,
            "<data><int>42</int><float>2.5</float><flag>false</flag><nothing/></data>"
        );

        let decoded = xml_to_neutral(&element);
        assert_eq!(decoded.get("int"), Some(&Value::from("42")));
        assert_eq!(decoded.get("flag"), Some(&Value::from("false")));
        assert_eq!(decoded.get("nothing"), Some(&Value::Scalar(Scalar::Null)));
        Ok(())
    }

    #[test]
    fn test_encode_sequence_repeats_key() -> Result<()> {
        let mut mapping = Mapping::new();
        mapping.insert("item", vec![Value::from("a"), Value::from(1)]);

        let element = mapping_to_xml(&mapping, DEFAULT_ROOT_TAG);
        assert_eq!(
            writer::to_string(&element)?,
            "<root><item>a</item><item>1</item></root>"
        );
        assert_eq!(xml_to_neutral(&element).get("item"), Some(&Value::from("1")));
        Ok(())
    }

    #[test]
    fn test_empty_nested_mapping_decodes_as_null() {
        let mut mapping = Mapping::new();
        mapping.insert("empty", Mapping::new());

        let decoded = xml_to_neutral(&mapping_to_xml(&mapping, DEFAULT_ROOT_TAG));
        assert_eq!(decoded.get("empty"), Some(&Value::Scalar(Scalar::Null)));
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        for value in [Value::from("text"), Value::from(vec![Value::from(1)]), Value::default()] {
            assert!(matches!(
                neutral_to_xml(&value, DEFAULT_ROOT_TAG),
                Err(Error::UnsupportedRootValue { .. })
            ));
        }
    }

    #[test]
    fn test_string_mapping_round_trips() {
        let mut inner = Mapping::new();
        inner.insert("c", "3");
        let mut mapping = Mapping::new();
        mapping.insert("a", "1");
        mapping.insert("b", inner);

        let decoded = xml_to_neutral(&mapping_to_xml(&mapping, DEFAULT_ROOT_TAG));
        assert_eq!(decoded, mapping);
        assert_eq!(keys(&decoded), vec!["a", "b"]);
    }
}
