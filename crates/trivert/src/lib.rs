//! trivert - convert structured data between JSON, YAML and XML
//!
//! Every conversion loads the input into a format-neutral [`Value`] and
//! writes that value out again. JSON and YAML map onto the neutral model
//! directly; XML goes through the element-per-key convention in [`xml::codec`].
//!
//! # Quick Start
//!
//! ```
//! use trivert::{convert, Format};
//! # fn main() -> Result<(), trivert::Error> {
//! let xml = convert(r#"{"name": "Ann", "address": {"city": "X"}}"#, Format::Json, Format::Xml)?;
//! assert_eq!(
//!     xml,
//!     "<root><name>Ann</name><address><city>X</city></address></root>\n"
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Pos, Result, Role};

pub mod value;
pub use value::{Mapping, Scalar, Value};

pub mod format;
pub use format::{detect_format_from_path, Format};

pub mod convert;
pub use convert::{convert, convert_file, convert_with_options, ConvertOptions, Stage};

pub mod json;
pub mod xml;
pub mod yaml;
pub use xml::{
    neutral_to_xml, xml_to_neutral, Config as XmlConfig, Element as XmlElement,
    Parser as XmlParser, DEFAULT_ROOT_TAG,
};

/// Parse JSON from string
pub fn from_json_str(s: &str) -> Result<Value> {
    json::load(s)
}

/// Parse YAML from string
pub fn from_yaml_str(s: &str) -> Result<Value> {
    yaml::load(s)
}

/// Parse XML from string into a mapping of the root element's children
pub fn from_xml_str(s: &str) -> Result<Value> {
    xml::load(s)
}
