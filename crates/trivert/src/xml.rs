//! XML element trees and the convention mapping them to neutral values

mod cursor;

pub mod codec;
pub mod model;
pub mod parser;
pub mod writer;

pub use codec::{neutral_to_xml, xml_to_neutral, DEFAULT_ROOT_TAG};
pub use model::{Content, Element};
pub use parser::{Config, Parser};

use std::io::Write;

use crate::error::Result;
use crate::value::Value;

/// Parse XML text into its root element
pub fn parse(text: &str) -> Result<Element> {
    Parser::new(text.as_bytes()).parse()
}

/// Parse XML text and decode the root element's children into a mapping
pub fn load(text: &str) -> Result<Value> {
    load_with_config(text, Config::default())
}

pub fn load_with_config(text: &str, config: Config) -> Result<Value> {
    let root = Parser::with_config(text.as_bytes(), config).parse()?;
    Ok(Value::Mapping(xml_to_neutral(&root)))
}

/// Encode a mapping under `root_tag` and write it as an XML document
pub fn save<W: Write>(value: &Value, root_tag: &str, out: W) -> Result<()> {
    let root = neutral_to_xml(value, root_tag)?;
    writer::write(&root, out)
}

/// Encode a mapping under `root_tag` and render it as XML text
pub fn to_string(value: &Value, root_tag: &str) -> Result<String> {
    let root = neutral_to_xml(value, root_tag)?;
    writer::to_string(&root)
}
