//! XML serialization of an [`Element`] tree

use std::io::Write;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::xml::model::{Content, Element};

/// Render an element tree as compact XML text, without a declaration
pub fn to_string(root: &Element) -> Result<String> {
    let mut output = String::new();
    write_element(root, &mut output)?;
    Ok(output)
}

/// Write an element tree followed by a newline
pub fn write<W: Write>(root: &Element, mut writer: W) -> Result<()> {
    let mut output = to_string(root)?;
    output.push('\n');
    writer
        .write_all(output.as_bytes())
        .map_err(|err| Error::serialize(Format::Xml, err))
}

fn write_element(element: &Element, output: &mut String) -> Result<()> {
    if !is_valid_name(&element.name) {
        return Err(Error::InvalidElementName {
            name: element.name.clone(),
        });
    }

    output.push('<');
    output.push_str(&element.name);

    match &element.content {
        Content::Text(None) => output.push_str("/>"),
        Content::Children(children) if children.is_empty() => output.push_str("/>"),
        Content::Text(Some(text)) => {
            output.push('>');
            escape_text(text, output)?;
            close_tag(&element.name, output);
        }
        Content::Children(children) => {
            output.push('>');
            for child in children {
                write_element(child, output)?;
            }
            close_tag(&element.name, output);
        }
    }
    Ok(())
}

fn close_tag(name: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

fn escape_text(text: &str, output: &mut String) -> Result<()> {
    for ch in text.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            // Parsers normalize a literal carriage return to a newline
            '\r' => output.push_str("&#13;"),
            ch if is_xml_char(ch) => output.push(ch),
            ch => {
                return Err(Error::serialize(
                    Format::Xml,
                    format_args!("character U+{:04X} cannot appear in XML text", u32::from(ch)),
                ));
            }
        }
    }
    Ok(())
}

fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Whether `name` can be written as an element name
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(is_name_char),
        _ => false,
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == ':'
}

fn is_name_char(ch: char) -> bool {
    is_name_start(ch) || ch.is_alphanumeric() || matches!(ch, '-' | '.')
}
