//! XML parser producing an [`Element`] tree

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::xml::cursor::Cursor;
use crate::xml::model::{Content, Element};

/// Configuration for the XML parser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum element nesting depth (0 means unlimited)
    pub max_depth: u16,
    /// Maximum input size in bytes (0 means unlimited)
    pub max_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: 128,
            max_size: 10 * 1024 * 1024, // 10 MB default
        }
    }
}

impl Config {
    /// Create a new config with unlimited depth and size
    pub const fn unlimited() -> Self {
        Self {
            max_depth: 0,
            max_size: 0,
        }
    }

    pub const fn new(max_depth: u16, max_size: usize) -> Self {
        Self {
            max_depth,
            max_size,
        }
    }
}

/// XML parser.
///
/// Declarations, comments, processing instructions and the DOCTYPE are
/// skipped. Attributes are checked for well-formedness and then dropped.
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    config: Config,
    input_len: usize,
    depth: u16,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: &'a [u8], config: Config) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            input_len: input.len(),
            depth: 0,
        }
    }

    /// Parse a whole document and return its root element
    pub fn parse(&mut self) -> Result<Element> {
        if self.config.max_size != 0 && self.input_len > self.config.max_size {
            return Err(self.error_here(&format!(
                "input exceeds maximum size of {} bytes",
                self.config.max_size
            )));
        }

        if self.cursor.starts_with(b"\xEF\xBB\xBF") {
            self.cursor.advance_by(3);
        }
        self.skip_misc(true)?;
        if self.cursor.is_eof() {
            return Err(self.error_here("missing root element"));
        }

        let root = self.parse_element()?;
        self.skip_misc(false)?;

        if !self.cursor.is_eof() {
            return Err(self.error_here("unexpected content after root element"));
        }

        Ok(root)
    }

    fn parse_element(&mut self) -> Result<Element> {
        self.expect_byte(b'<')?;
        let name = self.parse_name()?;
        self.skip_attributes()?;

        if self.cursor.current() == Some(b'/') {
            self.cursor.advance();
            self.expect_byte(b'>')?;
            return Ok(Element::new(name));
        }
        self.expect_byte(b'>')?;

        self.depth = self.depth.saturating_add(1);
        if self.config.max_depth != 0 && self.depth > self.config.max_depth {
            return Err(self.error_here(&format!(
                "maximum nesting depth of {} exceeded",
                self.config.max_depth
            )));
        }

        let mut children = Vec::new();
        let mut text = String::new();
        loop {
            match self.cursor.current() {
                None => {
                    return Err(self.error_here(&format!("unclosed element <{name}>")));
                }
                Some(b'<') => match self.cursor.peek(1) {
                    Some(b'/') => {
                        self.parse_closing_tag(&name)?;
                        break;
                    }
                    Some(b'!') if self.cursor.starts_with(b"<!--") => self.skip_comment()?,
                    Some(b'!') if self.cursor.starts_with(b"<![CDATA[") => {
                        text.push_str(&self.parse_cdata()?);
                    }
                    Some(b'!') => return Err(self.error_here("unexpected markup declaration")),
                    Some(b'?') => self.skip_processing_instruction()?,
                    _ => children.push(self.parse_element()?),
                },
                Some(_) => text.push_str(&self.parse_text()?),
            }
        }

        self.depth = self.depth.saturating_sub(1);

        let content = if !children.is_empty() {
            Content::Children(children)
        } else if text.is_empty() {
            Content::Text(None)
        } else {
            Content::Text(Some(text))
        };
        Ok(Element { name, content })
    }

    fn parse_closing_tag(&mut self, name: &str) -> Result<()> {
        let start = self.cursor.position();
        self.cursor.advance_by(2);
        let close_name = self.parse_name()?;
        if close_name != name {
            return Err(Error::xml_at(
                start,
                &format!("mismatched closing tag </{close_name}>, expected </{name}>"),
            ));
        }
        self.cursor.skip_whitespace();
        self.expect_byte(b'>')
    }

    fn skip_attributes(&mut self) -> Result<()> {
        let mut seen: Vec<String> = Vec::new();

        loop {
            let before = self.cursor.pos();
            self.cursor.skip_whitespace();
            match self.cursor.current() {
                Some(b'/') | Some(b'>') => return Ok(()),
                Some(_) => {}
                None => return Err(self.error_here("unexpected end of input in tag")),
            }
            if self.cursor.pos() == before {
                return Err(self.error_here("expected whitespace before attribute"));
            }

            let name = self.parse_name()?;
            self.cursor.skip_whitespace();
            self.expect_byte(b'=')?;
            self.cursor.skip_whitespace();
            self.parse_attribute_value()?;

            if seen.contains(&name) {
                return Err(self.error_here(&format!("duplicate attribute {name}")));
            }
            seen.push(name);
        }
    }

    fn parse_attribute_value(&mut self) -> Result<String> {
        let quote = match self.cursor.current() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => return Err(self.error_here("expected quoted attribute value")),
        };
        self.cursor.advance();

        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == quote {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance();
                return self.decode_entities(&normalize_line_endings(self.to_str(raw)?));
            }
            if b == b'<' {
                return Err(self.error_here("'<' is not allowed in attribute values"));
            }
            self.cursor.advance();
        }

        Err(self.error_here("unterminated attribute value"))
    }

    fn parse_text(&mut self) -> Result<String> {
        let start = self.cursor.pos();
        while let Some(b) = self.cursor.current() {
            if b == b'<' {
                break;
            }
            self.cursor.advance();
        }

        let raw = self.cursor.slice_from(start);
        self.decode_entities(&normalize_line_endings(self.to_str(raw)?))
    }

    fn parse_cdata(&mut self) -> Result<String> {
        self.cursor.advance_by(b"<![CDATA[".len());
        let start = self.cursor.pos();
        while !self.cursor.is_eof() {
            if self.cursor.starts_with(b"]]>") {
                let raw = self.cursor.slice_from(start);
                self.cursor.advance_by(3);
                return self.to_str(raw).map(str::to_string);
            }
            self.cursor.advance();
        }
        Err(self.error_here("unterminated CDATA section"))
    }

    fn parse_name(&mut self) -> Result<String> {
        let start = self.cursor.pos();

        match self.cursor.current() {
            Some(b) if is_name_start(b) => self.cursor.advance(),
            _ => return Err(self.error_here("expected element or attribute name")),
        }
        while let Some(b) = self.cursor.current() {
            if is_name_char(b) {
                self.cursor.advance();
            } else {
                break;
            }
        }

        let raw = self.cursor.slice_from(start);
        self.to_str(raw).map(str::to_string)
    }

    /// Skip whitespace, comments and processing instructions around the
    /// root element. A DOCTYPE is only accepted before it.
    fn skip_misc(&mut self, in_prolog: bool) -> Result<()> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.starts_with(b"<?") {
                self.skip_processing_instruction()?;
            } else if self.cursor.starts_with(b"<!--") {
                self.skip_comment()?;
            } else if in_prolog && self.cursor.starts_with(b"<!DOCTYPE") {
                self.skip_doctype()?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        self.cursor.advance_by(4);
        self.skip_until(b"-->", "unterminated comment")
    }

    fn skip_processing_instruction(&mut self) -> Result<()> {
        self.cursor.advance_by(2);
        self.skip_until(b"?>", "unterminated processing instruction")
    }

    fn skip_doctype(&mut self) -> Result<()> {
        let mut subset_depth = 0usize;
        while let Some(b) = self.cursor.current() {
            self.cursor.advance();
            match b {
                b'[' => subset_depth += 1,
                b']' => subset_depth = subset_depth.saturating_sub(1),
                b'>' if subset_depth == 0 => return Ok(()),
                _ => {}
            }
        }
        Err(self.error_here("unterminated DOCTYPE"))
    }

    fn skip_until(&mut self, pattern: &[u8], message: &str) -> Result<()> {
        while !self.cursor.is_eof() {
            if self.cursor.starts_with(pattern) {
                self.cursor.advance_by(pattern.len());
                return Ok(());
            }
            self.cursor.advance();
        }
        Err(self.error_here(message))
    }

    fn expect_byte(&mut self, expected: u8) -> Result<()> {
        if self.cursor.current() == Some(expected) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.error_here(&format!("expected '{}'", char::from(expected))))
        }
    }

    fn to_str<'b>(&self, bytes: &'b [u8]) -> Result<&'b str> {
        std::str::from_utf8(bytes).map_err(|_| self.error_here("invalid UTF-8"))
    }

    fn decode_entities(&self, input: &str) -> Result<String> {
        let mut result = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(amp) = rest.find('&') {
            let (before, after) = rest.split_at(amp);
            result.push_str(before);

            let Some(end) = after.find(';') else {
                return Err(self.error_here("unterminated entity reference"));
            };
            let entity = after.get(1..end).unwrap_or_default();
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => decode_numeric_entity(entity),
            };
            match decoded {
                Some(ch) => result.push(ch),
                None => return Err(self.error_here(&format!("unknown entity &{entity};"))),
            }
            rest = after.get(end + 1..).unwrap_or_default();
        }
        result.push_str(rest);
        Ok(result)
    }

    fn error_here(&self, message: &str) -> Error {
        Error::xml_at(self.cursor.position(), message)
    }
}

fn is_name_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_' | b':') || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || matches!(b, b'0'..=b'9' | b'-' | b'.')
}

/// Turn `\r\n` and lone `\r` into `\n`, as XML 1.0 section 2.11 requires
fn normalize_line_endings(input: &str) -> Cow<'_, str> {
    if input.contains('\r') {
        Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(input)
    }
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().ok().and_then(char::from_u32)
    } else {
        None
    }
}
