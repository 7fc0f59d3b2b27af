//! Conversion driver: pick adapters by file name, load, convert and save

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result, Role};
use crate::format::{detect_format_from_path, Format};
use crate::value::Value;
use crate::xml::{self, Config as XmlConfig, DEFAULT_ROOT_TAG};
use crate::{json, yaml};

/// Stages of a file conversion, in the order they run.
///
/// A run ends either after [`Stage::Save`] or at the first stage that fails;
/// errors from [`convert_file`] carry the failing stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    SelectInputFormat,
    Load,
    SelectOutputFormatAndConvert,
    Save,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SelectInputFormat => "input format",
            Self::Load => "load",
            Self::SelectOutputFormatAndConvert => "convert",
            Self::Save => "save",
        };
        f.write_str(name)
    }
}

/// Conversion options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Tag of the element wrapping the document when writing XML
    pub root_tag: String,
    /// Limits applied when reading XML
    pub xml: XmlConfig,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root_tag: DEFAULT_ROOT_TAG.to_string(),
            xml: XmlConfig::default(),
        }
    }
}

/// Convert text between formats
pub fn convert(input: &str, from: Format, to: Format) -> Result<String> {
    convert_with_options(input, from, to, &ConvertOptions::default())
}

/// Convert text between formats with options.
///
/// The result is exactly what [`convert_file`] would write.
pub fn convert_with_options(
    input: &str,
    from: Format,
    to: Format,
    options: &ConvertOptions,
) -> Result<String> {
    let value = load(input, from, options)?;
    let mut output = Vec::new();
    save(&value, to, options, &mut output)?;
    String::from_utf8(output).map_err(|err| Error::serialize(to, err))
}

/// Parse text in `format` into a neutral value
pub fn load(input: &str, format: Format, options: &ConvertOptions) -> Result<Value> {
    match format {
        Format::Json => json::load(input),
        Format::Yaml => yaml::load(input),
        Format::Xml => xml::load_with_config(input, options.xml),
    }
}

/// Serialize a neutral value in `format`
pub fn save<W: Write>(
    value: &Value,
    format: Format,
    options: &ConvertOptions,
    writer: W,
) -> Result<()> {
    match format {
        Format::Json => json::save(value, writer),
        Format::Yaml => yaml::save(value, writer),
        Format::Xml => xml::save(value, &options.root_tag, writer),
    }
}

/// Convert `input` into `output`, choosing both formats by file name suffix.
///
/// The output format is only consulted once the input has loaded, and an
/// input that loads to nothing (an empty document or a bare `null`) fails.
/// Output is rendered fully in memory and then moved into place, so a failed
/// run never leaves a partial output file behind.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let from = detect_format_from_path(input)
        .ok_or_else(|| Error::UnsupportedFormat {
            role: Role::Input,
            path: input.to_path_buf(),
        })
        .map_err(|err| err.at_stage(Stage::SelectInputFormat))?;
    debug!(path = %input.display(), format = %from, "selected input format");

    let text = fs::read_to_string(input)
        .map_err(|err| Error::io(input, err).at_stage(Stage::Load))?;
    let value = load(&text, from, options).map_err(|err| err.at_stage(Stage::Load))?;
    if value.is_null() {
        return Err(Error::EmptyInput {
            path: input.to_path_buf(),
        }
        .at_stage(Stage::Load));
    }
    debug!(kind = value.kind(), "loaded input");

    let to = detect_format_from_path(output)
        .ok_or_else(|| Error::UnsupportedFormat {
            role: Role::Output,
            path: output.to_path_buf(),
        })
        .map_err(|err| err.at_stage(Stage::SelectOutputFormatAndConvert))?;
    debug!(path = %output.display(), format = %to, "selected output format");

    let mut rendered = Vec::new();
    save(&value, to, options, &mut rendered)
        .map_err(|err| err.at_stage(Stage::SelectOutputFormatAndConvert))?;

    write_atomically(output, &rendered).map_err(|err| err.at_stage(Stage::Save))?;
    info!(from = %from, to = %to, bytes = rendered.len(), "wrote {}", output.display());
    Ok(())
}

/// Write through a temporary file in the destination directory, then rename
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|err| Error::io(dir, err))?;
    file.write_all(contents)
        .and_then(|()| file.as_file().sync_all())
        .map_err(|err| Error::io(file.path(), err))?;
    file.persist(path)
        .map_err(|err| Error::io(path, err.error))?;
    Ok(())
}
