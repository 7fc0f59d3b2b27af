//! Error types for trivert

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::convert::Stage;
use crate::format::Format;

/// Position in source text, used for XML diagnostics
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub offset: usize,
    pub line: u32,
    pub col: u32,
}

impl Pos {
    pub const fn new(offset: usize, line: u32, col: u32) -> Self {
        Self { offset, line, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.col)
    }
}

/// Which side of a conversion a file sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
        }
    }
}

/// Main error type for trivert
#[derive(Error, Debug)]
pub enum Error {
    /// Input text is not well-formed in the declared format
    #[error("invalid {format}: {message}")]
    Parse { format: Format, message: String },

    /// A file name matches none of the recognized suffixes
    #[error("unsupported {role} file format: {}", path.display())]
    UnsupportedFormat { role: Role, path: PathBuf },

    /// The input parsed but holds no value (an empty document or a bare `null`)
    #[error("{} contains no data", path.display())]
    EmptyInput { path: PathBuf },

    /// Only mappings can become an XML document
    #[error("cannot encode a {found} as an XML document, the root value must be a mapping")]
    UnsupportedRootValue { found: &'static str },

    /// A mapping key that cannot be written as an XML tag
    #[error("{name:?} is not a valid XML element name")]
    InvalidElementName { name: String },

    #[error("failed to write {format}: {message}")]
    Serialize { format: Format, message: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An error raised by the file driver, tagged with the stage that failed
    #[error("{stage}: {source}")]
    Convert {
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn parse(format: Format, message: impl fmt::Display) -> Self {
        Self::Parse {
            format,
            message: message.to_string(),
        }
    }

    pub fn serialize(format: Format, message: impl fmt::Display) -> Self {
        Self::Serialize {
            format,
            message: message.to_string(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// XML parse error at a specific position
    pub fn xml_at(pos: Pos, message: &str) -> Self {
        Self::parse(Format::Xml, format_args!("{message} at {pos}"))
    }

    pub(crate) fn at_stage(self, stage: Stage) -> Self {
        Self::Convert {
            stage,
            source: Box::new(self),
        }
    }

    /// Stage of the file driver that failed, if this error came from it
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::Convert { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The underlying error with any stage wrapper removed
    pub fn cause(&self) -> &Self {
        match self {
            Self::Convert { source, .. } => source.cause(),
            other => other,
        }
    }
}

/// Result type alias for trivert
pub type Result<T> = std::result::Result<T, Error>;
