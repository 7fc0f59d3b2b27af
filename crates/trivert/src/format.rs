//! Supported formats and file name based detection

use std::fmt;
use std::path::Path;

/// A serialization format trivert can read and write
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    /// All formats, in detection order
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Xml];

    /// File name suffixes recognized for this format
    pub const fn suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Json => &[".json"],
            Self::Yaml => &[".yaml", ".yml"],
            Self::Xml => &[".xml"],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
            Self::Xml => "XML",
        }
    }

    /// Same as [`detect_format_from_path`]
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        detect_format_from_path(path)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detect a format from a file name suffix.
///
/// Matching is case-sensitive: `data.JSON` is not recognized.
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Option<Format> {
    let name = path.as_ref().to_string_lossy();
    Format::ALL.into_iter().find(|format| {
        format
            .suffixes()
            .iter()
            .any(|suffix| name.ends_with(suffix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_matches_detection() {
        assert_eq!(Format::from_path("a/b.yml"), Some(Format::Yaml));
        assert_eq!(Format::from_path("b.toml"), None);
    }

    #[test]
    fn test_detect_by_suffix() {
        assert_eq!(detect_format_from_path("a.json"), Some(Format::Json));
        assert_eq!(detect_format_from_path("a.yaml"), Some(Format::Yaml));
        assert_eq!(detect_format_from_path("a.yml"), Some(Format::Yaml));
        assert_eq!(detect_format_from_path("dir/a.xml"), Some(Format::Xml));
    }

    #[test]
    fn test_detect_is_case_sensitive() {
        assert_eq!(detect_format_from_path("a.JSON"), None);
        assert_eq!(detect_format_from_path("a.Yml"), None);
    }

    #[test]
    fn test_suffix_without_stem_still_matches() {
        assert_eq!(detect_format_from_path(".json"), Some(Format::Json));
    }

    #[test]
    fn test_unknown_suffix() {
        assert_eq!(detect_format_from_path("data.csv"), None);
        assert_eq!(detect_format_from_path("json"), None);
    }
}
