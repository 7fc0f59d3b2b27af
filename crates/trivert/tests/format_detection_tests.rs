use trivert::{detect_format_from_path, Format};

#[test]
fn detect_format_from_path_supports_suffixes() {
    assert_eq!(detect_format_from_path("input.json"), Some(Format::Json));
    assert_eq!(detect_format_from_path("input.yaml"), Some(Format::Yaml));
    assert_eq!(detect_format_from_path("input.yml"), Some(Format::Yaml));
    assert_eq!(detect_format_from_path("input.xml"), Some(Format::Xml));
    assert_eq!(detect_format_from_path("nested/dir/input.xml"), Some(Format::Xml));
}

#[test]
fn detect_format_from_path_is_case_sensitive() {
    assert_eq!(detect_format_from_path("input.JSON"), None);
    assert_eq!(detect_format_from_path("input.YAML"), None);
    assert_eq!(detect_format_from_path("input.Xml"), None);
}

#[test]
fn detect_format_from_path_returns_none_for_unknown_or_missing_suffixes() {
    assert_eq!(detect_format_from_path("input"), None);
    assert_eq!(detect_format_from_path("data.csv"), None);
    assert_eq!(detect_format_from_path("input.json.bak"), None);
}
