use hwio_convert::commands::RunConfig;
use hwio_convert::converter::convert_lines;
use hwio_convert::output::{read_lines, validate_path, write_lines, write_source};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_write_and_read_trace() {
    let temp_file = NamedTempFile::new().unwrap();
    let lines = vec!["# Begin: PBM".to_string(), "# End:   PBM".to_string()];

    write_lines(&lines, temp_file.path()).unwrap();

    assert_eq!(read_lines(temp_file.path()).unwrap(), lines);
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_source_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/vp.c");
    let source = convert_lines("vp", &["ncpUsleep 10"], &RunConfig::default());

    write_source(&source, &nested_path).unwrap();

    let written = std::fs::read_to_string(&nested_path).unwrap();
    assert_eq!(written, source.to_string());
}

#[test]
fn test_write_lines_to_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let lines = vec!["x"];
    assert!(write_lines(&lines, temp_dir.path()).is_err());
}
