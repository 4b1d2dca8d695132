use std::fs;

use petboard_engine::{ensure_config_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_config_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("conf");
    assert!(!new_dir.exists());
    ensure_config_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing_and_is_atomic() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("config.ron", "(api_base: \"a\")").unwrap();
    assert_eq!(first.file_name().unwrap(), "config.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "(api_base: \"a\")");

    // Replace existing
    let second = writer.write("config.ron", "(api_base: \"b\")").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(api_base: \"b\")");
}

#[test]
fn no_partial_file_on_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    let result = writer.write("config.ron", "data");
    assert!(result.is_err());
    assert!(!file_path.with_file_name("config.ron").exists());
}
