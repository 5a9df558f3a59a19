#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::PathBuf;

use interop_def::syntax::{load_and_parse, parse_files};
use interop_def::{AstNode, DefError, ParseConfig, parse_file};
use tempfile::TempDir;

use crate::helpers::source_fixtures::*;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "zlib.def", ZLIB_DEF);

    let file = parse_file(&path).unwrap();
    assert_eq!(file.path(), path.as_path());
    assert_eq!(file.tree().first_half().text(), ZLIB_PROPERTIES);
    assert!(file.has_declarations());
}

#[test]
fn test_parse_file_rejects_other_extensions() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "zlib.h", ZLIB_DECLARATIONS);

    let err = parse_file(&path).unwrap_err();
    assert!(matches!(err, DefError::UnsupportedExtension(ext) if ext == "h"));
}

#[test]
fn test_custom_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "zlib.kdef", ZLIB_DEF);
    let config = ParseConfig::default().with_extension("kdef");

    let file = load_and_parse(&path, &config).unwrap();
    assert!(file.has_declarations());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = parse_file(dir.path().join("absent.def")).unwrap_err();
    assert!(matches!(err, DefError::Io(_)));
}

#[test]
fn test_parse_files_in_parallel() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write(&dir, "a.def", ZLIB_DEF),
        write(&dir, "b.def", PROPERTIES_ONLY),
        dir.path().join("c.def"),
        write(&dir, "d.def", CRLF_DEF),
    ];

    let results = parse_files(&paths, &ParseConfig::default());
    assert_eq!(results.len(), 4);
    assert!(results[0].as_ref().unwrap().has_declarations());
    assert!(!results[1].as_ref().unwrap().has_declarations());
    assert!(results[2].is_err());
    assert_eq!(results[3].as_ref().unwrap().path(), paths[3].as_path());
}
