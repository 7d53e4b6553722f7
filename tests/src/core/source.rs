use aegis_core::{ContractSource, Error};
use std::fs;

#[test]
fn test_load_reads_name_from_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CreditScore.sol");
    fs::write(&path, "pragma solidity ^0.8.19;\n").unwrap();

    let src = ContractSource::load(&path).unwrap();
    assert_eq!(src.name, "CreditScore");
    assert_eq!(src.text, "pragma solidity ^0.8.19;\n");
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = ContractSource::load("does/not/exist.sol").unwrap_err();
    match err {
        Error::FileRead { path, .. } => assert!(path.contains("exist.sol")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_persist_replaces_content_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Foo.sol");
    fs::write(&path, "before").unwrap();

    let mut src = ContractSource::load(&path).unwrap();
    src.text = "after".to_string();
    src.persist().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "after");
    // no temp files left behind
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name() != "Foo.sol")
        .collect();
    assert!(leftovers.is_empty(), "leftovers: {leftovers:?}");
}

#[test]
fn test_from_text_is_never_backed_by_disk() {
    let src = ContractSource::from_text("Foo", "contract Foo {}\n");
    assert_eq!(src.name, "Foo");
    assert_eq!(src.path.to_str(), Some("Foo.sol"));
}
