use assert_fs::TempDir;
use assert_fs::prelude::*;
use cleaner_fs::{read_text, write_atomic, write_text};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("lib/jxl_lists.bzl");

    write_atomic(file.path(), b"hello world").unwrap();

    file.assert("hello world");
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("lib.gni");
    file.write_str("original").unwrap();

    write_atomic(file.path(), b"updated").unwrap();

    file.assert("updated");
}

#[test]
fn test_write_text_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("a/b/c/out.cmake");

    write_text(file.path(), "set(X 1)\n").unwrap();

    file.assert(predicate::path::exists());
    file.assert(predicate::str::contains("set(X 1)"));
}

#[test]
fn test_read_text_round_trips_written_text() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("lists.cmake");
    let text = "# header\n\nset(JPEGXL_INTERNAL_TESTS\n  a_test.cc\n)\n";

    write_text(file.path(), text).unwrap();

    assert_eq!(read_text(file.path()).unwrap(), text);
}

#[test]
fn test_read_text_missing_file_is_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("absent.gni");

    let err = read_text(file.path()).unwrap_err();
    assert!(err.to_string().contains("absent.gni"));
}
