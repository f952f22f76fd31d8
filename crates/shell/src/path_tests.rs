// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for PATH resolution.
//!
//! These tests rewrite the process-wide `PATH`, so they are serialized.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use serial_test::serial;

use super::find_executable;

/// Create a file with the given permission bits.
fn place(dir: &Path, name: &str, mode: u32) {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
}

/// Run `f` with `PATH` set to `value`, restoring the old value after.
fn with_path<R>(value: &std::ffi::OsStr, f: impl FnOnce() -> R) -> R {
    let saved = std::env::var_os("PATH");
    std::env::set_var("PATH", value);
    let result = f();
    match saved {
        Some(old) => std::env::set_var("PATH", old),
        None => std::env::remove_var("PATH"),
    }
    result
}

#[test]
#[serial]
fn finds_executable_file() {
    let dir = tempfile::tempdir().unwrap();
    place(dir.path(), "tool", 0o755);

    let found = with_path(dir.path().as_os_str(), || find_executable("tool"));
    assert_eq!(found, Some(dir.path().join("tool")));
}

#[test]
#[serial]
fn skips_non_executable_file() {
    let dir = tempfile::tempdir().unwrap();
    place(dir.path(), "tool", 0o644);

    let found = with_path(dir.path().as_os_str(), || find_executable("tool"));
    assert_eq!(found, None);
}

#[test]
#[serial]
fn any_execute_bit_counts() {
    let dir = tempfile::tempdir().unwrap();
    place(dir.path(), "tool", 0o641); // other-execute only

    let found = with_path(dir.path().as_os_str(), || find_executable("tool"));
    assert_eq!(found, Some(dir.path().join("tool")));
}

#[test]
#[serial]
fn directories_are_not_executables() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("tool")).unwrap();

    let found = with_path(dir.path().as_os_str(), || find_executable("tool"));
    assert_eq!(found, None);
}

#[test]
#[serial]
fn earlier_directory_wins() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    place(first.path(), "tool", 0o755);
    place(second.path(), "tool", 0o755);

    let joined =
        std::env::join_paths([first.path(), second.path()]).unwrap();
    let found = with_path(&joined, || find_executable("tool"));
    assert_eq!(found, Some(first.path().join("tool")));
}

#[test]
#[serial]
fn unreadable_entries_are_skipped() {
    let missing = tempfile::tempdir().unwrap();
    let real = tempfile::tempdir().unwrap();
    let gone = missing.path().join("removed");
    place(real.path(), "tool", 0o755);

    let joined = std::env::join_paths([gone.as_path(), real.path()]).unwrap();
    let found = with_path(&joined, || find_executable("tool"));
    assert_eq!(found, Some(real.path().join("tool")));
}

#[test]
#[serial]
fn search_is_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();
    place(dir.path(), "Tool", 0o755);

    let found = with_path(dir.path().as_os_str(), || find_executable("tool"));
    assert_eq!(found, None);
}
