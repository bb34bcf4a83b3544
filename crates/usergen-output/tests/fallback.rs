//! Integration tests for writing candidate lists to disk.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use usergen_output::{OutputPlan, write_candidates};

fn lines(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

#[test]
fn creates_missing_parent_directories() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("nested/deeper/usernames.list");
    let plan = OutputPlan::new(vec![target.clone()]);

    let outcome = write_candidates(&plan, &lines(&["ada", "lovelace"])).expect("write");

    assert_eq!(outcome.path, target);
    assert_eq!(fs::read_to_string(&target).expect("read"), "ada\nlovelace\n");
}

#[test]
fn overwrites_existing_file() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("usernames.list");
    fs::write(&target, "stale\nentries\nhere\n").expect("seed");

    write_candidates(&OutputPlan::new(vec![target.clone()]), &lines(&["x"])).expect("write");

    assert_eq!(fs::read_to_string(&target).expect("read"), "x\n");
}

#[test]
fn empty_list_writes_empty_file() {
    let dir = TempDir::new().expect("temp dir");
    let target = dir.path().join("usernames.list");

    let outcome = write_candidates(&OutputPlan::new(vec![target.clone()]), &[]).expect("write");

    assert_eq!(outcome.lines_written, 0);
    assert_eq!(fs::read_to_string(&target).expect("read"), "");
}

#[cfg(unix)]
#[test]
fn read_only_directory_falls_back() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().expect("temp dir");
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).expect("create locked dir");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).expect("chmod");

    // Privileged users ignore directory permissions; nothing to observe then.
    if fs::write(locked.join("write-check"), "").is_ok() {
        return;
    }

    let fallback: PathBuf = dir.path().join("fallback/usernames.list");
    let plan = OutputPlan::new(vec![locked.join("usernames.list"), fallback.clone()]);
    let outcome = write_candidates(&plan, &lines(&["a"])).expect("write");

    assert_eq!(outcome.path, fallback);
    assert!(outcome.fallback_used());
    assert_eq!(fs::read_to_string(&fallback).expect("read"), "a\n");

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("restore");
}
