//! # Responder CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Integration tests for `responder ask`, the one-shot reply command.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_ask_keyword_reply() {
    let dir = tempdir().unwrap();
    responder_cmd_in(dir.path())
        .args(["ask", "Why", "is", "it", "so", "SLOW?"])
        .assert()
        .success()
        .stdout(
            "I think this has to do with your hardware.\n\
             Upgrading your processor should solve all\n\
             performance problems. Have you got a problem\n\
             with our software?\n",
        );
}

#[test]
fn test_ask_first_trigger_in_sentence_wins() {
    let dir = tempdir().unwrap();
    responder_cmd_in(dir.path())
        .args(["ask", "windows crashes"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "This is a known bug to do with the Windows",
        ));
}

#[test]
fn test_ask_fallback_from_defaults_flag() {
    let dir = tempdir().unwrap();
    let defaults = write_defaults(dir.path(), "replies.txt", &["Could you rephrase?"]);
    responder_cmd_in(dir.path())
        .arg("ask")
        .arg("--defaults")
        .arg(&defaults)
        .arg("zzz")
        .assert()
        .success()
        .stdout("Could you rephrase?\n");
}

#[test]
fn test_ask_reads_default_txt_from_working_dir() {
    let dir = tempdir().unwrap();
    write_defaults(dir.path(), "default.txt", &["That is interesting. Tell me more..."]);
    responder_cmd_in(dir.path())
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout("That is interesting. Tell me more...\n");
}

#[test]
fn test_ask_missing_defaults_warns_and_uses_synthetic_reply() {
    let dir = tempdir().unwrap();
    responder_cmd_in(dir.path())
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout("Could you elaborate on that?\n")
        .stderr(predicate::str::contains("Unable to open default.txt"));
}

#[test]
fn test_ask_project_config_selects_fallback_file() {
    let dir = tempdir().unwrap();
    write_defaults(dir.path(), "support.txt", &["Have you tried turning it off and on?"]);
    std::fs::write(
        dir.path().join(".responder.toml"),
        "[fallback]\nfile = \"support.txt\"\n",
    )
    .unwrap();

    responder_cmd_in(dir.path())
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout("Have you tried turning it off and on?\n");
}

#[test]
fn test_ask_ancestor_project_config_resolves_fallback_file_beside_it() {
    let dir = tempdir().unwrap();
    write_defaults(dir.path(), "support.txt", &["Have you tried turning it off and on?"]);
    std::fs::write(
        dir.path().join(".responder.toml"),
        "[fallback]\nfile = \"support.txt\"\n",
    )
    .unwrap();
    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub).unwrap();

    responder_cmd_in(dir.path())
        .current_dir(&sub)
        .args(["ask", "hello"])
        .assert()
        .success()
        .stdout("Have you tried turning it off and on?\n")
        .stderr(predicate::str::contains("Unable to open").not());
}

#[test]
fn test_ask_same_seed_same_reply() {
    let dir = tempdir().unwrap();
    write_defaults(dir.path(), "default.txt", &["one", "two", "three", "four", "five"]);

    let first = responder_cmd_in(dir.path())
        .args(["ask", "--seed", "99", "zzz"])
        .output()
        .unwrap();
    let second = responder_cmd_in(dir.path())
        .args(["ask", "--seed", "99", "zzz"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
