//! End-to-end tests for the `smlfront` driver binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn smlfront_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_smlfront"))
}

#[test]
fn help_mentions_usage() {
    Command::new(smlfront_bin())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_succeeds() {
    Command::new(smlfront_bin()).arg("--version").assert().success();
}

#[test]
fn missing_file_is_an_error() {
    Command::new(smlfront_bin())
        .arg(fixtures_dir().join("does_not_exist.sml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn parses_a_simple_binding() {
    Command::new(smlfront_bin())
        .arg(fixtures_dir().join("hello.sml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("parsed"));
}

#[test]
fn parses_infix_and_application() {
    Command::new(smlfront_bin())
        .arg(fixtures_dir().join("arithmetic.sml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("parsed"));
}

#[test]
fn reports_a_parse_error() {
    Command::new(smlfront_bin())
        .arg(fixtures_dir().join("bad.sml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("PARSE ERROR"));
}

#[test]
fn emit_tokens_stops_before_parsing() {
    Command::new(smlfront_bin())
        .arg("--emit-tokens")
        .arg(fixtures_dir().join("hello.sml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("greeting"));
}

#[test]
fn emit_comments_prints_only_comment_text() {
    Command::new(smlfront_bin())
        .arg("--emit-comments")
        .arg(fixtures_dir().join("arithmetic.sml"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn mlb_mode_tokenizes_a_build_description() {
    Command::new(smlfront_bin())
        .arg("--mlb")
        .arg(fixtures_dir().join("sources.mlb"))
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.sml"));
}

#[test]
fn verbose_mode_still_succeeds() {
    Command::new(smlfront_bin())
        .arg("--verbose")
        .arg(fixtures_dir().join("hello.sml"))
        .assert()
        .success();
}
