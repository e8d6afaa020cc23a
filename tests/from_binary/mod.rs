//! Integration tests running the actual crate binary: the full E2E path including argument parsing.

use std::process::{Command, Output};

use rstest::rstest;
use tempfile::TempDir;

use crate::read_fixtures;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fixture-forge"))
        .current_dir(dir.path())
        .args(args)
        .output()
        .expect("failed to execute binary")
}

#[test]
fn default_directory_is_named_after_the_model() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &temp_dir,
        &["--model", "bom-as-built-3.0.0", "--relationships", "2", "--depth", "1"],
    );

    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let directory = temp_dir.path().join("singleLevelBomAsBuilt-3.0.0-test-data");
    assert_eq!(read_fixtures(&directory).len(), 6);
    assert!(directory.join("test_code.txt").is_file());
}

#[test]
fn explicit_target_and_seed() {
    let temp_dir = TempDir::new().unwrap();
    let args = [
        "--model",
        "usage-as-planned-1.1.0",
        "--relationships",
        "1",
        "--depth",
        "3",
        "--seed",
        "7",
    ];

    let first = run(&temp_dir, &[&args[..], &["--target", "a"][..]].concat());
    let second = run(&temp_dir, &[&args[..], &["--target", "b"][..]].concat());

    assert!(first.status.success() && second.status.success());
    let a = read_fixtures(&temp_dir.path().join("a"));
    assert_eq!(a.len(), 8);
    assert_eq!(a, read_fixtures(&temp_dir.path().join("b")));
}

#[test]
fn resource_prefix_is_applied() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &temp_dir,
        &[
            "--model",
            "bom-as-planned-2.0.0",
            "--relationships",
            "1",
            "--depth",
            "1",
            "--target",
            "out",
            "--resource-prefix",
            "fixtures/",
        ],
    );

    assert!(output.status.success());
    let snippet = std::fs::read_to_string(temp_dir.path().join("out").join("test_code.txt")).unwrap();
    assert!(snippet.contains("\"fixtures/out/batch_1_0.json\""));
}

#[test]
fn list_models_prints_the_registry() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["--list-models"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        [
            "bom-as-built-3.0.0",
            "bom-as-planned-2.0.0",
            "bom-as-planned-3.0.0",
            "bom-as-specified-2.0.0",
            "usage-as-built-3.0.0",
            "usage-as-planned-1.1.0",
        ]
    );
}

#[test]
fn unknown_model_is_rejected_by_the_parser() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &temp_dir,
        &["--model", "bom-as-guessed-1.0.0", "--relationships", "1", "--depth", "1"],
    );

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[rstest]
#[case("0", "1", "--relationships")]
#[case("-2", "1", "--relationships")]
#[case("2", "0", "--depth")]
#[case("2", "-1", "--depth")]
#[case("two", "1", "--relationships")]
fn non_positive_counts_are_rejected_by_the_parser(
    #[case] relationships: &str,
    #[case] depth: &str,
    #[case] rejected: &str,
) {
    let temp_dir = TempDir::new().unwrap();

    let output = run(
        &temp_dir,
        &[
            "--model",
            "bom-as-built-3.0.0",
            "--relationships",
            relationships,
            "--depth",
            depth,
        ],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains(rejected));
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn missing_arguments_are_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let output = run(&temp_dir, &["--model", "bom-as-built-3.0.0"]);

    assert_eq!(output.status.code(), Some(2));
}
