//! Integration tests for the handling of an already present target directory

use std::fs;

use fixture_forge::{GenerationConfig, generate};
use tempfile::TempDir;

use crate::{read_fixtures, target_in};

#[test]
fn occupied_directory_is_left_untouched() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let requested = target_in(&temp_dir, "fixtures");
    fs::create_dir(&requested).unwrap();
    fs::write(requested.join("handwritten.json"), "{\"keep\": true}").unwrap();

    let config = GenerationConfig::new("bom-as-built-3.0.0", 1, 1)
        .unwrap()
        .with_target(&requested);

    // Act
    let report = generate(&config).unwrap();

    // Assert
    assert_ne!(report.directory, requested);
    assert_eq!(report.directory.parent(), requested.parent());
    assert_eq!(read_fixtures(&report.directory).len(), 4);

    let untouched: Vec<_> = fs::read_dir(&requested).unwrap().collect();
    assert_eq!(untouched.len(), 1);
    assert_eq!(
        fs::read_to_string(requested.join("handwritten.json")).unwrap(),
        "{\"keep\": true}"
    );
}

#[test]
fn occupied_directory_is_replaced_on_request() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let requested = target_in(&temp_dir, "fixtures");
    fs::create_dir(&requested).unwrap();
    fs::write(requested.join("stale.json"), "{}").unwrap();

    let config = GenerationConfig::new("bom-as-built-3.0.0", 1, 1)
        .unwrap()
        .with_target(&requested)
        .with_replace(true);

    // Act
    let report = generate(&config).unwrap();

    // Assert
    assert_eq!(report.directory, requested);
    assert!(!requested.join("stale.json").exists());
    assert_eq!(read_fixtures(&requested).len(), 4);
}

#[test]
fn empty_directory_is_used_directly() {
    let temp_dir = TempDir::new().unwrap();
    let requested = target_in(&temp_dir, "fixtures");
    fs::create_dir(&requested).unwrap();

    let config = GenerationConfig::new("usage-as-built-3.0.0", 2, 1)
        .unwrap()
        .with_target(&requested);

    let report = generate(&config).unwrap();

    assert_eq!(report.directory, requested);
    assert_eq!(read_fixtures(&requested).len(), 6);
}

#[test]
fn occupied_directory_given_with_trailing_slash_gets_a_sibling() {
    // Arrange
    let temp_dir = TempDir::new().unwrap();
    let requested = target_in(&temp_dir, "fixtures");
    fs::create_dir(&requested).unwrap();
    fs::write(requested.join("keep.json"), "{}").unwrap();

    let mut with_slash = requested.clone().into_os_string();
    with_slash.push("/");
    let config = GenerationConfig::new("bom-as-built-3.0.0", 1, 1)
        .unwrap()
        .with_target(with_slash);

    // Act
    let report = generate(&config).unwrap();

    // Assert
    assert_eq!(report.directory.parent(), Some(temp_dir.path()));
    let name = report
        .directory
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert!(name.starts_with("fixtures-"), "{name}");

    let untouched: Vec<_> = fs::read_dir(&requested).unwrap().collect();
    assert_eq!(untouched.len(), 1);

    let snippet = fs::read_to_string(&report.test_code_file).unwrap();
    assert!(snippet.contains(&format!("\"integrationtesting/{name}/batch_1_0.json\"")));
}
