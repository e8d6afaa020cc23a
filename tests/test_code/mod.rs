//! Integration tests for the rendered test code snippet

use std::fs;

use fixture_forge::{GenerationConfig, TestCodeFormat, generate};
use tempfile::TempDir;

use crate::target_in;

#[test]
fn snippet_references_every_inner_node() {
    let temp_dir = TempDir::new().unwrap();
    let config = GenerationConfig::new("bom-as-built-3.0.0", 2, 2)
        .unwrap()
        .with_target(target_in(&temp_dir, "bom"));

    let report = generate(&config).unwrap();
    let snippet = fs::read_to_string(&report.test_code_file).unwrap();

    let mut sections = snippet.split("\n\n");
    let declarations = sections.next().unwrap();
    let calls = sections.next().unwrap();

    assert!(declarations.starts_with(
        "### Insert below code into IrsWireMockIntegrationTest.prepareBigTestDataSetAndReturnFirstGlobalAssetId()\n"
    ));
    assert!(declarations.contains(&format!(
        "final String globalAssetId10 = \"{}\";",
        report.root_id
    )));
    assert_eq!(declarations.lines().count(), 1 + 3);
    assert_eq!(calls.matches("successfulRegistryAndDataRequest(").count(), 3);
    assert!(calls.contains("\"integrationtesting/bom/batch_1_0.json\""));
    assert!(calls.contains("\"integrationtesting/bom/singleLevelBomAsBuilt-3.0.0_2_1.json\""));

    assert!(snippet.contains("\n\nreturn globalAssetId10;\n\n"));
    assert!(snippet.ends_with("request = WiremockSupport.jobRequest(globalAssetId10, TEST_BPN, 2);"));
    assert_eq!(report.declarations.len(), 3);
    assert_eq!(report.calls.len(), 3);
}

#[test]
fn snippet_follows_a_custom_format() {
    let temp_dir = TempDir::new().unwrap();
    let format = TestCodeFormat {
        variable_prefix: "assetId".to_string(),
        resource_prefix: "resources/".to_string(),
        ..TestCodeFormat::default()
    };
    let config = GenerationConfig::new("usage-as-built-3.0.0", 1, 1)
        .unwrap()
        .with_target(target_in(&temp_dir, "usage"))
        .with_test_code_format(format);

    let report = generate(&config).unwrap();
    let snippet = fs::read_to_string(&report.test_code_file).unwrap();

    assert!(snippet.contains("final String assetId10 = "));
    assert!(snippet.contains("\"resources/usage/batch_1_0.json\""));
    assert!(snippet.contains("return assetId10;"));
    assert!(!snippet.contains("globalAssetId"));
}
