mod domain;
mod engine;
mod error;
mod input;
mod output;
mod telemetry;

use std::path::PathBuf;

use tracing::info;

pub use domain::SemanticModel;
pub use error::Error;
pub use input::{GenerationConfig, load_test_code_format};
pub use output::{TEST_CODE_FILE_NAME, TestCodeFormat};
pub use telemetry::setup_logging;

use crate::{
    domain::IdGenerator,
    engine::TreeBuilder,
    output::{DirectorySink, prepare_target_directory, write_text},
};

/// Summary of a generated fixture tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Directory the files were written to. Differs from the requested one if that was occupied.
    pub directory: PathBuf,
    /// Identifier of the root item
    pub root_id: String,
    /// Number of tree nodes, each backed by a batch file and a main item file
    pub nodes: usize,
    /// All fixture files in write order
    pub files: Vec<PathBuf>,
    pub test_code_file: PathBuf,
    pub declarations: Vec<String>,
    pub calls: Vec<String>,
}

/// Generates a tree of singleLevel fixture files for the configured semantic model.
///
/// This is the single public entry point of the crate. Starting from a freshly generated root identifier,
/// every node of the tree is written as a pair of JSON files (a batch record and a main item); every main
/// item above the configured depth gets `relationships` children, each of which becomes a node one level
/// further down. Once the tree is complete, a `test_code.txt` snippet referencing the files is written.
///
/// # Error handling
///
/// Input validation happens while building the [`GenerationConfig`]. Filesystem failures abort the run and
/// leave a partially populated directory behind. [`Error::is_internal`] identifies logic faults of the
/// generator itself.
///
/// # Example
///
/// ```no_run
/// use fixture_forge::{GenerationConfig, generate};
///
/// let config = GenerationConfig::new("bom-as-built-3.0.0", 2, 3)
///     .unwrap()
///     .with_target("bom-fixtures");
/// let report = generate(&config).unwrap();
/// println!("{} nodes written to {}", report.nodes, report.directory.display());
/// ```
pub fn generate(config: &GenerationConfig) -> Result<GenerationReport, Error> {
    let template = config.model.template();
    let requested = config
        .target
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}-test-data", template.full_name())));
    let directory = prepare_target_directory(&requested, config.replace)?;

    let max_depth = config.max_depth.get();
    let builder = TreeBuilder::new(
        &template,
        config.relationships.get(),
        max_depth,
        &config.test_code_format,
    );
    let mut sink = DirectorySink::new(directory.clone());
    let summary = builder.build(&mut sink, IdGenerator::new(config.seed))?;

    let test_code_file = directory.join(TEST_CODE_FILE_NAME);
    let test_code = config
        .test_code_format
        .render(&summary.declarations, &summary.calls, max_depth);
    write_text(&test_code_file, &test_code)?;

    info!(
        directory = %directory.display(),
        model = %config.model,
        nodes = summary.nodes,
        "successfully saved generated test data set"
    );

    Ok(GenerationReport {
        directory,
        root_id: summary.root_id,
        nodes: summary.nodes,
        files: sink.into_written(),
        test_code_file,
        declarations: summary.declarations,
        calls: summary.calls,
    })
}
