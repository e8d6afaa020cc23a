//! Module defining the validation logic used to convert the user-provided input into a configuration the
//! generator can run with.

use std::{
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use crate::{
    Error,
    domain::SemanticModel,
    error::{io_error, json_error},
    output::TestCodeFormat,
};


/// Validated configuration of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub model: SemanticModel,
    /// Number of relationships of every non-leaf item
    pub relationships: NonZeroUsize,
    /// Number of relationship levels below the root
    pub max_depth: NonZeroUsize,
    /// Target directory, `None` for the model's default
    pub target: Option<PathBuf>,
    /// Replace a non-empty target directory instead of picking a new name
    pub replace: bool,
    /// Seed for reproducible identifiers
    pub seed: Option<u64>,
    pub test_code_format: TestCodeFormat,
}

impl GenerationConfig {
    pub fn new(model: &str, relationships: u64, max_depth: u64) -> Result<Self, Error> {
        Ok(Self {
            model: model.parse()?,
            relationships: positive("relationships", relationships)?,
            max_depth: positive("depth", max_depth)?,
            target: None,
            replace: false,
            seed: None,
            test_code_format: TestCodeFormat::default(),
        })
    }

    pub fn with_target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_test_code_format(mut self, format: TestCodeFormat) -> Self {
        self.test_code_format = format;
        self
    }
}

/// Loads test code naming conventions from a JSON file. Fields missing from the file keep their default.
pub fn load_test_code_format(path: &Path) -> Result<TestCodeFormat, Error> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    serde_json::from_str(&content).map_err(|e| json_error(path, e))
}

fn positive(name: &'static str, value: u64) -> Result<NonZeroUsize, Error> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(Error::InvalidCount { name, value })
}
