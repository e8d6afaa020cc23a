//! Module for everything that leaves the generator: fixture files, the target directory and the test code snippet.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use crate::{
    Error,
    error::{io_error, json_error},
};

mod directory;
mod test_code;

pub(crate) use directory::prepare_target_directory;
pub use test_code::TestCodeFormat;


/// Name of the rendered test code snippet inside the target directory
pub const TEST_CODE_FILE_NAME: &str = "test_code.txt";

/// Destination of the generated fixture items.
pub(crate) trait FixtureSink {
    /// Name of the directory the fixtures end up in, as referenced from the test code
    fn directory_label(&self) -> &str;

    fn write_json(&mut self, file_name: &str, item: &Value) -> Result<(), Error>;
}

/// Writes every item as a pretty-printed JSON file into a directory.
#[derive(Debug)]
pub(crate) struct DirectorySink {
    directory: PathBuf,
    label: String,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub(crate) fn new(directory: PathBuf) -> Self {
        let label = directory
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| directory.to_string_lossy().into_owned());
        Self {
            directory,
            label,
            written: Vec::new(),
        }
    }

    pub(crate) fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl FixtureSink for DirectorySink {
    fn directory_label(&self) -> &str {
        &self.label
    }

    fn write_json(&mut self, file_name: &str, item: &Value) -> Result<(), Error> {
        let path = self.directory.join(file_name);
        write_pretty_json(&path, item)?;
        debug!(path = %path.display(), "wrote fixture");
        self.written.push(path);
        Ok(())
    }
}

fn write_pretty_json(path: &Path, item: &Value) -> Result<(), Error> {
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, item).map_err(|e| json_error(path, e))?;
    writer.flush().map_err(|e| io_error(path, e))
}

pub(crate) fn write_text(path: &Path, content: &str) -> Result<(), Error> {
    std::fs::write(path, content).map_err(|e| io_error(path, e))
}
