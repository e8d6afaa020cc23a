//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested semantic model is not part of the template registry
    #[error("unknown semantic model: {0}")]
    UnknownModel(String),

    /// A count provided by the user is not a positive integer
    #[error("invalid value for {name}: {value} (must be a positive integer)")]
    InvalidCount { name: &'static str, value: u64 },

    /// The suffix counter of a recursion depth was used before being initialized.
    /// This is a logic fault of the generator, never caused by user input.
    #[error("internal sequencing error: no suffix counter for depth {depth} ({operation})")]
    MissingSuffixCounter {
        depth: usize,
        operation: &'static str,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Whether the error stems from a generator logic fault rather than from the input or the environment
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::MissingSuffixCounter { .. })
    }
}

pub(crate) fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::Io {
        path: path.into(),
        source,
    }
}

pub(crate) fn json_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Error {
    Error::Json {
        path: path.into(),
        source,
    }
}

pub(crate) fn missing_suffix_counter(depth: usize, operation: &'static str) -> Error {
    Error::MissingSuffixCounter { depth, operation }
}
