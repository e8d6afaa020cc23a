//! Module deciding which directory a fixture tree is written to.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;
use uuid::Uuid;

use crate::{Error, error::io_error};

/// Makes sure `requested` can receive a fresh fixture tree and returns the directory to use.
///
/// - a missing directory is created
/// - an empty directory is used as is
/// - a non-empty directory is removed and recreated when `replace` is set; otherwise a sibling directory
///   with a short random suffix is created and the original stays untouched
pub(crate) fn prepare_target_directory(requested: &Path, replace: bool) -> Result<PathBuf, Error> {
    if !requested.exists() {
        info!(directory = %requested.display(), "creating new target directory");
        fs::create_dir_all(requested).map_err(|e| io_error(requested, e))?;
        return Ok(requested.to_path_buf());
    }

    if is_empty_dir(requested)? {
        return Ok(requested.to_path_buf());
    }

    if replace {
        info!(directory = %requested.display(), "target directory exists and is not empty, replacing it");
        fs::remove_dir_all(requested).map_err(|e| io_error(requested, e))?;
        fs::create_dir(requested).map_err(|e| io_error(requested, e))?;
        return Ok(requested.to_path_buf());
    }

    let alternative = with_random_suffix(requested);
    info!(
        requested = %requested.display(),
        directory = %alternative.display(),
        "target directory exists and is not empty, creating new target directory"
    );
    fs::create_dir(&alternative).map_err(|e| io_error(&alternative, e))?;
    Ok(alternative)
}

fn is_empty_dir(path: &Path) -> Result<bool, Error> {
    let mut entries = fs::read_dir(path).map_err(|e| io_error(path, e))?;
    Ok(entries.next().is_none())
}

/// Sibling of `path` named `<dir name>-<8 random hex chars>`. Trailing separators of `path` are ignored.
fn with_random_suffix(path: &Path) -> PathBuf {
    let uuid = Uuid::new_v4().simple().to_string();
    let mut name = path.file_name().unwrap_or(path.as_os_str()).to_os_string();
    name.push("-");
    name.push(&uuid[..8]);
    match path.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
