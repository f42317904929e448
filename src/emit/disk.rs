use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::EmitError;
use crate::types::GeneratedFile;

/// What `prepare_output_dir` had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDir {
    Created,
    Replaced,
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> EmitError + '_ {
    move |source| EmitError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Make sure `dir` exists and is empty. An existing directory is removed
/// only when `overwrite` is set; otherwise nothing is touched.
pub fn prepare_output_dir(dir: &Path, overwrite: bool) -> Result<OutputDir, EmitError> {
    let outcome = if dir.exists() {
        if !overwrite {
            return Err(EmitError::OutputExists(dir.to_path_buf()));
        }
        info!(dir = %dir.display(), "removing existing output directory");
        fs::remove_dir_all(dir).map_err(io_error(dir))?;
        OutputDir::Replaced
    } else {
        OutputDir::Created
    };

    fs::create_dir_all(dir).map_err(io_error(dir))?;
    Ok(outcome)
}

fn target_path(dir: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|part| !part.is_empty())
        .fold(dir.to_path_buf(), |path, part| path.join(part))
}

/// Write every file below `dir`, creating parent directories as needed.
/// Returns the number of files written; stops at the first failure.
pub fn write_files(dir: &Path, files: &[GeneratedFile]) -> Result<usize, EmitError> {
    for file in files {
        let path = target_path(dir, &file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        fs::write(&path, &file.content).map_err(io_error(&path))?;
        debug!(path = %file.path, bytes = file.content.len(), "wrote file");
    }

    info!(dir = %dir.display(), count = files.len(), "scaffold written");
    Ok(files.len())
}
