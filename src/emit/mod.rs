mod archive;
mod disk;

pub use archive::build_zip;
pub use disk::{prepare_output_dir, write_files, OutputDir};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("output directory already exists: {}", .0.display())]
    OutputExists(PathBuf),
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build zip archive")]
    Zip(#[from] zip::result::ZipError),
}
