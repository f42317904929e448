use std::io::{Cursor, Write};
use tracing::debug;
use zip::result::ZipError;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use super::EmitError;
use crate::types::GeneratedFile;

/// Pack the scaffold into an in-memory zip, one deflated entry per file,
/// keeping the generated directory structure.
pub fn build_zip(files: &[GeneratedFile]) -> Result<Vec<u8>, EmitError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for file in files {
        zip.start_file(file.path.as_str(), options)?;
        zip.write_all(file.content.as_bytes())
            .map_err(ZipError::from)?;
    }

    let bytes = zip.finish()?.into_inner();
    debug!(entries = files.len(), bytes = bytes.len(), "built zip archive");
    Ok(bytes)
}
