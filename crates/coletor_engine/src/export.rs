use std::path::{Path, PathBuf};

use coletor_logging::{coletor_error, coletor_info};

use crate::persist::{write_atomic, PersistError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub byte_len: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum WriteExportError {
    #[error("'{0}' is not a plain file name")]
    InvalidFilename(String),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Save an exported document as `{output_dir}/{filename}`, replacing any previous file.
pub fn write_export(
    output_dir: &Path,
    filename: &str,
    contents: &str,
) -> Result<ExportSummary, WriteExportError> {
    if !is_plain_file_name(filename) {
        return Err(WriteExportError::InvalidFilename(filename.to_string()));
    }

    let path = write_atomic(output_dir, filename, contents.as_bytes()).map_err(|err| {
        coletor_error!("failed to write export {:?}: {}", output_dir.join(filename), err);
        err
    })?;

    coletor_info!("export written to {:?} ({} bytes)", path, contents.len());
    Ok(ExportSummary {
        path,
        byte_len: contents.len() as u64,
    })
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
}
