use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {path:?} unusable: {reason}")]
    OutputDir { path: PathBuf, reason: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl PersistError {
    fn output_dir(path: &Path, reason: impl ToString) -> Self {
        Self::OutputDir {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Replaces `{dir}/{filename}` with `content`, creating `dir` if needed.
///
/// The bytes go to a temp file in `dir` that is renamed over the target, so a
/// previous export stays intact until the new one is complete.
pub fn write_atomic(dir: &Path, filename: &str, content: &[u8]) -> Result<PathBuf, PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if !meta.is_dir() => {
            return Err(PersistError::output_dir(dir, "not a directory"));
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            fs::create_dir_all(dir).map_err(|e| PersistError::output_dir(dir, e))?;
        }
        Err(err) => return Err(PersistError::output_dir(dir, err)),
    }

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| PersistError::output_dir(dir, e))?;
    tmp.write_all(content)?;
    tmp.as_file_mut().sync_all()?;

    let target = dir.join(filename);
    tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
    Ok(target)
}
