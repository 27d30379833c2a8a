use std::fs;
use std::io;
use std::path::Path;

use coletor_logging::{coletor_info, coletor_warn};

use crate::decode::{normalize_to_utf8, DecodeError};

pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_bytes: u64,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// A file picked by the user, ready for the session loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name without directories, as shown to the user.
    pub filename: String,
    /// Contents, transcoded to UTF-8 when a BOM said otherwise.
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("{0} is not a regular file")]
    NotAFile(String),
    #[error("file too large (max {max_bytes} bytes, actual {actual})")]
    TooLarge { max_bytes: u64, actual: u64 },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub fn read_upload(path: &Path, limits: UploadLimits) -> Result<UploadedFile, UploadError> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(UploadError::NotAFile(path.display().to_string()));
    }
    if meta.len() > limits.max_bytes {
        coletor_warn!(
            "upload {:?} refused: {} bytes exceeds {}",
            path,
            meta.len(),
            limits.max_bytes
        );
        return Err(UploadError::TooLarge {
            max_bytes: limits.max_bytes,
            actual: meta.len(),
        });
    }

    let raw = fs::read(path)?;
    let bytes = normalize_to_utf8(&raw)?.into_owned();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    coletor_info!("read upload {:?} ({} bytes)", path, raw.len());
    Ok(UploadedFile { filename, bytes })
}
