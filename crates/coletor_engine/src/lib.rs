//! Coletor engine: file IO behind the session effects.
mod decode;
mod export;
mod filename;
mod persist;
mod upload;

pub use decode::{normalize_to_utf8, DecodeError};
pub use export::{write_export, ExportSummary, WriteExportError};
pub use filename::{default_export_filename, resolve_export_filename, EXPORT_PREFIX};
pub use persist::{write_atomic, PersistError};
pub use upload::{
    read_upload, UploadError, UploadLimits, UploadedFile, DEFAULT_MAX_UPLOAD_BYTES,
};
