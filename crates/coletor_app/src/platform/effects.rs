use std::path::{Path, PathBuf};

use coletor_core::{Effect, Msg};
use coletor_engine::{read_upload, write_export, UploadLimits};
use coletor_logging::{coletor_info, coletor_warn};

/// Executes core effects against the filesystem and reports back as messages.
pub struct EffectRunner {
    output_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        effects
            .into_iter()
            .map(|effect| match effect {
                Effect::WriteExport { filename, contents } => {
                    coletor_info!(
                        "WriteExport filename={} bytes={} dir={:?}",
                        filename,
                        contents.len(),
                        self.output_dir
                    );
                    match write_export(&self.output_dir, &filename, &contents) {
                        Ok(summary) => Msg::ExportFinished {
                            path: summary.path.display().to_string(),
                        },
                        Err(err) => {
                            coletor_warn!("export {} failed: {}", filename, err);
                            Msg::ExportFailed {
                                reason: err.to_string(),
                            }
                        }
                    }
                }
            })
            .collect()
    }
}

/// Reads a user-chosen file into the message the loader expects.
pub fn upload_msg(path: &Path, limits: UploadLimits) -> Msg {
    match read_upload(path, limits) {
        Ok(upload) => Msg::FileUploaded {
            filename: upload.filename,
            bytes: upload.bytes,
        },
        Err(err) => Msg::UploadFailed {
            filename: path.display().to_string(),
            reason: err.to_string(),
        },
    }
}
