use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use coletor_engine::{UploadLimits, DEFAULT_MAX_UPLOAD_BYTES};
use serde::{Deserialize, Serialize};

use super::cli::Cli;
use super::logging::{LogDestination, LogLevel};

pub const DEFAULT_CONFIG_FILE: &str = "coletor.ron";

/// Host settings: defaults, then the RON file, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: PathBuf,
    pub max_upload_bytes: u64,
    pub log_destination: LogDestination,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            log_destination: LogDestination::File,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Reads `path`, or `./coletor.ron` when no path is given.
    ///
    /// Only the implicit default file may be absent.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        match fs::read_to_string(&path) {
            Ok(text) => ron::from_str(&text)
                .with_context(|| format!("malformed config file {}", path.display())),
            Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => Ok(Self::default()),
            Err(err) => {
                Err(err).with_context(|| format!("cannot read config file {}", path.display()))
            }
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.output_dir {
            self.output_dir = dir.clone();
        }
        if let Some(bytes) = cli.max_upload_bytes {
            self.max_upload_bytes = bytes;
        }
        if let Some(destination) = cli.log {
            self.log_destination = destination;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
    }

    pub fn upload_limits(&self) -> UploadLimits {
        UploadLimits {
            max_bytes: self.max_upload_bytes,
        }
    }
}
