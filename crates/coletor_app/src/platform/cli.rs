use std::path::PathBuf;

use clap::Parser;
use super::logging::{LogDestination, LogLevel};

/// Coletor de vagas: fill in job listings, review them and export the collection as JSON.
#[derive(Parser, Debug, Default)]
#[command(name = "coletor", version, long_about = None)]
pub struct Cli {
    /// JSON file to load at startup (a top-level array of records)
    pub input: Option<PathBuf>,

    /// Config file (RON). Defaults to ./coletor.ron when present
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Directory downloads are written to
    #[arg(short = 'o', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Where log lines go
    #[arg(long = "log", value_enum)]
    pub log: Option<LogDestination>,

    /// Log level
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Largest file accepted by `carregar`, in bytes
    #[arg(long = "max-upload-bytes")]
    pub max_upload_bytes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "coletor",
            "vagas.json",
            "--output-dir",
            "out",
            "--log",
            "both",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("vagas.json")));
        assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
        assert_eq!(cli.log, Some(LogDestination::Both));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn rejects_unknown_log_destination() {
        assert!(Cli::try_parse_from(["coletor", "--log", "syslog"]).is_err());
    }
}
