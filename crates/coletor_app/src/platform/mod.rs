pub mod app;
pub mod cli;
pub mod config;
pub mod effects;
pub mod logging;
pub mod ui;

use std::io;

use chrono::{Local, NaiveDate};
use coletor_logging::coletor_info;

use self::app::App;
use self::cli::Cli;
use self::config::AppConfig;
use self::effects::EffectRunner;
use self::ui::prompt::RustylinePrompter;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    logging::initialize(config.log_destination, config.log_level);
    coletor_info!(
        "starting coletor output_dir={:?} max_upload_bytes={}",
        config.output_dir,
        config.max_upload_bytes
    );

    let mut app = App::new(
        RustylinePrompter::new()?,
        io::stdout(),
        EffectRunner::new(config.output_dir.clone()),
        config.upload_limits(),
        local_today,
    );
    if let Some(input) = &cli.input {
        app.load_file(input)?;
    }
    app.run()
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
