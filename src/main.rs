#![allow(non_snake_case)]
use RustedFxFinder::Utils::config::{AppConfig, CONFIG_FILE};
use RustedFxFinder::Utils::logger::init_logger;
use RustedFxFinder::gui::{self, AppError};
use log::error;
use std::path::Path;

fn main() -> Result<(), AppError> {
    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE))?;
    init_logger(config.loglevel.as_deref(), config.log_to_file)?;
    gui::run(&config).inspect_err(|e| error!("{}", e))
}
