use chrono::Local;
use log::{info, warn};
use simplelog::*;
use std::fs::{self, File};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("loglevel must be debug, info, warn or error, got '{0}'")]
    UnknownLevel(String),
    #[error("cannot create log file: {0}")]
    Io(#[from] std::io::Error),
}

/// maps the level names used in the configuration file onto simplelog filters
pub fn level_filter(loglevel: Option<&str>) -> Result<LevelFilter, LoggerError> {
    let Some(level) = loglevel else {
        return Ok(LevelFilter::Info);
    };
    match level.trim().to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        _ => Err(LoggerError::UnknownLevel(level.to_string())),
    }
}

/// name of the log file for a run started now
pub fn log_file_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Terminal logger, plus a `log_<date>_<time>.txt` file logger when `log_to_file` is set.
/// A logger installed earlier (tests, embedding) is kept and this call becomes a no-op.
pub fn init_logger(loglevel: Option<&str>, log_to_file: bool) -> Result<(), LoggerError> {
    init_logger_in(Path::new("."), loglevel, log_to_file)
}

/// same as [`init_logger`] with the log file placed in `log_dir`
pub fn init_logger_in(log_dir: &Path, loglevel: Option<&str>, log_to_file: bool) -> Result<(), LoggerError> {
    let log_option = level_filter(loglevel)?;
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    let log_path = if log_to_file {
        let path = log_dir.join(log_file_name());
        loggers.push(WriteLogger::new(log_option, Config::default(), File::create(&path)?));
        Some(path)
    } else {
        None
    };

    match CombinedLogger::init(loggers) {
        Ok(()) => {
            info!("Program started with loglevel: {}", log_option);
            if let Some(path) = log_path {
                info!("log is also written to {}", path.display());
            }
        }
        Err(_) => {
            // the file logger was dropped unused, its file must not stay behind
            if let Some(path) = log_path {
                fs::remove_file(&path)?;
            }
            warn!("a logger is already installed, keeping it");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(None).unwrap(), LevelFilter::Info);
        assert_eq!(level_filter(Some("debug")).unwrap(), LevelFilter::Debug);
        assert_eq!(level_filter(Some(" WARN ")).unwrap(), LevelFilter::Warn);
        assert_eq!(level_filter(Some("error")).unwrap(), LevelFilter::Error);
        assert!(matches!(
            level_filter(Some("loud")),
            Err(LoggerError::UnknownLevel(_))
        ));
    }

    #[test]
    fn test_log_file_name() {
        let name = log_file_name();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_no_empty_log_file_when_logger_exists() {
        let _ = init_logger(Some("info"), false);
        let dir = tempfile::tempdir().unwrap();
        assert!(init_logger_in(dir.path(), Some("info"), true).is_ok());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_second_init_is_tolerated() {
        assert!(init_logger(Some("info"), false).is_ok());
        assert!(init_logger(Some("info"), false).is_ok());
    }
}
