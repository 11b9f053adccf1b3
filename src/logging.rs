use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::{self, OpenOptions};
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::sync::Once;

static INIT: Once = Once::new();

fn log_directory() -> Result<PathBuf, Error> {
    let home = std::env::var("HOME")
        .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))?;

    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("midiscoprs")
        .join("logs"))
}

/// Initializes the global file logger. Safe to call more than once; only
/// the first call installs the logger.
pub fn init_logger() -> Result<(), Error> {
    let log_dir = log_directory()?;
    fs::create_dir_all(&log_dir)?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("app.log"))?;

    let mut result = Ok(());
    INIT.call_once(|| {
        result = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
            .map_err(|e| Error::new(ErrorKind::Other, e.to_string()));
    });
    result
}
