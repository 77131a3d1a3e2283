// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;

const APP_DIR: &str = "wordle-game";
const LOG_FILE: &str = "wordle-game.log";

/// Map the number of `-v` flags to a level. `RUST_LOG` still wins when set.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Where file logging goes; `None` if the platform has no local data directory.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Install the global logger.
///
/// With `to_file` set (the TUI owns the terminal) records go to [`log_file_path`], otherwise to
/// stderr. Returns the file path when one is in use.
///
/// # Errors
///
/// Returns an I/O error if the log file or its directory cannot be created.
pub fn init(verbosity: u8, to_file: bool) -> io::Result<Option<PathBuf>> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level_for(verbosity).as_str()));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{:<5}] {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = match (to_file, log_file_path()) {
        (true, Some(path)) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = File::options().create(true).append(true).open(&path)?;
            builder.target(Target::Pipe(Box::new(file)));
            Some(path)
        }
        _ => {
            builder.target(Target::Stderr);
            None
        }
    };

    // A logger may already be installed (tests, embedding); keep the existing one.
    let _ = builder.try_init();
    Ok(path)
}
