// Logging setup and conditional logging macros.
// The macros are only active in debug builds.

use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

const DEFAULT_FILTER: &str = "warn";

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

/// Where log output goes while the full-screen UI owns the terminal.
#[must_use]
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("hangman").join("hangman.log"))
}

fn open_log_file() -> io::Result<File> {
    let path = log_file_path()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no cache directory"))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Initialize `env_logger`, honouring `RUST_LOG`.
///
/// With `to_file` set, records go to [`log_file_path`] so they don't draw
/// over the TUI; if that file can't be opened logging is left off.
pub fn init(to_file: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    if to_file {
        match open_log_file() {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(_) => return,
        }
    }
    // A logger may already be installed (tests, embedding).
    let _ = builder.try_init();
}
