//! Logging setup
//!
//! The terminal belongs to the UI, so logs go to a file under the local data
//! directory when one can be opened, and to stderr otherwise.

use crate::config::project_dirs;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "municipal_tui=info";
const LOG_FILE_NAME: &str = "municipal-tui.log";

/// Install the global subscriber. Returns the log file path when logging to a file.
pub fn init() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match open_log_file() {
        Some((path, file)) => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
            Some(path)
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            None
        }
    }
}

fn log_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
}

fn open_log_file() -> Option<(PathBuf, File)> {
    let path = log_path()?;
    fs::create_dir_all(path.parent()?).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    Some((path, file))
}
