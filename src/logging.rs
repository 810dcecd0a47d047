//! Tracing setup
//!
//! Logs go to a file so the terminal UI is never drawn over.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "wordle_daily=info";

/// Initialize tracing, writing to `log_file`
///
/// The filter comes from `RUST_LOG`, defaulting to `wordle_daily=info`. When
/// the file cannot be opened, logs go to stderr if `stderr_fallback` is set
/// and are dropped otherwise.
pub fn init_tracing(log_file: &Path, stderr_fallback: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match open_log_file(log_file) {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        Err(err) if stderr_fallback => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
            tracing::warn!(path = %log_file.display(), %err, "log file unavailable, logging to stderr");
        }
        Err(_) => {}
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_creates_parents() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logs").join("game.log");

        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
