use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable that enables file logging.
pub const LOG_ENV_VAR: &str = "HACKER_STORIES_LOG";

/// Log file used when `HACKER_STORIES_LOG` is `1` or empty.
///
/// `~/.local/share/hacker-stories/logs/hacker-stories.log` on Linux, or the
/// platform equivalent via `dirs::data_dir()`.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir
        .join("hacker-stories")
        .join("logs")
        .join("hacker-stories.log")
}

/// Map the value of `HACKER_STORIES_LOG` to a base log path.
pub fn resolve_log_path(value: &str) -> PathBuf {
    match value.trim() {
        "" | "1" => default_log_path(),
        path => PathBuf::from(path),
    }
}

/// `{base}.{timestamp}.{pid}`, so parallel instances don't clobber each other.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default because the TUI owns the terminal.
/// Filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let Ok(value) = std::env::var(LOG_ENV_VAR) else {
        return;
    };

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let log_path = unique_log_path(&resolve_log_path(&value), timestamp, std::process::id());

    let file = match open_log_file(&log_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                log_path.display(),
                err
            );
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}
