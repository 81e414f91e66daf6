//! Logging setup for the braid workspace: file output plus optional
//! stdout.
//!
//! Logs always go to a file at `warn` level (or higher if the
//! environment asks for it). Stdout logging is enabled when `BRAID_LOG`
//! or `RUST_LOG` is set, or in debug builds.
//!
//! ## Environment Variables
//!
//! 1. **`BRAID_LOG`** (highest priority) — workspace-specific control.
//!    A bare level (`BRAID_LOG=debug`) applies to the braid crates only;
//!    directive syntax (`BRAID_LOG=braid_rope=trace`) is passed through.
//! 2. **`RUST_LOG`** — the standard tracing variable, used as-is.
//! 3. **Default** — `warn` globally, `info` for braid crates.
//!
//! ## Log File Location
//!
//! Default: `<data_local_dir>/braid/logs/braid-<pid>.log`, overridable
//! through [`LogConfig`].

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

/// Crates covered by a bare-level `BRAID_LOG` value.
const WORKSPACE_CRATES: &[&str] = &["braid_rope", "braid_log", "braid_bin"];

/// Returned from [`init`]; must be held alive to ensure log file
/// flushing — dropping it stops the background file writer.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Initialize logging with a file layer and, when enabled, a stdout
/// layer.
///
/// Respects the priority described in the module docs: `BRAID_LOG` >
/// `RUST_LOG` > defaults. Fails if a subscriber is already installed.
pub fn init(config: LogConfig) -> Result<LogGuard, Box<dyn std::error::Error + Send + Sync>> {
    let (log_dir, filename) = resolve_log_path(config.log_file_path);

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(file_filter());

    let stdout_enabled =
        env::var("BRAID_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);

    let stdout_layer = if stdout_enabled {
        Some(fmt::layer().with_filter(env_filter()))
    } else {
        None
    };

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    let log_file = log_dir.join(filename);
    tracing::debug!(path = %log_file.display(), "logging initialized");

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file,
    })
}

/// Initialize stdout-only logging for tests.
///
/// Safe to call from every test: a second initialization is ignored
/// instead of panicking.
pub fn test() {
    let _ = fmt().with_env_filter(env_filter()).try_init();
}

/// Split an optional override into (directory, filename), falling back
/// to the pid-stamped default under the local data directory.
fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let default_name = format!("braid-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(default_name);
            return (dir, name);
        }
        return (path, default_name);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("braid")
        .join("logs");

    (dir, default_name)
}

/// File filter: the user-specified level when set, otherwise `warn`.
fn file_filter() -> EnvFilter {
    if env::var("BRAID_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
        return env_filter();
    }
    EnvFilter::new("warn")
}

/// Build the [`EnvFilter`] for the `BRAID_LOG` > `RUST_LOG` > defaults
/// priority chain.
fn env_filter() -> EnvFilter {
    if let Ok(braid_log) = env::var("BRAID_LOG") {
        return expand_braid_log(&braid_log);
    }

    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }

    EnvFilter::new(default_directives("info"))
}

/// Expand `BRAID_LOG` values into full filter strings.
///
/// A bare level (`BRAID_LOG=debug`) becomes `warn,braid_rope=debug,...`;
/// anything with directive syntax is used as-is.
fn expand_braid_log(braid_log: &str) -> EnvFilter {
    if braid_log.contains('=') || braid_log.contains(':') || braid_log.contains(',') {
        return EnvFilter::new(braid_log);
    }
    EnvFilter::new(default_directives(braid_log))
}

fn default_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for krate in WORKSPACE_CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}
