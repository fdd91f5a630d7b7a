//! Rolling file logging for the inventory core.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process.
//! - Capture panics into the log before the default hook runs.
//!
//! # Invariants
//! - Repeating `init_logging` with identical settings is a no-op.
//! - Any attempt to change level or directory after start is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "inventory";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 4 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const SUPPORTED_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Validated logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    level: &'static str,
    log_dir: PathBuf,
}

impl LogSettings {
    /// Parses a level (`trace|debug|info|warn|error`, case-insensitive) and
    /// an absolute log directory.
    pub fn parse(level: &str, log_dir: impl AsRef<Path>) -> Result<Self, LoggingError> {
        let lowered = level.trim().to_ascii_lowercase();
        let wanted = if lowered == "warning" {
            "warn"
        } else {
            lowered.as_str()
        };
        let level = SUPPORTED_LEVELS
            .iter()
            .copied()
            .find(|candidate| *candidate == wanted)
            .ok_or_else(|| LoggingError::UnsupportedLevel(lowered.clone()))?;

        let log_dir = log_dir.as_ref();
        if log_dir.as_os_str().is_empty() {
            return Err(LoggingError::EmptyDirectory);
        }
        if !log_dir.is_absolute() {
            return Err(LoggingError::RelativeDirectory(log_dir.to_path_buf()));
        }

        Ok(Self {
            level,
            log_dir: log_dir.to_path_buf(),
        })
    }

    pub fn level(&self) -> &'static str {
        self.level
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }
}

/// Logging bootstrap failures.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    EmptyDirectory,
    RelativeDirectory(PathBuf),
    CreateDirectory(PathBuf, std::io::Error),
    Backend(flexi_logger::FlexiLoggerError),
    /// Logging already runs with different settings.
    Conflict {
        active: LogSettings,
        requested: LogSettings,
    },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::EmptyDirectory => write!(f, "log directory cannot be empty"),
            Self::RelativeDirectory(path) => {
                write!(f, "log directory must be absolute, got `{}`", path.display())
            }
            Self::CreateDirectory(path, err) => write!(
                f,
                "failed to create log directory `{}`: {err}",
                path.display()
            ),
            Self::Backend(err) => write!(f, "failed to start logger: {err}"),
            Self::Conflict { active, requested } => write!(
                f,
                "logging already running at level `{}` in `{}`; refusing to switch to `{}` in `{}`",
                active.level,
                active.log_dir.display(),
                requested.level,
                requested.log_dir.display()
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDirectory(_, err) => Some(err),
            Self::Backend(err) => Some(err),
            _ => None,
        }
    }
}

struct ActiveLogger {
    settings: LogSettings,
    _handle: LoggerHandle,
}

/// Starts rolling file logging.
///
/// # Errors
/// - Invalid level or directory.
/// - Directory creation or backend start failure.
/// - Logging already running with different settings.
pub fn init_logging(level: &str, log_dir: impl AsRef<Path>) -> Result<(), LoggingError> {
    let requested = LogSettings::parse(level, log_dir)?;
    let active = ACTIVE.get_or_try_init(|| start_logger(&requested))?;

    if active.settings != requested {
        return Err(LoggingError::Conflict {
            active: active.settings.clone(),
            requested,
        });
    }
    Ok(())
}

/// Settings of the running logger, if any.
pub fn logging_status() -> Option<LogSettings> {
    ACTIVE.get().map(|active| active.settings.clone())
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(settings: &LogSettings) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&settings.log_dir)
        .map_err(|err| LoggingError::CreateDirectory(settings.log_dir.clone(), err))?;

    let handle = Logger::try_with_str(settings.level)
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(settings.log_dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(LoggingError::Backend)?;

    install_panic_hook();
    info!(
        "event=logging_start module=core status=ok level={} log_dir={} version={}",
        settings.level,
        settings.log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        settings: settings.clone(),
        _handle: handle,
    })
}

fn install_panic_hook() {
    PANIC_HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let location = panic_info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".to_string());
            // Payload may carry item names; single-line and capped.
            let payload = panic_info
                .payload()
                .downcast_ref::<&str>()
                .map(|message| (*message).to_string())
                .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            error!(
                "event=panic_captured module=core status=error location={} payload={}",
                location,
                single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
            );
            previous(panic_info);
        }));
    });
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    if flattened.chars().count() <= max_chars {
        return flattened;
    }
    let mut capped = flattened.chars().take(max_chars).collect::<String>();
    capped.push_str("...");
    capped
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, single_line, LogSettings, LoggingError};

    #[test]
    fn parse_normalizes_level_aliases() {
        let dir = std::env::temp_dir();
        assert_eq!(LogSettings::parse(" INFO ", &dir).unwrap().level(), "info");
        assert_eq!(LogSettings::parse("Warning", &dir).unwrap().level(), "warn");
    }

    #[test]
    fn parse_rejects_bad_input() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            LogSettings::parse("verbose", &dir),
            Err(LoggingError::UnsupportedLevel(_))
        ));
        assert!(matches!(
            LogSettings::parse("info", ""),
            Err(LoggingError::EmptyDirectory)
        ));
        assert!(matches!(
            LogSettings::parse("info", "logs/dev"),
            Err(LoggingError::RelativeDirectory(_))
        ));
    }

    #[test]
    fn single_line_flattens_and_caps() {
        assert_eq!(single_line("a\nb", 8), "a b");
        assert_eq!(single_line("line1\nline2", 4), "line...");
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        // The logger keeps writing for the rest of the process.
        let dir = tempfile::tempdir().unwrap().keep();
        let other = tempfile::tempdir().unwrap();

        init_logging("info", &dir).unwrap();
        init_logging("INFO", &dir).unwrap();

        let level_err = init_logging("debug", &dir).unwrap_err();
        assert!(matches!(level_err, LoggingError::Conflict { .. }));
        let dir_err = init_logging("info", other.path()).unwrap_err();
        assert!(dir_err.to_string().contains("refusing to switch"));

        let active = logging_status().unwrap();
        assert_eq!(active.level(), "info");
        assert_eq!(active.log_dir(), dir.as_path());
    }
}
