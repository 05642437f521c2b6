//! Process-wide file logging for the dog store.
//!
//! # Responsibility
//! - Start a rolling file logger at most once per process.
//! - Capture panics as sanitized log events.
//!
//! # Invariants
//! - Repeating `init_logging` with the same level and directory is a no-op.
//! - Switching level or directory after startup is rejected.
//! - Initialization never panics.
//! - Events carry ids, counts and durations only, never dog names or breeds.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info, LevelFilter};
use once_cell::sync::OnceCell;
use std::any::Any;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "dogstore";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogTarget {
    level: LevelFilter,
    dir: PathBuf,
}

struct ActiveLogger {
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// `level` is case-insensitive; `warning` is accepted as `warn`.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error.
/// - `log_dir` is empty, relative, or cannot be created.
/// - Logging is already active with a different level or directory.
/// - The flexi_logger backend fails to start.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogTarget {
        level: parse_level(level)?,
        dir: parse_log_dir(log_dir)?,
    };

    let active = ACTIVE.get_or_try_init(|| start_logger(&requested))?;
    ensure_same_target(&active.target, &requested)
}

/// Returns `(level, log_dir)` of the active logger, if any.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE
        .get()
        .map(|active| (level_name(active.target.level), active.target.dir.clone()))
}

/// Default level for the current build: `debug` in debug builds, `info`
/// otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(target: &LogTarget) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&target.dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            target.dir.display()
        )
    })?;

    let level = level_name(target.level);
    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(target.dir.as_path())
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
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_init module=core status=ok version={} level={level} log_dir={}",
        env!("CARGO_PKG_VERSION"),
        target.dir.display()
    );

    Ok(ActiveLogger {
        target: target.clone(),
        _handle: handle,
    })
}

fn ensure_same_target(active: &LogTarget, requested: &LogTarget) -> Result<(), String> {
    let (setting, current, wanted) = if active.dir != requested.dir {
        (
            "at",
            active.dir.display().to_string(),
            requested.dir.display().to_string(),
        )
    } else if active.level != requested.level {
        (
            "with level",
            level_name(active.level).to_string(),
            level_name(requested.level).to_string(),
        )
    } else {
        return Ok(());
    };

    Err(format!(
        "logging already initialized {setting} `{current}`; refusing to switch to `{wanted}`"
    ))
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    let trimmed = level.trim();
    let parsed = if trimmed.eq_ignore_ascii_case("warning") {
        Ok(LevelFilter::Warn)
    } else {
        trimmed.parse::<LevelFilter>()
    };

    match parsed {
        Ok(LevelFilter::Off) | Err(_) => Err(format!(
            "unsupported log level `{trimmed}`; expected trace|debug|info|warn|error"
        )),
        Ok(filter) => Ok(filter),
    }
}

fn level_name(level: LevelFilter) -> &'static str {
    match level {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    match log_dir.trim() {
        "" => Err("log_dir cannot be empty".to_string()),
        dir if Path::new(dir).is_absolute() => Ok(PathBuf::from(dir)),
        dir => Err(format!("log_dir must be an absolute path, got `{dir}`")),
    }
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info.location().map_or_else(
            || "unknown".to_string(),
            |loc| format!("{}:{}", loc.file(), loc.line()),
        );
        let payload = sanitize_message(
            &panic_payload_text(panic_info.payload()),
            MAX_PANIC_PAYLOAD_CHARS,
        );
        error!(
            "event=panic_captured module=core status=error location={location} payload={payload}"
        );
        previous_hook(panic_info);
    }));
}

fn panic_payload_text(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }
    payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// Flattens line breaks and caps `value` at `max_chars`, appending `...`
/// when anything was cut.
fn sanitize_message(value: &str, max_chars: usize) -> String {
    let mut chars = value
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r') { ' ' } else { ch });
    let mut sanitized: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        sanitized.push_str("...");
    }
    sanitized
}
