//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to a size-rotated file in
//! the log directory, optionally mirrors to stderr, and keeps the most
//! recent lines in a circular buffer. The buffer starts out holding the
//! tail of the existing log file, so it also covers earlier runs. Records
//! emitted through the `log` facade are bridged into the same subscriber.

mod recent;
mod rolling_file;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

pub use recent::RecentLines;
pub use rolling_file::RollingFile;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("logger already initialized")]
    AlreadyInitialized,
}

/// Tuning for [`init_logger`] and [`init_stderr`]
#[derive(Debug, Clone)]
pub struct LoggerOptions {
    /// `EnvFilter` directive, e.g. "info" or "tent_checklist_lib=debug"
    pub filter: String,
    /// Mirror events to stderr
    pub stderr: bool,
    pub max_bytes: u64,
    pub max_files: usize,
    /// Lines kept for [`recent_lines`]
    pub buffer_lines: usize,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            stderr: false,
            max_bytes: 1024 * 1024,
            max_files: 3,
            buffer_lines: 200,
        }
    }
}

struct Installed {
    log_file: Option<PathBuf>,
    recent: RecentLines,
}

static INSTALLED: OnceLock<Installed> = OnceLock::new();

#[derive(Clone)]
enum Sink {
    File(Arc<Mutex<RollingFile>>),
    Stderr,
}

/// Writer that also records each formatted event in the ring buffer
#[derive(Clone)]
struct TeeWriter {
    sink: Sink,
    recent: RecentLines,
}

impl TeeWriter {
    fn file(file: RollingFile, recent: RecentLines) -> Self {
        Self {
            sink: Sink::File(Arc::new(Mutex::new(file))),
            recent,
        }
    }

    fn stderr(recent: RecentLines) -> Self {
        Self {
            sink: Sink::Stderr,
            recent,
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.recent.push_bytes(buf);
        match &self.sink {
            Sink::File(file) => file
                .lock()
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?
                .write(buf),
            Sink::Stderr => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.sink {
            Sink::File(file) => match file.lock() {
                Ok(mut file) => file.flush(),
                Err(_) => Ok(()),
            },
            Sink::Stderr => io::stderr().flush(),
        }
    }
}

/// Ring buffer primed with the tail of earlier runs' log output
fn seed_recent(file: &RollingFile, capacity: usize) -> RecentLines {
    let recent = RecentLines::new(capacity);
    match file.tail(capacity) {
        Ok(lines) => lines.iter().for_each(|line| recent.push(line)),
        Err(e) => eprintln!("Could not read previous log lines: {}", e),
    }
    recent
}

fn parse_filter(filter: &str) -> Result<EnvFilter, LoggerError> {
    EnvFilter::try_new(filter).map_err(|e| LoggerError::Filter(e.to_string()))
}

fn install(log_file: Option<PathBuf>, recent: RecentLines) -> Result<(), LoggerError> {
    INSTALLED
        .set(Installed { log_file, recent })
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Initialize logging into `log_dir/<app_name>.log`
pub fn init_logger(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    options: LoggerOptions,
) -> Result<(), LoggerError> {
    if INSTALLED.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let file = RollingFile::open(
        log_dir.as_ref(),
        app_name,
        options.max_bytes,
        options.max_files,
    )?;
    let log_file = file.path().to_path_buf();
    let recent = seed_recent(&file, options.buffer_lines);
    let writer = TeeWriter::file(file, recent.clone());

    let filter = parse_filter(&options.filter)?;
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone());
    let stderr_layer = options.stderr.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    install(Some(log_file.clone()), recent)?;

    tracing::info!(
        "=== {} started {} ===",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    );
    log::debug!("Writing logs to {}", log_file.display());
    Ok(())
}

/// Initialize stderr-only logging for runs that must not touch disk
pub fn init_stderr(options: LoggerOptions) -> Result<(), LoggerError> {
    if INSTALLED.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let recent = RecentLines::new(options.buffer_lines);
    let writer = TeeWriter::stderr(recent.clone());
    let filter = parse_filter(&options.filter)?;
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(move || writer.clone());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    install(None, recent)
}

/// Path of the live log file, when logging to disk
pub fn log_file() -> Option<PathBuf> {
    INSTALLED.get().and_then(|i| i.log_file.clone())
}

/// Most recent formatted lines, oldest first
pub fn recent_lines() -> Vec<String> {
    INSTALLED
        .get()
        .map(|i| i.recent.snapshot())
        .unwrap_or_default()
}
