//! Logging Setup
//!
//! Installs the process-wide tracing subscriber for the hosting binary.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Layer writing one JSON object per event to a file
pub type FileLayer<S> = tracing_subscriber::fmt::Layer<S, JsonFields, Format<Json>, Mutex<File>>;

/// Open `path` in append mode and build a JSON layer writing to it
///
/// # Errors
///
/// Returns the I/O error if the file cannot be opened or created.
pub fn file_layer<S>(path: &Path) -> io::Result<FileLayer<S>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_subscriber::fmt::layer()
        .json()
        .with_writer(Mutex::new(file)))
}

/// Install the global subscriber: env filter, stderr, and an optional log file
///
/// `RUST_LOG` takes precedence over `filter`.
///
/// # Errors
///
/// Returns the I/O error if the log file cannot be opened.
pub fn init(filter: &str, file: Option<&Path>) -> io::Result<()> {
    let file_layer = file.map(file_layer).transpose()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .init();

    Ok(())
}
