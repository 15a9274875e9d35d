use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log files larger than this are trimmed before a run appends to them (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Cut an oversized log file down to its most recent lines.
fn trim_log_if_needed(log_path: &Path) -> std::io::Result<()> {
    let Ok(metadata) = fs::metadata(log_path) else {
        return Ok(());
    };
    if metadata.len() <= MAX_LOG_SIZE {
        return Ok(());
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(metadata.len().saturating_sub(KEEP_SIZE)))?;
        file.read_to_end(&mut tail)?;
    }

    // Drop the partial first line
    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- log trimmed ---\n")?;
    file.write_all(&tail[skip..])?;
    Ok(())
}

/// Initialize the global tracing subscriber.
///
/// Events go to stderr, or are appended to `log_file` when one is given.
/// `RUST_LOG` overrides the default filter of
/// `lifeplan={level},lifeplan_core=warn`.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let writer = match log_file {
        Some(path) => {
            if let Err(e) = trim_log_if_needed(path) {
                eprintln!("Warning: failed to trim log file {}: {e}", path.display());
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("opening log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let default_filter = format!("lifeplan={level},lifeplan_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(log_file.is_none())
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .wrap_err("installing tracing subscriber")?;

    tracing::debug!(?log_file, "logging initialized");
    Ok(())
}
