//! Log output on stderr, filtered by `RUST_LOG` or the `-v` count.
//!
//! While the interactive tree owns the terminal, log lines would tear the
//! screen, so the writer can be muted for the duration of the session.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static MUTED: AtomicBool = AtomicBool::new(false);

/// Filter directive for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber; safe to call more than once
pub fn init(verbose: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));

    let fmt_layer = fmt::layer()
        .with_target(verbose >= 2)
        .without_time()
        .with_writer(log_writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Stop (or resume) writing log lines
pub fn set_muted(muted: bool) {
    MUTED.store(muted, Ordering::SeqCst);
}

fn log_writer() -> LogWriter {
    if MUTED.load(Ordering::SeqCst) {
        LogWriter::Sink
    } else {
        LogWriter::Stderr(io::stderr())
    }
}

enum LogWriter {
    Stderr(io::Stderr),
    Sink,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::Stderr(err) => err.write(buf),
            LogWriter::Sink => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::Stderr(err) => err.flush(),
            LogWriter::Sink => Ok(()),
        }
    }
}

/// Mutes logging until dropped
pub struct MuteGuard;

/// Mute logging for the lifetime of the returned guard
pub fn mute() -> MuteGuard {
    set_muted(true);
    MuteGuard
}

impl Drop for MuteGuard {
    fn drop(&mut self) {
        set_muted(false);
    }
}
