//! Logging setup.
//!
//! The checker logs through `tracing` macros.  [`init_logging`] installs a
//! `tracing-subscriber` formatter filtered by the configured level.  In the
//! browser there is no stdout, so on `wasm32` each formatted line is sent to
//! `console.log` instead, and timestamps are omitted because the system clock
//! is not available to `wasm32-unknown-unknown`.

use tracing_subscriber::EnvFilter;

/// Builds the filter for `level`, falling back to `info` when the directive
/// does not parse.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber.
///
/// Returns `false` if a subscriber was already installed (for example by the
/// host page or by an earlier checker instance); the existing one is kept.
pub fn init_logging(level: &str) -> bool {
    let filter = build_filter(level);

    #[cfg(target_arch = "wasm32")]
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(console::ConsoleWriter::default)
        .with_ansi(false)
        .without_time()
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let result = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    result.is_ok()
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    /// Buffers one formatted event and hands it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            if self.buf.is_empty() {
                return;
            }
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
