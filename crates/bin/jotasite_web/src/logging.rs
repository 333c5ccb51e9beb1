//! `tracing` subscriber that writes to the browser console.
//!
//! Each event is formatted by `tracing-subscriber`'s `fmt` layer into a
//! [`ConsoleWriter`], which hands the finished line to the `console` method
//! matching the event level when it is dropped.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wasm_bindgen::JsValue;

/// Errors raised while installing the subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("a global subscriber is already installed")]
    AlreadyInstalled(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the console subscriber with the given filter directive.
///
/// # Errors
///
/// Returns [`LoggingError`] if `filter` does not parse or a subscriber is
/// already installed.
pub fn init(filter: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(ConsoleMakeWriter)
                .with_ansi(false)
                .without_time()
                .with_target(false),
        )
        .try_init()?;
    Ok(())
}

/// Creates one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = self.line();
        if line.is_empty() {
            return;
        }
        let line = JsValue::from_str(&line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn should_trim_trailing_newline_from_buffered_line() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b"carousel mounted\n").unwrap();
        assert_eq!(writer.line(), "carousel mounted");
        writer.buffer.clear();
    }

    #[test]
    fn should_default_to_info_level_without_metadata() {
        let writer = ConsoleMakeWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }

    #[test]
    fn should_reject_malformed_filter() {
        assert!(matches!(
            init("jotasite=loud"),
            Err(LoggingError::Filter(_))
        ));
    }
}
