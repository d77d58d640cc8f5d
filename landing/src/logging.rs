//! `tracing` output routed to the browser console.
//!
//! The fmt subscriber formats one event per writer; the writer buffers it and
//! hands the finished line to `console.*` on drop, picking the console method
//! from the event level. Timestamps are off because wasm32-unknown-unknown
//! has no system clock.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}

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

/// Buffers one formatted event.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline the formatter appends.
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
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
        let line = JsValue::from_str(&self.line());
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
    use super::*;
    use std::io::Write;

    #[test]
    fn line_drops_trailing_newline() {
        let mut writer = ConsoleWriter::new(Level::INFO);
        writer.write_all(b" INFO mounting landing page\n").unwrap();
        assert_eq!(writer.line(), " INFO mounting landing page");
        // empty the buffer so drop does not reach for the browser console
        writer.buf.clear();
    }

    #[test]
    fn writes_accumulate() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        write!(writer, "toast ").unwrap();
        write!(writer, "queued").unwrap();
        assert_eq!(writer.line(), "toast queued");
        writer.buf.clear();
    }
}
