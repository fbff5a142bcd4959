//! Console event sink
//!
//! Writes each playback event as a text line or a JSON object, depending on
//! the configured output format.

use std::io::Write;

use mmp_common::config::OutputFormat;
use mmp_common::{EventSink, PlaybackEvent};
use tracing::debug;

/// Event sink writing to a console writer
pub struct ConsoleSink<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
    written: usize,
}

impl<'a, W: Write> ConsoleSink<'a, W> {
    pub fn new(out: &'a mut W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// Number of events written so far
    pub fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write> EventSink for ConsoleSink<'_, W> {
    fn emit(&mut self, event: PlaybackEvent) -> mmp_common::Result<()> {
        debug!(tag = event.tag(), "{}", event);
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", event)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *self.out, &event)?;
                writeln!(self.out)?;
            }
        }
        self.written += 1;
        Ok(())
    }
}
