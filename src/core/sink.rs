// This module provides the append-only text sink every template hook writes into. The sink
// owns the active buffer plus a small stack of saved buffers: capturing a slow path swaps a
// fresh buffer in, and ending the capture swaps the saved one back and hands the captured text
// to the caller. Restoration is strictly LIFO so the buffer that was active before a capture is
// always the one that becomes active again. The total depth is capped at two (the main stream
// and one capture) because slow-path bodies must not request further slow paths.

//! Swappable output buffer with scoped redirection.

use super::error::{GenError, GenResult};
use std::mem;

/// Maximum number of live buffers: the main stream plus one capture.
pub const MAX_SINK_DEPTH: usize = 2;

/// Append-only text buffer receiving all generated lines.
#[derive(Debug, Default)]
pub struct OutputSink {
    /// Buffer currently receiving writes.
    active: String,

    /// Buffers displaced by captures, innermost last.
    saved: Vec<String>,
}

impl OutputSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `line` followed by a single line terminator.
    pub fn write_line(&mut self, line: &str) {
        self.active.push_str(line);
        self.active.push('\n');
    }

    /// Append `text` verbatim.
    pub fn write_str(&mut self, text: &str) {
        self.active.push_str(text);
    }

    /// Swap `buffer` in as the active buffer and return the one it replaced.
    pub fn redirect_to(&mut self, buffer: String) -> String {
        mem::replace(&mut self.active, buffer)
    }

    /// Start capturing into a fresh buffer on behalf of `name`.
    pub fn begin_capture(&mut self, name: &str) -> GenResult<()> {
        let depth = self.depth() + 1;
        if depth > MAX_SINK_DEPTH {
            return Err(GenError::CaptureDepthExceeded {
                name: name.to_string(),
                depth,
                limit: MAX_SINK_DEPTH,
            });
        }

        let previous = self.redirect_to(String::new());
        self.saved.push(previous);
        Ok(())
    }

    /// Restore the buffer saved by the matching [`begin_capture`](Self::begin_capture)
    /// and return everything written since.
    pub fn end_capture(&mut self) -> GenResult<String> {
        let restored = self.saved.pop().ok_or(GenError::UnbalancedCapture)?;
        Ok(self.redirect_to(restored))
    }

    /// Contents of the active buffer.
    pub fn read_all(&self) -> &str {
        &self.active
    }

    /// Clear the active buffer without changing which buffer is active.
    pub fn truncate(&mut self) {
        self.active.clear();
    }

    /// Number of live buffers (1 when no capture is in progress).
    pub fn depth(&self) -> usize {
        self.saved.len() + 1
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Hand back the active buffer, consuming the sink.
    pub fn into_string(self) -> String {
        self.active
    }
}
