// This module provides the Emitter, the per-run generation session every template hook writes
// through. It owns the output sink, the current-opcode context and the slow-path registry that
// would otherwise be process-wide state, and it borrows the template and configuration for the
// duration of the run. emit_opcode wraps a caller-supplied handler body with the separator,
// alignment, label and template frame hooks; request_slow_path runs a fallback body into a
// captured buffer, registers it under a name derived from the current opcode and returns that
// name so the handler can branch to it. A fresh Emitter is created for every run, so nothing
// leaks from one generated file into the next.

//! Generation session: handler frames and slow-path capture.

use super::context::{Opcode, OpcodeContext};
use super::error::{GenError, GenResult};
use super::sink::OutputSink;
use super::slow_path::SlowPathRegistry;
use super::stats::GenerationStats;
use super::template::Template;
use crate::config::GenConfig;

/// Comment line separating consecutive handlers.
pub const SECTION_SEPARATOR: &str = "/* ------------------------------ */";

/// State of one generation run.
pub struct Emitter<'t> {
    template: &'t dyn Template,
    config: &'t GenConfig,
    sink: OutputSink,
    context: OpcodeContext,
    slow_paths: SlowPathRegistry,
    /// Name of the slow path being captured, if any.
    capturing: Option<String>,
    stats: GenerationStats,
}

impl<'t> Emitter<'t> {
    /// Create an empty session for `template`.
    pub fn new(template: &'t dyn Template, config: &'t GenConfig) -> Self {
        Self {
            template,
            config,
            sink: OutputSink::new(),
            context: OpcodeContext::new(),
            slow_paths: SlowPathRegistry::new(),
            capturing: None,
            stats: GenerationStats::default(),
        }
    }

    /// Append `line` plus a line terminator to the active buffer.
    pub fn write_line(&mut self, line: &str) {
        self.sink.write_line(line);
    }

    /// Request handler-size alignment for whatever follows.
    pub fn emit_alignment(&mut self) {
        let directive = self.config.alignment_directive();
        self.sink.write_line(&directive);
    }

    /// Emit the handler for one opcode.
    ///
    /// Writes the separator, alignment and label, then runs the template's
    /// `frame_start` and `frame_pre_body` hooks, `body`, and `frame_end`,
    /// followed by a blank line. The opcode context is set for the whole
    /// frame and cleared afterwards, also when a hook fails.
    pub fn emit_opcode<F>(&mut self, code: u16, name: &str, body: F) -> GenResult<()>
    where
        F: FnOnce(&mut Self) -> GenResult<()>,
    {
        if let Some(slow_path) = &self.capturing {
            return Err(GenError::NestedOpcodeFrame {
                active: slow_path.clone(),
                requested: name.to_string(),
            });
        }

        let opcode = Opcode::new(code, name);
        self.context.enter(opcode.clone())?;
        log::debug!("Emitting handler {} ({})", opcode.name, opcode.hex_code());

        let result = self.emit_frame(&opcode, body);
        self.context.leave();

        if result.is_ok() {
            self.stats.opcodes_emitted += 1;
        }
        result
    }

    fn emit_frame<F>(&mut self, opcode: &Opcode, body: F) -> GenResult<()>
    where
        F: FnOnce(&mut Self) -> GenResult<()>,
    {
        let template = self.template;

        self.write_line(SECTION_SEPARATOR);
        self.emit_alignment();
        let label = format!(
            "{}{}: /* {} */",
            self.config.label_prefix,
            opcode.name,
            opcode.hex_code()
        );
        self.write_line(&label);

        template.frame_start(self, opcode)?;
        template.frame_pre_body(self, opcode)?;
        body(self)?;
        template.frame_end(self, opcode)?;

        self.write_line("");
        Ok(())
    }

    /// Generate (or reuse) a slow path named after the current opcode with
    /// the configured default suffix, returning the block name.
    pub fn request_slow_path<F>(&mut self, body: F) -> GenResult<String>
    where
        F: FnOnce(&mut Self) -> GenResult<()>,
    {
        let config = self.config;
        self.request_slow_path_with_suffix(&config.slow_path_suffix, body)
    }

    /// Like [`request_slow_path`](Self::request_slow_path) with an explicit suffix.
    ///
    /// The block is named `<opcode_name_prefix><opcode or "common"><suffix>`.
    /// Its text is captured away from the main stream; a repeated request for
    /// the same name must produce identical text.
    pub fn request_slow_path_with_suffix<F>(&mut self, suffix: &str, body: F) -> GenResult<String>
    where
        F: FnOnce(&mut Self) -> GenResult<()>,
    {
        let template = self.template;
        let name = format!(
            "{}{}{}",
            template.opcode_name_prefix(),
            self.context.slow_path_stem(),
            suffix
        );
        self.stats.slow_path_requests += 1;

        self.sink.begin_capture(&name)?;
        self.capturing = Some(name.clone());
        let written = self.capture_slow_path(&name, body);
        self.capturing = None;
        let text = self.sink.end_capture()?;
        written?;

        if self.slow_paths.register(&name, text)? {
            self.stats.slow_paths_registered += 1;
            log::debug!("Registered slow path {}", name);
        } else {
            self.stats.slow_path_reuses += 1;
            log::trace!("Reused slow path {}", name);
        }

        Ok(name)
    }

    fn capture_slow_path<F>(&mut self, name: &str, body: F) -> GenResult<()>
    where
        F: FnOnce(&mut Self) -> GenResult<()>,
    {
        let template = self.template;
        template.slow_path_start(self, name)?;
        body(self)?;
        template.slow_path_end(self, name)
    }

    /// Append every registered slow path, ordered by name.
    pub(crate) fn append_slow_paths(&mut self) {
        for (name, text) in self.slow_paths.iter() {
            log::trace!("Appending slow path {} ({} bytes)", name, text.len());
            self.sink.write_str(text);
        }
    }

    /// Opcode whose frame is open, if any.
    pub fn current_opcode(&self) -> Option<&Opcode> {
        self.context.current()
    }

    pub fn config(&self) -> &GenConfig {
        self.config
    }

    pub fn slow_paths(&self) -> &SlowPathRegistry {
        &self.slow_paths
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Text written to the active buffer so far.
    pub fn text(&self) -> &str {
        self.sink.read_all()
    }

    /// Finish the session, returning the accumulated text and statistics.
    pub(crate) fn into_parts(self) -> (String, GenerationStats) {
        (self.sink.into_string(), self.stats)
    }
}
