// This module implements the top-level driver that turns a Template into the final interpreter
// source. A run always starts from a fresh Emitter, writes the generated-file marker, then calls
// the template hooks in a fixed order: header, entry, handler table start, every opcode handler,
// a trailing alignment, handler table end. The slow paths collected while the handlers were
// emitted are appended next in ascending name order, so the output does not depend on which
// handler asked for a block first, and the footer closes the file. The assembled text has its
// blank-line runs collapsed before it is written atomically to the destination. Identical
// template behaviour therefore always yields a byte-identical file.

//! Assembly of the complete generated file.

use crate::config::GenConfig;
use crate::core::emitter::Emitter;
use crate::core::error::GenResult;
use crate::core::stats::GenerationStats;
use crate::core::template::Template;
use crate::normalize::squash_blank_lines;
use crate::output::write_atomic;
use std::path::Path;

/// Normalized text of one run plus its statistics.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub stats: GenerationStats,
}

/// Drives a [`Template`] through a complete generation run.
pub struct Generator<T: Template> {
    template: T,
    config: GenConfig,
}

impl<T: Template> Generator<T> {
    pub fn new(template: T, config: GenConfig) -> Self {
        Self { template, config }
    }

    pub fn template(&self) -> &T {
        &self.template
    }

    /// Assemble and normalize the full text without touching the filesystem.
    pub fn render(&self) -> GenResult<Rendered> {
        let template: &dyn Template = &self.template;
        let mut out = Emitter::new(template, &self.config);

        out.write_line(&self.config.generated_marker());
        template.header(&mut out)?;
        template.entry(&mut out)?;

        template.instruction_table_start(&mut out)?;
        template.opcodes(&mut out)?;
        out.emit_alignment();
        template.instruction_table_end(&mut out)?;

        out.append_slow_paths();

        template.footer(&mut out)?;

        let (raw, mut stats) = out.into_parts();
        let text = squash_blank_lines(&raw).into_owned();
        stats.output_bytes = text.len();

        Ok(Rendered { text, stats })
    }

    /// Render and write the result to `destination`, replacing its contents.
    pub fn generate(&self, destination: impl AsRef<Path>) -> GenResult<GenerationStats> {
        let destination = destination.as_ref();
        let rendered = self.render()?;
        write_atomic(destination, &rendered.text)?;

        log::info!(
            "Generated {} ({} handlers, {} slow paths)",
            destination.display(),
            rendered.stats.opcodes_emitted,
            rendered.stats.slow_paths_registered
        );
        log::debug!("{}", rendered.stats);
        Ok(rendered.stats)
    }
}
