// This module provides SkeletonTemplate, a placeholder architecture port used to bootstrap a
// new interpreter and to exercise the generator end to end. It produces the complete file
// structure (entry point, aligned handler table, slow paths, footer) with comment-only bodies:
// every handler branches to its own slow path and every slow path falls back to one shared
// routine requested from the entry code, outside any handler frame. Replacing the comments with
// real instructions for a target is the job of a proper port; the layout stays the same.

//! Placeholder template producing an empty handler table.

use crate::core::context::{Opcode, COMMON_STEM};
use crate::core::emitter::Emitter;
use crate::core::error::GenResult;
use crate::core::template::Template;

/// Suffix of the shared fallback block.
const FALLBACK_SUFFIX: &str = "_fallback";

/// Comment-only template covering a list of opcodes.
#[derive(Debug, Clone)]
pub struct SkeletonTemplate {
    prefix: String,
    opcodes: Vec<Opcode>,
}

impl SkeletonTemplate {
    pub fn new(prefix: impl Into<String>, opcodes: Vec<Opcode>) -> Self {
        Self {
            prefix: prefix.into(),
            opcodes,
        }
    }

    fn symbol(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn fallback_name(&self) -> String {
        format!("{}{}{}", self.prefix, COMMON_STEM, FALLBACK_SUFFIX)
    }
}

impl Template for SkeletonTemplate {
    fn header(&self, out: &mut Emitter<'_>) -> GenResult<()> {
        out.write_line("/*");
        out.write_line(" * Interpreter skeleton. Each handler is a placeholder that");
        out.write_line(" * defers to its slow path.");
        out.write_line(" */");
        out.write_line("");
        Ok(())
    }

    fn entry(&self, out: &mut Emitter<'_>) -> GenResult<()> {
        let entry = self.symbol("entry");
        let table = self.symbol("instruction_start");
        let shift = out.config().handler_size_log2.clone();

        out.write_line("    .text");
        out.write_line(&format!("    .global {}", entry));
        out.write_line(&format!("{}:", entry));
        out.write_line(&format!("    /* dispatch: {} + (opcode << {}) */", table, shift));

        let fallback = out.request_slow_path_with_suffix(FALLBACK_SUFFIX, |out| {
            out.write_line("    /* return the instruction to the reference interpreter */");
            Ok(())
        })?;
        out.write_line(&format!("    /* unsupported entry state: {} */", fallback));
        out.write_line("");
        Ok(())
    }

    fn instruction_table_start(&self, out: &mut Emitter<'_>) -> GenResult<()> {
        let table = self.symbol("instruction_start");
        out.write_line(&format!("    .global {}", table));
        out.emit_alignment();
        out.write_line(&format!("{}:", table));
        Ok(())
    }

    fn opcodes(&self, out: &mut Emitter<'_>) -> GenResult<()> {
        let fallback = self.fallback_name();
        for opcode in &self.opcodes {
            out.emit_opcode(opcode.code, &opcode.name, |out| {
                let slow_path = out.request_slow_path(|out| {
                    out.write_line(&format!("    b {}", fallback));
                    Ok(())
                })?;
                out.write_line(&format!("    b {}", slow_path));
                Ok(())
            })?;
        }
        Ok(())
    }

    fn instruction_table_end(&self, out: &mut Emitter<'_>) -> GenResult<()> {
        let end = self.symbol("instruction_end");
        out.write_line(&format!("    .global {}", end));
        out.write_line(&format!("{}:", end));
        out.write_line("");
        Ok(())
    }

    fn footer(&self, out: &mut Emitter<'_>) -> GenResult<()> {
        out.write_line("/* End of generated interpreter. */");
        Ok(())
    }

    fn frame_start(&self, _out: &mut Emitter<'_>, _opcode: &Opcode) -> GenResult<()> {
        Ok(())
    }

    fn frame_pre_body(&self, out: &mut Emitter<'_>, opcode: &Opcode) -> GenResult<()> {
        out.write_line(&format!("    /* decode {} */", opcode.name));
        Ok(())
    }

    fn frame_end(&self, out: &mut Emitter<'_>, _opcode: &Opcode) -> GenResult<()> {
        out.write_line("    /* dispatch next */");
        Ok(())
    }

    fn slow_path_start(&self, out: &mut Emitter<'_>, name: &str) -> GenResult<()> {
        out.write_line(&format!("{}:", name));
        Ok(())
    }

    fn slow_path_end(&self, out: &mut Emitter<'_>, _name: &str) -> GenResult<()> {
        out.write_line("");
        Ok(())
    }

    fn opcode_name_prefix(&self) -> &str {
        &self.prefix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;
    use crate::generator::Generator;

    #[test]
    fn test_skeleton_layout() {
        let template = SkeletonTemplate::new(
            "nterp_",
            vec![Opcode::new(0, "nop"), Opcode::new(1, "move")],
        );
        let rendered = Generator::new(template, GenConfig::default())
            .render()
            .unwrap();
        let text = &rendered.text;

        assert!(text.contains(
            ".L_nop: /* 0x00 */\n    /* decode nop */\n    b nterp_nop_slow_path\n"
        ));
        assert!(text.contains("nterp_move_slow_path:\n    b nterp_common_fallback\n"));
        assert!(text.contains(
            "    /* dispatch: nterp_instruction_start + (opcode << NTERP_HANDLER_SIZE_LOG2) */\n"
        ));

        let fallback = text.find("nterp_common_fallback:").unwrap();
        let move_slow = text.find("nterp_move_slow_path:").unwrap();
        let nop_slow = text.find("nterp_nop_slow_path:").unwrap();
        let table_end = text.find("nterp_instruction_end:").unwrap();
        assert!(table_end < fallback);
        assert!(fallback < move_slow);
        assert!(move_slow < nop_slow);
        assert!(text.ends_with("/* End of generated interpreter. */\n"));

        assert_eq!(rendered.stats.slow_paths_registered, 3);
    }
}
