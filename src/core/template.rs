// This module defines the Template trait, the capability interface an architecture port
// implements to supply the actual text of the interpreter. The generator never inspects that
// text; it only decides when each hook runs. Every hook is a required method so a port that
// forgets one fails to compile instead of silently producing a file without, say, its footer.
// Hooks write through the Emitter they are handed, which is also how the opcodes() hook drives
// per-opcode emission and how handler bodies request shared slow paths.

//! Template hooks supplied by an architecture port.
//!
//! Call order for one run:
//! ```text
//! header, entry, instruction_table_start,
//! opcodes {
//!     for each emit_opcode: frame_start, frame_pre_body, <body>, frame_end
//!     for each request_slow_path: slow_path_start, <body>, slow_path_end
//! }
//! instruction_table_end, <slow paths>, footer
//! ```

use super::context::Opcode;
use super::emitter::Emitter;
use super::error::GenResult;

/// Architecture-specific text producers.
pub trait Template {
    /// File prologue.
    fn header(&self, out: &mut Emitter<'_>) -> GenResult<()>;

    /// Interpreter entry point, emitted before the handler table.
    fn entry(&self, out: &mut Emitter<'_>) -> GenResult<()>;

    /// Start of the handler table.
    fn instruction_table_start(&self, out: &mut Emitter<'_>) -> GenResult<()>;

    /// Emit every handler, normally one [`Emitter::emit_opcode`] per opcode.
    fn opcodes(&self, out: &mut Emitter<'_>) -> GenResult<()>;

    /// End of the handler table, after the trailing alignment.
    fn instruction_table_end(&self, out: &mut Emitter<'_>) -> GenResult<()>;

    /// File epilogue, after all slow paths.
    fn footer(&self, out: &mut Emitter<'_>) -> GenResult<()>;

    fn frame_start(&self, out: &mut Emitter<'_>, opcode: &Opcode) -> GenResult<()>;

    fn frame_pre_body(&self, out: &mut Emitter<'_>, opcode: &Opcode) -> GenResult<()>;

    fn frame_end(&self, out: &mut Emitter<'_>, opcode: &Opcode) -> GenResult<()>;

    fn slow_path_start(&self, out: &mut Emitter<'_>, name: &str) -> GenResult<()>;

    fn slow_path_end(&self, out: &mut Emitter<'_>, name: &str) -> GenResult<()>;

    /// Prefix of every slow-path block name, e.g. `"nterp_"`.
    fn opcode_name_prefix(&self) -> &str;
}
