//! Current-opcode context.
//!
//! Set while a handler frame is being emitted so template hooks and the
//! slow-path registry know which opcode they are working for.

use super::error::{GenError, GenResult};

/// Stem used for slow-path names requested outside any opcode frame.
pub const COMMON_STEM: &str = "common";

/// One instruction of the interpreted instruction set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub code: u16,
    pub name: String,
}

impl Opcode {
    pub fn new(code: u16, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Code rendered as `0xNN` (at least two hex digits).
    pub fn hex_code(&self) -> String {
        format!("{:#04x}", self.code)
    }
}

/// The opcode whose frame is currently open, if any.
#[derive(Debug, Default)]
pub struct OpcodeContext {
    current: Option<Opcode>,
}

impl OpcodeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a frame for `opcode`. Frames never nest.
    pub fn enter(&mut self, opcode: Opcode) -> GenResult<()> {
        if let Some(active) = &self.current {
            return Err(GenError::NestedOpcodeFrame {
                active: active.name.clone(),
                requested: opcode.name,
            });
        }
        self.current = Some(opcode);
        Ok(())
    }

    pub fn leave(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Opcode> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Name fragment for slow-path blocks requested right now.
    pub fn slow_path_stem(&self) -> &str {
        self.current
            .as_ref()
            .map(|op| op.name.as_str())
            .unwrap_or(COMMON_STEM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_code_width() {
        assert_eq!(Opcode::new(0, "nop").hex_code(), "0x00");
        assert_eq!(Opcode::new(0x0a, "x").hex_code(), "0x0a");
        assert_eq!(Opcode::new(0x1ff, "x").hex_code(), "0x1ff");
    }

    #[test]
    fn test_stem_follows_frame() {
        let mut ctx = OpcodeContext::new();
        assert_eq!(ctx.slow_path_stem(), "common");

        ctx.enter(Opcode::new(1, "move")).unwrap();
        assert_eq!(ctx.slow_path_stem(), "move");
        assert_eq!(ctx.current().map(|op| op.code), Some(1));

        ctx.leave();
        assert!(!ctx.is_active());
        assert_eq!(ctx.slow_path_stem(), "common");
    }

    #[test]
    fn test_nested_frame_rejected() {
        let mut ctx = OpcodeContext::new();
        ctx.enter(Opcode::new(1, "move")).unwrap();

        match ctx.enter(Opcode::new(2, "return")) {
            Err(GenError::NestedOpcodeFrame { active, requested }) => {
                assert_eq!(active, "move");
                assert_eq!(requested, "return");
            }
            other => panic!("expected NestedOpcodeFrame, got {:?}", other),
        }
        assert_eq!(ctx.current().unwrap().name, "move");
    }
}
