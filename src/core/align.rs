//! Handler alignment directives.
//!
//! Every handler starts on a handler-size boundary so the dispatcher can
//! compute a handler address as `base + (opcode << log2)`. The size tokens
//! are symbolic (usually preprocessor macros) and are written out verbatim.

use std::fmt;

/// Directive flavour used to request handler alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignStyle {
    /// `.balign <bytes>`
    #[default]
    Balign,
    /// `.p2align <log2>`
    P2align,
}

impl AlignStyle {
    /// Render the directive line for the configured size tokens.
    pub fn directive(self, size_bytes: &str, size_log2: &str) -> String {
        match self {
            AlignStyle::Balign => format!("    .balign {}", size_bytes),
            AlignStyle::P2align => format!("    .p2align {}", size_log2),
        }
    }
}

impl fmt::Display for AlignStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignStyle::Balign => write!(f, "balign"),
            AlignStyle::P2align => write!(f, "p2align"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_tokens_are_verbatim() {
        assert_eq!(
            AlignStyle::Balign.directive("NTERP_HANDLER_SIZE", "NTERP_HANDLER_SIZE_LOG2"),
            "    .balign NTERP_HANDLER_SIZE"
        );
        assert_eq!(AlignStyle::P2align.directive("128", "7"), "    .p2align 7");
    }
}
