// This module holds the configuration consumed by a generation run. The handler size tokens
// are opaque strings owned by the build that includes the generated file (typically macro
// names such as NTERP_HANDLER_SIZE) and are substituted verbatim into alignment directives.
// The remaining knobs control label spelling, the default slow-path suffix and the tool name
// written into the generated-file marker. GenConfig uses builder-style setters so the command
// line front end and tests can override individual values on top of the defaults.

//! Generator configuration.

use crate::core::align::AlignStyle;

/// Default handler size token written into `.balign` directives.
pub const DEFAULT_HANDLER_SIZE: &str = "NTERP_HANDLER_SIZE";

/// Default handler size token written into `.p2align` directives.
pub const DEFAULT_HANDLER_SIZE_LOG2: &str = "NTERP_HANDLER_SIZE_LOG2";

/// Prefix of every per-opcode handler label.
pub const DEFAULT_LABEL_PREFIX: &str = ".L_";

/// Suffix appended to slow-path block names unless overridden per request.
pub const DEFAULT_SLOW_PATH_SUFFIX: &str = "_slow_path";

/// Settings for one generator instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Handler size in bytes, as a token.
    pub handler_size_bytes: String,

    /// Base-2 logarithm of the handler size, as a token.
    pub handler_size_log2: String,

    /// Which alignment directive to emit.
    pub align_style: AlignStyle,

    /// Prefix for handler labels (`<prefix><name>:`).
    pub label_prefix: String,

    /// Suffix used by [`Emitter::request_slow_path`](crate::core::Emitter::request_slow_path).
    pub slow_path_suffix: String,

    /// Name written into the generated-file marker.
    pub tool_name: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            handler_size_bytes: DEFAULT_HANDLER_SIZE.to_string(),
            handler_size_log2: DEFAULT_HANDLER_SIZE_LOG2.to_string(),
            align_style: AlignStyle::default(),
            label_prefix: DEFAULT_LABEL_PREFIX.to_string(),
            slow_path_suffix: DEFAULT_SLOW_PATH_SUFFIX.to_string(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl GenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handler_size(mut self, bytes: impl Into<String>, log2: impl Into<String>) -> Self {
        self.handler_size_bytes = bytes.into();
        self.handler_size_log2 = log2.into();
        self
    }

    pub fn with_align_style(mut self, style: AlignStyle) -> Self {
        self.align_style = style;
        self
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn with_slow_path_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.slow_path_suffix = suffix.into();
        self
    }

    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }

    /// The alignment directive line for this configuration.
    pub fn alignment_directive(&self) -> String {
        self.align_style
            .directive(&self.handler_size_bytes, &self.handler_size_log2)
    }

    /// The marker comment opening every generated file.
    pub fn generated_marker(&self) -> String {
        format!(
            "/* DO NOT EDIT: This file was generated by {}. */",
            self.tool_name
        )
    }
}
