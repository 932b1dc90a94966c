// This module serves as the central hub for the generator's core infrastructure: the pieces
// every architecture port relies on regardless of the text it produces. It exports and
// organizes the output sink (append-only buffer with scoped capture), alignment directives,
// the current-opcode context, the slow-path registry, the Emitter session tying them together,
// the Template hook interface, run statistics and the error types. None of these components
// parse or validate the generated text; they only control when text is produced and where it
// ends up.

//! Core generator infrastructure.
//!
//! # Key Components
//!
//! ## Output (`sink`, `align`)
//! - Append-only buffer with LIFO capture, at most two buffers deep
//! - Handler-size alignment directives built from opaque size tokens
//!
//! ## Handler frames (`context`, `emitter`)
//! - Current-opcode context, never nested
//! - Separator, alignment and label framing around each handler body
//!
//! ## Slow paths (`slow_path`)
//! - Blocks keyed by name and kept in name order
//! - Repeated requests must reproduce identical text
//!
//! ## Hooks (`template`)
//! - One required method per template hook

pub mod align;
pub mod context;
pub mod emitter;
pub mod error;
pub mod sink;
pub mod slow_path;
pub mod stats;
pub mod template;

pub use align::AlignStyle;
pub use context::{Opcode, OpcodeContext, COMMON_STEM};
pub use emitter::{Emitter, SECTION_SEPARATOR};
pub use error::{GenError, GenResult};
pub use sink::{OutputSink, MAX_SINK_DEPTH};
pub use slow_path::SlowPathRegistry;
pub use stats::GenerationStats;
pub use template::Template;
