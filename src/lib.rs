//! mterp-gen - interpreter handler generator.
//!
//! Assembles the source text of a switch-less interpreter from an
//! architecture [`Template`]: one aligned handler per opcode, followed by
//! the slow-path fallback blocks those handlers branch to. Slow paths are
//! deduplicated by name and emitted in name order, and the final text has
//! its blank-line runs collapsed, so the output is fully deterministic.
//!
//! # Primary Usage
//!
//! ```ignore
//! use mterp_gen::{GenConfig, Generator};
//!
//! let generator = Generator::new(MyArmTemplate::new(), GenConfig::default());
//! let stats = generator.generate("mterp_arm64.S")?;
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Output sink, handler frames, slow-path registry, template hooks
//! - [`generator`] - Fixed-order assembly of the complete file
//! - [`normalize`] - Blank-line normalization
//! - [`output`] - Atomic destination writes
//! - [`config`] - Size tokens and naming knobs
//! - [`opcode_list`] / [`skeleton`] - Opcode list files and a placeholder template

pub mod config;
pub mod core;
pub mod generator;
pub mod normalize;
pub mod opcode_list;
pub mod output;
pub mod skeleton;

pub use crate::config::GenConfig;
pub use crate::core::{
    AlignStyle, Emitter, GenError, GenResult, GenerationStats, Opcode, SlowPathRegistry,
    Template,
};
pub use crate::generator::{Generator, Rendered};
pub use crate::skeleton::SkeletonTemplate;
