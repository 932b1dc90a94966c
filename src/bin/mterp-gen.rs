//! Interpreter skeleton generator binary.
//!
//! Reads an opcode list and writes a placeholder interpreter built with
//! [`SkeletonTemplate`], for bootstrapping a new architecture port.

use clap::{Parser, ValueEnum};
use mterp_gen::opcode_list::load_opcode_list;
use mterp_gen::{AlignStyle, GenConfig, GenResult, Generator, SkeletonTemplate};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlignArg {
    #[value(name = "balign")]
    Balign,
    #[value(name = "p2align")]
    P2align,
}

impl From<AlignArg> for AlignStyle {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Balign => AlignStyle::Balign,
            AlignArg::P2align => AlignStyle::P2align,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "mterp-gen", version, about = "Generate interpreter handler skeletons")]
struct Args {
    /// Opcode list, one `<code> <name>` per line.
    #[arg(long)]
    opcodes: PathBuf,

    /// Destination file, overwritten on success.
    #[arg(short, long)]
    output: PathBuf,

    /// Prefix for exported symbols and slow-path names.
    #[arg(long, default_value = "nterp_")]
    prefix: String,

    /// Handler size token for `.balign`.
    #[arg(long, default_value = mterp_gen::config::DEFAULT_HANDLER_SIZE)]
    handler_size: String,

    /// Handler size log2 token for `.p2align`.
    #[arg(long, default_value = mterp_gen::config::DEFAULT_HANDLER_SIZE_LOG2)]
    handler_size_log2: String,

    /// Prefix for handler labels.
    #[arg(long, default_value = mterp_gen::config::DEFAULT_LABEL_PREFIX)]
    label_prefix: String,

    /// Alignment directive flavour.
    #[arg(long, value_enum, default_value_t = AlignArg::Balign)]
    align: AlignArg,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> GenResult<()> {
    let opcodes = load_opcode_list(&args.opcodes)?;

    let config = GenConfig::new()
        .with_handler_size(args.handler_size, args.handler_size_log2)
        .with_align_style(args.align.into())
        .with_label_prefix(args.label_prefix);

    let template = SkeletonTemplate::new(args.prefix, opcodes);
    Generator::new(template, config).generate(&args.output)?;
    Ok(())
}

fn main() {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
