//! Command-line interface definitions.

use clap::{ColorChoice, Parser};

/// Postbuild reorganizer CLI.
///
/// Runs once against the fixed `build/` directory: classifies the output
/// files by extension, rewrites references, and moves compiled and static
/// assets into their subdirectories. No flag changes that behavior.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    ///
    /// `-V` stays reserved for the auto-generated version flag.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
