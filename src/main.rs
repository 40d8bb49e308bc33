//! Postbuild - reorganize static site build output into asset subdirectories.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod reorg;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::Layout;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    reorg::reorganize(&Layout::default())
}
