//! # eventvis CLI
//!
//! Command-line interface for eventvis - a particle event graph visualizer.
//!
//! ## Usage
//!
//! - `eventvis -l feynman -l phi -s qcd:scheme=rainbow` - resolve a tool set
//! - `eventvis -O default` - resolve with the default pipeline filled in
//! - `eventvis tools` - show the registered tool catalog
//!
//! Each category flag takes a command string of the form
//! `name:arg=value:positional`; `:` and `=` are escaped with a backslash to
//! appear literally.

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventvis_core::ToolRegistry;

mod commands;

use commands::{resolve_command, tools_command};

/// eventvis - draw Monte Carlo particle event graphs
#[derive(Parser)]
#[command(name = "eventvis")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve and run visualization tool pipelines")]
#[command(long_about = None)]
struct Cli {
    /// Option presets applied before everything else
    #[arg(short = 'O', long = "optionset", value_name = "TOOL")]
    optionset: Vec<String>,

    /// Layout classes, merged into one layout (e.g. feynman, dual, phi)
    #[arg(short = 'l', long = "layout", value_name = "TOOL")]
    layout: Vec<String>,

    /// Layout engines to run
    #[arg(short = 'e', long = "layout-engine", value_name = "TOOL")]
    layout_engine: Vec<String>,

    /// Graph transforms, applied in order
    #[arg(short = 't', long = "transform", value_name = "TOOL")]
    transform: Vec<String>,

    /// Annotations to draw
    #[arg(short = 'a', long = "annotation", value_name = "TOOL")]
    annotation: Vec<String>,

    /// Styles to apply
    #[arg(short = 's', long = "style", value_name = "TOOL")]
    style: Vec<String>,

    /// Painters producing output
    #[arg(short = 'p', long = "painter", value_name = "TOOL")]
    painter: Vec<String>,

    /// Label size in points (global argument)
    #[arg(long, default_value_t = 12.0)]
    label_size: f64,

    /// Output file (global argument)
    #[arg(long, default_value = "event.svg")]
    output: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the registered tool catalog
    Tools,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    eventvis_core::init_tracing_with_debug(cli.verbose);

    let registry = ToolRegistry::builtin()?;

    match cli.command {
        Some(Commands::Tools) => tools_command(&registry),
        None => resolve_command(&registry, &cli),
    }
}
