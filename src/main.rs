//! ParentFlow CLI
//!
//! Usage:
//!   parentflow [OPTIONS] [FILE]
//!
//! Reads a chart TOML document (file or stdin) and writes the rendered SVG
//! to stdout.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use parentflow::{document, render_with_config, RenderConfig, SvgConfig};

#[derive(Parser)]
#[command(name = "parentflow")]
#[command(about = "Render level-based org charts to SVG")]
struct Cli {
    /// Input chart file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Render the built-in demo chart instead of reading input
    #[arg(long)]
    seed: bool,

    /// Reject inconsistent charts (duplicate ids, dangling or mis-leveled parents)
    #[arg(long)]
    strict: bool,

    /// Emit compact single-line SVG without the XML declaration
    #[arg(long)]
    compact: bool,
}

fn main() {
    let cli = Cli::parse();

    // Interactive invocation with nothing to read: point at the demo chart.
    if !cli.seed && cli.input.is_none() && io::stdin().is_terminal() {
        eprintln!("No input. Pass a chart TOML file, pipe one on stdin, or use --seed.");
        std::process::exit(2);
    }

    let source = if cli.seed {
        document::SEED_CHART.to_string()
    } else {
        match &cli.input {
            Some(path) => match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            },
            None => {
                let mut buffer = String::new();
                match io::stdin().read_to_string(&mut buffer) {
                    Ok(_) => buffer,
                    Err(e) => {
                        eprintln!("Error reading from stdin: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
    };

    let mut svg_config = SvgConfig::default();
    if cli.compact {
        svg_config = svg_config.with_standalone(false).with_pretty_print(false);
    }
    let config = RenderConfig::new()
        .with_svg(svg_config)
        .with_strict(cli.strict);

    match render_with_config(&source, &config) {
        Ok(svg) => print!("{}", svg),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
