//! strgrid demo - prints the sample table
//!
//! ```text
//! strgrid            # Print the sample table as one string
//! strgrid --lines    # Print each rendered line with its display width
//! ```
//!
//! Set `RUST_LOG=strgrid=debug` to see grid construction on stderr.

use std::env;

use tracing_subscriber::EnvFilter;

use strgrid::{display_width, OutputMode, Rendered};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    eprintln!("strgrid {} - MySQL-style ASCII string grid formatter", VERSION);
    eprintln!();
    eprintln!("Usage: strgrid [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -l, --lines           Render as a list of lines");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut mode = OutputMode::Joined;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-l" | "--lines" => mode = OutputMode::Lines,
            "-v" | "--version" => {
                eprintln!("strgrid {}", VERSION);
                return Ok(());
            }
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            other => {
                print_help();
                anyhow::bail!("Unknown option: {}", other);
            }
        }
    }

    let grid = strgrid::sample()?;
    match grid.render(mode) {
        Rendered::Joined(text) => println!("{}", text),
        Rendered::Lines(lines) => {
            for line in lines {
                println!("{:>3} {}", display_width(&line), line);
            }
        }
    }

    Ok(())
}
