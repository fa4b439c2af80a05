//! keydemo - terminal preview of a color-coded programmer keyboard
//!
//! Prints the key layout with ANSI colors, a color legend, and the steps
//! for building the iOS keyboard extension.

mod config;
mod error;
mod keyboard;
mod runner;
mod style;
mod terminal;

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;

use config::Config;
use error::Result;
use runner::DemoRunner;
use terminal::Terminal;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            _ => {}
        }
    }

    let config = Config::load();
    tracing::debug!(?config, "loaded configuration");

    let mut terminal = Terminal::stdout();
    let runner = DemoRunner::new(&config, terminal.is_tty());
    let mode = runner.run(&mut terminal)?;
    tracing::debug!(?mode, "demo finished");

    Ok(())
}

fn print_usage() {
    println!("keydemo {} - programmer keyboard layout preview", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: keydemo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!();
    println!("Settings are read from ~/.keydemo.conf:");
    println!("  color = always|never|auto");
    println!("  legend = true|false");
    println!("  instructions = true|false");
    println!();
    println!("NO_COLOR disables colors, RUST_LOG enables diagnostics on stderr.");
}

fn print_version() {
    println!("keydemo {}", env!("CARGO_PKG_VERSION"));
}
