//! staffdb Binary
//!
//! Runs the interactive employee menu on the terminal.

use std::io;

use clap::Parser;
use staffdb::{Config, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// staffdb
#[derive(Parser, Debug)]
#[command(name = "staffdb")]
#[command(about = "Menu-driven employee record manager")]
#[command(version)]
struct Args {
    /// Directory export files are written to
    #[arg(short = 'd', long, default_value = ".")]
    export_dir: String,

    /// Extension appended to export file names
    #[arg(short, long, default_value = "json")]
    extension: String,

    /// Spaces per nesting level in exported JSON
    #[arg(short, long, default_value = "1")]
    indent: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("staffdb v{}", staffdb::VERSION);
    tracing::info!("Export directory: {}", args.export_dir);

    let config = match Config::builder()
        .export_dir(&args.export_dir)
        .export_extension(&args.extension)
        .indent_width(args.indent)
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&config, stdin.lock(), stdout.lock());

    if let Err(e) = session.run() {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session ended");
}
