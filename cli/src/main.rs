mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{hover, render};

/// Log to stderr; `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Hover(args) => hover::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
