//! Mansion CLI - explore the mansion and accuse a suspect.

use anyhow::Context;
use clap::Parser;
use mansion_cli::commands;
use mansion_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command.unwrap_or_else(|| Command::Play(Default::default())) {
        Command::Play(args) => {
            commands::execute_play(args, &config, &formatter)?;
        }
        Command::Map => commands::execute_map(&formatter)?,
        Command::Suspects => commands::execute_suspects(&formatter)?,
    }

    Ok(())
}

/// Log to stderr so narration on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("MANSION_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
