use clap::Parser;
use folio::cli::commands::Cli;
use folio::cli::handlers;
use folio::io::config_io;
use folio::io::log::{LogTarget, init_logging};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;

    let target = if cli.command.is_none() {
        LogTarget::Tui
    } else {
        LogTarget::Cli
    };
    init_logging(&config.log, target)?;
    tracing::info!(mode = ?target, "folio starting");

    match cli.command {
        // No subcommand → launch TUI
        None => folio::tui::run(&config.ui),
        Some(_) => handlers::dispatch(cli),
    }
}
