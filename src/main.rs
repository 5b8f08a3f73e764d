use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use focuspot::cli::args::{Cli, Commands, TimerArgs};
use focuspot::cli::commands;
use focuspot::config::Config;
use focuspot::error::FocusError;
use focuspot::features::focus::SessionStore;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FOCUSPOT_LOG";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), FocusError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Timer(TimerArgs::default()));
    init_tracing(cli.verbose, matches!(command, Commands::Timer(_)));

    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match command {
        Commands::Timer(args) => commands::timer(SessionStore::open()?, &config, args)?,
        Commands::History { limit } => {
            commands::history(&mut SessionStore::open()?, &config, limit, format)?
        }
        Commands::Report => commands::report(&mut SessionStore::open()?, &config, format)?,
        Commands::Clear { force } => commands::clear(&mut SessionStore::open()?, force, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Install the stderr log subscriber.
///
/// The full-screen timer stays silent unless `FOCUSPOT_LOG` asks for logs.
fn init_tracing(verbose: bool, interactive: bool) {
    let default_level = if interactive {
        "off"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
