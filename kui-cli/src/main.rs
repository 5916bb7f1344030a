//! `kui`: a demo terminal client for the `kui-core` matcher. Not the
//! engine itself — see that crate for the actual greedy-longest-match
//! resolution and macro expansion. This binary just wires a real terminal
//! up to it and exposes a couple of commands for poking at the result.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;
mod term_source;

use config::Config;
use error::Result;

#[derive(Parser, Debug)]
#[command(name = "kui", version, about = "Greedy-longest-match key resolution demo")]
struct Cli {
    /// Enable debug-level logging.
    #[arg(long, global = true, env = "KUI_VERBOSE")]
    verbose: bool,

    /// Path to a kui.toml to use instead of the usual search order.
    #[arg(long, global = true, value_name = "PATH", env = "KUI_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Echo resolved key tokens read live from the terminal.
    Run,
    /// List the macros the active configuration would register.
    Macros,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run => commands::run::execute(config),
        Commands::Macros => commands::macros::execute(config),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(&cli)?;
    execute_command(cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_subcommand() {
        let cli = Cli::parse_from(["kui", "run"]);
        assert!(matches!(cli.command, Commands::Run));
    }

    #[test]
    fn parses_macros_subcommand_with_verbose_flag() {
        let cli = Cli::parse_from(["kui", "--verbose", "macros"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Macros));
    }

    #[test]
    fn parses_config_path_override() {
        let cli = Cli::parse_from(["kui", "--config", "/tmp/kui.toml", "macros"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/kui.toml")));
    }
}
