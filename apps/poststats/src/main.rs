//! # poststats Binary
//!
//! Command line front-end for the post statistics filter. Parses
//! arguments, initializes logging, and dispatches to the `cmd_*`
//! functions in [`poststats::cli`].

use clap::{Parser, Subcommand};
use poststats::cli;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "poststats", version, about = "Append or prepend a post statistics block to HTML content")]
struct Cli {
    /// Settings file (flat JSON object of raw string values)
    #[arg(long, global = true, default_value = "poststats.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply the statistics filter to a document (`-` reads stdin)
    Transform {
        /// Input HTML document
        input: PathBuf,
        /// Write the result here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print word count, character count, and read time for a document
    Count {
        /// Input HTML document
        input: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Set one setting (keys: wcp_location, wcp_headline, wcp_wordcount,
    /// wcp_charactercount, wcp_readtime)
    Set {
        /// Setting name
        key: String,
        /// Raw value; location takes "0" (start) or "1" (end)
        value: String,
    },
    /// Delete the settings file, returning everything to defaults
    Reset,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();

    let result = match args.command {
        Command::Transform { input, output } => {
            cli::cmd_transform(&args.settings, &input, output.as_deref())
        }
        Command::Count { input, json } => cli::cmd_count(&input, json),
        Command::Config { action } => match action {
            ConfigAction::Show { json } => cli::cmd_config_show(&args.settings, json),
            ConfigAction::Set { key, value } => cli::cmd_config_set(&args.settings, &key, &value),
            ConfigAction::Reset => cli::cmd_config_reset(&args.settings),
        },
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
