mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "register")]
#[command(version, about = "Registration form validator", long_about = None)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate form values from a JSON file
    Validate {
        /// JSON file with the form values
        values: PathBuf,

        /// Only validate this field (wire name, e.g. confirmPassword)
        #[arg(short, long)]
        field: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a full submit attempt (validate, then record the values)
    Submit {
        /// JSON file with the form values
        values: PathBuf,

        /// Form configuration (default: ./registration.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the form as HTML
    Render {
        /// Pre-fill from these values and show their errors
        #[arg(long)]
        values: Option<PathBuf>,

        /// Form configuration (default: ./registration.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the form fields and their HTML5 attributes
    Fields,
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::ERROR,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Execute command
    match cli.command {
        Commands::Validate { values, field, json } => {
            commands::validate::execute(&values, field.as_deref(), json)
        }
        Commands::Submit { values, config } => commands::submit::execute(&values, config.as_deref()),
        Commands::Render { values, config } => {
            commands::render::execute(values.as_deref(), config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Fields => {
            commands::fields::execute();
            Ok(ExitCode::SUCCESS)
        }
    }
}
