//! CLI Adapter.

mod catalog;
mod reserve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::commands::configure::Selection;
use crate::app::settings_reader::load_settings;
use crate::domain::{AppError, Category, Settings};

#[derive(Parser)]
#[command(name = "nexus")]
#[command(version)]
#[command(about = "Configure a Nexus car and reserve a test drive", long_about = None)]
struct Cli {
    /// Settings file (defaults to ./nexus.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available options and their surcharges
    #[clap(visible_alias = "o")]
    Options {
        /// Only list one category (color, wheels, interior)
        #[arg(long)]
        category: Option<Category>,
    },
    /// Price a configuration
    #[clap(visible_alias = "q")]
    Quote {
        #[command(flatten)]
        selection: SelectionArgs,
    },
    /// Configure the car and submit a reservation
    #[clap(visible_alias = "r")]
    Reserve {
        #[command(flatten)]
        selection: SelectionArgs,
        #[command(flatten)]
        contact: reserve::ContactArgs,
        /// Prompt for contact fields not given as flags
        #[arg(short, long)]
        interactive: bool,
    },
    /// List stored reservations
    #[clap(visible_alias = "ls")]
    Reservations,
}

/// Option ids picked on the command line.
#[derive(Args, Debug, Default)]
pub(crate) struct SelectionArgs {
    /// Paint color id
    #[arg(long)]
    color: Option<String>,
    /// Wheels id
    #[arg(long)]
    wheels: Option<String>,
    /// Interior id
    #[arg(long)]
    interior: Option<String>,
}

impl From<SelectionArgs> for Selection {
    fn from(args: SelectionArgs) -> Self {
        Selection { color: args.color, wheels: args.wheels, interior: args.interior }
    }
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    let result = load_settings(cli.config.as_deref())
        .and_then(|settings| dispatch(cli.command, &settings));

    if let Err(e) = result {
        report(&e);
        std::process::exit(e.exit_code());
    }
}

fn dispatch(command: Commands, settings: &Settings) -> Result<(), AppError> {
    match command {
        Commands::Options { category } => catalog::run_options(category, settings),
        Commands::Quote { selection } => catalog::run_quote(selection.into(), settings),
        Commands::Reserve { selection, contact, interactive } => {
            reserve::run_reserve(selection.into(), contact, interactive, settings)
        }
        Commands::Reservations => reserve::run_reservations(settings),
    }
}

fn report(error: &AppError) {
    match error {
        AppError::Validation(errors) => {
            eprintln!("❌ Reservation not submitted:");
            for (field, error) in errors.iter() {
                eprintln!("  • {}: {}", field, error.message);
            }
        }
        AppError::Persistence(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Your reservation was not saved. Please try again.");
        }
        other => eprintln!("Error: {}", other),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
