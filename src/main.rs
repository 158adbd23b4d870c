mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use bullet_core::DEFAULT_CALENDAR_NAME;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bullet")]
#[command(about = "Turn the Bullet crew schedule export into an iCalendar file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the .ics file from a CSV export
    Convert {
        /// CSV export of the schedule sheet
        input: PathBuf,

        /// Calendar title; the file is written as "<name>.ics"
        #[arg(short, long, default_value = DEFAULT_CALENDAR_NAME)]
        name: String,

        /// Domain for synthetic attendee addresses
        #[arg(short, long, env = "DOMAIN")]
        domain: String,

        /// Directory to write the calendar into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Print the events and crew availability parsed from a CSV export
    Preview {
        /// CSV export of the schedule sheet
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            name,
            domain,
            output_dir,
        } => commands::convert::run(&input, name, domain, &output_dir),
        Commands::Preview { input } => commands::preview::run(&input),
    }
}
