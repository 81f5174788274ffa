mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "monthcal")]
#[command(about = "Month-view calendar widget for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a month grid
    Show {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Events file (.toml, .json or .ics) whose days get marked
        #[arg(short, long)]
        events: Option<PathBuf>,

        /// Start weeks on Sunday instead of Monday
        #[arg(long)]
        sunday: bool,

        /// Leave the year out of the header
        #[arg(long)]
        no_year: bool,

        /// Plain output without colors
        #[arg(long)]
        plain: bool,
    },
    /// Browse months interactively
    View {
        /// Events file (.toml, .json or .ics) whose days get marked
        #[arg(short, long)]
        events: Option<PathBuf>,

        /// Start weeks on Sunday instead of Monday
        #[arg(long)]
        sunday: bool,
    },
    /// List the events in an events file, grouped by day
    Events {
        /// Events file (.toml, .json or .ics)
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            month,
            events,
            sunday,
            no_year,
            plain,
        } => commands::show::run(month.as_deref(), events.as_deref(), sunday, no_year, plain),
        Commands::View { events, sunday } => commands::view::run(events.as_deref(), sunday),
        Commands::Events { file } => commands::events::run(&file),
    }
}
