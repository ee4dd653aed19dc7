//! CLI frontend for the Can't Stop odds engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cstop",
    about = "Can't Stop — exact dice odds for column choices",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the hit probability of every two-die total
    Table,

    /// Evaluate the chance that one roll can make any of the given totals
    Eval {
        /// Totals between 2 and 12 inclusive (up to six)
        #[arg(
            value_parser = clap::value_parser!(u32).range(2..=12),
            num_args = 1..=6,
            required = true
        )]
        totals: Vec<u32>,

        /// Skip printing the full probability table first
        #[arg(long)]
        no_table: bool,
    },

    /// Rank every three-column choice by hit probability
    Rank {
        /// Number of highest-probability combinations to display
        #[arg(short, long, default_value = "10")]
        top: usize,

        /// Optional CSV file to write the complete ranking to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render per-column heatmap slices and write their CSV tables
    Slices {
        /// Base directory for generated tables (default: ./out)
        #[arg(short, long, default_value = "out")]
        output_dir: PathBuf,

        /// Skip rendering heatmaps to the terminal
        #[arg(long)]
        quiet: bool,
    },

    /// Export the probability table to a different format
    Export {
        /// Output format: json, csv, markdown
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Table => commands::table::run(),
        Commands::Eval { totals, no_table } => commands::eval::run(&totals, no_table),
        Commands::Rank { top, output } => commands::rank::run(top, output.as_deref()),
        Commands::Slices { output_dir, quiet } => commands::slices::run(&output_dir, quiet),
        Commands::Export { format, output } => commands::export::run(&format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
