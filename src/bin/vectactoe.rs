//! vectactoe CLI - dataset export and similarity-driven move advice
//!
//! This CLI provides:
//! - Generation of the labeled game dataset that seeds the vector index
//! - Inspection of the similarity query for a move history
//! - Offline move suggestions against an in-memory index

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vectactoe")]
#[command(version, about = "Tic-Tac-Toe advice from similar games", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate all games and export the labeled dataset
    Dataset(vectactoe::cli::commands::dataset::DatasetArgs),

    /// Print the vector search pipeline for a move history
    Query(vectactoe::cli::commands::query::QueryArgs),

    /// Suggest the next move for a move history
    Suggest(vectactoe::cli::commands::suggest::SuggestArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    vectactoe::cli::logging::init(cli.verbose)?;

    match cli.command {
        Commands::Dataset(args) => vectactoe::cli::commands::dataset::execute(args),
        Commands::Query(args) => vectactoe::cli::commands::query::execute(args),
        Commands::Suggest(args) => vectactoe::cli::commands::suggest::execute(args),
    }
}
