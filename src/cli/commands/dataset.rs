//! Dataset command - enumerate every game and export the labeled records

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    dataset::{self, DatasetFormat, GameRecord},
    embedding::Padding,
    tictactoe::enumerate,
};

#[derive(Parser, Debug)]
#[command(about = "Generate the labeled game dataset that seeds the similarity index")]
pub struct DatasetArgs {
    /// Write the dataset to this file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// File layout (json or jsonl)
    #[arg(long, short = 'f', default_value = "json")]
    pub format: DatasetFormat,

    /// Encoding of unplayed slots (blank or first-cell)
    #[arg(long, default_value = "blank")]
    pub padding: Padding,

    /// Print this many randomly chosen games
    #[arg(long, short = 's')]
    pub sample: Option<usize>,

    /// Print the number of games by length
    #[arg(long, short = 'r')]
    pub report: bool,

    /// Random seed for sampling
    #[arg(long, env = "VECTACTOE_SEED")]
    pub seed: Option<u64>,
}

pub fn execute(args: DatasetArgs) -> Result<()> {
    let spinner = create_spinner("Generating all possible games")?;
    let games = enumerate();
    spinner.finish_with_message(format!("{} games in consideration", format_number(games.len())));

    if let Some(path) = &args.output {
        let spinner = create_spinner("Generating dataset")?;
        let records: Vec<GameRecord> = games
            .iter()
            .map(|moves| GameRecord::simulate(moves, args.padding))
            .collect();
        let count = dataset::save(path, &records, args.format)
            .with_context(|| format!("Failed to write dataset to {}", path.display()))?;
        spinner.finish_with_message(format!(
            "Successfully wrote {} records to {}",
            format_number(count),
            path.display()
        ));
    }

    if let Some(count) = args.sample {
        print_section("Example games");
        let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));
        for index in dataset::sample_indices(&games, count, &mut rng) {
            let record = GameRecord::simulate(&games[index], args.padding);
            println!("{}", dataset::format_sample(index + 1, &record));
        }
    }

    if args.report {
        print_section("Games by number of moves");
        print_kv("Total", &format_number(games.len()));
        for (length, count) in dataset::length_report(&games) {
            print_kv(&format!("{length} moves"), &format!("{} games", format_number(count)));
        }
    }

    Ok(())
}
