//! Suggest command - run the advice pipeline against an in-memory index

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    adapters::InMemoryIndex,
    cli::commands::load_config,
    config::CandidateOrder,
    dataset,
    service::AdviceService,
    tictactoe::MoveSequence,
};

#[derive(Parser, Debug)]
#[command(about = "Suggest the next move for a move history")]
pub struct SuggestArgs {
    /// Move history as cell digits in play order, e.g. 40
    #[arg(default_value = "")]
    pub moves: String,

    /// JSON advisor configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search a dataset file instead of enumerating every game
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Number of ranked candidates to request
    #[arg(long)]
    pub limit: Option<usize>,

    /// Also consider candidates that contradict the current board
    #[arg(long)]
    pub include_unreachable: bool,

    /// Sort tied candidates by board before choosing
    #[arg(long)]
    pub deterministic: bool,

    /// Random seed for the random tier
    #[arg(long, env = "VECTACTOE_SEED")]
    pub seed: Option<u64>,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(limit) = args.limit {
        let num_candidates = config.num_candidates.max(limit);
        config = config.with_limit(limit).with_num_candidates(num_candidates);
    }
    if args.include_unreachable {
        config = config.with_reachable_only(false);
    }
    if args.deterministic {
        config = config.with_candidate_order(CandidateOrder::Deterministic);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let index = match &args.dataset {
        Some(path) => {
            let records = dataset::load(path)
                .with_context(|| format!("Failed to load dataset from {}", path.display()))?;
            InMemoryIndex::new(records)?
        }
        None => InMemoryIndex::from_prefix(&MoveSequence::new(), config.padding),
    };

    let mut service = AdviceService::new(index, config)?;
    let advice = service.advise(&args.moves)?;
    println!("{}", serde_json::to_string_pretty(&advice)?);
    Ok(())
}
