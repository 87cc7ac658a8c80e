//! Query command - show the similarity search request for a move history

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use crate::{
    advisor::VectorQuery,
    cli::commands::load_config,
    embedding::{self, Padding},
    tictactoe::parse_history,
};

#[derive(Parser, Debug)]
#[command(about = "Print the aggregation pipeline sent to the vector index")]
pub struct QueryArgs {
    /// Move history as cell digits in play order, e.g. 40
    #[arg(default_value = "")]
    pub moves: String,

    /// JSON advisor configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the padding of unplayed slots
    #[arg(long)]
    pub padding: Option<Padding>,

    /// Show the query vector as a bit string
    #[arg(long)]
    pub bits: bool,
}

pub fn execute(args: QueryArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(padding) = args.padding {
        config.padding = padding;
    }

    let moves = parse_history(&args.moves)?;
    let query = VectorQuery::for_moves(&moves, &config);
    let mut pipeline = query.to_pipeline();

    if args.bits {
        pipeline[0]["$vectorSearch"]["queryVector"] =
            Value::String(embedding::to_bit_string(&query.query_vector));
    }

    println!("{}", serde_json::to_string_pretty(&pipeline)?);
    Ok(())
}
