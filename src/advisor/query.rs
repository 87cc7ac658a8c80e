//! Similarity search request sent to the external index

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{config::AdvisorConfig, embedding, tictactoe::MoveSequence};

/// Nearest-neighbour query for a move history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorQuery {
    /// Name of the vector index to search
    pub index: String,
    /// Document field holding the stored embeddings
    pub path: String,
    pub query_vector: Vec<f32>,
    /// Size of the approximate candidate pool examined by the index
    pub num_candidates: usize,
    /// Number of ranked results returned
    pub limit: usize,
}

impl VectorQuery {
    /// Build the query for `moves` using the configured encoding and sizes
    pub fn for_moves(moves: &MoveSequence, config: &AdvisorConfig) -> Self {
        Self {
            index: config.index_name.clone(),
            path: config.vector_path.clone(),
            query_vector: embedding::encode(moves, config.padding),
            num_candidates: config.num_candidates,
            limit: config.limit,
        }
    }

    /// Render as an aggregation pipeline: a `$vectorSearch` stage followed by
    /// a projection of board, winner and similarity score.
    pub fn to_pipeline(&self) -> Value {
        json!([
            { "$vectorSearch": self },
            {
                "$project": {
                    "_id": 0,
                    "board": 1,
                    "winner": 1,
                    "score": { "$meta": "vectorSearchScore" }
                }
            }
        ])
    }
}
