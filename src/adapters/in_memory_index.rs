//! Exact in-memory similarity index.
//!
//! Scores every stored record against the query, the way a vector search
//! engine configured for Euclidean similarity would, without any approximation.
//! Suitable for offline use and tests; the production index is external.

use crate::{
    Result,
    advisor::{Candidate, VectorQuery},
    dataset::GameRecord,
    embedding::{EMBEDDING_DIM, Padding},
    error::Error,
    ports::SimilarityIndex,
    tictactoe::{MoveSequence, enumerate_from},
};

/// Brute-force nearest-neighbour search over game records.
///
/// Scores are `1 / (1 + d²)` for Euclidean distance `d`, so identical
/// vectors score 1. Equal scores keep the records' insertion order.
///
/// # Examples
///
/// ```
/// use vectactoe::adapters::InMemoryIndex;
/// use vectactoe::advisor::VectorQuery;
/// use vectactoe::config::AdvisorConfig;
/// use vectactoe::embedding::Padding;
/// use vectactoe::ports::SimilarityIndex;
/// use vectactoe::tictactoe::MoveSequence;
///
/// let prefix: MoveSequence = "40".parse()?;
/// let index = InMemoryIndex::from_prefix(&prefix, Padding::Blank);
///
/// let query = VectorQuery::for_moves(&prefix, &AdvisorConfig::default());
/// let candidates = index.search(&query)?;
/// assert_eq!(candidates.len(), 12);
/// # Ok::<(), vectactoe::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryIndex {
    records: Vec<GameRecord>,
}

impl InMemoryIndex {
    /// Index the given records.
    ///
    /// # Errors
    ///
    /// Returns error if any record's vector does not have the embedding length.
    pub fn new(records: Vec<GameRecord>) -> Result<Self> {
        if let Some(bad) = records.iter().find(|r| r.vector.len() != EMBEDDING_DIM) {
            return Err(Error::InvalidEmbeddingLength {
                expected: EMBEDDING_DIM,
                got: bad.vector.len(),
            });
        }
        Ok(Self { records })
    }

    /// Index every terminal continuation of `prefix`
    pub fn from_prefix(prefix: &MoveSequence, padding: Padding) -> Self {
        let records = enumerate_from(prefix)
            .iter()
            .map(|moves| GameRecord::simulate(moves, padding))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn similarity(a: &[f32], b: &[f32]) -> f64 {
    let squared: f64 = a
        .iter()
        .zip(b)
        .map(|(&x, &y)| f64::from(x - y).powi(2))
        .sum();
    1.0 / (1.0 + squared)
}

impl SimilarityIndex for InMemoryIndex {
    fn search(&self, query: &VectorQuery) -> Result<Vec<Candidate>> {
        if query.query_vector.len() != EMBEDDING_DIM {
            return Err(Error::InvalidEmbeddingLength {
                expected: EMBEDDING_DIM,
                got: query.query_vector.len(),
            });
        }

        let mut scored: Vec<(f64, &GameRecord)> = self
            .records
            .iter()
            .map(|record| (similarity(&query.query_vector, &record.vector), record))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        Ok(scored
            .into_iter()
            .take(query.limit)
            .map(|(score, record)| Candidate {
                board: record.board.clone(),
                winner: record.winner,
                score,
            })
            .collect())
    }
}
