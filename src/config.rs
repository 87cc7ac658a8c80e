//! Configuration for the advice pipeline.

use std::{fmt, fs::File, io::BufReader, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::embedding::Padding;

/// How candidates are ordered before the move policy scans them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateOrder {
    /// Keep the ranking returned by the index
    #[default]
    Ranked,
    /// Stable sort by descending score, then board string, so ties broken
    /// arbitrarily by the index cannot change the suggestion
    Deterministic,
}

impl fmt::Display for CandidateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CandidateOrder::Ranked => "ranked",
            CandidateOrder::Deterministic => "deterministic",
        };
        f.write_str(label)
    }
}

impl FromStr for CandidateOrder {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "ranked" | "index" => Ok(CandidateOrder::Ranked),
            "deterministic" | "sorted" => Ok(CandidateOrder::Deterministic),
            _ => Err(crate::Error::ParseCandidateOrder {
                input: s.to_string(),
                expected: "ranked, deterministic".to_string(),
            }),
        }
    }
}

/// Configuration for querying the index and choosing a move.
///
/// # Examples
///
/// ```
/// use vectactoe::config::{AdvisorConfig, CandidateOrder};
/// use vectactoe::embedding::Padding;
///
/// let config = AdvisorConfig::default()
///     .with_padding(Padding::FirstCell)
///     .with_limit(20)
///     .with_candidate_order(CandidateOrder::Deterministic)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Encoding of unplayed slots in query vectors
    pub padding: Padding,
    /// Name of the vector index
    pub index_name: String,
    /// Document field holding stored embeddings
    pub vector_path: String,
    /// Candidate pool examined by the index
    pub num_candidates: usize,
    /// Ranked results requested
    pub limit: usize,
    /// Ignore candidates that contradict the live board
    pub reachable_only: bool,
    pub candidate_order: CandidateOrder,
    /// Random seed for the random tier
    pub seed: Option<u64>,
}

impl AdvisorConfig {
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    pub fn with_num_candidates(mut self, num_candidates: usize) -> Self {
        self.num_candidates = num_candidates;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_reachable_only(mut self, reachable_only: bool) -> Self {
        self.reachable_only = reachable_only;
        self
    }

    pub fn with_candidate_order(mut self, order: CandidateOrder) -> Self {
        self.candidate_order = order;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the query sizes are usable.
    ///
    /// # Errors
    ///
    /// Returns error if `limit` is zero or exceeds `num_candidates`.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.limit == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "limit must be at least 1".to_string(),
            });
        }
        if self.num_candidates < self.limit {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "num_candidates ({}) must be at least limit ({})",
                    self.num_candidates, self.limit
                ),
            });
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or fails
    /// validation.
    pub fn from_json_file(path: &Path) -> Result<Self, crate::Error> {
        let file = File::open(path).map_err(|source| crate::Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            index_name: "vectactoeIdx".to_string(),
            vector_path: "vector".to_string(),
            num_candidates: 120,
            limit: 12,
            reachable_only: true,
            candidate_order: CandidateOrder::default(),
            seed: None,
        }
    }
}
