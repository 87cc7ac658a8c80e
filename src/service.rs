//! Request-time advice pipeline
//!
//! Validates the client's move history, queries the similarity index with its
//! embedding, checks each ranked candidate against the live board and applies
//! the move policy.

use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

use crate::{
    Result,
    advisor::{Candidate, MoveAdvisor, Possibility, Suggestion, VectorQuery},
    config::{AdvisorConfig, CandidateOrder},
    ports::SimilarityIndex,
    tictactoe::{BoardState, MoveSequence, parse_history},
};

/// Everything returned to the client for one request
#[derive(Debug, Clone, Serialize)]
pub struct Advice {
    pub current_board: String,
    pub suggestion: Suggestion,
    pub possibilities: Vec<Possibility>,
    /// The query as sent to the index, for display
    pub pipeline: Value,
}

/// Advice pipeline bound to one similarity index
pub struct AdviceService<I> {
    index: I,
    config: AdvisorConfig,
    advisor: MoveAdvisor,
}

impl<I: SimilarityIndex> AdviceService<I> {
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn new(index: I, config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        let advisor = MoveAdvisor::new(config.reachable_only, config.seed);
        Ok(Self {
            index,
            config,
            advisor,
        })
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Advise on a compact move history such as `"40"`.
    ///
    /// # Errors
    ///
    /// Returns a client-input error for a malformed history, or the index's
    /// error unchanged.
    pub fn advise(&mut self, history: &str) -> Result<Advice> {
        let moves = parse_history(history)?;
        self.advise_moves(&moves)
    }

    /// Advise on an already validated history.
    ///
    /// # Errors
    ///
    /// Returns the index's error unchanged, or an error if a candidate board
    /// is malformed.
    pub fn advise_moves(&mut self, moves: &MoveSequence) -> Result<Advice> {
        let state = BoardState::from_moves(moves);
        let player = state.to_move;
        info!(
            "next player is {player}, moves played: [{moves}] ({})",
            moves.len()
        );

        let query = VectorQuery::for_moves(moves, &self.config);
        let mut candidates = self.index.search(&query)?;
        if candidates.is_empty() {
            warn!("similarity index returned no candidates for [{moves}]");
        }
        order_candidates(&mut candidates, self.config.candidate_order);

        let possibilities = candidates
            .into_iter()
            .map(|candidate| Possibility::evaluate(&state.cells, candidate))
            .collect::<Result<Vec<_>>>()?;
        info!(
            "{} possibilities, {} playable",
            possibilities.len(),
            possibilities.iter().filter(|p| p.playable).count()
        );

        let suggestion = self.advisor.suggest(player, &state.cells, &possibilities);

        Ok(Advice {
            current_board: state.board_string(),
            suggestion,
            possibilities,
            pipeline: query.to_pipeline(),
        })
    }
}

fn order_candidates(candidates: &mut [Candidate], order: CandidateOrder) {
    match order {
        CandidateOrder::Ranked => {}
        CandidateOrder::Deterministic => candidates.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.board.cmp(&b.board))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{advisor::Strategy, tictactoe::Player};

    struct FixedIndex(Vec<Candidate>);

    impl SimilarityIndex for FixedIndex {
        fn search(&self, query: &VectorQuery) -> Result<Vec<Candidate>> {
            Ok(self.0.iter().take(query.limit).cloned().collect())
        }
    }

    struct DownIndex;

    impl SimilarityIndex for DownIndex {
        fn search(&self, _query: &VectorQuery) -> Result<Vec<Candidate>> {
            Err(crate::Error::Index {
                message: "connection refused".to_string(),
            })
        }
    }

    fn candidate(board: &str, winner: Option<Player>, score: f64) -> Candidate {
        Candidate {
            board: board.to_string(),
            winner,
            score,
        }
    }

    #[test]
    fn infers_player_from_history_length() {
        let index = FixedIndex(vec![candidate("XO⬚XO⬚X⬚⬚", Some(Player::X), 0.9)]);
        let mut service = AdviceService::new(index, AdvisorConfig::default()).unwrap();

        let advice = service.advise("0134").unwrap();
        assert_eq!(advice.current_board, "XO⬚XO⬚⬚⬚⬚");
        assert_eq!(advice.suggestion.player, Player::X);
        assert_eq!(advice.suggestion.strategy, Strategy::Win);
        assert_eq!(advice.suggestion.position, Some(6));
        assert!(advice.possibilities[0].playable);
    }

    #[test]
    fn client_errors_do_not_reach_the_index() {
        let mut service = AdviceService::new(DownIndex, AdvisorConfig::default()).unwrap();
        let err = service.advise("449").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn index_failures_propagate_unchanged() {
        let mut service = AdviceService::new(DownIndex, AdvisorConfig::default()).unwrap();
        let err = service.advise("4").unwrap_err();
        assert!(matches!(err, crate::Error::Index { .. }));
        assert!(!err.is_client_error());
    }

    #[test]
    fn malformed_candidates_are_errors() {
        let index = FixedIndex(vec![candidate("XO", None, 1.0)]);
        let mut service = AdviceService::new(index, AdvisorConfig::default()).unwrap();
        assert!(matches!(
            service.advise("0"),
            Err(crate::Error::InvalidBoardLength { .. })
        ));
    }

    #[test]
    fn deterministic_order_sorts_ties_by_board() {
        let index = FixedIndex(vec![
            candidate("⬚⬚O⬚X⬚O⬚O", Some(Player::O), 0.5),
            candidate("O⬚⬚⬚XO⬚⬚O", Some(Player::O), 0.5),
        ]);

        let ranked = AdvisorConfig::default();
        let mut service = AdviceService::new(&index, ranked).unwrap();
        assert_eq!(service.advise("4").unwrap().suggestion.position, Some(2));

        let sorted = AdvisorConfig::default().with_candidate_order(CandidateOrder::Deterministic);
        let mut service = AdviceService::new(&index, sorted).unwrap();
        let advice = service.advise("4").unwrap();
        assert_eq!(advice.possibilities[0].board, "O⬚⬚⬚XO⬚⬚O");
        assert_eq!(advice.suggestion.position, Some(0));
    }

    #[test]
    fn advice_serializes_for_clients() {
        let index = FixedIndex(vec![candidate("XO⬚⬚⬚⬚⬚⬚⬚", None, 1.0)]);
        let config = AdvisorConfig::default().with_seed(1);
        let mut service = AdviceService::new(index, config).unwrap();

        let json = serde_json::to_value(service.advise("0").unwrap()).unwrap();
        assert_eq!(json["current_board"], "X⬚⬚⬚⬚⬚⬚⬚⬚");
        assert_eq!(json["suggestion"]["strategy"], "random");
        assert_eq!(json["suggestion"]["player"], "O");
        assert_eq!(json["possibilities"][0]["playable"], true);
        assert!(json["pipeline"][0]["$vectorSearch"].is_object());
    }

    #[test]
    fn query_targets_configured_index() {
        let index = FixedIndex(vec![candidate("XO⬚⬚⬚⬚⬚⬚⬚", None, 1.0)]);
        let config = AdvisorConfig::default()
            .with_index_name("boards")
            .with_reachable_only(false);
        let mut service = AdviceService::new(index, config).unwrap();
        assert_eq!(service.config().index_name, "boards");
        assert!(!service.config().reachable_only);

        let advice = service.advise("0").unwrap();
        assert_eq!(advice.pipeline[0]["$vectorSearch"]["index"], "boards");
    }
}
