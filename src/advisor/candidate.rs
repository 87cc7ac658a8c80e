//! Ranked candidates returned by the similarity index

use serde::{Deserialize, Serialize};

use super::reachability::can_be_reached;
use crate::tictactoe::{Cell, Player, parse_cells};

/// A previously stored game outcome returned by a similarity search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Final board of the stored game (`X`, `O`, `⬚`)
    pub board: String,
    pub winner: Option<Player>,
    /// Similarity to the query; higher is closer
    #[serde(default)]
    pub score: f64,
}

/// A candidate checked against the live board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Possibility {
    pub board: String,
    pub winner: Option<Player>,
    pub score: f64,
    /// Whether the candidate board can still be reached from the live board
    pub playable: bool,
    #[serde(skip)]
    cells: [Cell; 9],
}

impl Possibility {
    /// Parse the candidate's board and compute its reachability.
    ///
    /// # Errors
    ///
    /// Returns error if the candidate board string is malformed.
    pub fn evaluate(current: &[Cell; 9], candidate: Candidate) -> Result<Self, crate::Error> {
        let cells = parse_cells(&candidate.board)?;
        Ok(Possibility {
            playable: can_be_reached(current, &cells),
            board: candidate.board,
            winner: candidate.winner,
            score: candidate.score,
            cells,
        })
    }

    /// Parsed cells of the candidate board
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_deserializes_null_winner_and_missing_score() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"board":"XOXOXOOXO","winner":null}"#).unwrap();
        assert_eq!(candidate.winner, None);
        assert_eq!(candidate.score, 0.0);

        let candidate: Candidate =
            serde_json::from_str(r#"{"board":"XXXOO⬚⬚⬚⬚","winner":"X","score":0.5}"#).unwrap();
        assert_eq!(candidate.winner, Some(Player::X));
    }

    #[test]
    fn evaluate_flags_playability() {
        let current = parse_cells("X⬚⬚⬚⬚⬚⬚⬚⬚").unwrap();
        let candidate = Candidate {
            board: "XO⬚⬚⬚⬚⬚⬚⬚".to_string(),
            winner: None,
            score: 1.0,
        };
        let possibility = Possibility::evaluate(&current, candidate).unwrap();
        assert!(possibility.playable);
        assert_eq!(possibility.cells()[1], Cell::O);

        let json = serde_json::to_value(&possibility).unwrap();
        assert_eq!(json["playable"], true);
        assert!(json.get("cells").is_none());
    }

    #[test]
    fn evaluate_rejects_malformed_board() {
        let current = [Cell::Empty; 9];
        let candidate = Candidate {
            board: "XO".to_string(),
            winner: None,
            score: 0.0,
        };
        assert!(matches!(
            Possibility::evaluate(&current, candidate),
            Err(crate::Error::InvalidBoardLength { .. })
        ));
    }

    #[test]
    fn evaluate_rejects_foreign_empty_markers() {
        let current = [Cell::Empty; 9];
        for board in ["X..⬚⬚⬚⬚O⬚", "X⬚⬚  ⬚⬚O⬚"] {
            let candidate = Candidate {
                board: board.to_string(),
                winner: None,
                score: 0.0,
            };
            assert!(
                matches!(
                    Possibility::evaluate(&current, candidate),
                    Err(crate::Error::InvalidCellCharacter { .. })
                ),
                "{board} should be rejected"
            );
        }
    }
}
