//! Shared helpers for the vectactoe integration tests.

#![allow(dead_code)]

use vectactoe::{
    advisor::{Candidate, Possibility},
    tictactoe::{Cell, MoveSequence, Player},
};

/// Build a move sequence from literal positions.
pub fn seq(positions: &[usize]) -> MoveSequence {
    MoveSequence::try_from_positions(positions).expect("test sequences are well formed")
}

/// Wrap a board string as a possibility evaluated against `current`.
pub fn possibility(current: &[Cell; 9], board: &str, winner: Option<Player>) -> Possibility {
    let candidate = Candidate {
        board: board.to_string(),
        winner,
        score: 1.0,
    };
    Possibility::evaluate(current, candidate).expect("test boards are well formed")
}
