//! Move history validation at the request boundary

use std::str::FromStr;

use super::{board::BoardState, lines::LineAnalyzer, moves::MoveSequence};

/// Parse a compact move history such as `"40"` into a validated sequence.
///
/// Each character must be a digit `0`-`8`. The history may not repeat a
/// cell, exceed nine moves, or continue after a player has already won.
/// Whitespace is rejected like any other character; an empty history is the
/// empty board.
///
/// # Errors
///
/// Returns a client-input error describing the first violation.
pub fn parse_history(history: &str) -> Result<MoveSequence, crate::Error> {
    let mut positions = Vec::with_capacity(history.len());
    for (index, character) in history.chars().enumerate() {
        match character {
            '0'..='8' => positions.push(character as usize - '0' as usize),
            _ => {
                return Err(crate::Error::InvalidHistoryCharacter {
                    character,
                    index,
                    history: history.to_string(),
                });
            }
        }
    }

    let moves = MoveSequence::try_from_positions(&positions)?;
    ensure_no_play_after_win(&moves)?;
    Ok(moves)
}

/// Replay a history and reject any move made once the game was decided.
///
/// # Errors
///
/// Returns [`crate::Error::GameOver`] naming the first move after the win.
pub fn ensure_no_play_after_win(moves: &MoveSequence) -> Result<(), crate::Error> {
    let mut state = BoardState::new();
    let mut decided = false;
    for pos in moves.iter() {
        if decided {
            return Err(crate::Error::GameOver { position: pos });
        }
        state = state.make_move(pos)?;
        decided = LineAnalyzer::detect(&state.cells, Some(pos)).is_some();
    }
    Ok(())
}

impl FromStr for MoveSequence {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_history(s)
    }
}
