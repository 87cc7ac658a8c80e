//! Reachability between board states

use crate::tictactoe::Cell;

/// Whether `candidate` could still arise from `current` as play continues.
///
/// Placed marks never change, so every occupied cell of `current` must hold
/// the same marker in `candidate`; empty cells may hold anything. The legality
/// of `candidate` as a game position is not checked.
pub fn can_be_reached(current: &[Cell; 9], candidate: &[Cell; 9]) -> bool {
    current
        .iter()
        .zip(candidate)
        .all(|(&now, &future)| now == Cell::Empty || now == future)
}
