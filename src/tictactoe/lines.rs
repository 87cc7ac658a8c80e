//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Indices into [`WINNING_LINES`] for the lines passing through each cell.
///
/// Center has four lines, corners three, edges two.
pub const LINES_THROUGH: [&[usize]; 9] = [
    &[0, 3, 6],
    &[0, 4],
    &[0, 5, 7],
    &[1, 3],
    &[1, 4, 6, 7],
    &[1, 5],
    &[2, 3, 7],
    &[2, 4],
    &[2, 5, 6],
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Decide whether the board holds three in a row.
    ///
    /// With `last_move`, only the lines through that cell are examined: a move
    /// can only complete a line it belongs to. Without it, all eight lines are
    /// checked.
    pub fn detect(cells: &[Cell; 9], last_move: Option<usize>) -> Option<Player> {
        match last_move {
            Some(pos) => LINES_THROUGH[pos]
                .iter()
                .find_map(|&line| Self::line_owner(cells, &WINNING_LINES[line])),
            None => WINNING_LINES
                .iter()
                .find_map(|line| Self::line_owner(cells, line)),
        }
    }

    fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let [a, b, c] = *line;
        if cells[a] == cells[b] && cells[a] == cells[c] {
            cells[a].to_player()
        } else {
            None
        }
    }
}
