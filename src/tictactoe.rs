//! Tic-Tac-Toe rules: boards, move histories, win detection and enumeration

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod moves;
pub mod validation;

pub use board::{BoardState, Cell, EMPTY_CELL_SYMBOL, Player, cells_to_string, parse_cells};
pub use game_tree::{EnumerationStats, enumerate, enumerate_from, for_each_terminal};
pub use lines::{LINES_THROUGH, LineAnalyzer, WINNING_LINES};
pub use moves::MoveSequence;
pub use validation::{ensure_no_play_after_win, parse_history};
