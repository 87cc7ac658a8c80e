//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{lines::LineAnalyzer, moves::MoveSequence};

/// Character used for an empty cell in board strings exchanged with the index
pub const EMPTY_CELL_SYMBOL: char = '⬚';

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY_CELL_SYMBOL,
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            EMPTY_CELL_SYMBOL => Some(Cell::Empty),
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player occupying this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// Parse a 9-character board string (`X`, `O`, `⬚`) into cells.
///
/// # Errors
///
/// Returns error if the string does not hold exactly 9 characters or any
/// character is not a valid cell representation.
pub fn parse_cells(board: &str) -> Result<[Cell; 9], crate::Error> {
    let got = board.chars().count();
    if got != 9 {
        return Err(crate::Error::InvalidBoardLength {
            expected: 9,
            got,
            context: board.to_string(),
        });
    }

    let mut cells = [Cell::Empty; 9];
    for (i, c) in board.chars().enumerate() {
        cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
            character: c,
            position: i,
            context: board.to_string(),
        })?;
    }

    Ok(cells)
}

/// Render cells as the 9-character board string used by the similarity index
pub fn cells_to_string(cells: &[Cell; 9]) -> String {
    cells.iter().map(|&c| c.to_char()).collect()
}

/// Board cells together with the player whose turn it is.
///
/// The player to move travels with the board, so replay never has to infer
/// it from the number of occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Replay a move sequence from the empty board, X first.
    ///
    /// `MoveSequence` guarantees in-range, distinct cells, so every placement
    /// lands on an empty cell.
    pub fn from_moves(moves: &MoveSequence) -> Self {
        let mut state = Self::new();
        for pos in moves.iter() {
            state = state.place(pos);
        }
        state
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Make a move and return a new board state
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<BoardState, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        Ok(self.place(pos))
    }

    /// Place the current player's marker on a cell known to be empty
    pub(crate) fn place(&self, pos: usize) -> BoardState {
        debug_assert!(self.is_empty(pos), "cell {pos} already occupied");
        let mut next = *self;
        next.cells[pos] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        next
    }

    /// Get the winner if there is one, checking all eight lines
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::detect(&self.cells, None)
    }

    /// The 9-character board string (`X`, `O`, `⬚`)
    pub fn board_string(&self) -> String {
        cells_to_string(&self.cells)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_alternates_players_starting_with_x() {
        let moves = MoveSequence::try_from_positions(&[4, 0, 8]).unwrap();
        let state = BoardState::from_moves(&moves);

        assert_eq!(state.get(4), Cell::X);
        assert_eq!(state.get(0), Cell::O);
        assert_eq!(state.get(8), Cell::X);
        assert_eq!(state.occupied_count(), 3);
        assert_eq!(state.to_move, Player::O);
        assert_eq!(state.board_string(), "O⬚⬚⬚X⬚⬚⬚X");
    }

    #[test]
    fn empty_history_builds_empty_board() {
        let state = BoardState::from_moves(&MoveSequence::new());
        assert_eq!(state, BoardState::new());
        assert_eq!(state.empty_positions(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn make_move_rejects_occupied_and_out_of_range() {
        let state = BoardState::new().make_move(3).unwrap();
        assert!(matches!(
            state.make_move(3),
            Err(crate::Error::InvalidMove { position: 3 })
        ));
        assert!(matches!(
            state.make_move(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn parse_cells_counts_characters_not_bytes() {
        let cells = parse_cells("XO⬚⬚⬚⬚⬚⬚⬚").unwrap();
        assert_eq!(cells[0], Cell::X);
        assert_eq!(cells[1], Cell::O);
        assert!(cells[2..].iter().all(|&c| c == Cell::Empty));
        assert_eq!(cells_to_string(&cells), "XO⬚⬚⬚⬚⬚⬚⬚");
    }

    #[test]
    fn parse_cells_rejects_malformed_boards() {
        assert!(matches!(
            parse_cells("XO⬚"),
            Err(crate::Error::InvalidBoardLength { got: 3, .. })
        ));
        assert!(matches!(
            parse_cells("XO⬚⬚Z⬚⬚⬚⬚"),
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 4,
                ..
            })
        ));
        assert!(matches!(
            parse_cells("X..⬚⬚⬚⬚O⬚"),
            Err(crate::Error::InvalidCellCharacter {
                character: '.',
                position: 1,
                ..
            })
        ));
        assert!(matches!(
            parse_cells("X⬚⬚ ⬚⬚⬚O⬚"),
            Err(crate::Error::InvalidCellCharacter {
                character: ' ',
                position: 3,
                ..
            })
        ));
    }

    #[test]
    fn display_renders_rows() {
        let moves = MoveSequence::try_from_positions(&[0, 4]).unwrap();
        let rendered = BoardState::from_moves(&moves).to_string();
        assert_eq!(rendered, "X⬚⬚\n⬚O⬚\n⬚⬚⬚\n");
    }
}
