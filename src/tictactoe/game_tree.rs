//! Exhaustive enumeration of terminal move sequences

use log::debug;

use super::{Player, board::BoardState, lines::LineAnalyzer, moves::MoveSequence};

/// Pending node of the depth-first walk.
///
/// Each frame owns its own board copy; `next` is the lowest cell index not
/// yet tried as a child.
struct Frame {
    state: BoardState,
    moves: MoveSequence,
    next: usize,
}

/// Enumerate every terminal move sequence from the empty board, X to move.
///
/// A sequence is terminal when its last move completes a line or fills the
/// board. Children are explored in ascending cell order, so the output and
/// its order are identical on every run.
pub fn enumerate() -> Vec<MoveSequence> {
    enumerate_from(&MoveSequence::new())
}

/// Enumerate the terminal continuations of `prefix`.
///
/// The prefix itself is returned alone when it is already terminal.
pub fn enumerate_from(prefix: &MoveSequence) -> Vec<MoveSequence> {
    let mut games = Vec::new();
    for_each_terminal(prefix, |moves, _, _| games.push(*moves));
    debug!(
        "enumerated {} terminal sequences from prefix [{prefix}]",
        games.len()
    );
    games
}

/// Walk the game tree below `prefix`, calling `visit` with each terminal
/// sequence, its final board and its winner.
///
/// Uses an explicit stack bounded by the nine-move depth of the game.
pub fn for_each_terminal<F>(prefix: &MoveSequence, mut visit: F)
where
    F: FnMut(&MoveSequence, &BoardState, Option<Player>),
{
    let root = BoardState::from_moves(prefix);
    let root_winner = prefix
        .last()
        .and_then(|pos| LineAnalyzer::detect(&root.cells, Some(pos)));
    if root_winner.is_some() || root.is_full() {
        visit(prefix, &root, root_winner);
        return;
    }

    let mut stack = Vec::with_capacity(MoveSequence::MAX_LEN + 1);
    stack.push(Frame {
        state: root,
        moves: *prefix,
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(pos) = (frame.next..9).find(|&pos| frame.state.is_empty(pos)) else {
            stack.pop();
            continue;
        };
        frame.next = pos + 1;

        let state = frame.state.place(pos);
        let moves = frame.moves.with_move(pos);
        let winner = LineAnalyzer::detect(&state.cells, Some(pos));

        if winner.is_some() || state.is_full() {
            visit(&moves, &state, winner);
        } else {
            stack.push(Frame {
                state,
                moves,
                next: 0,
            });
        }
    }
}

/// Summary of an enumeration: sequence lengths and outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationStats {
    pub total_games: usize,
    /// Number of games by move count, indexed 0-9
    pub length_histogram: [usize; 10],
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl EnumerationStats {
    /// Gather statistics over every terminal continuation of `prefix`
    pub fn collect(prefix: &MoveSequence) -> Self {
        let mut stats = Self::default();
        for_each_terminal(prefix, |moves, _, winner| stats.record(moves.len(), winner));
        stats
    }

    fn record(&mut self, length: usize, winner: Option<Player>) {
        self.total_games += 1;
        self.length_histogram[length] += 1;
        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Mean number of moves per game
    pub fn average_length(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        let total_moves: usize = self
            .length_histogram
            .iter()
            .enumerate()
            .map(|(len, count)| len * count)
            .sum();
        total_moves as f64 / self.total_games as f64
    }
}
