//! Ordered move histories

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered list of distinct cell indices in play order.
///
/// Position `i` belongs to X when `i` is even and to O otherwise. The type
/// only admits in-range, non-repeating cells and at most nine moves, so
/// replaying it onto an empty board always succeeds.
///
/// Stored inline (`Copy`, 10 bytes) since the enumerator produces a quarter
/// of a million of these.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct MoveSequence {
    cells: [u8; 9],
    len: u8,
}

impl MoveSequence {
    /// Maximum number of moves in a game
    pub const MAX_LEN: usize = 9;

    /// Create an empty history
    pub fn new() -> Self {
        MoveSequence {
            cells: [0; 9],
            len: 0,
        }
    }

    /// Build a history from cell positions, checking range and uniqueness.
    ///
    /// # Errors
    ///
    /// Returns error if there are more than nine moves, a position is outside
    /// 0-8, or a position repeats.
    pub fn try_from_positions(positions: &[usize]) -> Result<Self, crate::Error> {
        if positions.len() > Self::MAX_LEN {
            return Err(crate::Error::HistoryTooLong {
                got: positions.len(),
            });
        }

        let mut seen = [false; 9];
        let mut sequence = Self::new();
        for &pos in positions {
            if pos >= 9 {
                return Err(crate::Error::InvalidPosition { position: pos });
            }
            if seen[pos] {
                return Err(crate::Error::DuplicateMove {
                    position: pos,
                    history: digits(positions),
                });
            }
            seen[pos] = true;
            sequence = sequence.with_move(pos);
        }

        Ok(sequence)
    }

    /// Return a copy with one more move appended.
    ///
    /// Callers guarantee `pos` is in range, unused, and that fewer than nine
    /// moves were played.
    #[must_use = "with_move returns a new sequence; the original is unchanged"]
    pub(crate) fn with_move(&self, pos: usize) -> Self {
        debug_assert!(pos < 9 && (self.len as usize) < Self::MAX_LEN);
        let mut next = *self;
        next.cells[next.len as usize] = pos as u8;
        next.len += 1;
        next
    }

    /// Number of moves played
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cell played at turn `index`
    pub fn get(&self, index: usize) -> Option<usize> {
        (index < self.len()).then(|| self.cells[index] as usize)
    }

    /// The most recent move
    pub fn last(&self) -> Option<usize> {
        self.len().checked_sub(1).map(|i| self.cells[i] as usize)
    }

    /// Iterate cells in play order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.cells[..self.len()].iter().map(|&c| c as usize)
    }

    /// The first `len` moves
    pub fn prefix(&self, len: usize) -> Self {
        let mut prefix = *self;
        prefix.len = len.min(self.len()) as u8;
        prefix.cells[prefix.len as usize..].fill(0);
        prefix
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

fn digits(positions: &[usize]) -> String {
    positions.iter().map(|p| p.to_string()).collect()
}

impl Default for MoveSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in self.iter() {
            write!(f, "{pos}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<MoveSequence> for Vec<usize> {
    fn from(sequence: MoveSequence) -> Self {
        sequence.to_vec()
    }
}

impl TryFrom<Vec<usize>> for MoveSequence {
    type Error = crate::Error;

    fn try_from(positions: Vec<usize>) -> Result<Self, Self::Error> {
        Self::try_from_positions(&positions)
    }
}
