//! Trajectory embeddings for similarity search
//!
//! A move history becomes 9 slots of 9-wide one-hot blocks, one slot per turn,
//! concatenated in play order. Slot position matters: two games reaching the
//! same final board through different move orders get different vectors.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tictactoe::MoveSequence;

/// Number of move slots in an embedding
pub const SLOTS: usize = 9;

/// Width of the one-hot block for each slot
pub const SLOT_WIDTH: usize = 9;

/// Total embedding length
pub const EMBEDDING_DIM: usize = SLOTS * SLOT_WIDTH;

/// How slots past the end of a short history are encoded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    /// Unplayed slots are all zeros, distinct from every real cell
    #[default]
    Blank,
    /// Unplayed slots encode cell 0, matching indices seeded by the legacy
    /// dataset generator
    FirstCell,
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Padding::Blank => "blank",
            Padding::FirstCell => "first-cell",
        };
        f.write_str(label)
    }
}

impl FromStr for Padding {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "blank" | "zero" | "none" => Ok(Padding::Blank),
            "first-cell" | "first_cell" | "legacy" => Ok(Padding::FirstCell),
            _ => Err(crate::Error::ParsePadding {
                input: s.to_string(),
                expected: "blank, first-cell".to_string(),
            }),
        }
    }
}

/// Encode a move history as an [`EMBEDDING_DIM`]-length vector
pub fn encode(moves: &MoveSequence, padding: Padding) -> Vec<f32> {
    let mut vector = vec![0.0; EMBEDDING_DIM];
    for slot in 0..SLOTS {
        let cell = match (moves.get(slot), padding) {
            (Some(cell), _) => cell,
            (None, Padding::FirstCell) => 0,
            (None, Padding::Blank) => continue,
        };
        vector[slot * SLOT_WIDTH + cell] = 1.0;
    }
    vector
}

/// Recover the move history from a blank-padded embedding.
///
/// # Errors
///
/// Returns error if the vector has the wrong length or its blocks do not
/// describe a valid history.
pub fn decode(vector: &[f32]) -> Result<MoveSequence, crate::Error> {
    if vector.len() != EMBEDDING_DIM {
        return Err(crate::Error::InvalidEmbeddingLength {
            expected: EMBEDDING_DIM,
            got: vector.len(),
        });
    }

    let positions: Vec<usize> = vector
        .chunks(SLOT_WIDTH)
        .map_while(|block| block.iter().position(|&v| v == 1.0))
        .collect();
    MoveSequence::try_from_positions(&positions)
}

/// Render a vector as a compact bit string, one character per component
pub fn to_bit_string(vector: &[f32]) -> String {
    vector
        .iter()
        .map(|&v| if v == 0.0 { '0' } else { '1' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(positions: &[usize]) -> MoveSequence {
        MoveSequence::try_from_positions(positions).unwrap()
    }

    #[test]
    fn one_hot_per_played_slot() {
        let vector = encode(&seq(&[4, 0]), Padding::Blank);
        assert_eq!(vector.len(), EMBEDDING_DIM);
        assert_eq!(vector[4], 1.0);
        assert_eq!(vector[9], 1.0);
        assert_eq!(vector.iter().filter(|&&v| v == 1.0).count(), 2);
    }

    #[test]
    fn blank_padding_leaves_zeros() {
        let vector = encode(&MoveSequence::new(), Padding::Blank);
        assert!(vector.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn first_cell_padding_marks_cell_zero() {
        let vector = encode(&seq(&[4]), Padding::FirstCell);
        assert_eq!(vector[4], 1.0);
        for slot in 1..SLOTS {
            assert_eq!(vector[slot * SLOT_WIDTH], 1.0);
        }
        assert_eq!(vector.iter().filter(|&&v| v == 1.0).count(), SLOTS);
    }

    #[test]
    fn move_order_changes_the_embedding() {
        let a = encode(&seq(&[0, 4, 8]), Padding::Blank);
        let b = encode(&seq(&[8, 4, 0]), Padding::Blank);
        assert_ne!(a, b);
    }

    #[test]
    fn decode_inverts_blank_encoding() {
        let moves = seq(&[2, 4, 6, 8]);
        assert_eq!(decode(&encode(&moves, Padding::Blank)).unwrap(), moves);
        assert!(matches!(
            decode(&[0.0; 10]),
            Err(crate::Error::InvalidEmbeddingLength { got: 10, .. })
        ));
    }

    #[test]
    fn bit_string_matches_components() {
        let bits = to_bit_string(&encode(&seq(&[1]), Padding::Blank));
        assert_eq!(bits.len(), EMBEDDING_DIM);
        assert!(bits.starts_with("010000000000"));
    }

    #[test]
    fn padding_parses_aliases() {
        assert_eq!("legacy".parse::<Padding>().unwrap(), Padding::FirstCell);
        assert_eq!(" Blank ".parse::<Padding>().unwrap(), Padding::Blank);
        assert!("ones".parse::<Padding>().is_err());
        assert_eq!(Padding::FirstCell.to_string(), "first-cell");
    }
}
