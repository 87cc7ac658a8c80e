//! Move selection: win, then block, then random

use std::fmt;

use log::debug;
use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::candidate::Possibility;
use crate::tictactoe::{Cell, Player};

/// Which policy tier produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Win,
    Block,
    Random,
    Hopeless,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Win => "win",
            Strategy::Block => "block",
            Strategy::Random => "random",
            Strategy::Hopeless => "hopeless",
        };
        f.write_str(label)
    }
}

/// Recommended next move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "move")]
    pub position: Option<usize>,
    pub strategy: Strategy,
    pub player: Player,
}

/// Pick the next move for `player` from ranked possibilities.
///
/// Tiers apply in order: a cell the player holds in one of their own winning
/// possibilities, else a cell the opponent holds in one of theirs, else a
/// uniformly random empty cell. Within a tier the earliest possibility wins,
/// and within a possibility the lowest empty cell. A full board or an empty
/// possibility list is hopeless.
pub fn suggest<R: Rng>(
    player: Player,
    cells: &[Cell; 9],
    possibilities: &[Possibility],
    rng: &mut R,
) -> Suggestion {
    let empty: Vec<usize> = (0..9).filter(|&pos| cells[pos] == Cell::Empty).collect();
    let respond = |position, strategy| Suggestion {
        position,
        strategy,
        player,
    };

    if empty.is_empty() || possibilities.is_empty() {
        return respond(None, Strategy::Hopeless);
    }

    if let Some(pos) = first_claimed_cell(player, &empty, possibilities) {
        return respond(Some(pos), Strategy::Win);
    }

    if let Some(pos) = first_claimed_cell(player.opponent(), &empty, possibilities) {
        return respond(Some(pos), Strategy::Block);
    }

    let pos = empty[rng.random_range(0..empty.len())];
    respond(Some(pos), Strategy::Random)
}

/// First empty cell that `owner` holds in a possibility `owner` went on to win
fn first_claimed_cell(owner: Player, empty: &[usize], possibilities: &[Possibility]) -> Option<usize> {
    let marker = owner.to_cell();
    possibilities
        .iter()
        .filter(|p| p.winner == Some(owner))
        .find_map(|p| empty.iter().copied().find(|&pos| p.cells()[pos] == marker))
}

/// Stateful advisor owning its random source
#[derive(Debug, Clone)]
pub struct MoveAdvisor {
    reachable_only: bool,
    rng: StdRng,
}

impl MoveAdvisor {
    /// Create an advisor; `seed` makes the random tier reproducible.
    pub fn new(reachable_only: bool, seed: Option<u64>) -> Self {
        Self {
            reachable_only,
            rng: StdRng::seed_from_u64(seed.unwrap_or_else(random)),
        }
    }

    /// Suggest a move, skipping unplayable possibilities when configured to.
    pub fn suggest(
        &mut self,
        player: Player,
        cells: &[Cell; 9],
        possibilities: &[Possibility],
    ) -> Suggestion {
        let suggestion = if self.reachable_only {
            let playable: Vec<Possibility> =
                possibilities.iter().filter(|p| p.playable).cloned().collect();
            debug!(
                "{} of {} possibilities playable",
                playable.len(),
                possibilities.len()
            );
            suggest(player, cells, &playable, &mut self.rng)
        } else {
            suggest(player, cells, possibilities, &mut self.rng)
        };
        debug!(
            "suggested {:?} for {} via {}",
            suggestion.position, player, suggestion.strategy
        );
        suggestion
    }
}
