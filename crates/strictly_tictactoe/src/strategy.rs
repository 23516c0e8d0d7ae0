//! Heuristic move selection for the computer opponent.
//!
//! The opponent plays the first rule that applies:
//!
//! 1. complete one of its own lines,
//! 2. block a line the other marker would complete,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take any random free cell.
//!
//! Rules 1 and 2 take the lowest free index that works. This is not optimal
//! play; a fork (two threats at once) beats it.

use super::position::Position;
use super::rules;
use super::types::{Board, Player};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Source of tie-breaking choices.
pub trait Chooser {
    /// Picks an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<C: Chooser + ?Sized> Chooser for &mut C {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Uniform chooser backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomChooser<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomChooser<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomChooser<SmallRng> {
    /// Reproducible chooser for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Chooser seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Chooser for RandomChooser<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Which heuristic rule produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Completes the opponent's own line.
    Win,
    /// Stops the other marker completing a line.
    Block,
    /// The center cell.
    Center,
    /// A random free corner.
    Corner,
    /// A random free cell.
    Any,
}

/// A chosen cell and the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that selected it.
    pub tier: Tier,
}

/// Lowest-index empty cell where `marker` would complete a line.
///
/// Each candidate is tried on a copy of the board, so `board` is unchanged.
#[instrument(level = "trace", skip(board))]
pub fn find_winning_move(board: &Board, marker: Player) -> Option<Position> {
    Position::valid_moves(board).into_iter().find(|pos| {
        let mut trial = *board;
        trial.place(pos.to_index(), marker);
        rules::has_line(&trial, marker)
    })
}

/// Picks the computer's move for `marker`.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, chooser), fields(board = %board.display()))]
pub fn choose_move(board: &Board, marker: Player, chooser: &mut (impl Chooser + ?Sized)) -> Option<Decision> {
    let decision = if let Some(position) = find_winning_move(board, marker) {
        Decision { position, tier: Tier::Win }
    } else if let Some(position) = find_winning_move(board, marker.opponent()) {
        Decision { position, tier: Tier::Block }
    } else if board.is_empty(Position::Center.to_index()) {
        Decision {
            position: Position::Center,
            tier: Tier::Center,
        }
    } else if let Some(position) = pick_among(&free_corners(board), chooser) {
        Decision {
            position,
            tier: Tier::Corner,
        }
    } else {
        let position = pick_among(&Position::valid_moves(board), chooser)?;
        Decision { position, tier: Tier::Any }
    };

    debug!(position = %decision.position, tier = ?decision.tier, "Opponent chose move");
    Some(decision)
}

fn free_corners(board: &Board) -> Vec<Position> {
    Position::CORNERS
        .into_iter()
        .filter(|pos| board.is_empty(pos.to_index()))
        .collect()
}

fn pick_among(candidates: &[Position], chooser: &mut (impl Chooser + ?Sized)) -> Option<Position> {
    if candidates.is_empty() {
        return None;
    }
    // Out-of-range picks from a misbehaving chooser clamp to the last candidate.
    let index = chooser.pick(candidates.len()).min(candidates.len() - 1);
    Some(candidates[index])
}
