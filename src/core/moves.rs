//! Move records and the ordered move history.
//!
//! ## Move
//!
//! An immutable record of one placement: who, where, and its 1-based
//! position in the game. Serialized in save records with the original
//! file's camelCase field names.
//!
//! ## MoveHistory
//!
//! Insertion order is play order. Backed by `im::Vector` so replay can
//! keep an immutable snapshot of the full history alive in O(1) while the
//! live state keeps mutating.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Coord;
use super::player::Player;

/// One recorded placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// The player who placed the stone.
    pub player: Player,

    pub row: u8,
    pub col: u8,

    /// 1-based position in history: the first move is number 1.
    pub move_number: u32,
}

impl Move {
    /// Create a move record.
    #[must_use]
    pub const fn new(player: Player, at: Coord, move_number: u32) -> Self {
        Self {
            player,
            row: at.row,
            col: at.col,
            move_number,
        }
    }

    /// The placement coordinate.
    #[must_use]
    pub const fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} {}", self.move_number, self.player, self.coord())
    }
}

/// Ordered sequence of moves, play order = insertion order.
///
/// Invariants maintained by the engine: `history[i].move_number == i + 1`,
/// players alternate starting with Black, and no coordinate repeats.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vector<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            moves: Vector::new(),
        }
    }

    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves have been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The most recent move.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Get a move by 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    /// Iterate over moves in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }

    /// Extract the coordinate sequence, in play order.
    ///
    /// This is the share-code payload: players are not included because
    /// they are re-derived by alternation on decode.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coord> {
        self.moves.iter().map(Move::coord).collect()
    }

    /// The move number the next placement will receive.
    #[must_use]
    pub fn next_number(&self) -> u32 {
        self.moves.len() as u32 + 1
    }

    /// Append a move. Crate-private: the engine assigns numbers and
    /// players; callers cannot push arbitrary records.
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert_eq!(mv.move_number, self.next_number());
        debug_assert_eq!(mv.player, Player::for_turn(self.moves.len()));
        self.moves.push_back(mv);
    }

    /// Pop the most recent move. Crate-private: used by undo.
    pub(crate) fn pop(&mut self) -> Option<Move> {
        self.moves.pop_back()
    }
}

impl<'a> IntoIterator for &'a MoveHistory {
    type Item = &'a Move;
    type IntoIter = im::vector::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
