//! Stone ownership and turn alternation.
//!
//! Black always moves first. The player to move is never stored as its own
//! field anywhere in the engine: it is derived from history-length parity
//! via [`Player::for_turn`], so undo, replay, and loading can never leave a
//! stale current-player value behind.

use serde::{Deserialize, Serialize};

/// A stone owner. Black moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opposing player.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Player to move when `moves_played` stones are already on the board.
    ///
    /// Black if even, White if odd. This parity rule is the single source
    /// of truth for turn order across live play, undo, and reconstruction.
    #[must_use]
    pub const fn for_turn(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}
