//! Cooperative replay sequencing.
//!
//! Replay re-traverses an existing history one move per external tick.
//! The presentation layer owns timing; the engine only offers synchronous
//! single-step application against a private cursor. The live `GameState`
//! is never mutated during replay - it only carries the gate that rejects
//! `apply_move`/`undo` while a replay is active - so cancel and finish
//! both restore the pre-replay state trivially.
//!
//! ## Usage
//!
//! ```
//! use rust_omok::GameState;
//!
//! let mut game = GameState::new();
//! game.apply_move(7, 7).unwrap();
//! game.apply_move(8, 8).unwrap();
//!
//! let mut replay = game.begin_replay().unwrap();
//! while let Some(snapshot) = replay.step() {
//!     // one tick: hand `snapshot` to the renderer
//!     let _ = snapshot.board();
//! }
//! assert_eq!(replay.current(), &game.clone_without_gate());
//! game.end_replay();
//! ```

use tracing::debug;

use crate::core::moves::MoveHistory;
use crate::core::state::GameState;
use crate::error::MoveError;

/// A replay in progress: the target history plus a cursor state being
/// refilled from an empty board, one step per tick.
#[derive(Clone, Debug)]
pub struct Replay {
    moves: MoveHistory,
    cursor: GameState,
    step: usize,
}

impl Replay {
    fn new(moves: MoveHistory) -> Self {
        Self {
            moves,
            cursor: GameState::new(),
            step: 0,
        }
    }

    /// Apply the next move to the cursor and return the intermediate
    /// state, or `None` once every move has been replayed.
    ///
    /// Cancellation is checked at this yield point by the driver: simply
    /// stop calling `step` and drop the replay.
    pub fn step(&mut self) -> Option<&GameState> {
        let mv = *self.moves.get(self.step)?;
        self.cursor.apply_trusted(mv);
        self.step += 1;
        Some(&self.cursor)
    }

    /// The cursor state after the moves replayed so far.
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.cursor
    }

    /// Moves replayed so far and the total, for progress display.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.step, self.moves.len())
    }

    /// Check whether every move has been replayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step == self.moves.len()
    }
}

impl GameState {
    /// Start a replay of this game's history.
    ///
    /// Sets the replay gate - `apply_move` and `undo` are rejected until
    /// [`GameState::end_replay`] - and returns a [`Replay`] over an O(1)
    /// snapshot of the history. Fails with [`MoveError::ReplayInProgress`]
    /// if a replay is already active. An empty history yields a replay
    /// that finishes immediately.
    pub fn begin_replay(&mut self) -> Result<Replay, MoveError> {
        if self.is_replaying() {
            return Err(MoveError::ReplayInProgress);
        }
        self.set_replaying(true);
        debug!(moves = self.history().len(), "replay started");
        Ok(Replay::new(self.history().clone()))
    }

    /// Clear the replay gate after a replay finishes or is canceled.
    ///
    /// The caller drives this cooperatively: the engine cannot observe the
    /// `Replay` being dropped.
    pub fn end_replay(&mut self) {
        self.set_replaying(false);
        debug!("replay ended");
    }

    /// This state with the replay gate cleared, for comparing against a
    /// finished replay cursor.
    #[must_use]
    pub fn clone_without_gate(&self) -> Self {
        let mut copy = self.clone();
        copy.set_replaying(false);
        copy
    }
}
