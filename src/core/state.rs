//! Game state: board, history, status, and the live-play operations.
//!
//! ## GameState
//!
//! The single owned state object. All mutation goes through `apply_move`,
//! `undo`, and the crate-private trusted replay path - there are no
//! ambient globals, so multiple games can run side by side and tests stay
//! straightforward.
//!
//! ## Status
//!
//! Terminal detection runs inside `apply_move`: win first (four axes
//! through the placed stone), then draw (board full). A board-filling move
//! that completes a run is a `Won`, never a `Draw`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{Board, Coord};
use super::moves::{Move, MoveHistory};
use super::player::Player;
use crate::error::MoveError;
use crate::rules::win::{check_win, WinningLine};

/// Where a game stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: WinningLine },
    Draw,
}

impl GameStatus {
    /// Check for a terminal status (`Won` or `Draw`).
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winner, if the game was won.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The winning line, if the game was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// A complete game: board, history, status, and the replay gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    history: MoveHistory,
    status: GameStatus,
    /// Set between `begin_replay` and `end_replay`; while set, live-play
    /// mutation is rejected so the replay driver is the only reader that
    /// matters.
    replaying: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh game with an empty board, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            status: GameStatus::InProgress,
            replaying: false,
        }
    }

    /// The board grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move history, play order.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Check for a terminal status.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The player whose turn it is, derived from history-length parity.
    /// Meaningful only while the game is in progress.
    #[must_use]
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.history.len())
    }

    /// Whether a replay is currently gating live play.
    #[must_use]
    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Place a stone for the player to move.
    ///
    /// Rejects without mutating: [`MoveError::ReplayInProgress`] while a
    /// replay is active, [`MoveError::GameAlreadyOver`] after a terminal
    /// status, [`MoveError::OutOfBounds`], and [`MoveError::CellOccupied`].
    ///
    /// On success the stone is placed, the move is appended with the next
    /// 1-based number, and the returned status reflects win detection at
    /// the placed coordinate followed by draw detection.
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        if self.replaying {
            return Err(MoveError::ReplayInProgress);
        }
        if self.status.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        if row >= crate::core::board::BOARD_SIZE || col >= crate::core::board::BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }
        let at = Coord::new(row as u8, col as u8);
        if !self.board.is_empty_at(at) {
            return Err(MoveError::CellOccupied {
                row: at.row,
                col: at.col,
            });
        }

        let player = self.to_move();
        self.board.place(at, player);
        self.history
            .push(Move::new(player, at, self.history.next_number()));

        self.status = self.settle_status(at, player);
        debug!(%player, at = %at, moves = self.history.len(), "stone placed");
        Ok(self.status.clone())
    }

    /// Take back the most recent move.
    ///
    /// Clears the stone, drops the move record, and resets the status to
    /// `InProgress` (clearing any `Won`/`Draw`). Rejected while a replay
    /// is active; returns [`MoveError::NothingToUndo`] on an empty history
    /// without mutating anything.
    pub fn undo(&mut self) -> Result<Move, MoveError> {
        if self.replaying {
            return Err(MoveError::ReplayInProgress);
        }
        let mv = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.board.clear(mv.coord());
        self.status = GameStatus::InProgress;
        debug!(undone = %mv, "move undone");
        Ok(mv)
    }

    /// Win-then-draw settlement for the stone just placed at `at`.
    fn settle_status(&self, at: Coord, player: Player) -> GameStatus {
        if let Some(line) = check_win(&self.board, at) {
            return GameStatus::Won { player, line };
        }
        if self.history.len() == Board::capacity() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// Apply a move from an already-validated history: no legality checks,
    /// no replay gating. Used by reconstruction and replay stepping, which
    /// validate (or trust) their input up front.
    pub(crate) fn apply_trusted(&mut self, mv: Move) {
        let at = mv.coord();
        self.board.place(at, mv.player);
        self.history.push(mv);
        self.status = self.settle_status(at, mv.player);
    }

    /// Raise the replay gate. Crate-private; see `replay::sequencer`.
    pub(crate) fn set_replaying(&mut self, replaying: bool) {
        self.replaying = replaying;
    }
}
