//! # rust-omok
//!
//! A five-in-a-row (Omok/Gomoku) rule engine for a fixed 15x15 board.
//!
//! ## Design Principles
//!
//! 1. **Owned state, no globals**: every game is a [`GameState`] value;
//!    operations are methods, so multiple games coexist and tests stay
//!    simple.
//!
//! 2. **Turn order is derived, never stored**: the player to move is
//!    always history-length parity. Undo, replay, and loading cannot
//!    desync a current-player field that does not exist.
//!
//! 3. **Untrusted input is rebuilt, not believed**: loaded files and
//!    share codes contribute coordinates only; players and outcomes are
//!    recomputed, and validation is all-or-nothing.
//!
//! ## Architecture
//!
//! - Win detection scans only the 4 axes through the newest stone - a
//!   five-run can only newly form there - so each move settles in O(1)
//!   relative to board size.
//!
//! - The move history is an `im` persistent vector: replay keeps an O(1)
//!   immutable snapshot alive while the presentation layer ticks through
//!   [`Replay::step`] at its own pace.
//!
//! - Rendering, timers, clipboard, and file I/O live outside this crate;
//!   collaborators call [`GameState::apply_move`], [`GameState::undo`],
//!   [`reconstruct`], and the `serial` codecs, and read `board`,
//!   `history`, and `status`.
//!
//! ## Modules
//!
//! - `core`: player, board, moves, and the game state machine
//! - `rules`: win detection
//! - `replay`: reconstruction from untrusted input, replay sequencing
//! - `serial`: JSON save records and hex share codes
//! - `error`: the recoverable error taxonomy

pub mod core;
pub mod error;
pub mod replay;
pub mod rules;
pub mod serial;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, GameState, GameStatus, Move, MoveHistory, Player, BOARD_SIZE, WIN_COUNT,
};

pub use crate::error::{CorruptGameData, MoveError};

pub use crate::replay::{reconstruct, Replay};

pub use crate::rules::{check_win, Axis, WinningLine};

pub use crate::serial::{SavedGame, FORMAT_VERSION};
