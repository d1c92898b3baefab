//! Error taxonomy.
//!
//! Every error here is a local, recoverable-by-caller condition - the
//! engine never panics for expected illegal input. Live-play rejections
//! (`MoveError`) leave the state untouched; load/decode failures
//! (`CorruptGameData`) are all-or-nothing and never expose a partially
//! rebuilt game.

use crate::core::board::BOARD_SIZE;

/// Rejection of a live-play operation (`apply_move`, `undo`, replay start).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: usize, col: usize },

    #[error("({row}, {col}) is already occupied")]
    CellOccupied { row: u8, col: u8 },

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("a replay is in progress")]
    ReplayInProgress,

    #[error("no moves to undo")]
    NothingToUndo,
}

/// Rejection of an externally supplied game: a loaded save record or a
/// decoded share code failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CorruptGameData {
    #[error("move {index} is out of bounds at ({row}, {col})")]
    MoveOutOfBounds { index: usize, row: u8, col: u8 },

    #[error("move {index} repeats occupied cell ({row}, {col})")]
    CellReused { index: usize, row: u8, col: u8 },

    #[error("{count} moves exceed the board capacity of {capacity}")]
    TooManyMoves { count: usize, capacity: usize },

    #[error("share code length {len} is not a multiple of 4")]
    TruncatedShareCode { len: usize },

    #[error("share code has a non-hex digit at offset {offset}")]
    InvalidShareDigit { offset: usize },

    #[error("unsupported save format version {version:?}")]
    UnsupportedVersion { version: String },

    #[error("save declares board size {size}, expected {expected}")]
    BoardSizeMismatch { size: usize, expected: usize },

    #[error("malformed save record: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CorruptGameData {
    fn from(err: serde_json::Error) -> Self {
        CorruptGameData::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        let err = MoveError::OutOfBounds { row: 20, col: 3 };
        assert_eq!(format!("{}", err), "(20, 3) is outside the 15x15 board");

        let err = MoveError::CellOccupied { row: 7, col: 7 };
        assert_eq!(format!("{}", err), "(7, 7) is already occupied");
    }

    #[test]
    fn test_corrupt_data_messages() {
        let err = CorruptGameData::CellReused {
            index: 4,
            row: 7,
            col: 7,
        };
        assert_eq!(format!("{}", err), "move 4 repeats occupied cell (7, 7)");

        let err = CorruptGameData::TruncatedShareCode { len: 6 };
        assert!(format!("{}", err).contains("multiple of 4"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("notjson").unwrap_err();
        let err: CorruptGameData = json_err.into();
        assert!(matches!(err, CorruptGameData::Malformed(_)));
    }
}
