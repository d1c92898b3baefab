//! Versioned save record.
//!
//! The structured exchange format for local persistence: format version,
//! board size, the full move list, and the outcome. Field names and the
//! `"1.0"` version string match the original save file, so records from
//! either side load on the other.
//!
//! Loading trusts nothing: the board is rebuilt from the coordinates alone
//! (players re-derived by alternation, winner and winning line recomputed),
//! so an edited file can never produce an inconsistent state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::board::{Coord, BOARD_SIZE};
use crate::core::moves::Move;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::error::CorruptGameData;
use crate::replay::reconstruct::reconstruct;

/// Save format version this crate produces and accepts.
pub const FORMAT_VERSION: &str = "1.0";

/// A serialized game: the shape of the JSON save file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    pub version: String,
    pub board_size: usize,
    pub moves: Vec<Move>,
    pub winner: Option<Player>,
    /// Cells of the winning run; empty for drawn or unfinished games.
    pub winning_stones: Vec<Coord>,
}

impl SavedGame {
    /// Capture a live state into a save record.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let status = state.status();
        Self {
            version: FORMAT_VERSION.to_string(),
            board_size: BOARD_SIZE,
            moves: state.history().iter().copied().collect(),
            winner: status.winner(),
            winning_stones: status
                .winning_line()
                .map(|line| line.cells.to_vec())
                .unwrap_or_default(),
        }
    }

    /// Validate the record and rebuild the game it describes.
    ///
    /// Version and board size must match; everything else - players,
    /// winner, winning stones - is recomputed from the coordinate
    /// sequence via [`reconstruct`].
    pub fn into_state(self) -> Result<GameState, CorruptGameData> {
        if self.version != FORMAT_VERSION {
            warn!(version = %self.version, "rejecting save record");
            return Err(CorruptGameData::UnsupportedVersion {
                version: self.version,
            });
        }
        if self.board_size != BOARD_SIZE {
            warn!(size = self.board_size, "rejecting save record");
            return Err(CorruptGameData::BoardSizeMismatch {
                size: self.board_size,
                expected: BOARD_SIZE,
            });
        }

        let coords: Vec<Coord> = self.moves.iter().map(Move::coord).collect();
        reconstruct(&coords)
    }

    /// Serialize to pretty-printed JSON, the on-disk shape.
    pub fn to_json(&self) -> Result<String, CorruptGameData> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON save file.
    pub fn from_json(json: &str) -> Result<Self, CorruptGameData> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::GameStatus;

    fn won_game() -> GameState {
        let mut state = GameState::new();
        for &(row, col) in &[
            (7, 3),
            (0, 0),
            (7, 4),
            (0, 1),
            (7, 5),
            (0, 2),
            (7, 6),
            (0, 3),
            (7, 7),
        ] {
            state.apply_move(row, col).unwrap();
        }
        state
    }

    #[test]
    fn test_capture_won_game() {
        let record = SavedGame::from_state(&won_game());

        assert_eq!(record.version, "1.0");
        assert_eq!(record.board_size, 15);
        assert_eq!(record.moves.len(), 9);
        assert_eq!(record.winner, Some(Player::Black));
        assert_eq!(record.winning_stones.len(), 5);
        assert_eq!(record.winning_stones[0], Coord::new(7, 3));
    }

    #[test]
    fn test_capture_in_progress_game() {
        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();

        let record = SavedGame::from_state(&state);
        assert_eq!(record.winner, None);
        assert!(record.winning_stones.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let state = won_game();
        let json = SavedGame::from_state(&state).to_json().unwrap();
        let loaded = SavedGame::from_json(&json).unwrap().into_state().unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_recomputes_tampered_outcome() {
        // Claiming a White win in the file changes nothing: the outcome
        // is recomputed from the moves.
        let mut record = SavedGame::from_state(&won_game());
        record.winner = Some(Player::White);
        record.winning_stones.clear();

        let state = record.into_state().unwrap();
        assert_eq!(state.status().winner(), Some(Player::Black));
        assert_eq!(state.status().winning_line().unwrap().len(), 5);
    }

    #[test]
    fn test_load_ignores_embedded_players() {
        let mut record = SavedGame::from_state(&won_game());
        for mv in &mut record.moves {
            mv.player = Player::White;
        }

        let state = record.into_state().unwrap();
        assert_eq!(state.history().get(0).unwrap().player, Player::Black);
        assert_eq!(state.history().get(1).unwrap().player, Player::White);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut record = SavedGame::from_state(&won_game());
        record.version = "2.0".to_string();

        assert_eq!(
            record.into_state().unwrap_err(),
            CorruptGameData::UnsupportedVersion {
                version: "2.0".to_string()
            }
        );
    }

    #[test]
    fn test_board_size_mismatch_rejected() {
        let mut record = SavedGame::from_state(&won_game());
        record.board_size = 19;

        assert_eq!(
            record.into_state().unwrap_err(),
            CorruptGameData::BoardSizeMismatch {
                size: 19,
                expected: 15
            }
        );
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SavedGame::from_json("{not json").unwrap_err();
        assert!(matches!(err, CorruptGameData::Malformed(_)));
    }

    #[test]
    fn test_json_field_names_match_save_format() {
        let json = SavedGame::from_state(&won_game()).to_json().unwrap();
        assert!(json.contains("\"boardSize\": 15"));
        assert!(json.contains("\"winningStones\""));
        assert!(json.contains("\"moveNumber\""));
    }

    #[test]
    fn test_draw_saves_with_no_winner() {
        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();
        let mut record = SavedGame::from_state(&state);
        record.winner = None;

        let loaded = record.into_state().unwrap();
        assert_eq!(*loaded.status(), GameStatus::InProgress);
    }
}
