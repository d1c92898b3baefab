//! State reconstruction from an untrusted coordinate list.
//!
//! Loaded files and decoded share codes supply only an ordered list of
//! coordinates (any embedded player fields are ignored). Rebuilding is
//! all-or-nothing: a single bad entry fails the whole list and no partial
//! board escapes to the caller.

use tracing::{debug, warn};

use crate::core::board::{Board, Coord};
use crate::core::moves::Move;
use crate::core::player::Player;
use crate::core::state::GameState;
use crate::error::CorruptGameData;

/// Rebuild a full game from an ordered coordinate list.
///
/// The player for entry `i` is derived strictly by alternation (Black for
/// even `i`), so a tampered source can never produce an inconsistent
/// board. Out-of-bounds entries, repeated cells, and lists longer than the
/// board fail with [`CorruptGameData`].
///
/// Win detection runs against the final move only, then draw detection -
/// the same settlement live play performs. Earlier prefixes are not
/// re-verified for premature wins: a list that "won early and kept
/// playing" reconstructs without error, matching live-recorded histories'
/// trust boundary.
pub fn reconstruct(coords: &[Coord]) -> Result<GameState, CorruptGameData> {
    if coords.len() > Board::capacity() {
        warn!(count = coords.len(), "rejecting oversized move list");
        return Err(CorruptGameData::TooManyMoves {
            count: coords.len(),
            capacity: Board::capacity(),
        });
    }

    // Validate every entry against a scratch board before touching the
    // state proper; the returned GameState is only built from clean input.
    let mut occupied = Board::new();
    for (index, &at) in coords.iter().enumerate() {
        if !at.in_bounds() {
            warn!(index, row = at.row, col = at.col, "rejecting out-of-bounds move");
            return Err(CorruptGameData::MoveOutOfBounds {
                index,
                row: at.row,
                col: at.col,
            });
        }
        if !occupied.is_empty_at(at) {
            warn!(index, row = at.row, col = at.col, "rejecting repeated cell");
            return Err(CorruptGameData::CellReused {
                index,
                row: at.row,
                col: at.col,
            });
        }
        occupied.place(at, Player::Black);
    }

    let mut state = GameState::new();
    for (index, &at) in coords.iter().enumerate() {
        let player = Player::for_turn(index);
        state.apply_trusted(Move::new(player, at, index as u32 + 1));
    }

    debug!(
        moves = coords.len(),
        over = state.is_over(),
        "game reconstructed"
    );
    Ok(state)
}
