//! Compact share codes.
//!
//! The URL-sized exchange format: each move serializes as two lowercase
//! hex digits of row followed by two of col, concatenated in play order
//! (so `070703` never occurs - codes are always a multiple of 4 digits).
//! No players, no outcome: both are recomputed on decode, so a code is
//! fully determined by the coordinate sequence and round-trips exactly.

use tracing::warn;

use crate::core::board::Coord;
use crate::core::state::GameState;
use crate::error::CorruptGameData;
use crate::replay::reconstruct::reconstruct;

/// Hex digits per encoded move.
const DIGITS_PER_MOVE: usize = 4;

/// Encode a game's history as a share code.
#[must_use]
pub fn encode(state: &GameState) -> String {
    let mut code = String::with_capacity(state.history().len() * DIGITS_PER_MOVE);
    for mv in state.history() {
        code.push_str(&format!("{:02x}{:02x}", mv.row, mv.col));
    }
    code
}

/// Decode a share code into its coordinate sequence.
///
/// The code must be an even multiple of 4 hex digits; anything else is
/// [`CorruptGameData`]. Decoded values are not bounds-checked here - that
/// is [`reconstruct`]'s job, shared with every other untrusted source.
pub fn decode(code: &str) -> Result<Vec<Coord>, CorruptGameData> {
    if code.len() % DIGITS_PER_MOVE != 0 {
        warn!(len = code.len(), "rejecting truncated share code");
        return Err(CorruptGameData::TruncatedShareCode { len: code.len() });
    }

    let mut coords = Vec::with_capacity(code.len() / DIGITS_PER_MOVE);
    for (i, chunk) in code.as_bytes().chunks_exact(DIGITS_PER_MOVE).enumerate() {
        let offset = i * DIGITS_PER_MOVE;
        let row = parse_pair(&chunk[0..2], offset)?;
        let col = parse_pair(&chunk[2..4], offset + 2)?;
        coords.push(Coord::new(row, col));
    }
    Ok(coords)
}

/// Decode a share code and rebuild the full game it encodes.
pub fn decode_state(code: &str) -> Result<GameState, CorruptGameData> {
    reconstruct(&decode(code)?)
}

fn parse_pair(digits: &[u8], offset: usize) -> Result<u8, CorruptGameData> {
    let hi = hex_value(digits[0], offset)?;
    let lo = hex_value(digits[1], offset + 1)?;
    Ok(hi * 16 + lo)
}

fn hex_value(digit: u8, offset: usize) -> Result<u8, CorruptGameData> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => {
            warn!(offset, "rejecting share code digit");
            Err(CorruptGameData::InvalidShareDigit { offset })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::Player;

    #[test]
    fn test_encode_format() {
        let mut state = GameState::new();
        state.apply_move(7, 7).unwrap();
        state.apply_move(8, 14).unwrap();
        state.apply_move(0, 10).unwrap();

        assert_eq!(encode(&state), "0707080e000a");
    }

    #[test]
    fn test_empty_game_encodes_empty() {
        assert_eq!(encode(&GameState::new()), "");
        assert_eq!(decode("").unwrap(), vec![]);
    }

    #[test]
    fn test_decode_coordinates() {
        let coords = decode("0707080e").unwrap();
        assert_eq!(coords, vec![Coord::new(7, 7), Coord::new(8, 14)]);
    }

    #[test]
    fn test_decode_accepts_uppercase() {
        assert_eq!(decode("080E").unwrap(), vec![Coord::new(8, 14)]);
    }

    #[test]
    fn test_round_trip() {
        let mut state = GameState::new();
        for &(row, col) in &[(7, 7), (8, 8), (7, 8), (8, 9), (7, 9), (8, 10)] {
            state.apply_move(row, col).unwrap();
        }

        let rebuilt = decode_state(&encode(&state)).unwrap();
        assert_eq!(rebuilt, state);
    }

    #[test]
    fn test_decoded_players_alternate() {
        let state = decode_state("07070808").unwrap();
        assert_eq!(state.history().get(0).unwrap().player, Player::Black);
        assert_eq!(state.history().get(1).unwrap().player, Player::White);
    }

    #[test]
    fn test_truncated_code_rejected() {
        assert_eq!(
            decode("070").unwrap_err(),
            CorruptGameData::TruncatedShareCode { len: 3 }
        );
        assert_eq!(
            decode("0707aa").unwrap_err(),
            CorruptGameData::TruncatedShareCode { len: 6 }
        );
    }

    #[test]
    fn test_non_hex_digit_rejected() {
        assert_eq!(
            decode("07zz").unwrap_err(),
            CorruptGameData::InvalidShareDigit { offset: 2 }
        );
    }

    #[test]
    fn test_out_of_bounds_code_rejected_by_reconstruction() {
        // "ff" decodes fine as hex but 255 is far off the board.
        let err = decode_state("ffff").unwrap_err();
        assert_eq!(
            err,
            CorruptGameData::MoveOutOfBounds {
                index: 0,
                row: 255,
                col: 255
            }
        );
    }

    #[test]
    fn test_decoded_win_detected_on_last_move() {
        // Black row-0 five-run, White filler on row 1.
        let code = "000001010001010200020103000301040004";
        let state = decode_state(code).unwrap();
        assert_eq!(state.status().winner(), Some(Player::Black));
    }
}
