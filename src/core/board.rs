//! Board grid and coordinates.
//!
//! The board is a fixed 15x15 grid of intersections, each empty or holding
//! one stone. It is owned by `GameState` and mutated only through move
//! application, undo, and trusted replay steps - there is no public setter.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Board edge length. The grid is `BOARD_SIZE` x `BOARD_SIZE`.
pub const BOARD_SIZE: usize = 15;

/// Number of contiguous same-player stones required to win.
pub const WIN_COUNT: usize = 5;

/// A board intersection, 0-based from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. Validity is not checked; see [`Coord::in_bounds`].
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check that both components fall inside the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// Offset by a signed step, returning `None` when the result leaves
    /// the board. Used by the win scan to walk along an axis.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = (self.row as i16) + (d_row as i16);
        let col = (self.col as i16) + (d_col as i16);
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Coord {
    /// Traditional board label: column letter A-O, row counted from the
    /// top edge (row 0 prints as 15).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = (b'A' + self.col) as char;
        write!(f, "{}{}", letter, BOARD_SIZE - self.row as usize)
    }
}

/// The 15x15 grid of intersections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the stone at a coordinate, `None` for an empty intersection.
    ///
    /// The coordinate must be in bounds; callers validate before lookup.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Player> {
        self.cells[at.row as usize][at.col as usize]
    }

    /// Check whether an intersection is empty.
    #[must_use]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Total number of intersections (the draw threshold).
    #[must_use]
    pub const fn capacity() -> usize {
        BOARD_SIZE * BOARD_SIZE
    }

    /// Place a stone. Crate-private: only move application and replay
    /// stepping write to the grid, after their own legality checks.
    pub(crate) fn place(&mut self, at: Coord, player: Player) {
        self.cells[at.row as usize][at.col as usize] = Some(player);
    }

    /// Clear an intersection. Crate-private: used by undo.
    pub(crate) fn clear(&mut self, at: Coord) {
        self.cells[at.row as usize][at.col as usize] = None;
    }

    /// Iterate over all occupied intersections.
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|p| (Coord::new(r as u8, c as u8), p))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(14, 14).in_bounds());
        assert!(!Coord::new(15, 0).in_bounds());
        assert!(!Coord::new(0, 15).in_bounds());
    }

    #[test]
    fn test_coord_offset() {
        let c = Coord::new(7, 7);
        assert_eq!(c.offset(1, -1), Some(Coord::new(8, 6)));
        assert_eq!(Coord::new(0, 0).offset(-1, 0), None);
        assert_eq!(Coord::new(14, 14).offset(0, 1), None);
    }

    #[test]
    fn test_coord_display() {
        // Column letter, row number from the top edge.
        assert_eq!(format!("{}", Coord::new(0, 0)), "A15");
        assert_eq!(format!("{}", Coord::new(14, 14)), "O1");
        assert_eq!(format!("{}", Coord::new(7, 7)), "H8");
    }

    #[test]
    fn test_board_starts_empty() {
        let board = Board::new();
        assert!(board.is_empty_at(Coord::new(7, 7)));
        assert_eq!(board.stones().count(), 0);
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let at = Coord::new(3, 11);

        board.place(at, Player::White);
        assert_eq!(board.get(at), Some(Player::White));
        assert_eq!(board.stones().count(), 1);

        board.clear(at);
        assert!(board.is_empty_at(at));
    }

    #[test]
    fn test_capacity() {
        assert_eq!(Board::capacity(), 225);
    }
}
