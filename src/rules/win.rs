//! Win detection for the most recently placed stone.
//!
//! A five-run can only newly form through the newest stone, so only the
//! four axes through that stone are scanned - O(1) in board size instead
//! of rescanning the grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::{Board, Coord, WIN_COUNT};

/// One of the four undirected line directions a win can form along.
///
/// Checked in declaration order; the first qualifying axis is reported
/// and simultaneous wins on later axes are not merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (`\`).
    Diagonal,
    /// Top-right to bottom-left (`/`).
    AntiDiagonal,
}

impl Axis {
    /// All axes, in the fixed check order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// Unit step in the axis's positive direction (increasing row or,
    /// for horizontal, increasing column).
    #[must_use]
    pub const fn step(self) -> (i8, i8) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// The maximal run that ended the game: the axis it formed along plus its
/// cells in contiguous board order. Always at least [`WIN_COUNT`] cells; a
/// six-or-longer run is one win carrying every cell of the run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    pub axis: Axis,
    pub cells: SmallVec<[Coord; 8]>,
}

impl WinningLine {
    /// Number of stones in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check whether a coordinate is part of the run.
    #[must_use]
    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }
}

/// Check whether the stone at `origin` completes a run of [`WIN_COUNT`].
///
/// Walks outward from `origin` in both directions of each axis while the
/// next cell holds the same player's stone, collecting the maximal run.
/// Returns the first axis whose run reaches `WIN_COUNT`, or `None`.
///
/// `origin` must hold a stone; an empty origin never matches any run and
/// returns `None`.
#[must_use]
pub fn check_win(board: &Board, origin: Coord) -> Option<WinningLine> {
    let player = board.get(origin)?;

    for axis in Axis::ALL {
        let (d_row, d_col) = axis.step();
        let mut cells: SmallVec<[Coord; 8]> = SmallVec::new();

        // Negative arm, collected farthest-first so the final line is in
        // contiguous board order.
        let mut at = origin;
        while let Some(prev) = at.offset(-d_row, -d_col) {
            if board.get(prev) != Some(player) {
                break;
            }
            at = prev;
        }
        while at != origin {
            cells.push(at);
            // Walking back toward the origin stays in bounds.
            at = match at.offset(d_row, d_col) {
                Some(next) => next,
                None => break,
            };
        }

        cells.push(origin);

        // Positive arm.
        let mut at = origin;
        while let Some(next) = at.offset(d_row, d_col) {
            if board.get(next) != Some(player) {
                break;
            }
            cells.push(next);
            at = next;
        }

        if cells.len() >= WIN_COUNT {
            return Some(WinningLine { axis, cells });
        }
    }

    None
}
