//! Core engine types: players, board, moves, and the owned game state.

pub mod board;
pub mod moves;
pub mod player;
pub mod state;

pub use board::{Board, Coord, BOARD_SIZE, WIN_COUNT};
pub use moves::{Move, MoveHistory};
pub use player::Player;
pub use state::{GameState, GameStatus};
