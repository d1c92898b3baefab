//! Rule checks over board state.

pub mod win;

pub use win::{check_win, Axis, WinningLine};
