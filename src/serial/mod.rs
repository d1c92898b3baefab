//! Exchange formats: the JSON save record and the compact share code.

pub mod record;
pub mod share;

pub use record::{SavedGame, FORMAT_VERSION};
pub use share::{decode, decode_state, encode};
