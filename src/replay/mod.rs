//! Rebuilding and re-traversing recorded games.

pub mod reconstruct;
pub mod sequencer;

pub use reconstruct::reconstruct;
pub use sequencer::Replay;
