//! Stackfall (workspace facade crate).
//!
//! Re-exports the engine, input, and terminal crates under one name and adds
//! the on-disk high-score store used by the binary.

pub mod high_score_store;

pub use stackfall_core as core;
pub use stackfall_input as input;
pub use stackfall_term as term;
pub use stackfall_types as types;

pub use high_score_store::HighScoreStore;
