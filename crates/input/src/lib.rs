//! Terminal input mapping.
//!
//! Translates `crossterm` key events into [`crate::types::GameAction`]s. The
//! game has no key-repeat logic of its own; the terminal's autorepeat drives
//! held keys.

pub mod map;

pub use stackfall_types as types;

pub use map::{handle_key_event, should_quit};
