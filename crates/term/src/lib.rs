//! Terminal renderer for Stackfall.
//!
//! Rendering is split in two: [`GameView`] lays a snapshot out into a
//! [`FrameBuffer`] (pure, testable), and [`TerminalRenderer`] diffs frames
//! and writes them through crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use stackfall_core as core;
pub use stackfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
