//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and none of the I/O. A session is
//! driven entirely through [`GameState`]: player operations, a fixed-step
//! [`tick`](GameState::tick) for gravity, and [`reset_session`](GameState::reset_session).
//!
//! # Module Structure
//!
//! - [`shapes`]: orientation matrices, rotation cycles and color tags
//! - [`rng`]: seeded 7-bag piece sequencing
//! - [`collision`]: the single legality predicate
//! - [`rotation`]: clockwise rotation without wall kicks
//! - [`board`]: the playfield grid with buffer rows and line clearing
//! - [`scoring`]: line-clear score table
//! - [`game_state`]: session state and operations
//! - [`high_score`]: best-score tracking driven by lock events
//! - [`config`]: field dimensions and gravity interval
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: each bag holds all seven kinds once
//! - **Rotation**: clockwise only, rejected outright when blocked
//! - **Hold**: once per placement, swapped piece re-enters at spawn
//! - **Scoring**: 40 / 100 / 300 / 1200 for 1-4 lines
//! - **Top-out**: locking any cell above row 0 ends the session
//!
//! # Example
//!
//! ```
//! use stackfall_core::GameState;
//! use stackfall_core::types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! let event = game.take_last_event().unwrap();
//! assert_eq!(event.lines_cleared, 0);
//! assert_eq!(game.board().occupied_count(), 4);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod high_score;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use stackfall_types as types;

pub use board::Board;
pub use collision::is_legal;
pub use config::{ConfigError, EngineConfig};
pub use game_state::{GameState, Tetromino};
pub use high_score::HighScoreTracker;
pub use rng::{PieceQueue, SimpleRng};
pub use rotation::attempt_rotate;
pub use scoring::calculate_score;
pub use shapes::{color_of, orientation_of, spawn_orientation, Orientation};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
