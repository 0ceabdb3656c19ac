//! Engine configuration
//!
//! Field dimensions and the gravity interval are injected into each session
//! instead of living in globals. Defaults reproduce the standard 10x20 field.

use thiserror::Error;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, BUFFER_ROWS, GRAVITY_INTERVAL_TICKS};

/// Smallest width that still lets the 4-wide I piece spawn inside the walls.
pub const MIN_WIDTH: u8 = 4;

/// Smallest visible height that fits a vertical I piece.
pub const MIN_HEIGHT: u8 = 4;

/// Spawn rows reach up to row -2, so the buffer must be at least this deep.
pub const MIN_BUFFER_ROWS: u8 = 2;

/// Configuration rejected by [`EngineConfig::validate`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("playfield width {width} is below the minimum of {min}", min = MIN_WIDTH)]
    WidthTooSmall { width: u8 },
    #[error("playfield height {height} is below the minimum of {min}", min = MIN_HEIGHT)]
    HeightTooSmall { height: u8 },
    #[error("{buffer_rows} buffer rows cannot hold spawning pieces (need {min})", min = MIN_BUFFER_ROWS)]
    BufferTooShallow { buffer_rows: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Columns in the playfield.
    pub width: u8,
    /// Visible rows in the playfield.
    pub height: u8,
    /// Hidden rows above row 0.
    pub buffer_rows: u8,
    /// Gravity fires once the tick counter exceeds this many ticks.
    pub gravity_interval: u32,
}

impl EngineConfig {
    pub fn with_dimensions(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_buffer_rows(mut self, buffer_rows: u8) -> Self {
        self.buffer_rows = buffer_rows;
        self
    }

    pub fn with_gravity_interval(mut self, ticks: u32) -> Self {
        self.gravity_interval = ticks;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH {
            return Err(ConfigError::WidthTooSmall { width: self.width });
        }
        if self.height < MIN_HEIGHT {
            return Err(ConfigError::HeightTooSmall {
                height: self.height,
            });
        }
        if self.buffer_rows < MIN_BUFFER_ROWS {
            return Err(ConfigError::BufferTooShallow {
                buffer_rows: self.buffer_rows,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            buffer_rows: BUFFER_ROWS,
            gravity_interval: GRAVITY_INTERVAL_TICKS,
        }
    }
}
