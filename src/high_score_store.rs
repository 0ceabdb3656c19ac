//! JSON file holding the best score across sessions.
//!
//! The file is a single object, `{ "high_score": 1200 }`. A missing file reads
//! as a best of 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the store location.
pub const HIGHSCORE_ENV: &str = "STACKFALL_HIGHSCORE";

/// Store location when [`HIGHSCORE_ENV`] is unset.
pub const DEFAULT_PATH: &str = "stackfall-highscore.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$STACKFALL_HIGHSCORE`, falling back to [`DEFAULT_PATH`].
    pub fn from_env() -> Self {
        match std::env::var_os(HIGHSCORE_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_PATH),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<u32> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let file: HighScoreFile = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(file.high_score)
    }

    pub fn save(&self, high_score: u32) -> Result<()> {
        let json = serde_json::to_string_pretty(&HighScoreFile { high_score })?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}
