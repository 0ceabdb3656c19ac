//! Scoring - line clear points
//!
//! Points depend only on how many rows a single lock clears, using the
//! single/double/triple/four-row table in [`LINE_SCORES`]. There is no level
//! multiplier, combo, or drop bonus.

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows with one lock.
///
/// Counts outside the table (only reachable on hand-built boards) score 0.
pub fn calculate_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}
