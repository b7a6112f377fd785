use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::state::JudgmentCounts;

/// Session-end summary handed to the embedding application's record
/// store. The core builds it (`GameCore::session_record`) but performs
/// no I/O itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub song_id: String,
    pub score: u64,
    pub accuracy: f64,
    pub max_combo: u32,
    pub judgments: JudgmentCounts,
    /// Fraction of chart notes hit as perfect or great.
    pub lyrics_sync: f64,
    pub timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    /// Returns true if this record beats `other` (higher score wins,
    /// accuracy breaks ties).
    pub fn beats(&self, other: &ScoreRecord) -> bool {
        self.score > other.score || (self.score == other.score && self.accuracy > other.accuracy)
    }
}
