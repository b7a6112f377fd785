use serde::{Deserialize, Serialize};

use super::judge::Judgment;

/// Counts of judged notes per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgmentCounts {
    pub perfect: u32,
    pub great: u32,
    pub good: u32,
    pub miss: u32,
}

impl JudgmentCounts {
    pub fn total(&self) -> u32 {
        self.perfect + self.great + self.good + self.miss
    }

    pub fn record(&mut self, judgment: Judgment) {
        match judgment {
            Judgment::Perfect => self.perfect += 1,
            Judgment::Great => self.great += 1,
            Judgment::Good => self.good += 1,
            Judgment::Miss => self.miss += 1,
        }
    }

    /// Weighted accuracy over all judgments so far, 0 when none exist.
    pub fn weighted_accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let weighted = self.perfect as f64 * Judgment::Perfect.accuracy_weight()
            + self.great as f64 * Judgment::Great.accuracy_weight()
            + self.good as f64 * Judgment::Good.accuracy_weight()
            + self.miss as f64 * Judgment::Miss.accuracy_weight();
        weighted / total as f64
    }
}

/// Live session state. Mutated only by `GameCore`; callers receive
/// defensive copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub is_playing: bool,
    pub is_paused: bool,
    pub current_time_ms: i64,
    /// Monotonically non-decreasing within a session.
    pub score: u64,
    /// Consecutive non-miss judgments.
    pub combo: u32,
    /// Highest combo ever reached this session.
    pub max_combo: u32,
    /// Weighted accuracy in [0, 1].
    pub accuracy: f64,
    pub judgments: JudgmentCounts,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            is_playing: false,
            is_paused: false,
            current_time_ms: 0,
            score: 0,
            combo: 0,
            max_combo: 0,
            accuracy: 0.0,
            judgments: JudgmentCounts::default(),
        }
    }
}
