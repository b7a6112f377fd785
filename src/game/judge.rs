use serde::{Deserialize, Serialize};

/// Judgment level for a resolved note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgment {
    Perfect,
    Great,
    Good,
    Miss,
}

impl Judgment {
    /// Base score before the combo multiplier.
    pub fn base_score(self) -> u32 {
        match self {
            Judgment::Perfect => 1000,
            Judgment::Great => 700,
            Judgment::Good => 300,
            Judgment::Miss => 0,
        }
    }

    /// Per-event accuracy weight.
    pub fn accuracy_weight(self) -> f64 {
        match self {
            Judgment::Perfect => 1.0,
            Judgment::Great => 0.8,
            Judgment::Good => 0.5,
            Judgment::Miss => 0.0,
        }
    }

    /// Returns true if this judgment resets combo.
    pub fn breaks_combo(self) -> bool {
        matches!(self, Judgment::Miss)
    }
}

/// Judgment timing windows in milliseconds around a note's target time.
///
/// Precondition (enforced by the embedding application, not here):
/// `0 < perfect < great < good`. Boundaries are inclusive on the upper
/// edge of each band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeWindows {
    pub perfect_ms: i64,
    pub great_ms: i64,
    pub good_ms: i64,
}

impl JudgeWindows {
    /// Standard windows: ±50 / ±100 / ±150 ms.
    pub fn standard() -> Self {
        Self {
            perfect_ms: 50,
            great_ms: 100,
            good_ms: 150,
        }
    }

    /// Widened windows (1.5x) used for hold note release judgment.
    pub fn for_release(&self) -> Self {
        Self {
            perfect_ms: self.perfect_ms * 3 / 2,
            great_ms: self.great_ms * 3 / 2,
            good_ms: self.good_ms * 3 / 2,
        }
    }

    /// The outermost window; beyond it a note can only be missed.
    pub fn good_window_ms(&self) -> i64 {
        self.good_ms
    }

    /// Classify a signed timing offset (negative = early). Returns
    /// `None` when the offset falls outside every window.
    pub fn classify(&self, timing_ms: i64) -> Option<Judgment> {
        let abs = timing_ms.abs();
        if abs <= self.perfect_ms {
            Some(Judgment::Perfect)
        } else if abs <= self.great_ms {
            Some(Judgment::Great)
        } else if abs <= self.good_ms {
            Some(Judgment::Good)
        } else {
            None
        }
    }

    /// Classify like `classify`, degrading to `Miss` outside all
    /// windows (hold release convention).
    pub fn classify_or_miss(&self, timing_ms: i64) -> Judgment {
        self.classify(timing_ms).unwrap_or(Judgment::Miss)
    }
}

impl Default for JudgeWindows {
    fn default() -> Self {
        Self::standard()
    }
}

/// Result of judging a single note. Transient, one per judged event.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgmentResult {
    pub judgment: Judgment,
    /// Signed offset from the target time in ms; negative = early.
    pub timing_ms: i64,
    /// Points awarded for this event (combo multiplier applied).
    pub score: u32,
    /// Per-event accuracy weight, not cumulative.
    pub accuracy: f64,
}

impl JudgmentResult {
    /// A miss produced by the clock overrunning a note's window.
    pub fn timed_out(timing_ms: i64) -> Self {
        Self {
            judgment: Judgment::Miss,
            timing_ms,
            score: 0,
            accuracy: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries_are_inclusive() {
        let windows = JudgeWindows::standard();
        assert_eq!(windows.classify(0), Some(Judgment::Perfect));
        assert_eq!(windows.classify(50), Some(Judgment::Perfect));
        assert_eq!(windows.classify(-50), Some(Judgment::Perfect));
        assert_eq!(windows.classify(51), Some(Judgment::Great));
        assert_eq!(windows.classify(100), Some(Judgment::Great));
        assert_eq!(windows.classify(-100), Some(Judgment::Great));
        assert_eq!(windows.classify(101), Some(Judgment::Good));
        assert_eq!(windows.classify(150), Some(Judgment::Good));
        assert_eq!(windows.classify(-150), Some(Judgment::Good));
        assert_eq!(windows.classify(151), None);
        assert_eq!(windows.classify(-151), None);
    }

    #[test]
    fn release_windows_are_widened() {
        let release = JudgeWindows::standard().for_release();
        assert_eq!(release.perfect_ms, 75);
        assert_eq!(release.great_ms, 150);
        assert_eq!(release.good_ms, 225);
        assert_eq!(release.classify(225), Some(Judgment::Good));
        assert_eq!(release.classify_or_miss(226), Judgment::Miss);
    }

    #[test]
    fn base_scores_and_weights() {
        assert_eq!(Judgment::Perfect.base_score(), 1000);
        assert_eq!(Judgment::Great.base_score(), 700);
        assert_eq!(Judgment::Good.base_score(), 300);
        assert_eq!(Judgment::Miss.base_score(), 0);
        assert_eq!(Judgment::Perfect.accuracy_weight(), 1.0);
        assert_eq!(Judgment::Great.accuracy_weight(), 0.8);
        assert_eq!(Judgment::Good.accuracy_weight(), 0.5);
        assert_eq!(Judgment::Miss.accuracy_weight(), 0.0);
    }

    #[test]
    fn only_miss_breaks_combo() {
        assert!(Judgment::Miss.breaks_combo());
        assert!(!Judgment::Perfect.breaks_combo());
        assert!(!Judgment::Great.breaks_combo());
        assert!(!Judgment::Good.breaks_combo());
    }

    #[test]
    fn custom_windows_shift_bands() {
        let windows = JudgeWindows {
            perfect_ms: 20,
            great_ms: 60,
            good_ms: 120,
        };
        assert_eq!(windows.classify(20), Some(Judgment::Perfect));
        assert_eq!(windows.classify(21), Some(Judgment::Great));
        assert_eq!(windows.classify(120), Some(Judgment::Good));
        assert_eq!(windows.classify(121), None);
    }
}
