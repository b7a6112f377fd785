use serde::{Deserialize, Serialize};

use super::note::Note;

/// Chart difficulty. Controls note density and how many lanes the
/// generator spreads notes across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Fraction of lyric tokens that become notes.
    pub fn note_density(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Normal => 0.6,
            Difficulty::Hard => 0.8,
        }
    }

    /// Maximum number of lanes used at this difficulty.
    pub fn lane_distribution(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Normal => 3,
            Difficulty::Hard => 4,
        }
    }
}

/// The complete, time-ordered set of notes for one song/difficulty
/// pairing. Created once by the generator; read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub song_id: String,
    /// Notes sorted ascending by `start_time_ms`.
    pub notes: Vec<Note>,
    /// Estimated BPM. Drives generation heuristics only, never judgment.
    pub bpm: u32,
    pub total_duration_ms: i64,
    pub difficulty: Difficulty,
}

impl Chart {
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Indices of notes whose start time falls in `[from_ms, to_ms]`.
    /// Relies on the ascending sort order.
    pub fn note_range(&self, from_ms: i64, to_ms: i64) -> std::ops::Range<usize> {
        let lo = self.notes.partition_point(|n| n.start_time_ms < from_ms);
        let hi = self.notes.partition_point(|n| n.start_time_ms <= to_ms);
        lo..hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::note::NoteId;

    fn chart_with_times(times: &[i64]) -> Chart {
        Chart {
            song_id: "test".into(),
            notes: times
                .iter()
                .enumerate()
                .map(|(i, &t)| Note::tap(NoteId(i as u32), t, 0, None))
                .collect(),
            bpm: 120,
            total_duration_ms: 10_000,
            difficulty: Difficulty::Normal,
        }
    }

    #[test]
    fn difficulty_presets() {
        assert_eq!(Difficulty::Easy.note_density(), 0.3);
        assert_eq!(Difficulty::Easy.lane_distribution(), 2);
        assert_eq!(Difficulty::Normal.note_density(), 0.6);
        assert_eq!(Difficulty::Normal.lane_distribution(), 3);
        assert_eq!(Difficulty::Hard.note_density(), 0.8);
        assert_eq!(Difficulty::Hard.lane_distribution(), 4);
    }

    #[test]
    fn note_range_is_inclusive() {
        let chart = chart_with_times(&[100, 500, 1000, 1500, 2000]);
        let range = chart.note_range(500, 1500);
        assert_eq!(range, 1..4);
    }

    #[test]
    fn note_range_empty_chart() {
        let chart = chart_with_times(&[]);
        assert_eq!(chart.note_range(0, 5000), 0..0);
    }
}
