//! Test utilities for building lyric tokens, notes, and charts.

#[cfg(test)]
pub mod builders {
    use crate::model::{Chart, Difficulty, LyricToken, Note, NoteId};

    /// Build a word token with a given start, end, and text.
    pub fn word(start_ms: i64, end_ms: i64, text: &str) -> LyricToken {
        LyricToken::new(start_ms, end_ms, text)
    }

    /// Builder for hand-assembled charts in tests.
    #[derive(Debug, Default)]
    pub struct ChartBuilder {
        song_id: String,
        notes: Vec<Note>,
        total_duration_ms: i64,
    }

    impl ChartBuilder {
        pub fn new(song_id: &str) -> Self {
            Self {
                song_id: song_id.to_string(),
                notes: Vec::new(),
                total_duration_ms: 60_000,
            }
        }

        pub fn duration(mut self, ms: i64) -> Self {
            self.total_duration_ms = ms;
            self
        }

        /// Add a tap note at the given time and lane.
        pub fn tap(mut self, start_ms: i64, lane: usize) -> Self {
            let id = NoteId(self.notes.len() as u32);
            self.notes.push(Note::tap(id, start_ms, lane, None));
            self
        }

        /// Add a hold note at the given time and lane.
        pub fn hold(mut self, start_ms: i64, lane: usize, duration_ms: i64) -> Self {
            let id = NoteId(self.notes.len() as u32);
            self.notes.push(Note::hold(id, start_ms, lane, duration_ms, None));
            self
        }

        pub fn build(self) -> Chart {
            Chart {
                song_id: self.song_id,
                notes: self.notes,
                bpm: 120,
                total_duration_ms: self.total_duration_ms,
                difficulty: Difficulty::Normal,
            }
        }
    }
}
