use serde::{Deserialize, Serialize};

/// Maximum number of lanes supported (PC keyboard layout).
pub const MAX_LANE_COUNT: usize = 4;

/// Identifier of a note within its chart.
///
/// Charts assign ids sequentially in emission order, so the id doubles
/// as the note's index into `Chart::notes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteId(pub u32);

impl NoteId {
    /// Returns the note's index into its chart.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type of note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteType {
    Tap,
    Hold,
    Slide,
}

/// A single note in a chart. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    /// Target hit time in milliseconds.
    pub start_time_ms: i64,
    /// Lane index in `0..lane_count`.
    pub lane: usize,
    pub note_type: NoteType,
    /// Hold length in milliseconds. Present iff `note_type` is `Hold`.
    pub duration_ms: Option<i64>,
    /// Source lyric text (word or character) this note was placed on.
    pub text: Option<String>,
}

impl Note {
    /// Create a tap note.
    pub fn tap(id: NoteId, start_time_ms: i64, lane: usize, text: Option<String>) -> Self {
        Self {
            id,
            start_time_ms,
            lane,
            note_type: NoteType::Tap,
            duration_ms: None,
            text,
        }
    }

    /// Create a hold note.
    pub fn hold(
        id: NoteId,
        start_time_ms: i64,
        lane: usize,
        duration_ms: i64,
        text: Option<String>,
    ) -> Self {
        Self {
            id,
            start_time_ms,
            lane,
            note_type: NoteType::Hold,
            duration_ms: Some(duration_ms),
            text,
        }
    }

    /// Returns true if this is a hold note.
    pub fn is_hold(&self) -> bool {
        matches!(self.note_type, NoteType::Hold)
    }

    /// Target release time for hold notes.
    pub fn end_time_ms(&self) -> Option<i64> {
        self.duration_ms.map(|d| self.start_time_ms + d)
    }
}
