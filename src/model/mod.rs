pub mod chart;
pub mod lyrics;
pub mod note;
pub mod record;

pub use chart::{Chart, Difficulty};
pub use lyrics::LyricToken;
pub use note::{MAX_LANE_COUNT, Note, NoteId, NoteType};
pub use record::ScoreRecord;
