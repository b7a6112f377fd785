pub mod core;
pub mod judge;
pub mod score;
pub mod state;

pub use self::core::{APPROACH_TIME_MS, GameCore};
pub use judge::{Judgment, JudgeWindows, JudgmentResult};
pub use state::{GameState, JudgmentCounts};
