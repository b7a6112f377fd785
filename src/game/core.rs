use chrono::Utc;
use tracing::debug;

use super::judge::{Judgment, JudgeWindows, JudgmentResult};
use super::score;
use super::state::GameState;
use crate::config::GameConfig;
use crate::model::{Chart, Note, ScoreRecord};

/// Lookahead before a note's target time during which it is eligible
/// for judgment and visible to the renderer.
pub const APPROACH_TIME_MS: i64 = 2000;

/// How far behind the clock a resolved-window note stays visible.
const VISIBLE_BEHIND_MS: i64 = 100;

/// Per-note lifecycle. `Judged` and `Missed` are terminal; a note
/// reaches a terminal state at most once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteState {
    Upcoming,
    Active,
    Judged,
    Missed,
}

impl NoteState {
    fn is_terminal(self) -> bool {
        matches!(self, NoteState::Judged | NoteState::Missed)
    }
}

/// The judgment engine: owns one immutable chart plus live session
/// state, consumes a caller-supplied clock and discrete key events, and
/// produces state snapshots and judgment results.
///
/// Single-threaded and cooperative: the caller drives `update_game`
/// once per frame with a non-decreasing timestamp and feeds key events
/// between ticks. There are no internal timers or locks. On seek or
/// retry the caller must call `reset_game` first.
pub struct GameCore {
    chart: Chart,
    config: GameConfig,
    windows: JudgeWindows,
    release_windows: JudgeWindows,
    state: GameState,
    note_states: Vec<NoteState>,
    /// Indices of `Active` notes in activation order.
    active: Vec<usize>,
    /// Cursor over the sorted note sequence: first index not yet
    /// considered for activation.
    scan_from: usize,
}

impl GameCore {
    pub fn new(chart: Chart, config: GameConfig) -> Self {
        let windows = config.judgment_timing.clone();
        let release_windows = windows.for_release();
        let note_count = chart.note_count();
        Self {
            chart,
            config,
            windows,
            release_windows,
            state: GameState::default(),
            note_states: vec![NoteState::Upcoming; note_count],
            active: Vec::new(),
            scan_from: 0,
        }
    }

    /// Advance the session clock: activate newly eligible notes, miss
    /// notes whose window has elapsed, and refresh the accuracy figure.
    ///
    /// `current_time_ms` must be non-decreasing across calls.
    pub fn update_game(&mut self, current_time_ms: i64) {
        self.state.current_time_ms = current_time_ms;

        let good = self.windows.good_window_ms();

        // Activate notes entering the approach window. A note the clock
        // has already jumped wholly past is missed immediately so that
        // every note still reaches a terminal state exactly once.
        while self.scan_from < self.chart.notes.len() {
            let start = self.chart.notes[self.scan_from].start_time_ms;
            if start - current_time_ms > APPROACH_TIME_MS {
                break;
            }
            let idx = self.scan_from;
            self.scan_from += 1;
            if start - current_time_ms >= -good {
                self.note_states[idx] = NoteState::Active;
                self.active.push(idx);
            } else {
                self.note_states[idx] = NoteState::Missed;
                let result = JudgmentResult::timed_out(current_time_ms - start);
                self.apply_result(&result);
            }
        }

        // Miss active notes whose good window has elapsed.
        let mut i = 0;
        while i < self.active.len() {
            let idx = self.active[i];
            let start = self.chart.notes[idx].start_time_ms;
            if current_time_ms - start > good {
                self.active.remove(i);
                self.note_states[idx] = NoteState::Missed;
                let result = JudgmentResult::timed_out(current_time_ms - start);
                self.apply_result(&result);
            } else {
                i += 1;
            }
        }

        self.state.accuracy = self.state.judgments.weighted_accuracy();
    }

    /// Judge a key press on the given lane. Picks the active note in
    /// the lane closest to the clock within the good window; a press
    /// with no eligible note returns `None` and carries no penalty.
    pub fn on_key_press(&mut self, lane: usize) -> Option<JudgmentResult> {
        let current_time_ms = self.state.current_time_ms;
        let good = self.windows.good_window_ms();

        let mut best: Option<(usize, i64)> = None; // (position in active, abs offset)
        for (pos, &idx) in self.active.iter().enumerate() {
            let note = &self.chart.notes[idx];
            if note.lane != lane {
                continue;
            }
            let abs = (current_time_ms - note.start_time_ms).abs();
            if abs > good {
                continue;
            }
            if best.is_none_or(|(_, best_abs)| abs < best_abs) {
                best = Some((pos, abs));
            }
        }

        let (pos, _) = best?;
        let idx = self.active[pos];
        let timing_ms = current_time_ms - self.chart.notes[idx].start_time_ms;
        let judgment = self.windows.classify_or_miss(timing_ms);

        self.active.remove(pos);
        self.note_states[idx] = NoteState::Judged;

        let result = self.build_result(judgment, timing_ms);
        self.apply_result(&result);
        debug!(lane, timing_ms, ?judgment, "key press judged");
        Some(result)
    }

    /// Judge a key release on the given lane against the end of an
    /// active hold note. Uses 1.5x windows; a release outside them
    /// still resolves the note, as a miss. No-op without a hold note.
    pub fn on_key_release(&mut self, lane: usize) -> Option<JudgmentResult> {
        let current_time_ms = self.state.current_time_ms;

        let (pos, end_time) = self.active.iter().enumerate().find_map(|(pos, &idx)| {
            let note = &self.chart.notes[idx];
            if note.lane == lane && note.is_hold() {
                note.end_time_ms().map(|end| (pos, end))
            } else {
                None
            }
        })?;

        let idx = self.active[pos];
        let timing_ms = current_time_ms - end_time;
        let judgment = self.release_windows.classify_or_miss(timing_ms);

        self.active.remove(pos);
        self.note_states[idx] = NoteState::Judged;

        let result = self.build_result(judgment, timing_ms);
        self.apply_result(&result);
        debug!(lane, timing_ms, ?judgment, "hold release judged");
        Some(result)
    }

    fn build_result(&self, judgment: Judgment, timing_ms: i64) -> JudgmentResult {
        JudgmentResult {
            judgment,
            timing_ms,
            // Combo multiplier uses the combo as it stood before this event.
            score: score::event_score(judgment.base_score(), self.state.combo),
            accuracy: judgment.accuracy_weight(),
        }
    }

    fn apply_result(&mut self, result: &JudgmentResult) {
        self.state.score += result.score as u64;
        self.state.judgments.record(result.judgment);
        if result.judgment.breaks_combo() {
            self.state.combo = 0;
        } else {
            self.state.combo += 1;
            self.state.max_combo = self.state.max_combo.max(self.state.combo);
        }
    }

    /// Flag-only, idempotent session controls.
    pub fn start_game(&mut self) {
        self.state.is_playing = true;
        self.state.is_paused = false;
    }

    pub fn pause_game(&mut self) {
        self.state.is_paused = true;
        self.state.is_playing = false;
    }

    pub fn resume_game(&mut self) {
        self.state.is_paused = false;
        self.state.is_playing = true;
    }

    pub fn stop_game(&mut self) {
        self.state.is_playing = false;
        self.state.is_paused = false;
    }

    /// Return all session state to its initial values. Required before
    /// reusing the core after a seek or retry.
    pub fn reset_game(&mut self) {
        self.state = GameState::default();
        self.note_states.fill(NoteState::Upcoming);
        self.active.clear();
        self.scan_from = 0;
    }

    /// Defensive copy of the live session state.
    pub fn game_state(&self) -> GameState {
        self.state.clone()
    }

    /// Unresolved notes within rendering lookahead of the given time:
    /// `start - t` in `[-100ms, approach]`. Read-only projection.
    pub fn visible_notes(&self, current_time_ms: i64) -> Vec<&Note> {
        let range = self.chart.note_range(
            current_time_ms - VISIBLE_BEHIND_MS,
            current_time_ms + APPROACH_TIME_MS,
        );
        self.chart.notes[range.clone()]
            .iter()
            .zip(&self.note_states[range])
            .filter(|(_, state)| !state.is_terminal())
            .map(|(note, _)| note)
            .collect()
    }

    /// Session progress in [0, 1]; 0 for zero-length charts.
    pub fn progress(&self) -> f64 {
        if self.chart.total_duration_ms == 0 {
            return 0.0;
        }
        (self.state.current_time_ms as f64 / self.chart.total_duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Fraction of chart notes hit as perfect or great; 1.0 for empty
    /// charts.
    pub fn lyrics_sync(&self) -> f64 {
        let total = self.chart.note_count();
        if total == 0 {
            return 1.0;
        }
        let synced = self.state.judgments.perfect + self.state.judgments.great;
        synced as f64 / total as f64
    }

    /// Session-end summary for the caller's record store.
    pub fn session_record(&self) -> ScoreRecord {
        ScoreRecord {
            song_id: self.chart.song_id.clone(),
            score: self.state.score,
            accuracy: self.state.accuracy,
            max_combo: self.state.max_combo,
            judgments: self.state.judgments,
            lyrics_sync: self.lyrics_sync(),
            timestamp: Utc::now(),
        }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
