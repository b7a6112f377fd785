use tracing::debug;

use super::bpm;
use crate::model::{Chart, Difficulty, LyricToken, Note, NoteId};

/// Word duration above which a note becomes a hold (exclusive).
const HOLD_THRESHOLD_MS: i64 = 800;
/// Minimum hold length.
const MIN_HOLD_DURATION_MS: i64 = 200;
/// Lyric gap bounds that mark a word as well-separated (exclusive).
const GAP_MIN_MS: i64 = 500;
const GAP_MAX_MS: i64 = 2000;

#[derive(Debug, Clone)]
pub struct ChartGeneratorOptions {
    pub difficulty: Difficulty,
    pub lane_count: usize,
    /// Minimum spacing between emitted notes in ms. Enforced globally
    /// across lanes, which intentionally permits simultaneous notes on
    /// different lanes to survive as long as their starts differ.
    pub note_spacing_ms: i64,
    pub preferred_bpm: Option<u32>,
}

impl Default for ChartGeneratorOptions {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            lane_count: crate::model::MAX_LANE_COUNT,
            note_spacing_ms: 300,
            preferred_bpm: None,
        }
    }
}

/// Turns timestamped lyric tokens into a playable chart.
///
/// Stateless beyond its construction-time options; safe to reuse for any
/// number of independent generations. Never fails: degenerate input
/// yields a valid empty chart.
#[derive(Debug, Clone)]
pub struct ChartGenerator {
    options: ChartGeneratorOptions,
}

impl ChartGenerator {
    pub fn new(options: ChartGeneratorOptions) -> Self {
        Self { options }
    }

    /// Generate a chart from word-level lyric tokens.
    pub fn generate_chart(&self, song_id: &str, words: &[LyricToken], duration_ms: i64) -> Chart {
        if words.is_empty() {
            return self.empty_chart(song_id, duration_ms);
        }

        let bpm = bpm::estimate_from_words(words, self.options.preferred_bpm);
        let density = self.options.difficulty.note_density();
        let max_lanes = self.options.difficulty.lane_distribution();

        let selected = select_words(words, density);
        let notes = self.distribute_to_lanes(&selected, max_lanes);

        debug!(
            song_id,
            bpm,
            words = words.len(),
            notes = notes.len(),
            "generated word chart"
        );

        Chart {
            song_id: song_id.to_string(),
            notes,
            bpm,
            total_duration_ms: duration_ms,
            difficulty: self.options.difficulty,
        }
    }

    /// Generate a denser chart from character-level lyric tokens.
    pub fn generate_character_chart(
        &self,
        song_id: &str,
        chars: &[LyricToken],
        duration_ms: i64,
    ) -> Chart {
        if chars.is_empty() {
            return self.empty_chart(song_id, duration_ms);
        }

        let bpm = bpm::estimate_from_chars(chars, self.options.preferred_bpm);
        let density = self.options.difficulty.note_density();
        let max_lanes = self.options.difficulty.lane_distribution();

        let selected = select_chars(chars, density);
        let notes = self.chars_to_notes(&selected, max_lanes);

        debug!(
            song_id,
            bpm,
            chars = chars.len(),
            notes = notes.len(),
            "generated character chart"
        );

        Chart {
            song_id: song_id.to_string(),
            notes,
            bpm,
            total_duration_ms: duration_ms,
            difficulty: self.options.difficulty,
        }
    }

    fn empty_chart(&self, song_id: &str, duration_ms: i64) -> Chart {
        Chart {
            song_id: song_id.to_string(),
            notes: Vec::new(),
            bpm: self.options.preferred_bpm.unwrap_or(bpm::DEFAULT_BPM),
            total_duration_ms: duration_ms,
            difficulty: self.options.difficulty,
        }
    }

    /// Walk the selected words in time order, assigning lanes and types.
    fn distribute_to_lanes(&self, words: &[&LyricToken], max_lanes: usize) -> Vec<Note> {
        let mut notes = Vec::new();
        let mut current_lane = 0usize;
        let mut last_note_time = 0i64;

        for word in words {
            if word.start_time_ms - last_note_time < self.options.note_spacing_ms {
                continue;
            }

            let lane = self.determine_lane(word, current_lane, max_lanes);
            let id = NoteId(notes.len() as u32);
            let text = (!word.text.is_empty()).then(|| word.text.clone());

            let note = if word.duration_ms() > HOLD_THRESHOLD_MS {
                let hold = word.duration_ms().max(MIN_HOLD_DURATION_MS);
                Note::hold(id, word.start_time_ms, lane, hold, text)
            } else {
                Note::tap(id, word.start_time_ms, lane, text)
            };

            notes.push(note);
            current_lane = lane;
            last_note_time = word.start_time_ms;
        }

        notes
    }

    /// Convert sampled characters into tap notes, round-robin by lane.
    fn chars_to_notes(&self, chars: &[&LyricToken], max_lanes: usize) -> Vec<Note> {
        let available = max_lanes.min(self.options.lane_count).max(1);
        let wrap = max_lanes.max(1);
        let mut notes = Vec::new();
        let mut current_lane = 0usize;

        for c in chars {
            let lane = current_lane % available;
            let id = NoteId(notes.len() as u32);
            let text = (!c.text.is_empty()).then(|| c.text.clone());
            notes.push(Note::tap(id, c.start_time_ms, lane, text));
            current_lane = (current_lane + 1) % wrap;
        }

        notes
    }

    /// Pick a lane for a word. Base rotation is overridden for long
    /// words (middle lane) and exclamations (last lane).
    fn determine_lane(&self, word: &LyricToken, current_lane: usize, max_lanes: usize) -> usize {
        let available = max_lanes.min(self.options.lane_count).max(1);

        let mut lane = (current_lane + 1) % available;
        if word.char_count() > 3 {
            lane = available / 2;
        }
        if word.text.contains('!') || word.text.contains('！') {
            lane = available - 1;
        }
        lane
    }
}

/// Score every word, keep the top `floor(N * density)` by importance,
/// and return them in ascending start-time order.
fn select_words(words: &[LyricToken], density: f64) -> Vec<&LyricToken> {
    let target = (words.len() as f64 * density).floor() as usize;

    let mut scored: Vec<(usize, f64)> = (0..words.len())
        .map(|i| (i, word_importance(words, i)))
        .collect();
    // Stable sort keeps earlier words first on equal score.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut selected: Vec<&LyricToken> = scored
        .into_iter()
        .take(target)
        .map(|(i, _)| &words[i])
        .collect();
    selected.sort_by_key(|w| w.start_time_ms);
    selected
}

/// Heuristic importance of a word for note placement. Long, well
/// separated words and words near the start or end of the song rank
/// higher.
fn word_importance(words: &[LyricToken], index: usize) -> f64 {
    let word = &words[index];
    let mut score = 0.0;

    let duration_s = word.duration_ms() as f64 / 1000.0;
    score += duration_s.min(3.0) * 10.0;

    let progress = index as f64 / words.len() as f64;
    if progress < 0.2 || progress > 0.8 {
        score += 15.0;
    }

    if index > 0 {
        let gap = word.start_time_ms - words[index - 1].end_time_ms;
        if gap > GAP_MIN_MS && gap < GAP_MAX_MS {
            score += 10.0;
        }
    }

    score += word.char_count().min(10) as f64;
    score
}

/// Fixed-stride sampling of the character stream down to the target
/// density.
fn select_chars(chars: &[LyricToken], density: f64) -> Vec<&LyricToken> {
    let target = (chars.len() as f64 * density).floor() as usize;
    if target == 0 {
        return Vec::new();
    }

    let step = (chars.len() / target).max(1);
    chars.iter().step_by(step).take(target).collect()
}

/// Generate a chart from whichever token stream fits best: the
/// character path when the char stream is denser than twice the word
/// stream, the word path otherwise.
pub fn create_chart(
    song_id: &str,
    words: &[LyricToken],
    chars: &[LyricToken],
    duration_ms: i64,
    options: ChartGeneratorOptions,
) -> Chart {
    let generator = ChartGenerator::new(options);
    if chars.len() > words.len() * 2 {
        generator.generate_character_chart(song_id, chars, duration_ms)
    } else {
        generator.generate_chart(song_id, words, duration_ms)
    }
}
