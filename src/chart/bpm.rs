//! BPM estimation from lyric timing.
//!
//! The estimate only steers chart-generation heuristics; judgment never
//! looks at it. Too little or implausible timing data silently falls
//! back to the preferred BPM (or 120).

use crate::model::LyricToken;

pub const DEFAULT_BPM: u32 = 120;
pub const MIN_BPM: u32 = 60;
pub const MAX_BPM: u32 = 200;

/// Number of leading words sampled for interval analysis.
const SAMPLE_WORDS: usize = 20;

/// Plausible beat interval bounds in ms (exclusive).
const MIN_BEAT_INTERVAL_MS: i64 = 200;
const MAX_BEAT_INTERVAL_MS: i64 = 2000;

fn fallback(preferred: Option<u32>) -> u32 {
    preferred.unwrap_or(DEFAULT_BPM)
}

fn clamp_bpm(bpm: f64) -> u32 {
    bpm.round().clamp(MIN_BPM as f64, MAX_BPM as f64) as u32
}

/// Estimate BPM from word start-time intervals.
///
/// Takes consecutive deltas over the first 20 words, keeps only those
/// inside the plausible beat range, and converts their median.
pub fn estimate_from_words(words: &[LyricToken], preferred: Option<u32>) -> u32 {
    if words.len() < 4 {
        return fallback(preferred);
    }

    let mut intervals: Vec<i64> = words
        .iter()
        .take(SAMPLE_WORDS)
        .map(|w| w.start_time_ms)
        .collect::<Vec<_>>()
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|&d| d > MIN_BEAT_INTERVAL_MS && d < MAX_BEAT_INTERVAL_MS)
        .collect();

    if intervals.is_empty() {
        return fallback(preferred);
    }

    intervals.sort_unstable();
    let median = intervals[intervals.len() / 2];
    clamp_bpm(60_000.0 / median as f64)
}

/// Estimate BPM from the average character duration, treating four
/// characters as one beat.
pub fn estimate_from_chars(chars: &[LyricToken], preferred: Option<u32>) -> u32 {
    if chars.len() < 8 {
        return fallback(preferred);
    }

    let total: i64 = chars.iter().map(|c| c.duration_ms()).sum();
    let avg = total as f64 / chars.len() as f64;
    if avg <= 0.0 {
        return fallback(preferred);
    }

    clamp_bpm(60_000.0 / (avg * 4.0))
}
