/// A timed lyric token from the timing provider.
///
/// The same shape is used for word-level and character-level streams.
/// Tokens are assumed to arrive already ordered by start time; the core
/// performs no validation of ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricToken {
    pub start_time_ms: i64,
    pub end_time_ms: i64,
    pub text: String,
}

impl LyricToken {
    pub fn new(start_time_ms: i64, end_time_ms: i64, text: impl Into<String>) -> Self {
        Self {
            start_time_ms,
            end_time_ms,
            text: text.into(),
        }
    }

    /// Duration of this token in milliseconds.
    pub fn duration_ms(&self) -> i64 {
        self.end_time_ms - self.start_time_ms
    }

    /// Number of characters in the token text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_and_char_count() {
        let token = LyricToken::new(1000, 1600, "きらり");
        assert_eq!(token.duration_ms(), 600);
        assert_eq!(token.char_count(), 3);
    }
}
