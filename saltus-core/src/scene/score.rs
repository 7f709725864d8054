//! Score overlay

use core::fmt::Write;

use heapless::String;

/// Frames needed to earn one point (12 points per second at 60 Hz)
pub const FRAMES_PER_POINT: u32 = 5;

const SCORE_PREFIX: &str = "Score: ";

/// Decimal digits in `u32::MAX`
const U32_DIGITS: usize = 10;

/// Longest score line: the prefix and the widest `u32`
pub const SCORE_TEXT_LEN: usize = SCORE_PREFIX.len() + U32_DIGITS;

/// Rendered score line
pub type ScoreText = String<SCORE_TEXT_LEN>;

/// Score for a frame count
pub fn score(frame: u32) -> u32 {
    frame / FRAMES_PER_POINT
}

/// Text drawn in the score overlay
pub fn score_text(frame: u32) -> ScoreText {
    let mut text = ScoreText::new();
    let written = write!(text, "{}{}", SCORE_PREFIX, score(frame));
    debug_assert!(written.is_ok(), "score line exceeds SCORE_TEXT_LEN");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_formula() {
        assert_eq!(score(0), 0);
        assert_eq!(score(4), 0);
        assert_eq!(score(5), 1);
        assert_eq!(score(50), 10);
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(50).as_str(), "Score: 10");
        assert_eq!(score_text(u32::MAX).as_str(), "Score: 858993459");
    }

    #[test]
    fn test_capacity_fits_widest_u32() {
        let mut text = ScoreText::new();
        assert!(write!(text, "{}{}", SCORE_PREFIX, u32::MAX).is_ok());
        assert_eq!(text.len(), SCORE_TEXT_LEN);
    }
}
