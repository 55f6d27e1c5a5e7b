//! # Counting
//!
//! Word count, character count, and reading-time estimation over stripped
//! text. Integer arithmetic only.

use crate::strip::strip_tags;
use serde::{Deserialize, Serialize};

/// Assumed reading speed, in words per minute.
pub const WORDS_PER_MINUTE: u64 = 225;

/// Count whitespace-delimited tokens.
#[must_use]
pub fn word_count(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

/// Count characters of the stripped text.
///
/// This is the byte length, matching the original behavior (a raw length,
/// not a Unicode scalar count). Multi-byte characters count as more than
/// one.
#[must_use]
pub fn char_count(text: &str) -> u64 {
    text.len() as u64
}

/// Estimated reading time in minutes: `round(words / 225)`.
///
/// Rounding is half-up, so 113 words (just over half a minute) already
/// reads as 1 minute and 112 words as 0.
#[must_use]
pub fn read_time_minutes(words: u64) -> u64 {
    let minutes = words / WORDS_PER_MINUTE;
    let remainder = words % WORDS_PER_MINUTE;
    if remainder * 2 >= WORDS_PER_MINUTE {
        minutes + 1
    } else {
        minutes
    }
}

/// The statistics of one post, computed in a single pass.
///
/// The word count is computed once and shared between the words line and
/// the reading-time line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStats {
    /// Whitespace-delimited token count of the stripped text.
    pub words: u64,
    /// Byte length of the stripped text.
    pub chars: u64,
    /// Estimated reading time in minutes.
    pub minutes: u64,
}

impl PostStats {
    /// Strip markup from `content` and compute all three statistics.
    #[must_use]
    pub fn analyze(content: &str) -> Self {
        let text = strip_tags(content);
        let words = word_count(&text);
        Self {
            words,
            chars: char_count(&text),
            minutes: read_time_minutes(words),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
