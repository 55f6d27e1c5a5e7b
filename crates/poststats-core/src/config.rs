//! # Configuration
//!
//! The effective configuration of the statistics filter.
//!
//! Configuration is an explicit value passed into the transform, never an
//! ambient global. [`StatsConfig::from_store`] is the bridge from the
//! host's key/value settings store; every field falls back to a documented
//! default when the store has no value.

use crate::settings::{SettingsStore, keys};
use serde::{Deserialize, Serialize};

/// Default headline shown above the statistics block.
pub const DEFAULT_HEADLINE: &str = "Post Statistics";

// =============================================================================
// LOCATION
// =============================================================================

/// Where the statistics block is attached to the content.
///
/// The raw stored form keeps the original encoding: `"0"` for the
/// beginning of the post, `"1"` for the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Block precedes the content.
    #[default]
    Start,
    /// Block follows the content.
    End,
}

impl Location {
    /// Parse the raw stored value. Only `"0"` and `"1"` are recognized.
    #[must_use]
    pub fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "0" => Some(Self::Start),
            "1" => Some(Self::End),
            _ => None,
        }
    }

    /// The raw stored form of this location.
    #[must_use]
    pub fn as_raw(&self) -> &'static str {
        match self {
            Self::Start => "0",
            Self::End => "1",
        }
    }
}

// =============================================================================
// STATS CONFIG
// =============================================================================

/// Configuration snapshot for one transform.
///
/// Read-only at render time; the settings layer is the only writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Placement of the block relative to the content.
    #[serde(default)]
    pub location: Location,
    /// Headline text, HTML-escaped at render time.
    #[serde(default = "default_headline")]
    pub headline: String,
    /// Show the word count line.
    #[serde(default = "default_true")]
    pub word_count: bool,
    /// Show the character count line.
    #[serde(default = "default_true")]
    pub char_count: bool,
    /// Show the reading time line.
    #[serde(default = "default_true")]
    pub read_time: bool,
}

fn default_headline() -> String {
    DEFAULT_HEADLINE.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            location: Location::Start,
            headline: default_headline(),
            word_count: true,
            char_count: true,
            read_time: true,
        }
    }
}

impl StatsConfig {
    /// True when at least one statistic is enabled.
    ///
    /// With everything toggled off the filter leaves content untouched.
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.word_count || self.char_count || self.read_time
    }

    /// Build the effective configuration from a settings store.
    ///
    /// Missing keys take their defaults; an unparseable stored location
    /// also falls back to the default rather than failing the render.
    #[must_use]
    pub fn from_store<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();
        Self {
            location: store
                .get(keys::LOCATION)
                .and_then(Location::from_raw)
                .unwrap_or(defaults.location),
            headline: store
                .get(keys::HEADLINE)
                .map(str::to_string)
                .unwrap_or(defaults.headline),
            word_count: store
                .get(keys::WORD_COUNT)
                .map(truthy)
                .unwrap_or(defaults.word_count),
            char_count: store
                .get(keys::CHAR_COUNT)
                .map(truthy)
                .unwrap_or(defaults.char_count),
            read_time: store
                .get(keys::READ_TIME)
                .map(truthy)
                .unwrap_or(defaults.read_time),
        }
    }
}

/// Checkbox truthiness of a raw stored value: empty and `"0"` are off.
fn truthy(raw: &str) -> bool {
    !raw.is_empty() && raw != "0"
}

// =============================================================================
// TESTS
// =============================================================================
