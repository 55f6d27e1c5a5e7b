//! # Settings
//!
//! The host's key/value settings store, made explicit.
//!
//! Option names and raw encodings match the original settings fields:
//! checkbox toggles persist as `"1"`/`"0"`, the location as `"0"` (start)
//! or `"1"` (end). Validation happens on save; reads never fail, they
//! fall back to defaults (see [`crate::config::StatsConfig::from_store`]).

use crate::strip::strip_tags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// The option names under which settings persist.
pub mod keys {
    /// Raw location: `"0"` start, `"1"` end.
    pub const LOCATION: &str = "wcp_location";
    /// Headline text above the block.
    pub const HEADLINE: &str = "wcp_headline";
    /// Word count toggle.
    pub const WORD_COUNT: &str = "wcp_wordcount";
    /// Character count toggle.
    pub const CHAR_COUNT: &str = "wcp_charactercount";
    /// Read time toggle.
    pub const READ_TIME: &str = "wcp_readtime";

    /// Every known option name, in stable order.
    pub const ALL: [&str; 5] = [LOCATION, HEADLINE, WORD_COUNT, CHAR_COUNT, READ_TIME];
}

// =============================================================================
// STORE
// =============================================================================

/// External key/value configuration storage.
///
/// Scalar string values only; booleans travel in their raw `"1"`/`"0"`
/// form. Single writer at a time, read-mostly.
pub trait SettingsStore {
    /// Read a stored value, `None` when the key was never set.
    fn get(&self, key: &str) -> Option<&str>;

    /// Store a value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory settings store.
///
/// BTreeMap-backed for deterministic iteration; doubles as the
/// serialization target for file-backed stores in the app layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a stored value.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    /// Iterate stored key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Errors surfaced to the admin on settings save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The submitted location was neither `"0"` nor `"1"`.
    #[error("display location must be either beginning or end (got {input:?})")]
    InvalidLocation {
        /// The rejected raw input.
        input: String,
    },

    /// A submitted option name is not one of [`keys::ALL`].
    #[error("unknown setting {key:?}")]
    UnknownKey {
        /// The rejected option name.
        key: String,
    },
}

/// Validate a raw location submission.
///
/// Only the literal encodings `"0"` and `"1"` pass; anything else is an
/// error and the caller keeps whatever value was stored before.
pub fn sanitize_location(input: &str) -> Result<String, SettingsError> {
    if input == "0" || input == "1" {
        Ok(input.to_string())
    } else {
        Err(SettingsError::InvalidLocation {
            input: input.to_string(),
        })
    }
}

/// Normalize free text: strip tags, trim, collapse inner whitespace.
#[must_use]
pub fn sanitize_text(input: &str) -> String {
    strip_tags(input)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a checkbox submission to its raw stored form.
#[must_use]
pub fn sanitize_checkbox(on: bool) -> &'static str {
    if on { "1" } else { "0" }
}

/// Apply one raw `key = value` submission, running the field's sanitizer.
///
/// This is the single-field path (the CLI's `config set`); whole-form
/// submissions go through [`apply_submission`]. On error the store is
/// left unchanged.
pub fn apply_raw<S: SettingsStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: &str,
) -> Result<(), SettingsError> {
    if !keys::ALL.contains(&key) {
        return Err(SettingsError::UnknownKey {
            key: key.to_string(),
        });
    }

    match key {
        keys::LOCATION => {
            let value = sanitize_location(value)?;
            store.set(keys::LOCATION, &value);
        }
        keys::HEADLINE => store.set(keys::HEADLINE, &sanitize_text(value)),
        // Remaining known keys are the three checkbox toggles
        _ => {
            let on = !value.is_empty() && value != "0" && value != "false" && value != "off";
            store.set(key, sanitize_checkbox(on));
        }
    }
    Ok(())
}

// =============================================================================
// FORM SUBMISSION
// =============================================================================

/// One admin settings submission. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    /// Raw location value, validated before storing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Headline text, sanitized before storing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Word count toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<bool>,
    /// Character count toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_count: Option<bool>,
    /// Read time toggle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<bool>,
}

/// Apply a settings submission to a store.
///
/// Valid fields are written; invalid ones are skipped and reported. The
/// returned notices are the admin-facing error list; empty means the
/// whole submission was accepted.
pub fn apply_submission<S: SettingsStore + ?Sized>(
    store: &mut S,
    form: &SettingsForm,
) -> Vec<SettingsError> {
    let mut notices = Vec::new();

    if let Some(location) = &form.location {
        match sanitize_location(location) {
            Ok(value) => store.set(keys::LOCATION, &value),
            Err(err) => notices.push(err),
        }
    }

    if let Some(headline) = &form.headline {
        store.set(keys::HEADLINE, &sanitize_text(headline));
    }

    if let Some(on) = form.word_count {
        store.set(keys::WORD_COUNT, sanitize_checkbox(on));
    }
    if let Some(on) = form.char_count {
        store.set(keys::CHAR_COUNT, sanitize_checkbox(on));
    }
    if let Some(on) = form.read_time {
        store.set(keys::READ_TIME, sanitize_checkbox(on));
    }

    notices
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(keys::HEADLINE), None);

        store.set(keys::HEADLINE, "Stats");
        assert_eq!(store.get(keys::HEADLINE), Some("Stats"));

        store.set(keys::HEADLINE, "Other");
        assert_eq!(store.get(keys::HEADLINE), Some("Other"));
        assert_eq!(store.len(), 1);

        store.remove(keys::HEADLINE);
        assert_eq!(store.get(keys::HEADLINE), None);
    }

    #[test]
    fn sanitize_location_accepts_both_encodings() {
        assert_eq!(sanitize_location("0").as_deref(), Ok("0"));
        assert_eq!(sanitize_location("1").as_deref(), Ok("1"));
    }

    #[test]
    fn sanitize_location_rejects_everything_else() {
        for bad in ["2", "", "start", "01"] {
            assert_eq!(
                sanitize_location(bad),
                Err(SettingsError::InvalidLocation {
                    input: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn invalid_location_leaves_store_unchanged() {
        let mut store = MemoryStore::new();
        store.set(keys::LOCATION, "1");

        let form = SettingsForm {
            location: Some("2".to_string()),
            ..SettingsForm::default()
        };
        let notices = apply_submission(&mut store, &form);

        assert_eq!(notices.len(), 1);
        assert_eq!(store.get(keys::LOCATION), Some("1"));
    }

    #[test]
    fn invalid_location_rejection_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set(keys::LOCATION, "0");

        let form = SettingsForm {
            location: Some("2".to_string()),
            ..SettingsForm::default()
        };
        apply_submission(&mut store, &form);
        apply_submission(&mut store, &form);

        assert_eq!(store.get(keys::LOCATION), Some("0"));
    }

    #[test]
    fn sanitize_text_strips_and_collapses() {
        assert_eq!(sanitize_text("  My <b>Stats</b>  Page \n"), "My Stats Page");
        assert_eq!(sanitize_text("<script>x</script>"), "x");
        assert_eq!(sanitize_text(""), "");
    }

    #[test]
    fn submission_writes_valid_fields_despite_invalid_location() {
        let mut store = MemoryStore::new();
        let form = SettingsForm {
            location: Some("sideways".to_string()),
            headline: Some(" Reading  Stats ".to_string()),
            word_count: Some(false),
            char_count: Some(true),
            read_time: None,
        };

        let notices = apply_submission(&mut store, &form);
        assert_eq!(notices.len(), 1);
        assert_eq!(store.get(keys::LOCATION), None);
        assert_eq!(store.get(keys::HEADLINE), Some("Reading Stats"));
        assert_eq!(store.get(keys::WORD_COUNT), Some("0"));
        assert_eq!(store.get(keys::CHAR_COUNT), Some("1"));
        assert_eq!(store.get(keys::READ_TIME), None);
    }

    #[test]
    fn apply_raw_dispatches_per_key() {
        let mut store = MemoryStore::new();

        apply_raw(&mut store, keys::LOCATION, "1").expect("valid location");
        assert_eq!(store.get(keys::LOCATION), Some("1"));

        apply_raw(&mut store, keys::HEADLINE, " <i>Hi</i> there ").expect("headline");
        assert_eq!(store.get(keys::HEADLINE), Some("Hi there"));

        apply_raw(&mut store, keys::READ_TIME, "off").expect("toggle");
        assert_eq!(store.get(keys::READ_TIME), Some("0"));
        apply_raw(&mut store, keys::READ_TIME, "1").expect("toggle");
        assert_eq!(store.get(keys::READ_TIME), Some("1"));
    }

    #[test]
    fn apply_raw_accepts_every_known_key() {
        let mut store = MemoryStore::new();
        for key in keys::ALL {
            assert!(apply_raw(&mut store, key, "1").is_ok(), "key {key}");
        }
        assert_eq!(store.len(), keys::ALL.len());
    }

    #[test]
    fn apply_raw_rejects_unknown_key() {
        let mut store = MemoryStore::new();
        let result = apply_raw(&mut store, "wcp_fontsize", "12");
        assert_eq!(
            result,
            Err(SettingsError::UnknownKey {
                key: "wcp_fontsize".to_string()
            })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn empty_form_is_a_noop() {
        let mut store = MemoryStore::new();
        let notices = apply_submission(&mut store, &SettingsForm::default());
        assert!(notices.is_empty());
        assert!(store.is_empty());
    }
}
