//! # poststats-core
//!
//! Deterministic engine for post statistics: given the HTML of a single
//! post and a configuration, derive a statistics block (word count,
//! character count, estimated reading time) and attach it to the content.
//!
//! The crate is pure: no I/O, no async, no ambient configuration access.
//! The host (whatever renders posts) constructs a [`StatsConfig`] and a
//! [`RenderContext`] and invokes the [`ContentFilter`] at its content
//! extension point. Configuration storage is modelled explicitly through
//! the [`SettingsStore`] trait instead of global option getters.

pub mod config;
pub mod count;
pub mod render;
pub mod settings;
pub mod strip;
pub mod transform;

pub use config::{Location, StatsConfig};
pub use count::{PostStats, WORDS_PER_MINUTE, char_count, read_time_minutes, word_count};
pub use render::render_block;
pub use settings::{
    MemoryStore, SettingsError, SettingsForm, SettingsStore, apply_raw, apply_submission,
    sanitize_location,
};
pub use strip::strip_tags;
pub use transform::{ContentFilter, RenderContext, StatsFilter};
