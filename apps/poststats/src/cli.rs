//! # CLI Commands
//!
//! Each subcommand is a `cmd_*` function taking plain arguments, so
//! integration tests can drive them without spawning the binary.
//!
//! The settings file is the external key/value store: a flat JSON object
//! of raw string values. An absent file means every setting takes its
//! default.

use poststats_core::{
    ContentFilter, MemoryStore, RenderContext, SettingsError, SettingsStore, StatsConfig,
    StatsFilter, apply_raw,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Filesystem trouble, annotated with the path involved.
    #[error("i/o error on {path}: {source}")]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but is not a flat JSON string map.
    #[error("settings file {path} is not valid: {source}")]
    Parse {
        /// The settings file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A settings value was rejected by its sanitizer.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn io_err(path: &Path, source: std::io::Error) -> CliError {
    CliError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// =============================================================================
// SETTINGS FILE
// =============================================================================

/// Load the settings store, or an empty one when the file doesn't exist.
pub fn load_store(path: &Path) -> Result<MemoryStore, CliError> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(MemoryStore::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let store = serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded settings");
    Ok(store)
}

/// Persist the settings store as pretty-printed JSON.
pub fn save_store(store: &MemoryStore, path: &Path) -> Result<(), CliError> {
    let raw = serde_json::to_string_pretty(store).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, raw).map_err(|e| io_err(path, e))?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Read a document, with `-` meaning stdin.
fn read_document(input: &Path) -> Result<String, CliError> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| io_err(input, e))?;
        return Ok(buf);
    }
    std::fs::read_to_string(input).map_err(|e| io_err(input, e))
}

// =============================================================================
// TRANSFORM COMMAND
// =============================================================================

/// Apply the statistics filter to a document.
///
/// The CLI renders exactly one document as the primary content, so the
/// render context is always the single-post main query.
pub fn cmd_transform(
    settings: &Path,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let store = load_store(settings)?;
    let config = StatsConfig::from_store(&store);
    let content = read_document(input)?;

    let filter = StatsFilter::new(config);
    let transformed = filter.transform(&content, &RenderContext::single_post());
    let changed = transformed != content;
    debug!(changed, "applied statistics filter");

    match output {
        Some(path) => std::fs::write(path, transformed).map_err(|e| io_err(path, e))?,
        None => print!("{transformed}"),
    }
    Ok(())
}

// =============================================================================
// COUNT COMMAND
// =============================================================================

/// Print the statistics of a document without transforming it.
pub fn cmd_count(input: &Path, json: bool) -> Result<(), CliError> {
    let content = read_document(input)?;
    let stats = poststats_core::PostStats::analyze(&content);

    if json {
        let rendered = serde_json::to_string_pretty(&stats).map_err(|source| CliError::Parse {
            path: input.to_path_buf(),
            source,
        })?;
        println!("{rendered}");
    } else {
        println!("words:      {}", stats.words);
        println!("characters: {}", stats.chars);
        println!("read time:  {} minute(s)", stats.minutes);
    }
    Ok(())
}

// =============================================================================
// CONFIG COMMANDS
// =============================================================================

/// Print the effective configuration (defaults applied over the store).
pub fn cmd_config_show(settings: &Path, json: bool) -> Result<(), CliError> {
    let store = load_store(settings)?;
    let config = StatsConfig::from_store(&store);

    if json {
        let rendered = serde_json::to_string_pretty(&config).map_err(|source| CliError::Parse {
            path: settings.to_path_buf(),
            source,
        })?;
        println!("{rendered}");
    } else {
        let location = match config.location {
            poststats_core::Location::Start => "beginning of post",
            poststats_core::Location::End => "end of post",
        };
        println!("location:        {location}");
        println!("headline:        {}", config.headline);
        println!("word count:      {}", on_off(config.word_count));
        println!("character count: {}", on_off(config.char_count));
        println!("read time:       {}", on_off(config.read_time));
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

/// Set one setting, running its sanitizer.
///
/// An invalid value is reported and the stored value stays as it was;
/// nothing is written in that case.
pub fn cmd_config_set(settings: &Path, key: &str, value: &str) -> Result<(), CliError> {
    let mut store = load_store(settings)?;
    apply_raw(&mut store, key, value)?;
    save_store(&store, settings)?;
    if let Some(stored) = store.get(key) {
        println!("{key} = {stored}");
    }
    Ok(())
}

/// Delete the settings file, returning every setting to its default.
pub fn cmd_config_reset(settings: &Path) -> Result<(), CliError> {
    if settings.exists() {
        std::fs::remove_file(settings).map_err(|e| io_err(settings, e))?;
        debug!(path = %settings.display(), "removed settings file");
    }
    println!("settings reset to defaults");
    Ok(())
}
