//! # Block Rendering
//!
//! Assembly of the statistics block HTML.
//!
//! Output is raw markup only: a marker `<div>`, an escaped `<h3>` headline,
//! and one `<p>` holding the enabled lines. Which lines appear is decided
//! here; what they say about the post comes from [`PostStats`].

use crate::config::StatsConfig;
use crate::count::PostStats;

/// Class attribute marking a rendered statistics block.
///
/// The transform refuses to run on content that already carries this
/// marker, so re-filtering output is a no-op.
pub const BLOCK_CLASS: &str = "post-statistics";

/// Escape text for use in HTML element content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the statistics block for a post.
///
/// Lines whose toggle is off are omitted entirely. The caller is expected
/// to have checked [`StatsConfig::any_enabled`]; with everything off this
/// still renders a block with an empty `<p>`.
#[must_use]
pub fn render_block(config: &StatsConfig, stats: &PostStats) -> String {
    let mut html = format!(
        "<div class=\"{BLOCK_CLASS}\"><h3>{}</h3><p>",
        escape_html(&config.headline)
    );

    if config.word_count {
        html.push_str(&format!("This post has {} words<br>", stats.words));
    }
    if config.char_count {
        html.push_str(&format!("This post has {} characters. <br>", stats.chars));
    }
    if config.read_time {
        html.push_str(&format!(
            "This will take about {} minute(s) to read. <br>",
            stats.minutes
        ));
    }

    html.push_str("</p></div>");
    html
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PostStats {
        PostStats {
            words: 450,
            chars: 2400,
            minutes: 2,
        }
    }

    #[test]
    fn escape_covers_html_specials() {
        assert_eq!(
            escape_html(r#"<b>"fish" & 'chips'</b>"#),
            "&lt;b&gt;&quot;fish&quot; &amp; &#039;chips&#039;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn block_contains_all_enabled_lines() {
        let html = render_block(&StatsConfig::default(), &stats());
        assert!(html.starts_with(&format!("<div class=\"{BLOCK_CLASS}\">")));
        assert!(html.contains("<h3>Post Statistics</h3>"));
        assert!(html.contains("This post has 450 words<br>"));
        assert!(html.contains("This post has 2400 characters. <br>"));
        assert!(html.contains("This will take about 2 minute(s) to read. <br>"));
        assert!(html.ends_with("</p></div>"));
    }

    #[test]
    fn disabled_lines_are_omitted() {
        let config = StatsConfig {
            char_count: false,
            read_time: false,
            ..StatsConfig::default()
        };
        let html = render_block(&config, &stats());
        assert!(html.contains("words"));
        assert!(!html.contains("characters"));
        assert!(!html.contains("to read"));
    }

    #[test]
    fn headline_is_escaped() {
        let config = StatsConfig {
            headline: "<script>alert(1)</script>".to_string(),
            ..StatsConfig::default()
        };
        let html = render_block(&config, &stats());
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
