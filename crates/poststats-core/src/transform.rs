//! # Content Transform
//!
//! The filter that attaches the statistics block to post content.
//!
//! The host's filter registry becomes an explicit seam: [`ContentFilter`]
//! is a single-method trait the external caller invokes at its content
//! extension point, with the render context passed in rather than probed
//! through ambient query state.

use crate::config::{Location, StatsConfig};
use crate::count::PostStats;
use crate::render::{BLOCK_CLASS, render_block};

// =============================================================================
// RENDER CONTEXT
// =============================================================================

/// What the host knows about the page being rendered.
///
/// The filter only runs for the primary query of a single-post page;
/// archives, feeds, and secondary loops pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// This content belongs to the primary query.
    pub main_query: bool,
    /// The page renders exactly one post.
    pub single_post: bool,
}

impl RenderContext {
    /// The common case: the main query of a single-post page.
    #[must_use]
    pub fn single_post() -> Self {
        Self {
            main_query: true,
            single_post: true,
        }
    }

    /// True when the filter should consider this render at all.
    #[must_use]
    pub fn applies(&self) -> bool {
        self.main_query && self.single_post
    }
}

// =============================================================================
// CONTENT FILTER
// =============================================================================

/// A content extension point.
///
/// The host calls `transform` with the post HTML; the filter derives a new
/// string and never mutates the input.
pub trait ContentFilter {
    /// Transform the content for the given render context.
    fn transform(&self, content: &str, ctx: &RenderContext) -> String;
}

/// The statistics filter.
#[derive(Debug, Clone, Default)]
pub struct StatsFilter {
    /// Configuration snapshot for this filter instance.
    pub config: StatsConfig,
}

impl StatsFilter {
    /// Create a filter over a configuration snapshot.
    #[must_use]
    pub fn new(config: StatsConfig) -> Self {
        Self { config }
    }

    fn marker(&self) -> String {
        format!("class=\"{BLOCK_CLASS}\"")
    }
}

impl ContentFilter for StatsFilter {
    /// Attach the statistics block, or pass content through unchanged.
    ///
    /// Pass-through cases:
    /// - the context is not the main query of a single post
    /// - no statistic is enabled
    /// - the content already carries a statistics block (so re-running
    ///   the filter on its own output is a no-op)
    fn transform(&self, content: &str, ctx: &RenderContext) -> String {
        if !ctx.applies() || !self.config.any_enabled() || content.contains(&self.marker()) {
            return content.to_string();
        }

        let stats = PostStats::analyze(content);
        let block = render_block(&self.config, &stats);

        match self.config.location {
            Location::Start => format!("{block}{content}"),
            Location::End => format!("{content}{block}"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
