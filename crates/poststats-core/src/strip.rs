//! # Tag Stripping
//!
//! Removal of markup before counting.
//!
//! The statistics describe the text a reader actually sees, so every
//! `<...>` span is dropped before words and characters are counted. This
//! is a scanner, not a parser: no attribute grammar, no entity decoding
//! (entities like `&amp;` count as their literal source characters).

/// Strip `<...>` spans from an HTML fragment.
///
/// Rules:
/// - `<` opens a tag region; the next `>` closes it. Everything inside
///   (tag name, attributes, quoted `>` included) is dropped.
/// - An unterminated trailing `<...` is dropped entirely.
/// - Text outside tag regions is preserved verbatim.
#[must_use]
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' if !in_tag => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if in_tag => {}
            _ => out.push(ch),
        }
    }

    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_tags("Hello world"), "Hello world");
    }

    #[test]
    fn simple_tags_are_removed() {
        assert_eq!(strip_tags("<p>Hello world</p>"), "Hello world");
    }

    #[test]
    fn attributes_are_removed_with_the_tag() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com">link</a> text"#),
            "link text"
        );
    }

    #[test]
    fn nested_markup_leaves_inner_text() {
        assert_eq!(
            strip_tags("<div><p>one <em>two</em> three</p></div>"),
            "one two three"
        );
    }

    #[test]
    fn unterminated_tag_is_dropped() {
        assert_eq!(strip_tags("before <img src="), "before ");
    }

    #[test]
    fn stray_closing_angle_is_kept() {
        // A bare `>` outside any tag region is ordinary text.
        assert_eq!(strip_tags("a > b"), "a > b");
    }

    #[test]
    fn comments_are_removed_per_angle_pair() {
        assert_eq!(strip_tags("x<!-- note -->y"), "xy");
    }

    #[test]
    fn entities_are_not_decoded() {
        assert_eq!(strip_tags("<p>fish &amp; chips</p>"), "fish &amp; chips");
    }

    #[test]
    fn empty_input() {
        assert_eq!(strip_tags(""), "");
    }
}
