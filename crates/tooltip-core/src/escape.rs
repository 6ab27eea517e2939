use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

static HTML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build HTML escaper")
});

const ESCAPED: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"];

// LeftmostLongest so `&amp;lt;` decodes to `&lt;` and not `<`
static HTML_UNESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(UNESCAPE_ENTITIES)
        .expect("Failed to build HTML unescaper")
});

const UNESCAPE_ENTITIES: [&str; 9] = [
    "&amp;", "&lt;", "&gt;", "&quot;", "&apos;", "&#39;", "&#x27;", "&#34;", "&nbsp;",
];
const UNESCAPED: [&str; 9] = ["&", "<", ">", "\"", "'", "'", "'", "\"", "\u{a0}"];

/// Escape text so it renders literally when set as inner HTML.
///
/// ```
/// use chart_tooltip_core::escape::escape_html;
/// assert_eq!(escape_html("<b>Q1 & Q2</b>"), "&lt;b&gt;Q1 &amp; Q2&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_html(s: &str) -> String {
    HTML_ESCAPER.replace_all(s, &ESCAPED)
}

/// Decode the common HTML entities, turning escaped markup back into markup.
///
/// Unknown or incomplete entities are left unchanged.
///
/// ```
/// use chart_tooltip_core::escape::unescape_html;
/// assert_eq!(unescape_html("&lt;em&gt;Sales&lt;/em&gt;"), "<em>Sales</em>");
/// assert_eq!(unescape_html("&amp;lt;"), "&lt;");
/// assert_eq!(unescape_html("&copy"), "&copy");
/// ```
#[inline]
pub fn unescape_html(s: &str) -> String {
    HTML_UNESCAPER.replace_all(s, &UNESCAPED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
    }

    #[test]
    fn test_unescape_numeric_quotes() {
        assert_eq!(unescape_html("it&#39;s &#34;ok&#34;"), "it's \"ok\"");
        assert_eq!(unescape_html("a&nbsp;b"), "a\u{a0}b");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Sales 2024"), "Sales 2024");
        assert_eq!(unescape_html("a & b"), "a & b");
    }
}
