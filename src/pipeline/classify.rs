//! Content-type classification.
//!
//! Article bodies arrive with no format metadata: feeds put markdown,
//! rendered HTML, or plain prose in the same field depending on the
//! publisher. Classification is structural (count HTML tags first, then
//! look for distinct markdown signals) and always answers; there is no
//! "unknown" tag because every downstream path can handle arbitrary text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification assigned to a raw article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Rendered HTML; passed through the pipeline unchanged.
    Html,
    /// Markdown; table-normalized, parsed, styled, and repaired.
    Markdown,
    /// Plain prose; paragraph-wrapped.
    Text,
}

impl ContentKind {
    /// The lowercase wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Html => "html",
            ContentKind::Markdown => "markdown",
            ContentKind::Text => "text",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Tag count above which content is *eligible* to be HTML.
const HTML_TAG_COUNT_MIN: usize = 3;

/// Tags per 1000 characters above which eligible content *is* HTML.
///
/// Markdown articles routinely contain a handful of inline tags (`<br>`,
/// `<sup>`); the density gate keeps them out of the passthrough path.
const HTML_TAG_DENSITY_MIN: f64 = 8.0;

/// Markdown signals. Each pattern is evaluated independently (no
/// short-circuit); two or more *distinct* matches classify the content as
/// markdown. The separator-row pattern counts as its own signal so a bare
/// well-formed pipe table (rows + separator) clears the threshold.
static MARKDOWN_SIGNALS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?m)^#{1,6} ",              // heading lines
        r"(?m)^[*-] ",                // bullet list items
        r"(?m)^\d+\. ",               // ordered list items
        r"\*\*[^*\n]+\*\*",           // bold spans
        r"\[[^\]\n]+\]\([^)\n]+\)",   // links
        r"!\[[^\]\n]*\]\([^)\n]+\)",  // images
        r"```",                       // fenced code
        r"`[^`\n]+`",                 // inline code
        r"(?m)^> ",                   // blockquotes
        r"(?m)^\|.+\|\s*$",           // table rows
        r"(?m)^\|[\s:|+-]*-[\s:|+-]*\|\s*$", // table separator rows
    ]
    .iter()
    .map(|p| Regex::new(p).expect("hardcoded classifier pattern is valid"))
    .collect()
});

/// Classify a raw article body as HTML, markdown, or plain text.
///
/// Pure function of the string's structural features; the same input always
/// yields the same tag, and there are no error cases.
pub fn classify(content: &str) -> ContentKind {
    if content.is_empty() {
        return ContentKind::Text;
    }

    let tag_count = HTML_TAG.find_iter(content).count();
    if tag_count > HTML_TAG_COUNT_MIN {
        let density = tag_count as f64 / content.chars().count() as f64 * 1000.0;
        if density > HTML_TAG_DENSITY_MIN {
            return ContentKind::Html;
        }
    }

    let signals = MARKDOWN_SIGNALS
        .iter()
        .filter(|re| re.is_match(content))
        .count();
    if signals >= 2 {
        return ContentKind::Markdown;
    }

    ContentKind::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_text() {
        assert_eq!(classify(""), ContentKind::Text);
    }

    #[test]
    fn plain_prose_is_text() {
        assert_eq!(classify("just a sentence about nothing"), ContentKind::Text);
    }

    #[test]
    fn tag_dense_content_is_html() {
        let s = "<div><p>hello</p><span>world</span></div>";
        assert_eq!(classify(s), ContentKind::Html);
    }

    #[test]
    fn sparse_tags_in_long_prose_are_not_html() {
        // 4 tags clear the count gate but not the density gate
        let mut s = String::from("one<br>two<br>three<br>four<br>");
        s.push_str(&"filler words to dilute the tag density ".repeat(20));
        assert_eq!(classify(&s), ContentKind::Text);
    }

    #[test]
    fn two_signals_make_markdown() {
        assert_eq!(
            classify("# Title\n\nSome **bold** text."),
            ContentKind::Markdown
        );
    }

    #[test]
    fn single_signal_is_text() {
        assert_eq!(classify("# Title only"), ContentKind::Text);
    }

    #[test]
    fn bare_table_is_markdown() {
        // row + separator are distinct signals
        let s = "| A | B |\n|---|---|\n| 1 | 2 |";
        assert_eq!(classify(s), ContentKind::Markdown);
    }

    #[test]
    fn classification_is_deterministic() {
        for s in ["", "# x\n- y", "<p>a</p><p>b</p><p>c</p><p>d</p>", "prose"] {
            assert_eq!(classify(s), classify(s));
        }
    }

    #[test]
    fn kind_display_matches_wire_name() {
        assert_eq!(ContentKind::Markdown.to_string(), "markdown");
        assert_eq!(
            serde_json::to_string(&ContentKind::Html).unwrap(),
            "\"html\""
        );
    }
}
