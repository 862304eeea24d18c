//! Structural repair of rendered fragments.
//!
//! Naive line-based transformation upstream (feed scrapers stripping
//! markup, the grammar ending a block at a blank line) splits what an
//! author wrote as one code block into several. Both repairs are
//! best-effort string passes kept out of the render path, so grammar
//! changes cannot silently break them, and both bail rather than guess
//! when the material between fragments looks structural.

use once_cell::sync::Lazy;
use regex::Regex;

static SPLIT_CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)</code></div>\s*<p[^>]*>(.*?)</p>\s*<div class="code-block"><code[^>]*>"#,
    )
    .expect("hardcoded split-block pattern is valid")
});

static ADJACENT_CODE_BLOCKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"</code></div>\s*<div class="code-block"><code[^>]*>"#)
        .expect("hardcoded adjacent-block pattern is valid")
});

/// Repair fragment artifacts in styled HTML. Runs the split-block rejoin
/// first, then the adjacent-block merge, each to a fixed point.
pub fn repair_fragments(html: &str) -> String {
    let rejoined = rejoin_split_code_blocks(html);
    merge_adjacent_code_blocks(&rejoined)
}

/// `</code></div><p>plain text</p><div class="code-block"><code>` is a code
/// block wrongly split around a paragraph. When the paragraph body is plain
/// text (no angle brackets) it is spliced back as a continuation line and
/// the paragraph wrapper dropped; any markup in the body means the split
/// was real, and all three fragments stay untouched.
fn rejoin_split_code_blocks(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let next = SPLIT_CODE_BLOCK
            .replace_all(&current, |caps: &regex::Captures<'_>| {
                let body = &caps[1];
                if body.contains('<') || body.contains('>') {
                    caps[0].to_string()
                } else {
                    format!("\n{}\n", body.trim())
                }
            })
            .to_string();
        if next == current {
            return next;
        }
        current = next;
    }
}

/// Merge runs of adjacent code blocks into one, a newline between their
/// contents. Iterates to a fixed point so chains of any length collapse
/// into a single block.
fn merge_adjacent_code_blocks(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let next = ADJACENT_CODE_BLOCKS.replace_all(&current, "\n").to_string();
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(content: &str) -> String {
        format!("<div class=\"code-block\"><code class=\"hljs\">{content}</code></div>")
    }

    #[test]
    fn plain_paragraph_between_blocks_is_spliced_back() {
        let input = format!(
            "{}<p class=\"mb-4 text-base leading-7\">let b = 2;</p>{}",
            block("let a = 1;"),
            block("let c = 3;")
        );
        let out = repair_fragments(&input);
        assert_eq!(out, block("let a = 1;\nlet b = 2;\nlet c = 3;"));
    }

    #[test]
    fn paragraph_with_markup_is_left_alone() {
        let input = format!(
            "{}<p><em>real prose</em></p>{}",
            block("let a = 1;"),
            block("let b = 2;")
        );
        let out = rejoin_split_code_blocks(&input);
        assert_eq!(out, input);
    }

    #[test]
    fn adjacent_blocks_merge_with_newline() {
        let input = format!("{}\n{}", block("one"), block("two"));
        let out = merge_adjacent_code_blocks(&input);
        assert_eq!(out, block("one\ntwo"));
    }

    #[test]
    fn chains_collapse_to_a_single_block() {
        let input = format!("{}\n{}\n{}\n{}", block("a"), block("b"), block("c"), block("d"));
        let out = repair_fragments(&input);
        assert_eq!(out.matches("<div class=\"code-block\">").count(), 1);
        assert!(out.contains("a\nb\nc\nd"));
    }

    #[test]
    fn unrelated_html_is_untouched() {
        let input = "<p>one</p>\n<p>two</p>";
        assert_eq!(repair_fragments(input), input);
    }

    #[test]
    fn repair_is_idempotent() {
        let input = format!("{}\n<p>between</p>", block("only"));
        let once = repair_fragments(&input);
        assert_eq!(repair_fragments(&once), once);
    }
}
