//! Markdown rendering.
//!
//! pulldown-cmark drives the grammar; two event families are intercepted
//! and rendered by hand:
//!
//! * fenced/indented code blocks, routed through [`highlight`] so blocks
//!   get `hljs` classes, with an escaped-plain fallback when a grammar
//!   fails, and
//! * inline code spans, escaped locally and wrapped in
//!   `<code class="inline-code">`, keeping the escaping guarantee in this
//!   crate rather than in the grammar's writer.
//!
//! Everything else goes through the stock HTML writer unchanged.

use crate::config::RenderConfig;
use crate::pipeline::highlight;
use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use tracing::warn;

/// Render markdown to HTML under the given configuration.
pub fn render_markdown(content: &str, config: &RenderConfig) -> String {
    let mut options = Options::empty();
    if config.gfm {
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
    }
    if config.smart_punctuation {
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
    }

    let mut events: Vec<Event> = Vec::new();
    // (language tag, accumulated text) while inside a code block
    let mut code: Option<(Option<String>, String)> = None;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let tag = info.split_whitespace().next().unwrap_or("");
                        (!tag.is_empty()).then(|| tag.to_string())
                    }
                    CodeBlockKind::Indented => None,
                };
                code = Some((lang, String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buf)) = code.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, buf)) = code.take() {
                    events.push(Event::Html(
                        render_code_block(lang.as_deref(), &buf, config).into(),
                    ));
                }
            }
            Event::Code(text) => {
                events.push(Event::Html(render_inline_code(&text).into()));
            }
            Event::SoftBreak if config.hard_breaks => events.push(Event::HardBreak),
            other => events.push(other),
        }
    }

    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());
    out
}

/// Render a fenced or indented code block.
///
/// Recognized language → `hljs language-*` markup; unrecognized or absent →
/// auto-detected `hljs` markup; highlighting failure → escaped plain block.
fn render_code_block(lang: Option<&str>, code: &str, config: &RenderConfig) -> String {
    if config.highlight {
        match highlight::highlight(code, lang) {
            Ok(block) => {
                return match block.language {
                    Some(lang) => format!(
                        "<pre><code class=\"hljs language-{lang}\" data-language=\"{lang}\">{}</code></pre>\n",
                        block.html
                    ),
                    None => {
                        format!("<pre><code class=\"hljs\">{}</code></pre>\n", block.html)
                    }
                };
            }
            Err(err) => warn!("falling back to plain code block: {err}"),
        }
    }
    format!("<pre><code>{}</code></pre>\n", escape_html(code))
}

fn render_inline_code(text: &str) -> String {
    format!("<code class=\"inline-code\">{}</code>", escape_html(text))
}

/// Escape the five characters with meaning in markup or attribute context.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str) -> String {
        render_markdown(content, &RenderConfig::default())
    }

    #[test]
    fn headings_and_paragraphs_render() {
        let out = render("# Title\n\nbody text");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<p>body text</p>"));
    }

    #[test]
    fn inline_code_is_escaped_and_classed() {
        let out = render("Use `<script>` here");
        assert!(
            out.contains("<code class=\"inline-code\">&lt;script&gt;</code>"),
            "got: {out}"
        );
    }

    #[test]
    fn fenced_block_with_language_gets_hljs_classes() {
        let out = render("```rust\nfn main() {}\n```");
        assert!(
            out.contains("<code class=\"hljs language-rust\" data-language=\"rust\">"),
            "got: {out}"
        );
    }

    #[test]
    fn fenced_block_without_language_gets_bare_hljs_class() {
        let out = render("```\nplain words\n```");
        assert!(out.contains("<code class=\"hljs\">"), "got: {out}");
        assert!(out.contains("plain words"));
    }

    #[test]
    fn highlighting_disabled_yields_escaped_plain_block() {
        let config = RenderConfig::builder().highlight(false).build();
        let out = render_markdown("```rust\nlet x = \"<b>\";\n```", &config);
        assert!(out.contains("<pre><code>"), "got: {out}");
        assert!(out.contains("&lt;b&gt;"));
        assert!(!out.contains("hljs"));
    }

    #[test]
    fn soft_breaks_become_br_only_when_asked() {
        let soft = render("line one\nline two");
        assert!(!soft.contains("<br"));

        let config = RenderConfig::builder().hard_breaks(true).build();
        let hard = render_markdown("line one\nline two", &config);
        assert!(hard.contains("<br"), "got: {hard}");
    }

    #[test]
    fn raw_html_block_passes_through() {
        let out = render("<div class=\"table-wrapper\"><table></table></div>");
        assert!(out.contains("<div class=\"table-wrapper\"><table></table></div>"));
    }

    #[test]
    fn escape_covers_attribute_context() {
        assert_eq!(
            escape_html(r#"a&b<c>d"e'f"#),
            "a&amp;b&lt;c&gt;d&quot;e&#39;f"
        );
    }
}
