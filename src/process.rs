//! Top-level entry points and fallback semantics.
//!
//! The contract of [`process_article_content`] is that it always returns
//! renderable HTML: every failure mode inside the pipeline is recovered
//! here or below, logged, and replaced with a degraded-but-valid rendering.
//! The caller never sees an error and never sees a panic; the worst case
//! is the original text wrapped in a single styled paragraph.
//!
//! ## State machine per body
//!
//! ```text
//! RAW → CLASSIFIED → (TABLE_NORMALIZED if markdown) → PARSED → STYLED → REPAIRED → DONE
//! ```
//!
//! `html`-classified input short-circuits to DONE unchanged; `text` input
//! goes straight to paragraph wrapping.

use crate::config::RenderConfig;
use crate::error::ContentError;
use crate::output::Html;
use crate::pipeline::classify::{self, ContentKind};
use crate::pipeline::style::{self, PARAGRAPH_CLASS};
use crate::pipeline::{markdown, repair, tables};
use once_cell::sync::Lazy;
use regex::Regex;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Classify a raw article body.
///
/// Exposed separately from [`process_article_content`] because the serving
/// layer stores the tag next to the article (feed diagnostics, per-type
/// display toggles) without wanting the rendered output.
pub fn detect_content_type(content: &str) -> ContentKind {
    classify::classify(content)
}

/// Normalise a raw article body into styled HTML.
///
/// * empty input → empty output (the caller decides what empty means),
/// * `html` input → returned unchanged (trusted as-is),
/// * `text` input → blank-line-split paragraphs in styled `<p>` tags,
/// * `markdown` input → tables → grammar → styling → fragment repair.
///
/// Never returns an error and never panics; failures degrade to the raw
/// input wrapped in one styled paragraph and are logged at `warn`.
pub fn process_article_content(content: &str, config: &RenderConfig) -> Html {
    if content.is_empty() {
        return Html::empty();
    }

    match classify::classify(content) {
        ContentKind::Html => {
            debug!("content classified as html, passing through unchanged");
            Html::from_trusted(content.to_string())
        }
        ContentKind::Text => Html::from_trusted(wrap_plain_text(content)),
        ContentKind::Markdown => {
            let normalized = tables::normalize_tables(content);
            match render_guarded(&normalized, config) {
                Ok(rendered) => {
                    let styled = style::apply_styling(&rendered);
                    Html::from_trusted(repair::repair_fragments(&styled))
                }
                Err(err) => {
                    warn!("markdown rendering failed, wrapping raw content: {err}");
                    Html::from_trusted(format!("<p class=\"{PARAGRAPH_CLASS}\">{content}</p>"))
                }
            }
        }
    }
}

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("hardcoded paragraph pattern is valid"));

/// Plain text gets paragraph structure and nothing else: split on
/// blank-line boundaries, wrap each non-empty trimmed chunk.
fn wrap_plain_text(content: &str) -> String {
    PARAGRAPH_BREAK
        .split(content)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p class=\"{PARAGRAPH_CLASS}\">{p}</p>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The grammar is not expected to panic, but a panic must not cross the
/// pipeline boundary: the serving layer renders whatever this crate
/// returns, and one malformed feed item must never take a request down.
fn render_guarded(content: &str, config: &RenderConfig) -> Result<String, ContentError> {
    panic::catch_unwind(AssertUnwindSafe(|| {
        markdown::render_markdown(content, config)
    }))
    .map_err(|payload| {
        let detail = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        ContentError::RenderPanicked { detail }
    })
}
