//! Error types for the article2html library.
//!
//! The taxonomy is deliberately narrow: the pipeline is designed to always
//! produce output, so no condition here is fatal and none reaches the caller
//! of [`crate::process_article_content`]. Both variants describe failures
//! that are recovered *inside* the pipeline:
//!
//! * [`ContentError::Highlight`]: a syntax-highlighting grammar failed on a
//!   fenced block. Recovered locally by emitting the block as escaped plain
//!   text with no highlighting classes.
//!
//! * [`ContentError::RenderPanicked`]: the markdown renderer panicked on
//!   malformed input. Recovered at the top level by wrapping the raw input
//!   in a single styled paragraph.
//!
//! Errors are logged via `tracing` at the recovery site so operators can see
//! which feeds produce broken content, without any article failing to render.

use thiserror::Error;

/// Recoverable failures inside the normalization pipeline.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A syntax-highlighting grammar failed for a fenced code block.
    #[error("syntax highlighting failed (language: {}): {source}", .language.as_deref().unwrap_or("auto"))]
    Highlight {
        /// The fence's language tag, `None` when auto-detection was in play.
        language: Option<String>,
        #[source]
        source: syntect::Error,
    },

    /// The markdown renderer panicked on malformed input.
    #[error("markdown rendering panicked: {detail}")]
    RenderPanicked { detail: String },
}
