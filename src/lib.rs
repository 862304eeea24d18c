//! # article2html
//!
//! Normalise article bodies of unknown provenance into consistently styled
//! HTML.
//!
//! ## Why this crate?
//!
//! A feed aggregator stores whatever publishers put on the wire: markdown,
//! hand-written HTML, plain prose, or malformed fragments, often mixed
//! and never labelled. Rendering that directly produces unstyled walls of
//! text, broken tables, and code listings shredded across multiple blocks.
//! This crate decides what a body actually is, converts it to HTML with
//! one consistent look, and repairs the structural artifacts that naive
//! line-based transformation leaves behind.
//!
//! ## Pipeline Overview
//!
//! ```text
//! raw body
//!  │
//!  ├─ 1. Classify  tag as html / markdown / text
//!  ├─ 2. Tables    rewrite ASCII pipe tables as HTML before parsing
//!  ├─ 3. Render    markdown → HTML (pulldown-cmark + syntect)
//!  ├─ 4. Style     inject presentation classes into bare tags
//!  └─ 5. Repair    re-merge fragmented code blocks (fixed point)
//! ```
//!
//! `html` input skips stages 2–5 and passes through unchanged; `text`
//! input is paragraph-wrapped. The pipeline is synchronous, performs no
//! I/O, and never returns an error or panics: the worst-case output is the
//! original text wrapped in a styled paragraph.
//!
//! ## Quick Start
//!
//! ```rust
//! use article2html::{detect_content_type, process_article_content, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let html = process_article_content("# Hello\n\nSome **bold** text.", &config);
//! assert!(html.as_str().contains("<h1"));
//!
//! assert_eq!(detect_content_type("plain prose").as_str(), "text");
//! ```
//!
//! ## Trusted output
//!
//! The returned [`Html`] is *trusted markup*: the pipeline performs no
//! sanitization (an explicit non-goal; the rendering layer owns that
//! decision). See [`Html`] for the contract.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `article2html` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only
//! deps:
//! ```toml
//! article2html = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod process;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenderConfig, RenderConfigBuilder};
pub use error::ContentError;
pub use output::Html;
pub use pipeline::classify::ContentKind;
pub use process::{detect_content_type, process_article_content};
