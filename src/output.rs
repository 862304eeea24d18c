//! Output type: HTML the pipeline vouches for.
//!
//! ## Why a wrapper type?
//!
//! The pipeline does not sanitize its output: by contract the caller
//! injects the result into a rendering surface that trusts it as markup.
//! Returning a bare `String` would leave that contract implicit; [`Html`]
//! makes the trust boundary a type, so every crossing is spelled
//! `into_string()` / `as_str()` at the call site and the sanitization
//! decision stays visible in the rendering layer that owns it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// HTML produced by the normalization pipeline.
///
/// The content is *trusted markup*: it may contain raw tags carried over
/// from the source article, because the pipeline performs no sanitization
/// (an explicit non-goal; the rendering surface decides what to escape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// The empty output, returned for empty input.
    pub fn empty() -> Self {
        Html(String::new())
    }

    /// Wrap a string the caller asserts is ready to render as markup.
    pub fn from_trusted(html: String) -> Self {
        Html(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
