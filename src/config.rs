//! Renderer configuration.
//!
//! The system this crate grew out of configured one shared renderer
//! instance through global option flags. Here every knob lives in an
//! immutable [`RenderConfig`] passed explicitly into each call: nothing is
//! set up globally, so concurrent callers can hold different configurations
//! without coordination and a config can be serialised next to a diagnostic
//! log line to explain why two renders differ.

use serde::{Deserialize, Serialize};

/// Options for a single render call.
///
/// Built via [`RenderConfig::builder()`] or [`RenderConfig::default()`].
///
/// # Example
/// ```rust
/// use article2html::RenderConfig;
///
/// let config = RenderConfig::builder()
///     .highlight(false)
///     .hard_breaks(true)
///     .build();
/// assert!(!config.highlight);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Enable the GitHub-flavored extensions (tables, strikethrough, task
    /// lists). Default: true.
    ///
    /// Feed content overwhelmingly uses GFM constructs; turning this off is
    /// only useful when reproducing strict-CommonMark behaviour.
    pub gfm: bool,

    /// Render soft line breaks as `<br>`. Default: false.
    ///
    /// A bare newline inside a paragraph does not force a line break. RSS
    /// bodies are frequently hard-wrapped at arbitrary widths by the
    /// publisher; honouring those wraps would shred every paragraph.
    pub hard_breaks: bool,

    /// Typographic replacements (curly quotes, en/em dashes). Default: false.
    pub smart_punctuation: bool,

    /// Syntax-highlight fenced code blocks. Default: true.
    ///
    /// When off, fenced blocks are emitted as escaped plain text. Useful
    /// when the rendering surface ships no highlighting stylesheet.
    pub highlight: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gfm: true,
            hard_breaks: false,
            smart_punctuation: false,
            highlight: true,
        }
    }
}

impl RenderConfig {
    /// Create a new builder for `RenderConfig`.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    pub fn gfm(mut self, v: bool) -> Self {
        self.config.gfm = v;
        self
    }

    pub fn hard_breaks(mut self, v: bool) -> Self {
        self.config.hard_breaks = v;
        self
    }

    pub fn smart_punctuation(mut self, v: bool) -> Self {
        self.config.smart_punctuation = v;
        self
    }

    pub fn highlight(mut self, v: bool) -> Self {
        self.config.highlight = v;
        self
    }

    /// Build the configuration. Every field is a free boolean, so unlike
    /// range-validated builders this cannot fail.
    pub fn build(self) -> RenderConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = RenderConfig::default();
        assert!(c.gfm);
        assert!(!c.hard_breaks);
        assert!(!c.smart_punctuation);
        assert!(c.highlight);
    }

    #[test]
    fn builder_overrides_stick() {
        let c = RenderConfig::builder()
            .gfm(false)
            .smart_punctuation(true)
            .build();
        assert!(!c.gfm);
        assert!(c.smart_punctuation);
        assert!(c.highlight, "untouched fields keep their defaults");
    }

    #[test]
    fn config_round_trips_through_json() {
        let c = RenderConfig::builder().hard_breaks(true).build();
        let json = serde_json::to_string(&c).unwrap();
        let back: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
