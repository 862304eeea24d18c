//! Syntax highlighting for fenced code blocks.
//!
//! Uses syntect's class-emitting generator so the output carries CSS
//! classes instead of inline styles; the rendering surface supplies the
//! stylesheet. The bundled syntax set is loaded once into a shared static;
//! it is immutable after construction, so concurrent renders need no
//! coordination.

use crate::error::ContentError;
use once_cell::sync::Lazy;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

/// A highlighted block plus the language the markup was generated for.
///
/// `language` is `Some` only when the author's fence tag resolved to a
/// grammar; auto-detected blocks carry `None` so the caller can omit the
/// `language-*` class.
pub struct Highlighted {
    pub html: String,
    pub language: Option<String>,
}

/// Map common fence-tag aliases to names the bundled grammars answer to.
/// Lookup only; emitted class names keep the author's tag.
fn grammar_token(lang: &str) -> String {
    let l = lang.to_ascii_lowercase();
    match l.as_str() {
        "shell" | "sh" | "zsh" => "bash".to_string(),
        "jsx" => "javascript".to_string(),
        _ => l,
    }
}

/// Highlight a fenced block.
///
/// A recognized `lang` selects its grammar directly; otherwise the block's
/// first line drives auto-detection (shebangs, XML prologues, …), falling
/// back to the plain-text grammar. Errors surface as
/// [`ContentError::Highlight`] so the caller can emit an escaped plain
/// block instead; a grammar failure must never abort the pipeline.
pub fn highlight(code: &str, lang: Option<&str>) -> Result<Highlighted, ContentError> {
    let tagged = lang
        .filter(|l| !l.is_empty())
        .and_then(|l| SYNTAX_SET.find_syntax_by_token(&grammar_token(l)).map(|s| (s, l)));

    let (syntax, language) = match tagged {
        Some((syntax, l)) => (syntax, Some(l.to_string())),
        None => {
            let first_line = code.lines().next().unwrap_or("");
            let syntax = SYNTAX_SET
                .find_syntax_by_first_line(first_line)
                .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
            (syntax, None)
        }
    };

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, ClassStyle::Spaced);
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|source| ContentError::Highlight {
                language: language.clone(),
                source,
            })?;
    }

    Ok(Highlighted {
        html: generator.finalize(),
        language,
    })
}
