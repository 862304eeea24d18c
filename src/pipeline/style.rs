//! Presentation-class injection.
//!
//! A single pass over a fixed substitution table keyed on exact tag-open
//! strings. By construction this only rewrites tags the renderer emitted
//! bare: a tag that already carries attributes (highlighted `<code>`,
//! pre-converted tables) is left alone. String substitution is retained
//! over a DOM walk deliberately: the targets are a closed set that the
//! renderer itself emits, and the left-alone behaviour for pre-attributed
//! tags is part of the documented contract.

/// Classes applied to paragraphs, shared with the plain-text wrapper and
/// the render-failure fallback.
pub(crate) const PARAGRAPH_CLASS: &str = "mb-4 text-base leading-7";

/// Substitutions applied to renderer output, keyed on bare tag opens.
///
/// The `<pre>` pair rewrites fenced blocks into the `code-block` container
/// that the repair pass operates on.
const STYLE_RULES: &[(&str, &str)] = &[
    ("<h1>", "<h1 class=\"text-3xl font-bold mt-8 mb-4\">"),
    ("<h2>", "<h2 class=\"text-2xl font-bold mt-6 mb-3\">"),
    ("<h3>", "<h3 class=\"text-xl font-semibold mt-5 mb-2\">"),
    ("<h4>", "<h4 class=\"text-lg font-semibold mt-4 mb-2\">"),
    ("<h5>", "<h5 class=\"text-base font-semibold mt-3 mb-1\">"),
    ("<h6>", "<h6 class=\"text-sm font-semibold mt-3 mb-1\">"),
    ("<p>", "<p class=\"mb-4 text-base leading-7\">"),
    ("<ul>", "<ul class=\"list-disc pl-6 mb-4 space-y-1\">"),
    ("<ol>", "<ol class=\"list-decimal pl-6 mb-4 space-y-1\">"),
    ("<li>", "<li class=\"leading-7\">"),
    (
        "<blockquote>",
        "<blockquote class=\"border-l-4 border-gray-300 pl-4 italic text-gray-600 my-4\">",
    ),
    ("<hr />", "<hr class=\"my-8 border-gray-200\" />"),
    ("<strong>", "<strong class=\"font-semibold\">"),
    ("<em>", "<em class=\"italic\">"),
    (
        "<a href",
        "<a target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-blue-600 underline hover:text-blue-800\" href",
    ),
    ("<img src", "<img class=\"max-w-full h-auto rounded-lg my-4\" src"),
    ("<pre>", "<div class=\"code-block\">"),
    ("</pre>", "</div>"),
];

/// Inject presentation classes into bare tags.
pub fn apply_styling(html: &str) -> String {
    let mut out = html.to_string();
    for (needle, replacement) in STYLE_RULES {
        if out.contains(needle) {
            out = out.replace(needle, replacement);
        }
    }
    out
}
