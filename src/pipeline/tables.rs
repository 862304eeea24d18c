//! ASCII-table normalization.
//!
//! Feed bodies carry hand-drawn pipe tables that the markdown grammar's
//! table extension handles unreliably: missing separator rows, blank lines
//! in the middle of a table, ragged rows. This stage runs before parsing,
//! rewrites every usable run of pipe rows into an HTML table, and leaves
//! anything questionable exactly as it was; the markdown renderer is the
//! fallback, not an error path.
//!
//! Known limitation, carried over deliberately: cells cannot contain
//! escaped pipes. A `\|` inside a cell splits the cell.

/// A pipe row starts and ends with `|` and has at least one interior `|`
/// (two columns minimum; a single incidental `|cell|` is not a table).
fn is_pipe_row(line: &str) -> bool {
    let t = line.trim();
    t.starts_with('|') && t.ends_with('|') && t.matches('|').count() >= 3
}

/// A separator row contains only pipes, dashes, colons, pluses, and
/// whitespace between its outer pipes, with at least one dash.
fn is_separator_row(line: &str) -> bool {
    let t = line.trim();
    t.starts_with('|')
        && t.ends_with('|')
        && t.contains('-')
        && t.chars()
            .all(|c| matches!(c, '|' | '-' | ':' | '+') || c.is_whitespace())
}

/// Strip the outer pipes, split on `|`, trim each cell.
fn parse_row(line: &str) -> Vec<String> {
    let t = line.trim();
    let inner = t.strip_prefix('|').unwrap_or(t);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|c| c.trim().to_string()).collect()
}

/// Rewrite runs of ASCII pipe rows as HTML tables.
///
/// Runs only on content headed for the markdown renderer, always before it.
/// Abandoned candidates (single rows, unusable headers, empty bodies) are
/// left byte-for-byte as they were.
pub fn normalize_tables(content: &str) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut i = 0;

    while i < lines.len() {
        if !is_pipe_row(lines[i]) {
            out.push(lines[i].to_string());
            i += 1;
            continue;
        }

        // Greedily extend the run. Blank gaps are swallowed only when a
        // later pipe row follows them, so the blank line that *ends* a
        // table stays in place and terminates the emitted HTML block.
        let mut rows: Vec<&str> = Vec::new();
        let mut j = i;
        while j < lines.len() {
            if is_pipe_row(lines[j]) {
                rows.push(lines[j]);
                j += 1;
                continue;
            }
            if lines[j].trim().is_empty() {
                let mut k = j;
                while k < lines.len() && lines[k].trim().is_empty() {
                    k += 1;
                }
                if k < lines.len() && is_pipe_row(lines[k]) {
                    j = k;
                    continue;
                }
            }
            break;
        }

        let converted = if rows.len() >= 2 {
            render_table(&rows)
        } else {
            None
        };

        match converted {
            Some(html) => out.push(html),
            None => out.extend(lines[i..j].iter().map(|l| l.to_string())),
        }
        i = j;
    }

    out.join("\n")
}

/// Render an accepted run as a single-line HTML table, or `None` when the
/// header or body is unusable and the run should be abandoned.
fn render_table(rows: &[&str]) -> Option<String> {
    let sep = rows.iter().position(|r| is_separator_row(r));
    let (header_rows, body_rows) = match sep {
        Some(k) => (&rows[..k], &rows[k + 1..]),
        None => (&rows[..1], &rows[1..]),
    };

    let header: Vec<Vec<String>> = header_rows.iter().map(|r| parse_row(r)).collect();
    let first = header.first()?;
    if first.iter().all(|c| c.is_empty()) {
        return None;
    }
    let cols = first.len();

    let body: Vec<Vec<String>> = body_rows
        .iter()
        .map(|r| parse_row(r))
        .filter(|cells| cells.iter().any(|c| !c.is_empty()))
        .collect();
    if body.is_empty() {
        return None;
    }

    // Single line on purpose: the downstream parser treats this as one raw
    // HTML block that ends at the next blank line.
    let mut html = String::from("<div class=\"table-wrapper\"><table><thead>");
    for row in &header {
        push_cells(&mut html, row, cols, "th");
    }
    html.push_str("</thead><tbody>");
    for row in &body {
        push_cells(&mut html, row, cols, "td");
    }
    html.push_str("</tbody></table></div>");
    Some(html)
}

/// Emit one `<tr>`, padding or truncating the row to `cols` cells.
fn push_cells(html: &mut String, row: &[String], cols: usize, tag: &str) {
    html.push_str("<tr>");
    for idx in 0..cols {
        html.push('<');
        html.push_str(tag);
        html.push('>');
        html.push_str(row.get(idx).map(String::as_str).unwrap_or(""));
        html.push_str("</");
        html.push_str(tag);
        html.push('>');
    }
    html.push_str("</tr>");
}
