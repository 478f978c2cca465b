//! Table and text layout helpers used by `scan`.
//! Widths ignore ANSI color codes so colored cells still line up.

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Render rows under a header with a `=` rule. Widths come from the widest
/// cell per column; the last column is never padded.
pub fn render_table(
    headers: &[String],
    aligns: &[Align],
    rows: &[Vec<String>],
) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let mut widths: Vec<usize> =
        headers.iter().map(|h| display_len(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(display_len(cell));
        }
    }

    let header_line = format_row(headers, aligns, &widths);
    let mut out = String::new();
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"=".repeat(display_len(&header_line)));
    for row in rows {
        out.push('\n');
        out.push_str(&format_row(row, aligns, &widths));
    }
    out
}

fn format_row(row: &[String], aligns: &[Align], widths: &[usize]) -> String {
    let last = row.len().min(widths.len()).saturating_sub(1);
    let mut parts: Vec<String> = Vec::with_capacity(row.len());
    for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
        let pad = " ".repeat(width.saturating_sub(display_len(cell)));
        let align = aligns.get(i).copied().unwrap_or(Align::Left);
        parts.push(match align {
            Align::Right => format!("{pad}{cell}"),
            Align::Left if i == last => cell.clone(),
            Align::Left => format!("{cell}{pad}"),
        });
    }
    parts.join(" | ")
}

/// Truncate text to a width, appending an ellipsis when needed.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_width - 1).collect();
    out.push('…');
    out
}

/// Compute visible length of a string, ignoring ANSI escape sequences.
pub fn display_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}

/// Terminal width, or `fallback` when not attached to a terminal.
pub fn terminal_columns(fallback: usize) -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_table_alignment() {
        let rows = [
            cells(&["3/1/25", "78", "Sprouted: 3/1/25"]),
            cells(&["12/30/24", "139", "x"]),
        ];
        let table = render_table(
            &cells(&["Date", "Days", "Line"]),
            &[Align::Left, Align::Right, Align::Left],
            &rows,
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Date     | Days | Line");
        assert_eq!(lines[1], "=".repeat(lines[0].len()));
        assert_eq!(lines[2], "3/1/25   |   78 | Sprouted: 3/1/25");
        assert_eq!(lines[3], "12/30/24 |  139 | x");
    }

    #[test]
    fn test_display_len_ignores_ansi() {
        assert_eq!(display_len("\x1b[1;32m78\x1b[0m"), 2);
        assert_eq!(display_len("plain"), 5);
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("abcdef", 4), "abc…");
        assert_eq!(truncate_with_ellipsis("abc", 4), "abc");
        assert_eq!(truncate_with_ellipsis("abc", 0), "");
    }
}
