/*!
Table formatting for human-readable command output.

Zero non-std dependencies: headers, a dash separator, two-space gutters,
padded columns, greedy shrink when the terminal is narrow. Degrades to
plain text when NO_COLOR is set. Width detection is best-effort via the
COLUMNS env var, clamped to 40..=220 with a default of 100.

This module returns formatted strings and never prints; error output stays
on stderr in the command handlers.
*/

use std::borrow::Cow;

/* ---- Style ---- */

#[derive(Debug, Clone)]
pub struct StyleOptions {
    pub use_color: bool,
    pub term_width: usize,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self::detect()
    }
}

impl StyleOptions {
    pub fn detect() -> Self {
        let use_color = std::env::var_os("NO_COLOR").is_none();
        let term_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .map(|w| w.clamp(40, 220))
            .unwrap_or(100);
        StyleOptions {
            use_color,
            term_width,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Role {
    Header,
    Dim,
}

pub fn color(role: Role, text: impl AsRef<str>, style: &StyleOptions) -> String {
    if !style.use_color {
        return text.as_ref().to_string();
    }
    let code = match role {
        Role::Header => "1", // bold
        Role::Dim => "2",    // faint
    };
    format!("\x1b[{code}m{}\x1b[0m", text.as_ref())
}

/* ---- Table Rendering ---- */

const MIN_COL_WIDTH: usize = 2;

pub fn table(headers: &[&str], rows: &[Vec<String>], style: &StyleOptions) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let col_count = headers.len();

    // Widest content per column, then greedy shrink from the widest columns
    // until the row fits the terminal.
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(display_width(cell));
        }
    }
    let total: usize = widths.iter().sum::<usize>() + (col_count - 1) * 2;
    if total > style.term_width {
        let mut overflow = total - style.term_width;
        let mut ordered: Vec<(usize, usize)> = widths.iter().copied().enumerate().collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1));
        for (idx, _) in ordered {
            if overflow == 0 {
                break;
            }
            if widths[idx] > MIN_COL_WIDTH {
                let shrink = (widths[idx] - MIN_COL_WIDTH).min(overflow);
                widths[idx] -= shrink;
                overflow -= shrink;
            }
        }
    }

    let mut out = String::new();
    for (i, h) in headers.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&color(Role::Header, pad_or_truncate(h, widths[i]), style));
    }
    out.push('\n');

    let mut sep = String::new();
    for (i, _) in headers.iter().enumerate() {
        if i > 0 {
            sep.push_str("  ");
        }
        sep.push_str(&"-".repeat(widths[i]));
    }
    out.push_str(&color(Role::Dim, sep, style));

    for row in rows {
        out.push('\n');
        for c in 0..col_count {
            if c > 0 {
                out.push_str("  ");
            }
            let raw = row.get(c).map(String::as_str).unwrap_or("");
            out.push_str(&pad_or_truncate(raw, widths[c]));
        }
    }

    out
}

fn pad_or_truncate(s: &str, width: usize) -> String {
    let len = display_width(s);
    if len == width {
        return s.to_string();
    }
    if len < width {
        return format!("{s}{}", " ".repeat(width - len));
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = String::new();
    for ch in s.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

/* ---- ANSI / Width Utilities ---- */

fn strip_ansi(s: &str) -> Cow<'_, str> {
    // Minimal scan for ESC '[' ... final byte; no regex needed.
    if !s.contains('\x1b') {
        return Cow::Borrowed(s);
    }
    let mut buf = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x1B && i + 1 < bytes.len() && bytes[i + 1] == b'[' {
            i += 2;
            while i < bytes.len() && !bytes[i].is_ascii_alphabetic() {
                i += 1;
            }
            if i < bytes.len() {
                i += 1;
            }
            continue;
        }
        buf.push(bytes[i] as char);
        i += 1;
    }
    Cow::Owned(buf)
}

fn display_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/* ---- Tests ---- */

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(width: usize) -> StyleOptions {
        StyleOptions {
            use_color: false,
            term_width: width,
        }
    }

    #[test]
    fn table_aligns_columns() {
        let t = table(
            &["ID", "NAME"],
            &[
                vec!["1".into(), "web-1".into()],
                vec!["12345".into(), "db".into()],
            ],
            &plain(100),
        );
        let lines: Vec<&str> = t.lines().collect();
        assert_eq!(lines[0], "ID     NAME ");
        assert_eq!(lines[1], "-----  -----");
        assert_eq!(lines[2], "1      web-1");
        assert_eq!(lines[3], "12345  db   ");
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let t = table(
            &["ID", "NAME"],
            &[vec!["1".into(), "a-very-long-droplet-name".into()]],
            &plain(20),
        );
        for line in t.lines() {
            assert!(display_width(line) <= 20, "line too wide: {line:?}");
        }
        assert!(t.contains('…'));
    }

    #[test]
    fn pad_or_truncate_exact_short_long() {
        assert_eq!(pad_or_truncate("ab", 2), "ab");
        assert_eq!(pad_or_truncate("ab", 4), "ab  ");
        assert_eq!(pad_or_truncate("abcdef", 4), "abc…");
    }

    #[test]
    fn strip_ansi_removes_codes() {
        assert_eq!(strip_ansi("\x1b[1mBOLD\x1b[0m"), "BOLD");
        assert_eq!(display_width("\x1b[2m----\x1b[0m"), 4);
    }
}
