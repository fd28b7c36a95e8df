//! Column model: titles and display widths.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest column a terminal can address. Larger explicit widths are clamped.
pub const MAX_WIDTH: usize = u16::MAX as usize;

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Title shown in the header row.
    pub title: String,
    /// Width in terminal cells (not bytes, not chars).
    pub width: usize,
}

impl Column {
    pub fn new(title: impl Into<String>, width: usize) -> Self {
        Self {
            title: title.into(),
            width: width.min(MAX_WIDTH),
        }
    }

    /// Column sized to its own title.
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        let width = display_width(&title);
        Self { title, width }
    }
}

/// Build one column per title. `widths[i]` overrides the title width of
/// column `i`; widths past the last title are ignored.
pub fn columns_from_titles<S: AsRef<str>>(titles: &[S], widths: &[usize]) -> Vec<Column> {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| match widths.get(i) {
            Some(&width) => Column::new(title.as_ref(), width),
            None => Column::from_title(title.as_ref()),
        })
        .collect()
}

/// Terminal display width of `s`. Wide (CJK, emoji) characters count as 2.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad or truncate `s` to exactly `width` display cells.
///
/// Overlong text keeps as many leading characters as fit in `width - 1`
/// cells and ends with `…`. A wide character that would straddle the limit
/// is dropped and the gap filled with a space.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current <= width {
        let mut out = s.to_string();
        out.extend(std::iter::repeat(' ').take(width - current));
        return out;
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.extend(std::iter::repeat(' ').take(budget - used));
    out.push('…');
    out
}
