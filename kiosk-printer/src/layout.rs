//! Fixed-width text layout
//!
//! Receipt printers lay text out on a character grid. Widths are counted in
//! characters, so accented names occupy one column each and pass through
//! unmodified.

/// Nominal paper width in characters
pub const PAPER_WIDTH: usize = 40;

/// Width of a string in printer columns
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

/// Left-justify `text` in exactly `width` columns.
///
/// Longer text is truncated to `width`.
pub fn pad_end(text: &str, width: usize) -> String {
    let w = text_width(text);
    if w >= width {
        return truncate(text, width);
    }
    format!("{}{}", text, " ".repeat(width - w))
}

/// Right-justify `text` in exactly `width` columns.
///
/// Longer text is truncated to `width`.
pub fn pad_start(text: &str, width: usize) -> String {
    let w = text_width(text);
    if w >= width {
        return truncate(text, width);
    }
    format!("{}{}", " ".repeat(width - w), text)
}

/// One terminated line with `left` flush-left and `right` flush-right.
///
/// When both sides do not fit, a single space separates them and the row
/// runs past `width`. Neither side is ever truncated.
pub fn two_column(left: &str, right: &str, width: usize) -> String {
    let used = text_width(left) + text_width(right);
    let spaces = if used >= width { 1 } else { width - used };
    format!("{}{}{}\n", left, " ".repeat(spaces), right)
}

/// One terminated line with `text` centered by leading spaces.
///
/// Text as wide as the line or wider is returned as is.
pub fn center(text: &str, width: usize) -> String {
    let w = text_width(text);
    if w >= width {
        return format!("{}\n", text);
    }
    format!("{}{}\n", " ".repeat((width - w) / 2), text)
}
