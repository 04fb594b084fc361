//! ESC/POS document builder
//!
//! Provides a fluent API for building ESC/POS print documents as text
//! interleaved with control sequences.

use std::fmt;

use crate::layout::{PAPER_WIDTH, center, two_column};

/// Raw ESC/POS control sequences.
///
/// The bridge forwards these bytes verbatim to the hardware, so the values
/// must not change.
pub mod commands {
    /// ESC @ - Initialize printer
    pub const INIT: &str = "\x1B\x40";

    /// ESC a 0 - Align left
    pub const ALIGN_LEFT: &str = "\x1B\x61\x00";
    /// ESC a 1 - Align center
    pub const ALIGN_CENTER: &str = "\x1B\x61\x01";
    /// ESC a 2 - Align right
    pub const ALIGN_RIGHT: &str = "\x1B\x61\x02";

    /// ESC E 1 - Emphasized on
    pub const BOLD_ON: &str = "\x1B\x45\x01";
    /// ESC E 0 - Emphasized off
    pub const BOLD_OFF: &str = "\x1B\x45\x00";

    /// GS ! 0x00 - Normal size
    pub const SIZE_NORMAL: &str = "\x1D\x21\x00";
    /// GS ! 0x01 - Double height
    pub const SIZE_DOUBLE_HEIGHT: &str = "\x1D\x21\x01";
    /// GS ! 0x11 - Double width and height
    pub const SIZE_DOUBLE: &str = "\x1D\x21\x11";

    /// GS V 0 - Full cut
    pub const CUT: &str = "\x1D\x56\x00";
    /// ESC d 4 - Print and feed 4 lines
    pub const FEED: &str = "\x1B\x64\x04";
}

/// A finished print document.
///
/// Human-readable text and control codes in print order. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(String);

impl Document {
    /// Payload bytes as sent to the printer
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render with control bytes spelled out, e.g. `<ESC>a<01>`.
    ///
    /// Used when no printer is attached and the document goes to a console.
    pub fn to_visible(&self) -> String {
        let mut out = String::with_capacity(self.0.len() * 2);
        for c in self.0.chars() {
            match c {
                '\x1B' => out.push_str("<ESC>"),
                '\x1D' => out.push_str("<GS>"),
                '\n' => out.push('\n'),
                c if c.is_ascii_control() => out.push_str(&format!("<{:02X}>", c as u8)),
                c => out.push(c),
            }
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// String-based ESC/POS document builder
///
/// Every document starts with a printer reset. Text is kept as UTF-8 and
/// never transcoded.
pub struct DocumentBuilder {
    buf: String,
    width: usize,
}

impl DocumentBuilder {
    /// Create a builder for the nominal 40 column paper
    pub fn new() -> Self {
        Self::with_width(PAPER_WIDTH)
    }

    /// Create a builder with the specified paper width in characters
    pub fn with_width(width: usize) -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str(commands::INIT);
        Self { buf, width }
    }

    /// Get the configured paper width
    pub fn width(&self) -> usize {
        self.width
    }

    // === Text Output ===

    /// Write raw text
    pub fn write(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self
    }

    /// Write text followed by newline
    pub fn write_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    // === Alignment ===

    pub fn align_left(&mut self) -> &mut Self {
        self.write(commands::ALIGN_LEFT)
    }

    pub fn align_center(&mut self) -> &mut Self {
        self.write(commands::ALIGN_CENTER)
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.write(commands::ALIGN_RIGHT)
    }

    // === Text Style ===

    pub fn bold_on(&mut self) -> &mut Self {
        self.write(commands::BOLD_ON)
    }

    pub fn bold_off(&mut self) -> &mut Self {
        self.write(commands::BOLD_OFF)
    }

    /// Double width and height
    pub fn size_double(&mut self) -> &mut Self {
        self.write(commands::SIZE_DOUBLE)
    }

    /// Double height only
    pub fn size_double_height(&mut self) -> &mut Self {
        self.write(commands::SIZE_DOUBLE_HEIGHT)
    }

    /// Reset to normal size
    pub fn size_reset(&mut self) -> &mut Self {
        self.write(commands::SIZE_NORMAL)
    }

    // === Separators ===

    /// Print a line of '=' characters
    pub fn eq_sep(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.write_line(&sep)
    }

    /// Print a line of '-' characters
    pub fn dash_sep(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.write_line(&sep)
    }

    // === Layout Helpers ===

    /// Print left and right text on the same line
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let row = two_column(left, right, self.width);
        self.write(&row)
    }

    /// Center text with leading spaces, independent of the printer alignment
    pub fn text_center(&mut self, s: &str) -> &mut Self {
        let row = center(s, self.width);
        self.write(&row)
    }

    // === Paper Control ===

    /// Feed blank lines then cut. Ends every document.
    pub fn feed_cut(&mut self) -> &mut Self {
        self.write(commands::FEED);
        self.write(commands::CUT)
    }

    // === Build ===

    /// Finalize into an immutable document
    pub fn finalize(self) -> Document {
        Document(self.buf)
    }

    /// Get the current buffer as a string reference
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
