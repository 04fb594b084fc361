//! # kiosk-printer
//!
//! ESC/POS thermal printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS control vocabulary
//! - Fixed-width text layout (40 column receipts)
//! - String-based document building
//! - Print bridge seam and raw TCP (port 9100) bridge
//!
//! Business logic (WHAT to print) stays in application code:
//! - Bill, food ticket and coffee ticket rendering → kiosk-edge
//!
//! Text is never re-encoded: item names with accents or other non-ASCII
//! characters reach the bridge exactly as the order carried them.
//!
//! ## Example
//!
//! ```ignore
//! use kiosk_printer::{DocumentBuilder, NetworkBridge, PrintBridge, USB_CHANNEL};
//!
//! let mut b = DocumentBuilder::new();
//! b.align_center();
//! b.size_double();
//! b.write_line("0042");
//! b.size_reset();
//! b.align_left();
//! b.feed_cut();
//!
//! let bridge = NetworkBridge::from_addr("192.168.1.100:9100")?;
//! bridge.send_to_printer(USB_CHANNEL, "", &b.finalize()).await?;
//! ```

mod bridge;
mod error;
mod escpos;
mod layout;

// Re-exports
pub use bridge::{NetworkBridge, PrintBridge, USB_CHANNEL};
pub use error::{PrintError, PrintResult};
pub use escpos::{Document, DocumentBuilder, commands};
pub use layout::{PAPER_WIDTH, center, pad_end, pad_start, text_width, two_column};
