//! Shared types for the kiosk print stack
//!
//! Order data as delivered by the order-management service, and venue data
//! printed on every document.

pub mod models;

// Re-exports
pub use models::{Customization, LineItem, Order, OrderTotals, StoreInfo, TransactionDetails};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
