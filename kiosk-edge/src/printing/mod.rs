//! Checkout Printing Module
//!
//! Turns a paid order into three documents and sends them to the host
//! print bridge:
//! - Bill: customer copy with prices and tax split
//! - Food ticket: non-coffee items for the kitchen
//! - Coffee ticket: coffee items for the coffee counter

pub mod classifier;
pub mod defaults;
pub mod dispatch;
pub mod renderer;
pub mod scheduler;

use std::time::Duration;

use chrono::NaiveDateTime;
use kiosk_printer::Document;
use shared::{Order, StoreInfo};

pub use classifier::{CategoryClassifier, DEFAULT_COFFEE_CATEGORY_ID};
pub use defaults::TicketDefaults;
pub use dispatch::{
    DispatchAdapter, DispatchError, DispatchHandles, DispatchResult, probe_host_bridge,
};
pub use renderer::{BillRenderer, TicketKind, TicketRenderer};
pub use scheduler::{ScheduleError, ScheduledHandle, Scheduler, TokioScheduler};

/// Delays of the ticket dispatches, measured from the start of a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchTiming {
    pub food_ticket: Duration,
    pub coffee_ticket: Duration,
}

impl DispatchTiming {
    pub fn from_millis(food_ticket_ms: u64, coffee_ticket_ms: u64) -> Self {
        Self {
            food_ticket: Duration::from_millis(food_ticket_ms),
            coffee_ticket: Duration::from_millis(coffee_ticket_ms),
        }
    }
}

impl Default for DispatchTiming {
    fn default() -> Self {
        Self::from_millis(350, 700)
    }
}

/// Everything the renderers and the dispatcher need besides the order
#[derive(Debug, Clone, Default)]
pub struct PrintSettings {
    pub store: StoreInfo,
    pub defaults: TicketDefaults,
    pub classifier: CategoryClassifier,
    pub timing: DispatchTiming,
}

/// The three documents of one order
#[derive(Debug, Clone)]
pub struct RenderedDocuments {
    pub bill: Document,
    /// `None` when the order has no kitchen items
    pub food_ticket: Option<Document>,
    /// `None` when the order has no coffee items
    pub coffee_ticket: Option<Document>,
}

impl PrintSettings {
    pub fn bill_renderer(&self) -> BillRenderer<'_> {
        BillRenderer::new(&self.store, &self.defaults)
    }

    pub fn ticket_renderer(&self, kind: TicketKind) -> TicketRenderer<'_> {
        TicketRenderer::new(kind, &self.store, &self.defaults, &self.classifier)
    }

    /// Render all three documents with the same print time
    pub fn render_all(&self, order: &Order, printed_at: NaiveDateTime) -> RenderedDocuments {
        RenderedDocuments {
            bill: self.bill_renderer().render(order, printed_at),
            food_ticket: self.ticket_renderer(TicketKind::Food).render(order, printed_at),
            coffee_ticket: self.ticket_renderer(TicketKind::Coffee).render(order, printed_at),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use shared::{LineItem, Order, OrderTotals};

    pub fn item(name: &str, price: i64, quantity: u32, category_id: &str) -> LineItem {
        LineItem {
            name: name.to_string(),
            price: Decimal::from(price),
            quantity,
            category_id: category_id.to_string(),
            customizations: None,
        }
    }

    pub fn order_with(items: Vec<LineItem>) -> Order {
        Order {
            id: "ORD-20261015-0001".to_string(),
            ticket_code: "KOT-0042".to_string(),
            external_invoice_id: None,
            order_type: None,
            bill_type: None,
            kiosk_id: None,
            totals: OrderTotals::default(),
            items,
            transaction: None,
        }
    }

    pub fn printed_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 15)
            .and_then(|d| d.and_hms_opt(14, 30, 0))
            .unwrap()
    }
}
