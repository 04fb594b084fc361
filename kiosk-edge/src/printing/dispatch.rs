//! Print dispatch
//!
//! Sends the documents of an order to the host print bridge. The bill goes
//! out at once; the food and coffee tickets follow after fixed delays, all
//! measured from the same scheduling point.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use futures::FutureExt;
use futures::future::BoxFuture;
use kiosk_printer::{Document, NetworkBridge, PrintBridge, PrintError, USB_CHANNEL};
use shared::Order;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use super::PrintSettings;
use super::renderer::TicketKind;
use super::scheduler::{ScheduleError, ScheduledHandle, Scheduler, TokioScheduler};

#[derive(Debug, Error)]
pub enum DispatchError {
    /// No host print bridge; the caller should take its fallback path
    #[error("Print bridge unavailable")]
    BridgeUnavailable,

    #[error("Print failed: {0}")]
    PrintFailed(#[from] PrintError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Build the host bridge from a configured printer address.
///
/// Never fails: a missing or invalid address means no bridge.
pub fn probe_host_bridge(printer_addr: Option<&str>) -> Option<Arc<dyn PrintBridge>> {
    let addr = printer_addr?;
    match NetworkBridge::from_addr(addr) {
        Ok(bridge) => {
            info!(addr = %bridge.addr(), "Print bridge configured");
            Some(Arc::new(bridge))
        }
        Err(e) => {
            warn!(addr = addr, error = %e, "Ignoring invalid printer address");
            None
        }
    }
}

/// Handles of the three scheduled sends of one order
#[derive(Debug)]
pub struct DispatchHandles {
    pub bill: ScheduledHandle,
    pub food_ticket: ScheduledHandle,
    pub coffee_ticket: ScheduledHandle,
}

impl DispatchHandles {
    /// Cancel every send that has not fired yet
    pub fn cancel_all(&self) {
        self.bill.cancel();
        self.food_ticket.cancel();
        self.coffee_ticket.cancel();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScheduledHandle> {
        [&self.bill, &self.food_ticket, &self.coffee_ticket].into_iter()
    }

    /// Wait for all three sends
    pub async fn join_all(self) {
        futures::join!(
            self.bill.join(),
            self.food_ticket.join(),
            self.coffee_ticket.join()
        );
    }
}

/// Dispatches rendered documents through the host print bridge
pub struct DispatchAdapter<S = TokioScheduler> {
    settings: PrintSettings,
    bridge: Option<Arc<dyn PrintBridge>>,
    scheduler: S,
}

impl<S: Scheduler> DispatchAdapter<S> {
    pub fn new(settings: PrintSettings, bridge: Option<Arc<dyn PrintBridge>>, scheduler: S) -> Self {
        Self {
            settings,
            bridge,
            scheduler,
        }
    }

    pub fn settings(&self) -> &PrintSettings {
        &self.settings
    }

    /// Whether a host print bridge is present
    pub fn detect_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Send one document right away over the USB channel
    #[instrument(skip_all, fields(bytes = document.len()))]
    pub async fn dispatch_document(&self, document: &Document) -> DispatchResult<()> {
        let bridge = self.bridge.as_ref().ok_or(DispatchError::BridgeUnavailable)?;
        bridge.send_to_printer(USB_CHANNEL, "", document).await?;
        Ok(())
    }

    /// Render the order and schedule bill, food ticket and coffee ticket
    pub fn dispatch_all(&self, order: &Order) -> DispatchResult<DispatchHandles> {
        self.dispatch_all_at(order, Local::now().naive_local())
    }

    /// [`Self::dispatch_all`] with an explicit print time
    ///
    /// Exactly three sends are scheduled. A ticket with nothing to print
    /// still gets its slot; it logs and sends nothing when it fires.
    #[instrument(skip(self, order, printed_at), fields(order_id = %order.id))]
    pub fn dispatch_all_at(
        &self,
        order: &Order,
        printed_at: NaiveDateTime,
    ) -> DispatchResult<DispatchHandles> {
        let Some(bridge) = self.bridge.as_ref() else {
            warn!("No print bridge, dispatch skipped");
            return Err(DispatchError::BridgeUnavailable);
        };

        let docs = self.settings.render_all(order, printed_at);
        let timing = self.settings.timing;

        let bill = self.scheduler.schedule(
            "bill",
            std::time::Duration::ZERO,
            send_task(bridge.clone(), "bill", order.id.clone(), Some(docs.bill)),
        )?;
        let food = TicketKind::Food.as_str();
        let food_ticket = self.scheduler.schedule(
            food,
            timing.food_ticket,
            send_task(bridge.clone(), food, order.id.clone(), docs.food_ticket),
        )?;
        let coffee = TicketKind::Coffee.as_str();
        let coffee_ticket = self.scheduler.schedule(
            coffee,
            timing.coffee_ticket,
            send_task(bridge.clone(), coffee, order.id.clone(), docs.coffee_ticket),
        )?;

        info!(
            food_delay_ms = timing.food_ticket.as_millis() as u64,
            coffee_delay_ms = timing.coffee_ticket.as_millis() as u64,
            "Print dispatch scheduled"
        );

        Ok(DispatchHandles {
            bill,
            food_ticket,
            coffee_ticket,
        })
    }
}

/// One deferred send. Failures are logged and stay local to this send.
fn send_task(
    bridge: Arc<dyn PrintBridge>,
    document: &'static str,
    order_id: String,
    payload: Option<Document>,
) -> BoxFuture<'static, ()> {
    async move {
        let Some(payload) = payload else {
            info!(order_id = %order_id, document, "Nothing to print, skipping");
            return;
        };

        match bridge.send_to_printer(USB_CHANNEL, "", &payload).await {
            Ok(()) => info!(order_id = %order_id, document, bytes = payload.len(), "Document sent"),
            Err(e) => error!(order_id = %order_id, document, error = %e, "Failed to send document"),
        }
    }
    .boxed()
}
