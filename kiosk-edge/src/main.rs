use anyhow::Context;
use chrono::Local;
use kiosk_edge::{
    Config, DispatchAdapter, RenderedDocuments, TokioScheduler, init_logger_with_file,
    probe_host_bridge,
};
use shared::Order;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    let path = std::env::args()
        .nth(1)
        .context("usage: kiosk-edge <order.json>")?;
    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path))?;
    let order: Order = serde_json::from_str(&raw).context("invalid order payload")?;

    tracing::info!(order_id = %order.id, items = order.items.len(), "Order loaded");

    let bridge = probe_host_bridge(config.printer_addr.as_deref());
    let adapter = DispatchAdapter::new(config.print_settings(), bridge, TokioScheduler);

    if !adapter.detect_bridge() {
        tracing::warn!("No print bridge detected, rendering to console");
        let docs = adapter
            .settings()
            .render_all(&order, Local::now().naive_local());
        print_to_console(&docs);
        return Ok(());
    }

    let handles = adapter.dispatch_all(&order)?;
    handles.join_all().await;

    tracing::info!(order_id = %order.id, "Print dispatch finished");
    Ok(())
}

fn print_to_console(docs: &RenderedDocuments) {
    println!("{}", docs.bill.to_visible());
    for ticket in [&docs.food_ticket, &docs.coffee_ticket].into_iter().flatten() {
        println!("{}", ticket.to_visible());
    }
}
