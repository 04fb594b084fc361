//! Bill and ticket renderers
//!
//! Renders an order into the three documents printed at checkout:
//! the customer bill, the kitchen (food) ticket and the coffee ticket.
//! Renderers are pure: the print time is passed in.

use chrono::NaiveDateTime;
use kiosk_printer::{Document, DocumentBuilder, pad_end, pad_start};
use rust_decimal::{Decimal, RoundingStrategy};
use shared::{LineItem, Order, StoreInfo};

use super::classifier::CategoryClassifier;
use super::defaults::TicketDefaults;

/// Bill column widths: description, quantity, amount
const DESC_WIDTH: usize = 22;
const QTY_WIDTH: usize = 4;
const AMOUNT_WIDTH: usize = 14;

/// Ticket quantity column width
const TICKET_QTY_WIDTH: usize = 5;

/// Prefix of an indented customization line
const CUSTOMIZATION_PREFIX: &str = "  + ";

/// Format `amount` rounded half away from zero to exactly `dp` decimals
pub fn format_fixed(amount: Decimal, dp: u32) -> String {
    let mut v = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    v.rescale(dp);
    v.to_string()
}

/// Print timestamp as `DD/MM/YYYY hh:mm AM`
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%d/%m/%Y %I:%M %p").to_string()
}

/// Token number shown large on tickets: the ticket code minus its prefix
pub fn token_number(ticket_code: &str) -> String {
    ticket_code.chars().skip(4).collect()
}

/// Short bill number printed on tickets
pub fn ticket_bill_number(order_id: &str) -> String {
    let core: String = order_id.chars().skip(4).take(6).collect();
    format!("KTR-{}", core)
}

/// Customer bill renderer
pub struct BillRenderer<'a> {
    store: &'a StoreInfo,
    defaults: &'a TicketDefaults,
}

impl<'a> BillRenderer<'a> {
    pub fn new(store: &'a StoreInfo, defaults: &'a TicketDefaults) -> Self {
        Self { store, defaults }
    }

    /// Render the bill. Always produces a document.
    pub fn render(&self, order: &Order, printed_at: NaiveDateTime) -> Document {
        let mut b = DocumentBuilder::new();

        self.render_header(&mut b, order);
        self.render_meta(&mut b, order, printed_at);
        self.render_items(&mut b, &order.items);
        self.render_totals(&mut b, order);
        self.render_footer(&mut b);

        b.feed_cut();
        b.finalize()
    }

    fn render_header(&self, b: &mut DocumentBuilder, order: &Order) {
        b.align_center();
        b.bold_on();
        b.write_line(&self.store.name);
        b.bold_off();
        for line in [&self.store.tagline, &self.store.branch, &self.store.address] {
            if !line.is_empty() {
                b.write_line(line);
            }
        }
        b.write("\n");

        b.bold_on();
        b.write_line(&format!("KOT: {}", order.ticket_code));
        b.bold_off();
    }

    fn render_meta(&self, b: &mut DocumentBuilder, order: &Order, printed_at: NaiveDateTime) {
        b.align_left();
        b.dash_sep();
        b.write_line(&format!("Bill No: {}", order.id));
        if let Some(ref invoice) = order.external_invoice_id {
            b.write_line(&format!("Invoice No: {}", invoice));
        }
        b.write_line(&format!("Date: {}", format_timestamp(printed_at)));
        b.write_line(&format!(
            "Order Type: {}",
            self.defaults.resolve_order_type(order)
        ));
        b.write_line(&format!("Kiosk: {}", self.defaults.resolve_kiosk_id(order)));

        if let Some(ref txn) = order.transaction {
            if let Some(ref mode) = txn.payment_mode {
                b.write_line(&format!("Payment: {}", mode));
            }
            if let Some(ref id) = txn.transaction_id {
                b.write_line(&format!("Txn Ref: {}", id));
            }
        }
        b.dash_sep();
    }

    fn render_items(&self, b: &mut DocumentBuilder, items: &[LineItem]) {
        b.bold_on();
        b.write_line(&format!(
            "{}{}{}",
            pad_end("Item", DESC_WIDTH),
            pad_end("Qty", QTY_WIDTH),
            pad_start("Amount", AMOUNT_WIDTH)
        ));
        b.bold_off();
        b.dash_sep();

        for item in items {
            let amount = format!("Rs {}", format_fixed(item.amount(), 2));
            b.write_line(&format!(
                "{}{}{}",
                pad_end(&item.name, DESC_WIDTH),
                pad_end(&item.quantity.to_string(), QTY_WIDTH),
                pad_start(&amount, AMOUNT_WIDTH)
            ));
            render_customizations(b, item, CUSTOMIZATION_PREFIX);
        }
        b.dash_sep();
    }

    fn render_totals(&self, b: &mut DocumentBuilder, order: &Order) {
        let totals = &order.totals;
        // Tax is split evenly; no rate is carried on the order
        let half_tax = totals.tax / Decimal::from(2);

        b.line_lr("Subtotal:", &format!("Rs {}", format_fixed(totals.subtotal, 2)));
        b.line_lr("CGST @ 2.5%:", &format!("+{}", format_fixed(half_tax, 2)));
        b.line_lr("SGST @ 2.5%:", &format!("+{}", format_fixed(half_tax, 2)));
        b.dash_sep();

        b.bold_on();
        b.size_double_height();
        b.line_lr("TOTAL:", &format!("Rs {}", format_fixed(totals.total, 0)));
        b.size_reset();
        b.bold_off();
        b.dash_sep();
    }

    fn render_footer(&self, b: &mut DocumentBuilder) {
        if !self.store.gstin.is_empty() {
            b.text_center(&format!("GSTIN: {}", self.store.gstin));
        }
        if !self.store.fssai.is_empty() {
            b.text_center(&format!("FSSAI Lic No: {}", self.store.fssai));
        }
        for line in &self.store.footer {
            b.text_center(line);
        }
    }
}

/// Ticket station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketKind {
    /// Kitchen ticket, every non-coffee item
    Food,
    /// Coffee counter ticket
    Coffee,
}

impl TicketKind {
    pub fn title(self) -> &'static str {
        match self {
            TicketKind::Food => "KITCHEN ORDER TICKET",
            TicketKind::Coffee => "COFFEE ORDER TICKET",
        }
    }

    /// Line printed under the items
    pub fn instruction(self) -> &'static str {
        match self {
            TicketKind::Food => "Instructions: ____________________",
            TicketKind::Coffee => "** ROUTE TO COFFEE COUNTER **",
        }
    }

    /// Log label
    pub fn as_str(self) -> &'static str {
        match self {
            TicketKind::Food => "food_ticket",
            TicketKind::Coffee => "coffee_ticket",
        }
    }
}

/// Station ticket renderer
pub struct TicketRenderer<'a> {
    kind: TicketKind,
    store: &'a StoreInfo,
    defaults: &'a TicketDefaults,
    classifier: &'a CategoryClassifier,
}

impl<'a> TicketRenderer<'a> {
    pub fn new(
        kind: TicketKind,
        store: &'a StoreInfo,
        defaults: &'a TicketDefaults,
        classifier: &'a CategoryClassifier,
    ) -> Self {
        Self {
            kind,
            store,
            defaults,
            classifier,
        }
    }

    pub fn kind(&self) -> TicketKind {
        self.kind
    }

    /// Items this station prepares, in order
    pub fn select_items<'o>(&self, order: &'o Order) -> Vec<&'o LineItem> {
        match self.kind {
            TicketKind::Food => self.classifier.food_items(order),
            TicketKind::Coffee => self.classifier.coffee_items(order),
        }
    }

    /// Render the ticket, or `None` when the station has nothing to prepare
    pub fn render(&self, order: &Order, printed_at: NaiveDateTime) -> Option<Document> {
        let items = self.select_items(order);
        if items.is_empty() {
            return None;
        }

        let mut b = DocumentBuilder::new();

        self.render_header(&mut b, order);
        self.render_meta(&mut b, order, printed_at);
        self.render_items(&mut b, &items);

        b.write_line(self.kind.instruction());
        b.feed_cut();
        Some(b.finalize())
    }

    fn render_header(&self, b: &mut DocumentBuilder, order: &Order) {
        b.align_center();
        b.bold_on();
        b.write_line(&self.store.name);
        b.write_line(self.kind.title());
        b.bold_off();

        b.size_double();
        b.bold_on();
        b.write_line(&token_number(&order.ticket_code));
        b.bold_off();
        b.size_reset();

        b.write_line(&format!("KOT: {}", order.ticket_code));
    }

    fn render_meta(&self, b: &mut DocumentBuilder, order: &Order, printed_at: NaiveDateTime) {
        b.align_left();
        b.dash_sep();
        b.write_line(&format!(
            "Bill Type: {}",
            self.defaults.resolve_order_type(order)
        ));
        b.write_line(&format!("Bill No: {}", ticket_bill_number(&order.id)));
        b.write_line(&format!("Date: {}", format_timestamp(printed_at)));
        b.write_line(&format!("Kiosk: {}", self.defaults.resolve_kiosk_id(order)));
        b.dash_sep();
    }

    fn render_items(&self, b: &mut DocumentBuilder, items: &[&LineItem]) {
        b.bold_on();
        b.write_line(&format!("{}{}", pad_end("Qty", TICKET_QTY_WIDTH), "Item"));
        b.bold_off();
        b.dash_sep();

        for item in items {
            b.write_line(&format!(
                "{}{}",
                pad_end(&item.quantity.to_string(), TICKET_QTY_WIDTH),
                item.name
            ));
            render_customizations(b, item, "     + ");
        }
        b.dash_sep();
    }
}

fn render_customizations(b: &mut DocumentBuilder, item: &LineItem, prefix: &str) {
    for c in item.customizations() {
        b.write_line(&format!("{}{}", prefix, c.display()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::test_support::{item, order_with, printed_at};
    use kiosk_printer::commands;
    use shared::Customization;

    fn store() -> StoreInfo {
        StoreInfo {
            name: "Test Cafe".into(),
            tagline: "Good Food".into(),
            branch: "Main".into(),
            address: "1 Road".into(),
            gstin: "GST123".into(),
            fssai: "FS456".into(),
            footer: vec!["Thanks".into()],
        }
    }

    fn lines(doc: &Document) -> Vec<&str> {
        doc.as_str().lines().collect()
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(Decimal::from(100), 2), "100.00");
        assert_eq!(format_fixed(Decimal::new(5, 0), 2), "5.00");
        assert_eq!(format_fixed(Decimal::new(1005, 3), 2), "1.01");
        assert_eq!(format_fixed(Decimal::new(1104, 1), 0), "110");
        assert_eq!(format_fixed(Decimal::new(1105, 1), 0), "111");
        assert_eq!(format_fixed(Decimal::from(110), 0), "110");
    }

    #[test]
    fn test_token_and_bill_number() {
        assert_eq!(token_number("KOT-0042"), "0042");
        assert_eq!(token_number("KOT"), "");
        assert_eq!(ticket_bill_number("ORD-123456789"), "KTR-123456");
        assert_eq!(ticket_bill_number("ORD-12"), "KTR-12");
    }

    #[test]
    fn test_bill_layout() {
        let store = store();
        let defaults = TicketDefaults::default();
        let mut order = order_with(vec![item("Masala Dosa", 60, 1, "south-indian")]);
        order.items[0].customizations =
            Some(vec![Customization::from("Extra chutney"), Customization::Named {
                name: "No onion".into(),
            }]);
        order.totals.subtotal = Decimal::from(60);
        order.totals.tax = Decimal::from(3);
        order.totals.total = Decimal::from(63);

        let doc = BillRenderer::new(&store, &defaults).render(&order, printed_at());
        let s = doc.as_str();

        assert!(s.starts_with(commands::INIT));
        assert!(s.ends_with(&format!("{}{}", commands::FEED, commands::CUT)));
        assert!(s.contains(&format!("{}Test Cafe\n{}", commands::BOLD_ON, commands::BOLD_OFF)));
        assert!(s.contains(&format!("{}KOT: KOT-0042\n", commands::BOLD_ON)));
        assert!(s.contains("Date: 15/10/2026 02:30 PM\n"));
        assert!(s.contains("Order Type: DINE IN\n"));
        assert!(s.contains("Kiosk: KTR1\n"));
        assert!(!s.contains("Invoice No:"));

        let ls = lines(&doc);
        let row = format!(
            "{}{}{}",
            pad_end("Masala Dosa", 22),
            pad_end("1", 4),
            pad_start("Rs 60.00", 14)
        );
        let idx = ls.iter().position(|l| *l == row).unwrap();
        assert_eq!(ls[idx + 1], "  + Extra chutney");
        assert_eq!(ls[idx + 2], "  + No onion");
        assert_eq!(row.chars().count(), 40);

        let cgst = format!("CGST @ 2.5%:{}+1.50", " ".repeat(23));
        assert!(ls.contains(&cgst.as_str()));
        assert!(s.contains(&format!(
            "{}{}TOTAL:{}Rs 63\n",
            commands::BOLD_ON,
            commands::SIZE_DOUBLE_HEIGHT,
            " ".repeat(29)
        )));
        let gstin = format!("{}GSTIN: GST123", " ".repeat(13));
        assert!(ls.contains(&gstin.as_str()));
    }

    #[test]
    fn test_bill_optional_fields() {
        let store = store();
        let defaults = TicketDefaults::default();
        let mut order = order_with(vec![item("Tea", 20, 2, "coffee")]);
        order.external_invoice_id = Some("INV-77".into());
        order.bill_type = Some("TAKE AWAY".into());
        order.kiosk_id = Some("KTR3".into());
        order.transaction = Some(shared::TransactionDetails {
            payment_mode: Some("UPI".into()),
            transaction_id: None,
        });

        let doc = BillRenderer::new(&store, &defaults).render(&order, printed_at());
        let s = doc.as_str();
        assert!(s.contains("Invoice No: INV-77\n"));
        assert!(s.contains("Order Type: TAKE AWAY\n"));
        assert!(s.contains("Kiosk: KTR3\n"));
        assert!(s.contains("Payment: UPI\n"));
        assert!(!s.contains("Txn Ref:"));
    }

    #[test]
    fn test_bill_never_empty_without_items() {
        let store = store();
        let defaults = TicketDefaults::default();
        let order = order_with(vec![]);
        let doc = BillRenderer::new(&store, &defaults).render(&order, printed_at());
        assert!(doc.as_str().contains("Subtotal:"));
    }

    #[test]
    fn test_unnamed_customization_printed_raw() {
        let store = store();
        let defaults = TicketDefaults::default();
        let mut order = order_with(vec![item("Cold Coffee", 90, 1, "coffee")]);
        order.items[0].customizations = Some(vec![Customization::Raw(
            serde_json::json!({ "label": "Less sugar" }),
        )]);

        let doc = BillRenderer::new(&store, &defaults).render(&order, printed_at());
        assert!(lines(&doc).contains(&r#"  + {"label":"Less sugar"}"#));

        let ticket = TicketRenderer::new(
            TicketKind::Coffee,
            &store,
            &defaults,
            &CategoryClassifier::default(),
        )
        .render(&order, printed_at())
        .unwrap();
        assert!(lines(&ticket).contains(&r#"     + {"label":"Less sugar"}"#));
    }

    #[test]
    fn test_food_ticket_layout() {
        let store = store();
        let defaults = TicketDefaults::default();
        let classifier = CategoryClassifier::default();
        let mut order = order_with(vec![
            item("Idli", 40, 2, "south-indian"),
            item("Latte", 120, 1, "coffee"),
            item("Vada", 30, 1, "south-indian"),
        ]);
        order.items[0].customizations = Some(vec!["Less spicy".into()]);

        let doc = TicketRenderer::new(TicketKind::Food, &store, &defaults, &classifier)
            .render(&order, printed_at())
            .unwrap();
        let s = doc.as_str();

        assert!(s.starts_with(commands::INIT));
        assert!(s.contains("KITCHEN ORDER TICKET\n"));
        assert!(s.contains(&format!("{}{}0042\n", commands::SIZE_DOUBLE, commands::BOLD_ON)));
        assert!(s.contains("KOT: KOT-0042\n"));
        assert!(s.contains("Bill Type: DINE IN\n"));
        assert!(s.contains("Bill No: KTR-202610\n"));
        assert!(s.contains("Instructions: "));
        assert!(!s.contains("Latte"));
        assert!(s.ends_with(&format!("{}{}", commands::FEED, commands::CUT)));

        let ls = lines(&doc);
        let idli = ls.iter().position(|l| *l == "2    Idli").unwrap();
        assert_eq!(ls[idli + 1], "     + Less spicy");
        assert_eq!(ls[idli + 2], "1    Vada");
    }

    #[test]
    fn test_coffee_ticket() {
        let store = store();
        let defaults = TicketDefaults::default();
        let classifier = CategoryClassifier::default();
        let order = order_with(vec![
            item("Idli", 40, 2, "south-indian"),
            item("Latte", 120, 1, "coffee"),
        ]);

        let doc = TicketRenderer::new(TicketKind::Coffee, &store, &defaults, &classifier)
            .render(&order, printed_at())
            .unwrap();
        let s = doc.as_str();
        assert!(s.contains("COFFEE ORDER TICKET\n"));
        assert!(s.contains("** ROUTE TO COFFEE COUNTER **\n"));
        assert!(s.contains("1    Latte\n"));
        assert!(!s.contains("Idli"));
    }

    #[test]
    fn test_ticket_none_when_station_has_nothing() {
        let store = store();
        let defaults = TicketDefaults::default();
        let classifier = CategoryClassifier::default();
        let coffee_only = order_with(vec![item("Latte", 120, 1, "coffee")]);
        let food_only = order_with(vec![item("Idli", 40, 1, "south-indian")]);

        let food = TicketRenderer::new(TicketKind::Food, &store, &defaults, &classifier);
        let coffee = TicketRenderer::new(TicketKind::Coffee, &store, &defaults, &classifier);

        assert!(food.render(&coffee_only, printed_at()).is_none());
        assert!(coffee.render(&coffee_only, printed_at()).is_some());
        assert!(food.render(&food_only, printed_at()).is_some());
        assert!(coffee.render(&food_only, printed_at()).is_none());
        assert!(food.render(&order_with(vec![]), printed_at()).is_none());
    }

    #[test]
    fn test_non_ascii_names_pass_through() {
        let store = store();
        let defaults = TicketDefaults::default();
        let classifier = CategoryClassifier::default();
        let mut order = order_with(vec![item("Café Crème", 150, 1, "coffee")]);
        order.items[0].customizations = Some(vec!["Lait d'avoine é".into()]);

        let ticket = TicketRenderer::new(TicketKind::Coffee, &store, &defaults, &classifier)
            .render(&order, printed_at())
            .unwrap();
        assert!(ticket.as_str().contains("1    Café Crème\n"));
        assert!(ticket.as_str().contains("Lait d'avoine é"));

        let bill = BillRenderer::new(&store, &defaults).render(&order, printed_at());
        assert!(bill.as_str().contains(&pad_end("Café Crème", 22)));
    }
}
