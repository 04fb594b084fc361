//! Order Model

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Item customization
///
/// The order service sends either a bare label or a record with a display
/// name. Anything else is kept as-is and printed as its JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Customization {
    Named { name: String },
    Plain(String),
    Raw(serde_json::Value),
}

impl Customization {
    /// Text printed for this customization
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            Customization::Named { name } => Cow::Borrowed(name),
            Customization::Plain(label) => Cow::Borrowed(label),
            Customization::Raw(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl From<&str> for Customization {
    fn from(label: &str) -> Self {
        Customization::Plain(label.to_string())
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    /// Unit price in currency unit
    pub price: Decimal,
    pub quantity: u32,
    /// Routes the item to the coffee counter or the kitchen
    pub category_id: String,
    #[serde(default)]
    pub customizations: Option<Vec<Customization>>,
}

impl LineItem {
    /// Price times quantity
    pub fn amount(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Customizations, empty when the order service sent none
    pub fn customizations(&self) -> &[Customization] {
        self.customizations.as_deref().unwrap_or_default()
    }
}

/// Order money totals (currency unit)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    /// Total tax, printed as two equal halves (CGST + SGST)
    pub tax: Decimal,
    pub total: Decimal,
}

/// Payment details captured at checkout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub payment_mode: Option<String>,
    pub transaction_id: Option<String>,
}

/// Order as handed over for printing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// Kitchen order ticket code, e.g. "KOT-0042"
    pub ticket_code: String,
    pub external_invoice_id: Option<String>,
    /// Order type chosen at the kiosk
    pub order_type: Option<String>,
    /// Billing mode stored with the order details
    pub bill_type: Option<String>,
    pub kiosk_id: Option<String>,
    pub totals: OrderTotals,
    /// Items in print order
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub transaction: Option<TransactionDetails>,
}
