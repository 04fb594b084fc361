//! Default resolution for optional order fields

use shared::Order;

/// Fallbacks for fields the order service may omit
#[derive(Debug, Clone)]
pub struct TicketDefaults {
    order_type: String,
    kiosk_id: String,
}

impl TicketDefaults {
    pub fn new(order_type: &str, kiosk_id: &str) -> Self {
        Self {
            order_type: order_type.to_string(),
            kiosk_id: kiosk_id.to_string(),
        }
    }

    pub fn order_type(&self) -> &str {
        &self.order_type
    }

    pub fn kiosk_id(&self) -> &str {
        &self.kiosk_id
    }

    /// Explicit order type, then the order's bill type, then the default
    pub fn resolve_order_type<'a>(&'a self, order: &'a Order) -> &'a str {
        order
            .order_type
            .as_deref()
            .or(order.bill_type.as_deref())
            .unwrap_or(&self.order_type)
    }

    pub fn resolve_kiosk_id<'a>(&'a self, order: &'a Order) -> &'a str {
        order.kiosk_id.as_deref().unwrap_or(&self.kiosk_id)
    }
}

impl Default for TicketDefaults {
    fn default() -> Self {
        Self::new("DINE IN", "KTR1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::test_support::order_with;

    #[test]
    fn test_order_type_fallback_chain() {
        let d = TicketDefaults::default();
        let mut order = order_with(vec![]);
        assert_eq!(d.resolve_order_type(&order), "DINE IN");

        order.bill_type = Some("TAKE AWAY".into());
        assert_eq!(d.resolve_order_type(&order), "TAKE AWAY");

        order.order_type = Some("DELIVERY".into());
        assert_eq!(d.resolve_order_type(&order), "DELIVERY");
    }

    #[test]
    fn test_kiosk_fallback() {
        let d = TicketDefaults::default();
        let mut order = order_with(vec![]);
        assert_eq!(d.resolve_kiosk_id(&order), "KTR1");

        order.kiosk_id = Some("KTR7".into());
        assert_eq!(d.resolve_kiosk_id(&order), "KTR7");
    }
}
