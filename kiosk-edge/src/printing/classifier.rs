//! Coffee / kitchen routing

use shared::{LineItem, Order};

/// Category identifier routed to the coffee counter unless configured
pub const DEFAULT_COFFEE_CATEGORY_ID: &str = "coffee";

/// Splits line items between the coffee counter and the kitchen.
///
/// Exact string match on the category identifier, no normalization.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    coffee_category_id: String,
}

impl CategoryClassifier {
    pub fn new(coffee_category_id: &str) -> Self {
        Self {
            coffee_category_id: coffee_category_id.to_string(),
        }
    }

    pub fn coffee_category_id(&self) -> &str {
        &self.coffee_category_id
    }

    pub fn is_coffee(&self, item: &LineItem) -> bool {
        item.category_id == self.coffee_category_id
    }

    /// Coffee items in order
    pub fn coffee_items<'a>(&self, order: &'a Order) -> Vec<&'a LineItem> {
        order.items.iter().filter(|i| self.is_coffee(i)).collect()
    }

    /// Everything else, in order
    pub fn food_items<'a>(&self, order: &'a Order) -> Vec<&'a LineItem> {
        order.items.iter().filter(|i| !self.is_coffee(i)).collect()
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_COFFEE_CATEGORY_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printing::test_support::{item, order_with};

    #[test]
    fn test_exact_match_only() {
        let c = CategoryClassifier::new("coffee");
        assert!(c.is_coffee(&item("Latte", 120, 1, "coffee")));
        assert!(!c.is_coffee(&item("Latte", 120, 1, "Coffee")));
        assert!(!c.is_coffee(&item("Latte", 120, 1, " coffee")));
        assert!(!c.is_coffee(&item("Dosa", 60, 1, "south-indian")));
    }

    #[test]
    fn test_partition_keeps_order_and_covers_every_item() {
        let order = order_with(vec![
            item("Espresso", 90, 1, "coffee"),
            item("Idli", 40, 2, "south-indian"),
            item("Cappuccino", 140, 1, "coffee"),
            item("Samosa", 20, 3, "snacks"),
        ]);
        let c = CategoryClassifier::default();

        let coffee: Vec<&str> = c.coffee_items(&order).iter().map(|i| i.name.as_str()).collect();
        let food: Vec<&str> = c.food_items(&order).iter().map(|i| i.name.as_str()).collect();

        assert_eq!(coffee, vec!["Espresso", "Cappuccino"]);
        assert_eq!(food, vec!["Idli", "Samosa"]);
        assert_eq!(coffee.len() + food.len(), order.items.len());
        for name in &coffee {
            assert!(!food.contains(name));
        }
    }
}
