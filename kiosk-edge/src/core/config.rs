use shared::StoreInfo;

use crate::printing::{
    CategoryClassifier, DEFAULT_COFFEE_CATEGORY_ID, DispatchTiming, PrintSettings, TicketDefaults,
};

/// Kiosk print configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STORE_NAME | Brew & Bite Cafe | Header business name |
/// | STORE_TAGLINE | Fresh Food. Great Coffee. | Header tagline |
/// | STORE_BRANCH | Koramangala Branch | Header branch name |
/// | STORE_ADDRESS | 80 Feet Road, Bengaluru 560034 | Header address |
/// | STORE_GSTIN | 29ABCDE1234F1Z5 | Footer GSTIN |
/// | STORE_FSSAI | 11223344556677 | Footer FSSAI licence |
/// | STORE_FOOTER | Thank you! Visit again | Closing lines, `\|` separated |
/// | COFFEE_CATEGORY_ID | coffee | Category routed to the coffee counter |
/// | DEFAULT_ORDER_TYPE | DINE IN | Order type fallback |
/// | DEFAULT_KIOSK_ID | KTR1 | Kiosk fallback |
/// | FOOD_TICKET_DELAY_MS | 350 | Food ticket delay |
/// | COFFEE_TICKET_DELAY_MS | 700 | Coffee ticket delay |
/// | PRINTER_ADDR | (unset) | Raw TCP printer, e.g. 192.168.1.50:9100 |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Daily log file directory |
///
/// # Example
///
/// ```ignore
/// PRINTER_ADDR=192.168.1.50:9100 STORE_BRANCH="MG Road" cargo run -- order.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Venue data for headers and footers
    pub store: StoreInfo,
    pub coffee_category_id: String,
    pub default_order_type: String,
    pub default_kiosk_id: String,
    pub food_ticket_delay_ms: u64,
    pub coffee_ticket_delay_ms: u64,
    /// Host print bridge address; no bridge when unset
    pub printer_addr: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let store = StoreInfo {
            name: env_or("STORE_NAME", defaults.store.name),
            tagline: env_or("STORE_TAGLINE", defaults.store.tagline),
            branch: env_or("STORE_BRANCH", defaults.store.branch),
            address: env_or("STORE_ADDRESS", defaults.store.address),
            gstin: env_or("STORE_GSTIN", defaults.store.gstin),
            fssai: env_or("STORE_FSSAI", defaults.store.fssai),
            footer: std::env::var("STORE_FOOTER")
                .map(|v| v.split('|').map(|l| l.trim().to_string()).collect())
                .unwrap_or(defaults.store.footer),
        };

        Self {
            store,
            coffee_category_id: env_or("COFFEE_CATEGORY_ID", defaults.coffee_category_id),
            default_order_type: env_or("DEFAULT_ORDER_TYPE", defaults.default_order_type),
            default_kiosk_id: env_or("DEFAULT_KIOSK_ID", defaults.default_kiosk_id),
            food_ticket_delay_ms: std::env::var("FOOD_TICKET_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.food_ticket_delay_ms),
            coffee_ticket_delay_ms: std::env::var("COFFEE_TICKET_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.coffee_ticket_delay_ms),
            printer_addr: std::env::var("PRINTER_ADDR").ok().filter(|v| !v.is_empty()),
            log_level: env_or("LOG_LEVEL", defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Settings consumed by the document builders and the dispatcher
    pub fn print_settings(&self) -> PrintSettings {
        PrintSettings {
            store: self.store.clone(),
            defaults: TicketDefaults::new(&self.default_order_type, &self.default_kiosk_id),
            classifier: CategoryClassifier::new(&self.coffee_category_id),
            timing: DispatchTiming::from_millis(
                self.food_ticket_delay_ms,
                self.coffee_ticket_delay_ms,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreInfo {
                name: "Brew & Bite Cafe".into(),
                tagline: "Fresh Food. Great Coffee.".into(),
                branch: "Koramangala Branch".into(),
                address: "80 Feet Road, Bengaluru 560034".into(),
                gstin: "29ABCDE1234F1Z5".into(),
                fssai: "11223344556677".into(),
                footer: vec!["Thank you! Visit again".into()],
            },
            coffee_category_id: DEFAULT_COFFEE_CATEGORY_ID.into(),
            default_order_type: "DINE IN".into(),
            default_kiosk_id: "KTR1".into(),
            food_ticket_delay_ms: 350,
            coffee_ticket_delay_ms: 700,
            printer_addr: None,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}
