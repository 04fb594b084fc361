//! Store Info Model

use serde::{Deserialize, Serialize};

/// Venue information printed on bills and tickets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub address: String,
    /// GST identification number
    #[serde(default)]
    pub gstin: String,
    /// Food safety licence number
    #[serde(default)]
    pub fssai: String,
    /// Closing lines of the bill
    #[serde(default)]
    pub footer: Vec<String>,
}
