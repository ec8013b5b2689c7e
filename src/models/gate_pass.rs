use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum GatePassType {
    Outward,
    Inward,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatePassItem {
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit: String,
    /// False for non-catalog goods (tools, samples) moving through the gate.
    pub is_inventory_item: bool,
}

/// A record of goods moving in or out of the warehouse gate outside the
/// regular order/PO flows.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatePass {
    pub id: String,
    #[serde(rename = "type")]
    pub pass_type: GatePassType,
    pub is_returnable: bool,
    pub person_name: String,
    pub destination: String,
    pub date: DateTime<Utc>,
    pub purpose: String,
    pub vehicle_number: String,
    pub remarks: String,
    pub items: Vec<GatePassItem>,
    pub issued_by: String,
    pub reference_id: Option<String>,
}
