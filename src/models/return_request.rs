use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ReturnStatus {
    Pending,
    #[strum(serialize = "In-Transit")]
    InTransit,
    Received,
    Partial,
    Closed,
    Processed,
}

/// Physical condition assessed when a returned unit is inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ReturnCondition {
    #[strum(serialize = "Good (Resellable)")]
    Good,
    #[strum(serialize = "Bad / Damaged")]
    Bad,
    Used,
}

/// A customer or courier return against a shipped order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub id: String,
    pub order_id: String,
    pub awb: String,
    pub sku: String,
    pub product_name: String,
    pub reason: String,
    pub status: ReturnStatus,
    pub condition: Option<ReturnCondition>,
    pub date: DateTime<Utc>,
    pub expected_qty: u32,
    pub received_qty: u32,
    pub channel: String,
}
