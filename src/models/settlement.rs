use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum SettlementStatus {
    Reconciled,
    Mismatch,
    Pending,
}

/// Marketplace fee breakdown deducted before payout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SettlementFees {
    pub commission: Decimal,
    pub shipping: Decimal,
    pub collection: Decimal,
    pub gst: Decimal,
}

/// A channel payout cycle awaiting reconciliation against the bank credit.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub channel: String,
    pub date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub status: SettlementStatus,
    pub orders_count: u32,
    pub fees: SettlementFees,
    pub net_expected: Decimal,
    pub bank_utr: Option<String>,
    pub bank_credit_amount: Option<Decimal>,
}
