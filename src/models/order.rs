use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Enum representing the possible statuses of an order.
///
/// Aside from the New → Fulfillment inventory deduction guard, no transition
/// validation is enforced here: callers are trusted to only request legal
/// transitions, and Cancelled/Failed are reachable from any non-terminal state.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum OrderStatus {
    New,
    Fulfillment,
    Picked,
    Packed,
    #[strum(serialize = "Ready to Ship")]
    ReadyToShip,
    #[strum(serialize = "Handed Over")]
    HandedOver,
    #[strum(serialize = "Manifest Generated")]
    ManifestGenerated,
    Shipped,
    Delivered,
    Cancelled,
    Failed,
}

impl OrderStatus {
    /// Terminal orders are never deleted, only left in place.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Failed
        )
    }
}

/// Marketplace channel an order originated from.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Channel {
    Amazon,
    Flipkart,
    Shopify,
    Myntra,
    #[strum(serialize = "AJIO")]
    Ajio,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum PaymentMethod {
    Prepaid,
    Postpaid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum Priority {
    Normal,
    Express,
}

/// Per-line scan progress during picking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
pub enum ScanStatus {
    Pending,
    Scanned,
}

/// A single order line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: String,
    pub sku: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: Decimal,
    /// Bin / rack the pick happens from.
    pub location: String,
    pub barcode: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub scan_status: ScanStatus,
}

/// An order as held by the order table.
///
/// `picklist_id`, `manifest_id`, `awb` and `courier` are filled in as the
/// order progresses through the fulfillment pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub channel: Channel,
    pub date: DateTime<Utc>,
    pub customer_name: String,
    pub shipping_address: String,
    pub phone: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub priority: Priority,
    pub awb: Option<String>,
    pub courier: Option<String>,
    pub picklist_id: Option<String>,
    pub manifest_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_display_round_trips_multiword_variants() {
        assert_eq!(OrderStatus::ReadyToShip.to_string(), "Ready to Ship");
        assert_eq!(
            OrderStatus::from_str("Manifest Generated").unwrap(),
            OrderStatus::ManifestGenerated
        );
        assert_eq!(Channel::Ajio.to_string(), "AJIO");
    }

    #[test]
    fn terminal_statuses() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(OrderStatus::Failed.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
        assert!(!OrderStatus::New.is_terminal());
    }
}
