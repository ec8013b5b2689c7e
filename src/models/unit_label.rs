use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A printable per-unit barcode label generated when PO items are received.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnitLabel {
    pub id: String,
    pub sku: String,
    pub product_name: String,
    pub price: Decimal,
    pub print_status: bool,
    pub po_id: String,
    pub received_at: DateTime<Utc>,
    /// System-generated unique barcode number.
    pub barcode_number: String,
}
