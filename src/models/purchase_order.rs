use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Receiving workflow progression for a purchase order.
///
/// Inventory increments happen only at the putaway/inventory-update step, and
/// only for putaway quantities, never for the full expected quantity.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoStatus {
    #[strum(serialize = "PO_CREATED")]
    PoCreated,
    #[strum(serialize = "GRN_OPEN")]
    GrnOpen,
    #[strum(serialize = "VERIFIED_QTY")]
    VerifiedQty,
    #[strum(serialize = "PUTAWAY_CONFIRMED")]
    PutawayConfirmed,
    #[strum(serialize = "PO_CLOSED")]
    PoClosed,
    #[strum(serialize = "INVENTORY_UPDATED")]
    InventoryUpdated,
}

impl PoStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PoStatus::PoClosed | PoStatus::InventoryUpdated)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
pub enum QuantityUnit {
    #[strum(serialize = "PCS")]
    Pcs,
    #[strum(serialize = "BOX")]
    Box,
    #[strum(serialize = "KG")]
    Kg,
    #[strum(serialize = "SET")]
    Set,
}

/// A purchase order line. `expected_qty` is what was ordered, `received_qty`
/// what physically arrived at GRN, `putaway_qty` what has been binned and is
/// therefore eligible to become sellable stock.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoItem {
    pub sku: String,
    pub product_name: String,
    pub barcode: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub expected_qty: u32,
    pub received_qty: u32,
    pub putaway_qty: u32,
    pub unit: QuantityUnit,
    pub unit_cost: Decimal,
    pub discount_pct: Decimal,
    pub tax_pct: Decimal,
    /// Derived: net line value plus tax. Recomputed whenever quantities or
    /// costs change, never edited directly.
    pub total_value: Decimal,
    pub target_bin: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: String,
    pub supplier_name: String,
    pub date: DateTime<Utc>,
    pub status: PoStatus,
    pub items: Vec<PoItem>,
    /// Derived totals, kept consistent with `items` and `other_charges` by
    /// the purchase order service.
    pub sub_total: Decimal,
    pub tax_amount: Decimal,
    pub other_charges: Decimal,
    pub total_amount: Decimal,
    pub expected_date: Option<DateTime<Utc>>,
    pub created_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn po_status_uses_wire_names() {
        assert_eq!(PoStatus::PoCreated.to_string(), "PO_CREATED");
        assert_eq!(
            PoStatus::from_str("INVENTORY_UPDATED").unwrap(),
            PoStatus::InventoryUpdated
        );
        assert!(PoStatus::PoClosed.is_terminal());
        assert!(!PoStatus::GrnOpen.is_terminal());
    }
}
