use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry and its stock counters, keyed by SKU.
///
/// All three counters are unsigned so a negative quantity is unrepresentable;
/// deductions clamp at zero instead of underflowing. `stock` is the sellable
/// quantity, `inward_stock` has been received but not yet put away, and
/// `bad_stock` is damaged or otherwise unsellable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub price: Decimal,
    pub cost: Decimal,
    pub stock: u32,
    pub bad_stock: u32,
    pub inward_stock: u32,
    /// Bin / rack location, e.g. "A1-02-B".
    pub location: String,
    pub barcode: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub category: Option<String>,
}
