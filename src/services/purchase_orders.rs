use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::{PoItem, PoStatus, PurchaseOrder, QuantityUnit};
use crate::state::AppState;

/// Input for one purchase order line.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoItemInput {
    pub sku: String,
    pub product_name: String,
    pub barcode: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub expected_qty: u32,
    pub unit: QuantityUnit,
    pub unit_cost: Decimal,
    pub discount_pct: Decimal,
    pub tax_pct: Decimal,
    pub target_bin: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreatePurchaseOrderRequest {
    #[validate(length(min = 1, message = "Supplier name is required"))]
    pub supplier_name: String,
    #[validate(length(min = 1, message = "At least one line item is required"))]
    pub items: Vec<PoItemInput>,
    pub other_charges: Decimal,
    pub expected_date: Option<DateTime<Utc>>,
    pub created_by: String,
}

/// Partial field update merged into a purchase order alongside a status set.
/// Anything left `None` is untouched.
#[derive(Clone, Debug, Default)]
pub struct PurchaseOrderUpdate {
    pub supplier_name: Option<String>,
    pub items: Option<Vec<PoItem>>,
    pub other_charges: Option<Decimal>,
    pub expected_date: Option<DateTime<Utc>>,
}

/// The purchase order / GRN controller.
///
/// This service owns PO records and their derived totals only. The inventory
/// side effect of receiving is the caller's responsibility via the inventory
/// ledger, because the PO, GRN and Inward workflow modes each apply a
/// different partial quantity (ordered vs received vs putaway) at a different
/// step; baking the increment into the status setter would double count.
#[derive(Clone)]
pub struct PurchaseOrderService {
    state: Arc<AppState>,
    event_sender: EventSender,
}

impl PurchaseOrderService {
    pub fn new(state: Arc<AppState>, event_sender: EventSender) -> Self {
        Self {
            state,
            event_sender,
        }
    }

    /// Creates a purchase order in status `PO_CREATED` with derived totals
    /// computed from the request lines.
    #[instrument(skip(self, request), fields(supplier = %request.supplier_name))]
    pub async fn create_po(
        &self,
        request: CreatePurchaseOrderRequest,
    ) -> Result<PurchaseOrder, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let items: Vec<PoItem> = request
            .items
            .into_iter()
            .map(|input| {
                let mut item = PoItem {
                    sku: input.sku,
                    product_name: input.product_name,
                    barcode: input.barcode,
                    size: input.size,
                    color: input.color,
                    expected_qty: input.expected_qty,
                    received_qty: 0,
                    putaway_qty: 0,
                    unit: input.unit,
                    unit_cost: input.unit_cost,
                    discount_pct: input.discount_pct,
                    tax_pct: input.tax_pct,
                    total_value: Decimal::ZERO,
                    target_bin: input.target_bin,
                };
                let (net, tax) = line_totals(&item);
                item.total_value = net + tax;
                item
            })
            .collect();

        let mut po = PurchaseOrder {
            id: generate_po_id(),
            supplier_name: request.supplier_name,
            date: Utc::now(),
            status: PoStatus::PoCreated,
            items,
            sub_total: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            other_charges: request.other_charges,
            total_amount: Decimal::ZERO,
            expected_date: request.expected_date,
            created_by: request.created_by,
        };
        recompute_totals(&mut po);

        {
            let mut purchase_orders = self.state.purchase_orders.write().unwrap();
            purchase_orders.insert(0, po.clone());
        }

        info!(po_id = %po.id, total = %po.total_amount, "Purchase order created");

        self.event_sender
            .send(Event::PurchaseOrderCreated {
                po_id: po.id.clone(),
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(po)
    }

    /// Merges `updates` into the PO record and sets `status`. Derived totals
    /// are recomputed in the same critical section whenever the merge touches
    /// a contributing field, so totals can never be observed stale.
    #[instrument(skip(self, updates), fields(po_id = %po_id, status = %status))]
    pub async fn update_po_status(
        &self,
        po_id: &str,
        status: PoStatus,
        updates: Option<PurchaseOrderUpdate>,
    ) -> Result<PurchaseOrder, ServiceError> {
        let (old_status, updated) = {
            let mut purchase_orders = self.state.purchase_orders.write().unwrap();
            let po = purchase_orders
                .iter_mut()
                .find(|p| p.id == po_id)
                .ok_or_else(|| ServiceError::not_found("Purchase order", po_id))?;

            let old_status = po.status;
            let mut touched_totals = false;

            if let Some(updates) = updates {
                if let Some(supplier_name) = updates.supplier_name {
                    po.supplier_name = supplier_name;
                }
                if let Some(items) = updates.items {
                    po.items = items;
                    touched_totals = true;
                }
                if let Some(other_charges) = updates.other_charges {
                    po.other_charges = other_charges;
                    touched_totals = true;
                }
                if let Some(expected_date) = updates.expected_date {
                    po.expected_date = Some(expected_date);
                }
            }
            if touched_totals {
                recompute_totals(po);
            }
            po.status = status;
            (old_status, po.clone())
        };

        info!(old_status = %old_status, "Purchase order updated");

        self.event_sender
            .send(Event::PurchaseOrderStatusChanged {
                po_id: po_id.to_string(),
                old_status,
                new_status: status,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(updated)
    }
}

fn generate_po_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("PO-{}", &suffix[..8].to_uppercase())
}

/// Net and tax amounts for one line: expected quantity times unit cost, less
/// the discount percentage, with tax applied on the discounted value.
fn line_totals(item: &PoItem) -> (Decimal, Decimal) {
    let hundred = dec!(100);
    let gross = Decimal::from(item.expected_qty) * item.unit_cost;
    let net = gross * (Decimal::ONE - item.discount_pct / hundred);
    let tax = net * item.tax_pct / hundred;
    (net, tax)
}

/// Recomputes every line's `total_value` and the PO-level totals from the
/// contributing fields. Called whenever any of them change.
fn recompute_totals(po: &mut PurchaseOrder) {
    let mut sub_total = Decimal::ZERO;
    let mut tax_amount = Decimal::ZERO;
    for item in po.items.iter_mut() {
        let (net, tax) = line_totals(item);
        item.total_value = net + tax;
        sub_total += net;
        tax_amount += tax;
    }
    po.sub_total = sub_total;
    po.tax_amount = tax_amount;
    po.total_amount = sub_total + tax_amount + po.other_charges;
}
