use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::models::OrderItem;
use crate::state::AppState;

/// Direction of a stock adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockMode {
    Add,
    Remove,
}

/// The inventory ledger: the only code allowed to mutate per-SKU stock
/// counters. Deductions clamp at zero so stock is never observably negative.
#[derive(Clone)]
pub struct InventoryService {
    state: Arc<AppState>,
    event_sender: EventSender,
}

impl InventoryService {
    pub fn new(state: Arc<AppState>, event_sender: EventSender) -> Self {
        Self {
            state,
            event_sender,
        }
    }

    /// Applies a stock delta to a SKU's sellable counter and returns the new
    /// level. Unknown SKUs are an error for direct callers; batch callers use
    /// [`InventoryService::deduct_for_order`], which skips instead.
    #[instrument(skip(self), fields(sku = %sku, qty = qty))]
    pub async fn adjust_stock(
        &self,
        sku: &str,
        qty: u32,
        mode: StockMode,
    ) -> Result<u32, ServiceError> {
        let (old_quantity, new_quantity) = {
            let mut products = self.state.products.write().unwrap();
            let product = products
                .get_mut(sku)
                .ok_or_else(|| ServiceError::not_found("SKU", sku))?;
            let old = product.stock;
            product.stock = match mode {
                StockMode::Add => old.saturating_add(qty),
                StockMode::Remove => old.saturating_sub(qty),
            };
            (old, product.stock)
        };

        info!(old_quantity, new_quantity, ?mode, "Stock adjusted");

        self.event_sender
            .send(Event::InventoryAdjusted {
                sku: sku.to_string(),
                old_quantity,
                new_quantity,
            })
            .await
            .map_err(ServiceError::EventError)?;

        Ok(new_quantity)
    }

    /// Records received-but-not-putaway quantity against a SKU at GRN time.
    /// Sellable stock is untouched until putaway is confirmed.
    #[instrument(skip(self), fields(sku = %sku, qty = qty))]
    pub fn record_inward(&self, sku: &str, qty: u32) -> Result<u32, ServiceError> {
        let mut products = self.state.products.write().unwrap();
        let product = products
            .get_mut(sku)
            .ok_or_else(|| ServiceError::not_found("SKU", sku))?;
        product.inward_stock = product.inward_stock.saturating_add(qty);
        Ok(product.inward_stock)
    }

    /// Moves putaway quantity from the inward counter into sellable stock.
    /// Only the putaway delta becomes sellable, never the full expected
    /// quantity.
    #[instrument(skip(self), fields(sku = %sku, qty = qty))]
    pub async fn confirm_putaway(&self, sku: &str, qty: u32) -> Result<u32, ServiceError> {
        {
            let mut products = self.state.products.write().unwrap();
            let product = products
                .get_mut(sku)
                .ok_or_else(|| ServiceError::not_found("SKU", sku))?;
            product.inward_stock = product.inward_stock.saturating_sub(qty);
        }
        self.adjust_stock(sku, qty, StockMode::Add).await
    }

    /// Batch deduction for an order entering fulfillment. Lines whose SKU is
    /// missing from the catalog are skipped with a warning rather than
    /// failing the transition, matching the trusted-caller policy for batch
    /// operations.
    pub(crate) fn deduct_for_order(&self, order_id: &str, items: &[OrderItem]) {
        let mut products = self.state.products.write().unwrap();
        for item in items {
            match products.get_mut(&item.sku) {
                Some(product) => {
                    let old = product.stock;
                    product.stock = old.saturating_sub(item.quantity);
                    info!(
                        order_id = %order_id,
                        sku = %item.sku,
                        old_quantity = old,
                        new_quantity = product.stock,
                        "Deducted stock for fulfillment"
                    );
                }
                None => {
                    warn!(
                        order_id = %order_id,
                        sku = %item.sku,
                        "Order line references unknown SKU; skipping deduction"
                    );
                }
            }
        }
    }
}
