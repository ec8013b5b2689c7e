use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::errors::ServiceError;
use crate::events::{Event, EventSender, FulfillmentLine};
use crate::models::{Order, OrderItem, OrderStatus};
use crate::services::inventory::InventoryService;
use crate::state::AppState;

/// The order lifecycle controller.
///
/// Status transitions are deliberately permissive: any status may be set from
/// any prior status, because the surrounding UI only offers legal moves. The
/// one rule this service enforces itself is the inventory side effect: stock
/// is deducted if and only if an order moves from exactly `New` into
/// `Fulfillment`, which makes the deduction exactly-once per order no matter
/// how often a bulk action is repeated.
#[derive(Clone)]
pub struct OrderService {
    state: Arc<AppState>,
    event_sender: EventSender,
    inventory: InventoryService,
}

impl OrderService {
    pub fn new(
        state: Arc<AppState>,
        event_sender: EventSender,
        inventory: InventoryService,
    ) -> Self {
        Self {
            state,
            event_sender,
            inventory,
        }
    }

    /// Appends a new order at the head of the order table. Never touches
    /// inventory: stock is only committed when the order enters fulfillment.
    #[instrument(skip(self, order), fields(order_id = %order.id, channel = %order.channel))]
    pub async fn receive_order(&self, order: Order) -> Result<(), ServiceError> {
        if order.items.is_empty() {
            return Err(ServiceError::ValidationError(
                "Order must have at least one line item".to_string(),
            ));
        }

        {
            let mut orders = self.state.orders.write().unwrap();
            orders.insert(0, order);
        }

        info!("Order received");
        Ok(())
    }

    /// Batch status transition. Ids not present in the order table are
    /// ignored by design. If `picklist_id` is supplied it is recorded on
    /// every matched order.
    ///
    /// Returns the number of orders updated.
    #[instrument(skip(self, order_ids), fields(count = order_ids.len(), target = %target))]
    pub async fn transition_orders(
        &self,
        order_ids: &[String],
        target: OrderStatus,
        picklist_id: Option<String>,
    ) -> Result<usize, ServiceError> {
        let mut changed: Vec<(String, OrderStatus)> = Vec::new();
        let mut deductions: Vec<(String, Vec<OrderItem>)> = Vec::new();

        {
            let mut orders = self.state.orders.write().unwrap();
            for order in orders.iter_mut() {
                if !order_ids.contains(&order.id) {
                    continue;
                }
                let prior = order.status;

                // The exactly-once guard: only the first New -> Fulfillment
                // move commits stock.
                if target == OrderStatus::Fulfillment && prior == OrderStatus::New {
                    deductions.push((order.id.clone(), order.items.clone()));
                }

                order.status = target;
                if let Some(pid) = &picklist_id {
                    order.picklist_id = Some(pid.clone());
                }
                changed.push((order.id.clone(), prior));
            }
        }

        if changed.len() < order_ids.len() {
            warn!(
                requested = order_ids.len(),
                matched = changed.len(),
                "Some order ids were not found; skipped"
            );
        }

        for (order_id, items) in &deductions {
            self.inventory.deduct_for_order(order_id, items);
        }

        for (order_id, items) in deductions {
            let lines = items
                .iter()
                .map(|i| FulfillmentLine {
                    sku: i.sku.clone(),
                    quantity: i.quantity,
                })
                .collect();
            self.event_sender
                .send(Event::OrderEnteredFulfillment {
                    order_id,
                    items: lines,
                })
                .await
                .map_err(ServiceError::EventError)?;
        }

        let updated = changed.len();
        for (order_id, old_status) in changed {
            self.event_sender
                .send(Event::OrderStatusChanged {
                    order_id,
                    old_status,
                    new_status: target,
                })
                .await
                .map_err(ServiceError::EventError)?;
        }

        Ok(updated)
    }

    /// Records the courier assignment for a single order.
    #[instrument(skip(self), fields(order_id = %order_id, courier = %courier))]
    pub fn assign_awb(
        &self,
        order_id: &str,
        awb: String,
        courier: String,
    ) -> Result<(), ServiceError> {
        let mut orders = self.state.orders.write().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| ServiceError::not_found("Order", order_id))?;
        order.awb = Some(awb);
        order.courier = Some(courier);
        Ok(())
    }

    /// Stamps a manifest id on every matched order; unknown ids are skipped.
    /// Pure record update: the status move to Manifest Generated goes through
    /// [`OrderService::transition_orders`] like any other transition.
    #[instrument(skip(self, order_ids), fields(manifest_id = %manifest_id, count = order_ids.len()))]
    pub fn assign_manifest(&self, order_ids: &[String], manifest_id: &str) -> usize {
        let mut orders = self.state.orders.write().unwrap();
        let mut stamped = 0;
        for order in orders.iter_mut() {
            if order_ids.contains(&order.id) {
                order.manifest_id = Some(manifest_id.to_string());
                stamped += 1;
            }
        }
        stamped
    }
}
