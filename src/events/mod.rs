use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::models::{Channel, Notification, OrderStatus, PoStatus};
use crate::services::notifications::NotificationSink;

/// One deducted line of an order entering fulfillment, carried on the
/// [`Event::OrderEnteredFulfillment`] event so observers can see exactly what
/// the ledger was asked to deduct.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FulfillmentLine {
    pub sku: String,
    pub quantity: u32,
}

/// Domain events emitted by the services. Events are observational: the state
/// change they describe has already been applied by the time they are sent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A synthetic marketplace order landed via the live feed.
    OrderReceived {
        order_id: String,
        channel: Channel,
        total_amount: Decimal,
    },
    OrderStatusChanged {
        order_id: String,
        old_status: OrderStatus,
        new_status: OrderStatus,
    },
    /// Emitted exactly once per order, when it first moves New → Fulfillment.
    OrderEnteredFulfillment {
        order_id: String,
        items: Vec<FulfillmentLine>,
    },
    InventoryAdjusted {
        sku: String,
        old_quantity: u32,
        new_quantity: u32,
    },
    PurchaseOrderCreated {
        po_id: String,
    },
    PurchaseOrderStatusChanged {
        po_id: String,
        old_status: PoStatus,
        new_status: PoStatus,
    },
    ReturnCreated {
        return_id: String,
        order_id: String,
    },
    GatePassIssued {
        gate_pass_id: String,
    },
    UserUpdated {
        user_id: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

/// Event processing loop: turns domain events into operator notifications.
///
/// The sink never feeds back into entity state, so this loop can lag behind
/// the services without affecting any invariant.
pub async fn process_events(mut rx: mpsc::Receiver<Event>, sink: Arc<dyn NotificationSink>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        debug!(?event, "Received event");

        match event {
            Event::OrderReceived {
                order_id,
                channel,
                total_amount,
            } => {
                sink.push(Notification::order(
                    format!("Order Received: {}", channel),
                    format!("{} for ₹{} is now in queue.", order_id, total_amount),
                ))
                .await;
            }
            Event::OrderEnteredFulfillment { order_id, items } => {
                info!(
                    order_id = %order_id,
                    lines = items.len(),
                    "Order entered fulfillment; stock deducted"
                );
            }
            Event::OrderStatusChanged {
                order_id,
                old_status,
                new_status,
            } => {
                info!(
                    order_id = %order_id,
                    old_status = %old_status,
                    new_status = %new_status,
                    "Order status changed"
                );
            }
            Event::InventoryAdjusted {
                sku,
                old_quantity,
                new_quantity,
            } => {
                debug!(sku = %sku, old_quantity, new_quantity, "Inventory adjusted");
            }
            Event::PurchaseOrderStatusChanged {
                po_id,
                old_status,
                new_status,
            } => {
                if new_status == PoStatus::InventoryUpdated {
                    sink.push(Notification::success(
                        "Inventory Updated",
                        format!("Putaway stock from {} is now sellable.", po_id),
                    ))
                    .await;
                }
                info!(
                    po_id = %po_id,
                    old_status = %old_status,
                    new_status = %new_status,
                    "Purchase order status changed"
                );
            }
            Event::PurchaseOrderCreated { po_id } => {
                info!(po_id = %po_id, "Purchase order created");
            }
            Event::ReturnCreated {
                return_id,
                order_id,
            } => {
                sink.push(Notification::info(
                    "Return Requested",
                    format!("{} raised against order {}.", return_id, order_id),
                ))
                .await;
            }
            Event::GatePassIssued { gate_pass_id } => {
                info!(gate_pass_id = %gate_pass_id, "Gate pass issued");
            }
            Event::UserUpdated { user_id } => {
                debug!(user_id = %user_id, "User record updated");
            }
        }
    }

    info!("Event processing loop stopped");
}
