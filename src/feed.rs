use std::sync::Mutex;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};
use tracing::{info, instrument, warn};

use crate::events::{Event, EventSender};
use crate::models::{Channel, Order, OrderItem, OrderStatus, PaymentMethod, Priority, ScanStatus};
use crate::services::orders::OrderService;

const FEED_CHANNELS: [Channel; 5] = [
    Channel::Amazon,
    Channel::Flipkart,
    Channel::Shopify,
    Channel::Myntra,
    Channel::Ajio,
];

const FEED_CUSTOMERS: [&str; 6] = [
    "Amit Sharma",
    "Priya Das",
    "Sandeep Vohra",
    "Neha Kapoor",
    "Vikram Singh",
    "Anjali Iyer",
];

/// Catalog slice the feed draws from. Two of these SKUs are not in the seeded
/// catalog, which exercises the unknown-SKU skip path during fulfillment.
const FEED_ITEMS: [(&str, &str, Decimal, &str, &str); 4] = [
    ("TSH-BLK-M", "Classic Essential Tee", dec!(1299), "Black", "M"),
    ("DNM-BLU-32", "Streetwear Denim", dec!(2999), "Blue", "32"),
    ("JKT-OLV-L", "Utility Field Jacket", dec!(4500), "Olive", "L"),
    ("SNE-WHT-09", "Core Low Sneakers", dec!(3999), "White", "9"),
];

/// Produces one synthetic marketplace order per period while a session is
/// active.
///
/// The task is armed on login and disarmed on logout. Arming always cancels
/// any previous handle first, so two timers can never run concurrently across
/// logout/login cycles.
pub struct OrderFeedGenerator {
    orders: OrderService,
    event_sender: EventSender,
    period: Duration,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl OrderFeedGenerator {
    pub fn new(orders: OrderService, event_sender: EventSender, period: Duration) -> Self {
        Self {
            orders,
            event_sender,
            period,
            handle: Mutex::new(None),
        }
    }

    /// Arms the feed. The first order lands one full period after arming.
    #[instrument(skip(self))]
    pub fn start(&self) {
        let mut handle = self.handle.lock().unwrap();
        // Cancel-before-arm: a stale timer must never survive a new session.
        if let Some(previous) = handle.take() {
            previous.abort();
        }

        let orders = self.orders.clone();
        let event_sender = self.event_sender.clone();
        let period = self.period;

        *handle = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                let order = synthesize_order();
                let order_id = order.id.clone();
                let channel = order.channel;
                let total_amount = order.total_amount;

                if let Err(e) = orders.receive_order(order).await {
                    warn!(error = %e, "Failed to enqueue feed order");
                    continue;
                }
                if let Err(e) = event_sender
                    .send(Event::OrderReceived {
                        order_id,
                        channel,
                        total_amount,
                    })
                    .await
                {
                    warn!(error = %e, "Failed to send order received event");
                }
            }
        }));

        info!(period_secs = self.period.as_secs(), "Order feed armed");
    }

    /// Disarms the feed. Idempotent.
    #[instrument(skip(self))]
    pub fn stop(&self) {
        if let Some(handle) = self.handle.lock().unwrap().take() {
            handle.abort();
            info!("Order feed disarmed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.lock().unwrap().is_some()
    }
}

impl Drop for OrderFeedGenerator {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Builds one synthetic marketplace order: a single line item, scan pending,
/// status New, prepaid ~60% of the time and express priority ~20%.
pub fn synthesize_order() -> Order {
    let mut rng = rand::thread_rng();

    let channel = FEED_CHANNELS[rng.gen_range(0..FEED_CHANNELS.len())];
    let customer = FEED_CUSTOMERS[rng.gen_range(0..FEED_CUSTOMERS.len())];
    let (sku, name, price, color, size) = FEED_ITEMS[rng.gen_range(0..FEED_ITEMS.len())];

    let order_id = format!("ORD-{}", rng.gen_range(10_000..100_000));
    let item_id = format!("UNIT-{}", rng.gen_range(50_000..100_000));
    let location = format!(
        "A{}-{:02}-{}",
        rng.gen_range(0..9),
        rng.gen_range(0..99),
        (b'A' + rng.gen_range(0..26u8)) as char
    );

    Order {
        id: order_id,
        channel,
        date: Utc::now(),
        customer_name: customer.to_string(),
        shipping_address: "Sector 44, Gurgaon, Haryana, 122003".to_string(),
        phone: Some("+91 99887 76655".to_string()),
        items: vec![OrderItem {
            item_id,
            sku: sku.to_string(),
            product_name: name.to_string(),
            quantity: 1,
            price,
            location,
            barcode: None,
            color: Some(color.to_string()),
            size: Some(size.to_string()),
            scan_status: ScanStatus::Pending,
        }],
        total_amount: price,
        status: OrderStatus::New,
        payment_method: if rng.gen_bool(0.6) {
            PaymentMethod::Prepaid
        } else {
            PaymentMethod::Postpaid
        },
        priority: if rng.gen_bool(0.2) {
            Priority::Express
        } else {
            Priority::Normal
        },
        awb: None,
        courier: None,
        picklist_id: None,
        manifest_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_orders_start_new_with_one_pending_line() {
        for _ in 0..50 {
            let order = synthesize_order();
            assert_eq!(order.status, OrderStatus::New);
            assert_eq!(order.items.len(), 1);
            assert_eq!(order.items[0].scan_status, ScanStatus::Pending);
            assert_eq!(order.items[0].quantity, 1);
            assert_eq!(order.total_amount, order.items[0].price);
            assert_ne!(order.channel, Channel::Manual);
            assert!(order.id.starts_with("ORD-"));
        }
    }
}
