use std::sync::Arc;

use wms_core::config::AppConfig;
use wms_core::models::OrderStatus;
use wms_core::{events, seed, AppServices};

/// Test harness: the seeded reference state with the full service graph and
/// a running event loop.
pub struct TestApp {
    pub services: AppServices,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let state = Arc::new(seed::seeded_state());
        let (services, event_rx) = AppServices::build(state, &config);
        tokio::spawn(events::process_events(
            event_rx,
            services.notifications.clone(),
        ));
        Self { services }
    }

    #[allow(dead_code)]
    pub fn stock_of(&self, sku: &str) -> u32 {
        self.services
            .state
            .product(sku)
            .unwrap_or_else(|| panic!("SKU {} not in catalog", sku))
            .stock
    }

    #[allow(dead_code)]
    pub fn order_status(&self, order_id: &str) -> OrderStatus {
        self.services
            .state
            .order(order_id)
            .unwrap_or_else(|| panic!("order {} not found", order_id))
            .status
    }

    #[allow(dead_code)]
    pub fn order_count(&self) -> usize {
        self.services.state.orders().len()
    }

    /// Lets spawned tasks (feed ticks, the event loop) run to quiescence.
    #[allow(dead_code)]
    pub async fn settle(&self) {
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
    }
}
