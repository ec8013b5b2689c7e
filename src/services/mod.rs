// Core controllers
pub mod inventory;
pub mod orders;
pub mod purchase_orders;

// User and notification surfaces
pub mod notifications;
pub mod users;

// Peripheral entity tracking
pub mod gate_passes;
pub mod returns;
pub mod settlements;
pub mod unit_labels;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::auth::{AuthService, Session};
use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::events::{Event, EventSender};
use crate::feed::OrderFeedGenerator;
use crate::models::User;
use crate::state::AppState;

use gate_passes::GatePassService;
use inventory::InventoryService;
use notifications::NotificationService;
use orders::OrderService;
use purchase_orders::PurchaseOrderService;
use returns::ReturnService;
use settlements::SettlementService;
use unit_labels::UnitLabelService;

/// Everything wired together: the state store, the per-aggregate services and
/// the session-gated order feed. Collaborators hold this and nothing else.
pub struct AppServices {
    pub state: Arc<AppState>,
    pub events: EventSender,
    pub inventory: InventoryService,
    pub orders: OrderService,
    pub purchase_orders: PurchaseOrderService,
    pub users: users::UserService,
    pub returns: ReturnService,
    pub gate_passes: GatePassService,
    pub settlements: SettlementService,
    pub unit_labels: UnitLabelService,
    pub notifications: Arc<NotificationService>,
    pub auth: AuthService,
    pub feed: Arc<OrderFeedGenerator>,
}

impl AppServices {
    /// Builds the service graph over `state`. The returned receiver feeds
    /// [`crate::events::process_events`]; the caller decides when to spawn it.
    pub fn build(state: Arc<AppState>, config: &AppConfig) -> (Self, mpsc::Receiver<Event>) {
        let (event_tx, event_rx) = mpsc::channel(1024);
        let events = EventSender::new(event_tx);
        let session = Arc::new(Session::new());

        let inventory = InventoryService::new(state.clone(), events.clone());
        let orders = OrderService::new(state.clone(), events.clone(), inventory.clone());
        let purchase_orders = PurchaseOrderService::new(state.clone(), events.clone());
        let users = users::UserService::new(state.clone(), session.clone(), events.clone());
        let returns = ReturnService::new(state.clone(), events.clone());
        let gate_passes = GatePassService::new(state.clone(), events.clone());
        let settlements = SettlementService::new(state.clone());
        let unit_labels = UnitLabelService::new(state.clone());
        let notifications = Arc::new(NotificationService::new(state.clone()));
        let auth = AuthService::new(state.clone(), session);
        let feed = Arc::new(OrderFeedGenerator::new(
            orders.clone(),
            events.clone(),
            Duration::from_secs(config.feed_interval_secs),
        ));

        let services = Self {
            state,
            events,
            inventory,
            orders,
            purchase_orders,
            users,
            returns,
            gate_passes,
            settlements,
            unit_labels,
            notifications,
            auth,
            feed,
        };
        (services, event_rx)
    }

    /// Authenticates and arms the live order feed for the new session.
    pub fn login(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let user = self.auth.login(username, password)?;
        self.feed.start();
        Ok(user)
    }

    /// Disarms the feed, then clears the session.
    pub fn logout(&self) {
        self.feed.stop();
        self.auth.logout();
    }
}
