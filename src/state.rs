use std::collections::HashMap;
use std::sync::RwLock;

use crate::models::{
    GatePass, Notification, Order, Product, PurchaseOrder, ReturnRequest, Settlement, UnitLabel,
    User,
};

/// The single in-memory state store for the whole application.
///
/// All mutation goes through the services in [`crate::services`]; collaborators
/// only ever see cloned snapshots from the accessors below. Each table has its
/// own lock, and no service holds a guard across an await point, which keeps
/// the run-to-completion discipline of one update at a time.
#[derive(Default)]
pub struct AppState {
    pub(crate) orders: RwLock<Vec<Order>>,
    pub(crate) products: RwLock<HashMap<String, Product>>,
    pub(crate) purchase_orders: RwLock<Vec<PurchaseOrder>>,
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) returns: RwLock<Vec<ReturnRequest>>,
    pub(crate) gate_passes: RwLock<Vec<GatePass>>,
    pub(crate) settlements: RwLock<Vec<Settlement>>,
    pub(crate) unit_labels: RwLock<Vec<UnitLabel>>,
    pub(crate) notifications: RwLock<Vec<Notification>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders, newest first.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().unwrap().clone()
    }

    pub fn order(&self, order_id: &str) -> Option<Order> {
        self.orders
            .read()
            .unwrap()
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
    }

    /// Catalog sorted by SKU for stable rendering.
    pub fn products(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.read().unwrap().values().cloned().collect();
        products.sort_by(|a, b| a.sku.cmp(&b.sku));
        products
    }

    pub fn product(&self, sku: &str) -> Option<Product> {
        self.products.read().unwrap().get(sku).cloned()
    }

    pub fn purchase_orders(&self) -> Vec<PurchaseOrder> {
        self.purchase_orders.read().unwrap().clone()
    }

    pub fn purchase_order(&self, po_id: &str) -> Option<PurchaseOrder> {
        self.purchase_orders
            .read()
            .unwrap()
            .iter()
            .find(|po| po.id == po_id)
            .cloned()
    }

    pub fn users(&self) -> Vec<User> {
        self.users.read().unwrap().clone()
    }

    pub fn returns(&self) -> Vec<ReturnRequest> {
        self.returns.read().unwrap().clone()
    }

    pub fn gate_passes(&self) -> Vec<GatePass> {
        self.gate_passes.read().unwrap().clone()
    }

    pub fn settlements(&self) -> Vec<Settlement> {
        self.settlements.read().unwrap().clone()
    }

    pub fn unit_labels(&self) -> Vec<UnitLabel> {
        self.unit_labels.read().unwrap().clone()
    }

    /// Notifications, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().unwrap().clone()
    }
}
