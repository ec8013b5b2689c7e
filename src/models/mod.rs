pub mod gate_pass;
pub mod notification;
pub mod order;
pub mod product;
pub mod purchase_order;
pub mod return_request;
pub mod settlement;
pub mod unit_label;
pub mod user;

pub use gate_pass::{GatePass, GatePassItem, GatePassType};
pub use notification::{Notification, NotificationKind};
pub use order::{Channel, Order, OrderItem, OrderStatus, PaymentMethod, Priority, ScanStatus};
pub use product::Product;
pub use purchase_order::{PoItem, PoStatus, PurchaseOrder, QuantityUnit};
pub use return_request::{ReturnCondition, ReturnRequest, ReturnStatus};
pub use settlement::{Settlement, SettlementFees, SettlementStatus};
pub use unit_label::UnitLabel;
pub use user::{User, UserRole};
