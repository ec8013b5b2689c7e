use chrono::{Duration, Utc};
use rust_decimal_macros::dec;

use crate::models::{
    Channel, Order, OrderItem, OrderStatus, PaymentMethod, Priority, Product, ScanStatus, User,
    UserRole,
};
use crate::state::AppState;

/// Builds the reference starting state: a two-SKU catalog, one open Amazon
/// order, and the bootstrap Super Admin account.
pub fn seeded_state() -> AppState {
    let state = AppState::new();

    {
        let mut products = state.products.write().unwrap();
        for product in seed_products() {
            products.insert(product.sku.clone(), product);
        }
    }
    {
        let mut orders = state.orders.write().unwrap();
        orders.push(seed_order());
    }
    {
        let mut users = state.users.write().unwrap();
        users.push(seed_admin());
    }

    state
}

fn seed_products() -> Vec<Product> {
    vec![
        Product {
            sku: "TSH-BLK-M".to_string(),
            name: "Classic T-Shirt".to_string(),
            price: dec!(999),
            cost: dec!(450),
            stock: 124,
            bad_stock: 0,
            inward_stock: 0,
            location: "A1-02-B".to_string(),
            barcode: "8901234567890".to_string(),
            size: Some("M".to_string()),
            color: Some("Black".to_string()),
            category: None,
        },
        Product {
            sku: "DNM-BLU-32".to_string(),
            name: "Slim Fit Denims".to_string(),
            price: dec!(2499),
            cost: dec!(1100),
            stock: 85,
            bad_stock: 0,
            inward_stock: 0,
            location: "B2-04-A".to_string(),
            barcode: "8901234567891".to_string(),
            size: Some("32".to_string()),
            color: Some("Blue".to_string()),
            category: None,
        },
    ]
}

fn seed_order() -> Order {
    Order {
        id: "ORD-88291".to_string(),
        channel: Channel::Amazon,
        date: Utc::now() - Duration::hours(2),
        customer_name: "Sameer Khan".to_string(),
        shipping_address: "Andheri West, Mumbai, MH, 400053".to_string(),
        phone: Some("+91 98200 11223".to_string()),
        items: vec![OrderItem {
            item_id: "ITEM-UNIT-44021".to_string(),
            sku: "TSH-BLK-M".to_string(),
            product_name: "Classic T-Shirt".to_string(),
            quantity: 1,
            price: dec!(999),
            location: "A1-02-B".to_string(),
            barcode: None,
            color: Some("Black".to_string()),
            size: Some("M".to_string()),
            scan_status: ScanStatus::Pending,
        }],
        total_amount: dec!(999),
        status: OrderStatus::New,
        payment_method: PaymentMethod::Prepaid,
        priority: Priority::Normal,
        awb: None,
        courier: None,
        picklist_id: None,
        manifest_id: None,
    }
}

fn seed_admin() -> User {
    User {
        id: "u1".to_string(),
        name: "Admin".to_string(),
        role: UserRole::SuperAdmin,
        username: "admin".to_string(),
        password: "123".to_string(),
        avatar: Some("AD".to_string()),
        email: None,
        phone: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_matches_reference_starting_state() {
        let state = seeded_state();

        let tee = state.product("TSH-BLK-M").unwrap();
        assert_eq!(tee.stock, 124);
        let denims = state.product("DNM-BLU-32").unwrap();
        assert_eq!(denims.stock, 85);

        let order = state.order("ORD-88291").unwrap();
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].sku, "TSH-BLK-M");

        let users = state.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, UserRole::SuperAdmin);
    }
}
