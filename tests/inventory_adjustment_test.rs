//! Inventory ledger tests: the zero floor, unknown-SKU policy, and the
//! inward/putaway counters used by PO receiving.

mod common;

use common::TestApp;
use wms_core::services::inventory::StockMode;
use wms_core::ServiceError;

#[tokio::test]
async fn removal_clamps_at_zero_regardless_of_magnitude() {
    let app = TestApp::new();
    assert_eq!(app.stock_of("TSH-BLK-M"), 124);

    let new_level = app
        .services
        .inventory
        .adjust_stock("TSH-BLK-M", 10_000, StockMode::Remove)
        .await
        .unwrap();
    assert_eq!(new_level, 0);
    assert_eq!(app.stock_of("TSH-BLK-M"), 0);

    // Another removal from zero stays at zero.
    let still_zero = app
        .services
        .inventory
        .adjust_stock("TSH-BLK-M", 1, StockMode::Remove)
        .await
        .unwrap();
    assert_eq!(still_zero, 0);
}

#[tokio::test]
async fn add_and_remove_apply_signed_deltas() {
    let app = TestApp::new();

    app.services
        .inventory
        .adjust_stock("DNM-BLU-32", 15, StockMode::Add)
        .await
        .unwrap();
    assert_eq!(app.stock_of("DNM-BLU-32"), 100);

    app.services
        .inventory
        .adjust_stock("DNM-BLU-32", 40, StockMode::Remove)
        .await
        .unwrap();
    assert_eq!(app.stock_of("DNM-BLU-32"), 60);
}

#[tokio::test]
async fn unknown_sku_is_an_error_for_direct_callers() {
    let app = TestApp::new();

    let result = app
        .services
        .inventory
        .adjust_stock("SKU-UNKNOWN", 1, StockMode::Add)
        .await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn inward_stock_becomes_sellable_only_on_putaway() {
    let app = TestApp::new();

    let inward = app.services.inventory.record_inward("TSH-BLK-M", 50).unwrap();
    assert_eq!(inward, 50);
    // Receipt alone does not make units sellable.
    assert_eq!(app.stock_of("TSH-BLK-M"), 124);

    let stock = app
        .services
        .inventory
        .confirm_putaway("TSH-BLK-M", 20)
        .await
        .unwrap();
    assert_eq!(stock, 144);

    let product = app.services.state.product("TSH-BLK-M").unwrap();
    assert_eq!(product.inward_stock, 30);
    assert_eq!(product.stock, 144);
}
