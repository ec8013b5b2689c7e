//! Live order feed tests, run on tokio's paused clock: the feed only ticks
//! while a session is active, produces exactly one order per period, and
//! never double-fires across login cycles.

mod common;

use std::time::Duration;

use common::TestApp;

const PERIOD: Duration = Duration::from_secs(20);

#[tokio::test(start_paused = true)]
async fn no_orders_are_produced_while_logged_out() {
    let app = TestApp::new();
    let before = app.order_count();

    for _ in 0..3 {
        tokio::time::advance(PERIOD).await;
        app.settle().await;
    }

    assert!(!app.services.feed.is_running());
    assert_eq!(app.order_count(), before);
    assert_eq!(app.services.state.notifications().len(), 0);
}

#[tokio::test(start_paused = true)]
async fn a_failed_login_does_not_arm_the_feed() {
    let app = TestApp::new();
    let before = app.order_count();

    assert!(app.services.login("admin", "wrong").is_err());
    assert!(!app.services.feed.is_running());

    tokio::time::advance(PERIOD).await;
    app.settle().await;
    assert_eq!(app.order_count(), before);
}

#[tokio::test(start_paused = true)]
async fn exactly_one_order_arrives_per_period_while_logged_in() {
    let app = TestApp::new();
    let before = app.order_count();

    app.services.login("admin", "123").unwrap();
    assert!(app.services.feed.is_running());
    app.settle().await;

    // Nothing lands before the first full period elapses.
    tokio::time::advance(PERIOD - Duration::from_secs(1)).await;
    app.settle().await;
    assert_eq!(app.order_count(), before);

    tokio::time::advance(Duration::from_secs(1)).await;
    app.settle().await;
    assert_eq!(app.order_count(), before + 1);

    for tick in 2..=4 {
        tokio::time::advance(PERIOD).await;
        app.settle().await;
        assert_eq!(app.order_count(), before + tick);
    }

    // Each synthetic order raises one "Order Received" notification.
    assert_eq!(app.services.state.notifications().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn the_feed_stops_within_one_period_of_logout() {
    let app = TestApp::new();
    let before = app.order_count();

    app.services.login("admin", "123").unwrap();
    app.settle().await;
    tokio::time::advance(PERIOD).await;
    app.settle().await;
    assert_eq!(app.order_count(), before + 1);

    app.services.logout();
    assert!(!app.services.feed.is_running());

    for _ in 0..3 {
        tokio::time::advance(PERIOD).await;
        app.settle().await;
    }
    assert_eq!(app.order_count(), before + 1);
}

#[tokio::test(start_paused = true)]
async fn re_login_never_stacks_a_second_timer() {
    let app = TestApp::new();
    let before = app.order_count();

    // Two logins back to back: the second arming cancels the first timer.
    app.services.login("admin", "123").unwrap();
    app.services.login("admin", "123").unwrap();
    app.settle().await;

    tokio::time::advance(PERIOD).await;
    app.settle().await;
    assert_eq!(app.order_count(), before + 1);

    // Full logout/login cycle behaves the same way.
    app.services.logout();
    app.services.login("admin", "123").unwrap();
    app.settle().await;
    tokio::time::advance(PERIOD).await;
    app.settle().await;
    assert_eq!(app.order_count(), before + 2);
}

#[tokio::test(start_paused = true)]
async fn feed_orders_are_prepended_newest_first() {
    let app = TestApp::new();

    app.services.login("admin", "123").unwrap();
    app.settle().await;
    tokio::time::advance(PERIOD).await;
    app.settle().await;

    let orders = app.services.state.orders();
    assert!(orders[0].id.starts_with("ORD-"));
    // The seeded reference order is pushed down, never displaced.
    assert!(orders.iter().any(|o| o.id == "ORD-88291"));
}
