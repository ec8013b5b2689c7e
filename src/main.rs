use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::info;

use wms_core::theme::ThemeStore;
use wms_core::{config, events, seed, AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = config::load_config()?;
    config::init_tracing(&cfg.log_level, cfg.log_json);

    let theme_store = ThemeStore::new(cfg.theme_path.clone());
    let theme = theme_store.load_or_detect(|| false);
    info!(%theme, "Theme preference restored");

    let state = Arc::new(seed::seeded_state());
    let (services, event_rx) = AppServices::build(state, &cfg);
    tokio::spawn(events::process_events(
        event_rx,
        services.notifications.clone(),
    ));

    let user = services
        .login("admin", "123")
        .context("seeded admin login failed")?;
    info!(
        user = %user.name,
        role = %user.role,
        period_secs = cfg.feed_interval_secs,
        "Session started; live order feed armed"
    );

    signal::ctrl_c().await?;

    services.logout();
    theme_store.save(theme)?;

    let orders = services.state.orders();
    info!(
        orders = orders.len(),
        notifications = services.notifications.unread_count(),
        "Session ended"
    );
    Ok(())
}
