//! Periodic keep-alive ping
//!
//! Free-tier hosting platforms idle the service after a few minutes without
//! traffic; a scheduled self-ping keeps it warm. Disabled unless a ping URL
//! is configured.

use crate::config::KeepAliveConfig;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info};

const PING_TIMEOUT: Duration = Duration::from_secs(30);

/// Spawn the keep-alive task. Returns `None` when no URL is configured.
pub fn spawn(config: KeepAliveConfig) -> Option<JoinHandle<()>> {
    let url = match config.url {
        Some(url) => url,
        None => {
            info!("Keep-alive URL not configured, pings disabled");
            return None;
        }
    };

    let period = Duration::from_secs(config.interval_mins * 60);
    info!(
        "Keep-alive pings enabled: {} every {} minutes",
        url, config.interval_mins
    );

    Some(tokio::spawn(async move {
        let client = reqwest::Client::new();
        let mut ticker = tokio::time::interval(period);
        // The first tick fires immediately; skip it so the first ping
        // happens one full interval after startup.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            ping(&client, &url).await;
        }
    }))
}

async fn ping(client: &reqwest::Client, url: &str) {
    match client.get(url).timeout(PING_TIMEOUT).send().await {
        Ok(response) => info!("Keep-alive ping successful: {}", response.status()),
        Err(e) => error!("Keep-alive ping failed: {}", e),
    }
}
