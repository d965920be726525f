use std::{sync::Arc, time::Duration};

use reqwest::Client;
use tokio::time::interval;
use tracing::{info, warn};

use crate::{generator, state::AppState};

/// Spawns the resident refresh task. The first tick fires immediately, so
/// the pool gets its best-effort startup population while the server is
/// already accepting connections; after that the configured interval is
/// the only retry mechanism.
pub fn spawn(state: Arc<AppState>) {
    tokio::spawn(async move {
        let client = Client::new();
        let mut ticker = interval(Duration::from_secs(state.config.refresh_minutes * 60));

        loop {
            ticker.tick().await;
            refresh_once(&state, &client).await;
        }
    });
}

async fn refresh_once(state: &AppState, client: &Client) {
    match generator::fetch_questions(client, &state.config).await {
        Ok(pool) => {
            info!("Question pool refreshed with {} questions", pool.len());
            if let Err(error) = state.publish(pool) {
                warn!("Failed to publish refreshed pool: {error}");
            }
        }
        Err(error) => {
            warn!("Question refresh failed, keeping existing pool: {error}");
        }
    }
}
