//! The single fetch-then-render cycle.
//!
//! `Idle → Loading → {Loaded | Failed}`. There is no way back to `Loading`:
//! the dataset is fetched once per process.

use crate::models::Phase;
use crate::pipeline::fetch_dataset;
use crate::state::AppState;
use crate::stats::fill_target;
use reqwest::Client;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Enter `Loading` and spawn the fetch.
///
/// Returns `None` without doing anything if the session already left `Idle`.
pub async fn start(state: &AppState, client: Client) -> Option<JoinHandle<()>> {
    {
        let mut phase = state.phase.lock().await;
        if *phase != Phase::Idle {
            return None;
        }
        *phase = Phase::Loading;
    }

    let state = state.clone();
    Some(tokio::spawn(async move {
        let url = state.config.source_url.as_str();
        info!("fetching rides from {url}");

        match fetch_dataset(&client, url).await {
            Ok(dataset) => {
                info!(
                    "loaded {} rides, {:.2} of {} km",
                    dataset.entries().len(),
                    dataset.progress(),
                    dataset.goal()
                );
                let target = fill_target(&dataset);
                // Schedule the fill before readers can see `Loaded`.
                let mut phase = state.phase.lock().await;
                *phase = Phase::Loaded(dataset);
                state.bar.animate_to(target, state.config.fill_delay);
            }
            Err(err) => {
                if err.is_fetch() {
                    error!("failed to fetch rides: {err}");
                } else {
                    error!("failed to process rides: {err}");
                }
                *state.phase.lock().await = Phase::Failed;
            }
        }
    }))
}
