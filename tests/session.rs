mod common;

use axum::http::StatusCode;
use common::{failing_source, hanging_source, sheet_source, SHEET};
use cycling_log::models::Phase;
use cycling_log::{session, AppState, Config};
use reqwest::Client;
use std::time::Duration;
use tokio::time::{sleep, timeout};

fn state_for(source_url: String, fill_delay: Duration) -> AppState {
    AppState::new(Config {
        source_url,
        fill_delay,
        ..Config::default()
    })
}

#[tokio::test]
async fn session_loads_once_then_fills_bar() {
    let state = state_for(sheet_source(SHEET).await, Duration::from_millis(300));
    let mut width = state.bar.subscribe();

    let fetch = session::start(&state, Client::new()).await.expect("first start");
    assert_eq!(*state.phase.lock().await, Phase::Loading);
    assert!(session::start(&state, Client::new()).await.is_none());

    fetch.await.unwrap();
    let phase = state.phase.lock().await.clone();
    let dataset = phase.dataset().expect("dataset loaded");
    assert!((dataset.progress() - 250.0).abs() < 1e-9);
    assert_eq!(state.bar.width(), 0.0);
    assert!(state.bar.is_pending());

    timeout(Duration::from_secs(3), width.wait_for(|value| *value > 0.0))
        .await
        .expect("bar filled in time")
        .unwrap();
    assert_eq!(state.bar.width(), 25.0);

    assert!(session::start(&state, Client::new()).await.is_none());
}

#[tokio::test]
async fn failed_fetch_is_terminal() {
    let state = state_for(
        failing_source(StatusCode::SERVICE_UNAVAILABLE).await,
        Duration::from_millis(10),
    );

    session::start(&state, Client::new())
        .await
        .expect("first start")
        .await
        .unwrap();

    assert_eq!(*state.phase.lock().await, Phase::Failed);
    assert!(session::start(&state, Client::new()).await.is_none());
    assert!(!state.bar.is_pending());
    assert_eq!(state.bar.width(), 0.0);
}

#[tokio::test]
async fn empty_sheet_fails_instead_of_showing_zero() {
    let state = state_for(sheet_source("[]").await, Duration::from_millis(10));

    session::start(&state, Client::new())
        .await
        .expect("first start")
        .await
        .unwrap();

    assert_eq!(*state.phase.lock().await, Phase::Failed);
}

#[tokio::test]
async fn tear_down_before_delay_keeps_bar_empty() {
    let state = state_for(sheet_source(SHEET).await, Duration::from_millis(300));

    session::start(&state, Client::new())
        .await
        .expect("first start")
        .await
        .unwrap();
    state.bar.tear_down();

    sleep(Duration::from_millis(600)).await;
    assert_eq!(state.bar.width(), 0.0);
    assert!(matches!(*state.phase.lock().await, Phase::Loaded(_)));
}

#[tokio::test]
async fn hung_source_fails_after_request_timeout() {
    let config = Config {
        source_url: hanging_source().await,
        request_timeout: Duration::from_millis(200),
        ..Config::default()
    };
    let client = config.http_client().unwrap();
    let state = AppState::new(config);

    let fetch = session::start(&state, client).await.expect("first start");
    timeout(Duration::from_secs(3), fetch)
        .await
        .expect("fetch settled")
        .unwrap();

    assert_eq!(*state.phase.lock().await, Phase::Failed);
}
