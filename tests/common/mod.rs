#![allow(dead_code)]

use axum::{
    http::{header, StatusCode},
    routing::get,
    Router,
};
use std::time::Duration;

pub const SHEET: &str = r#"[
  {"Date": "01.03.2023", "Distance (km)": "100", "Goal (km)": "1000"},
  {"Date": "12.03.2023", "Distance (km)": "42.5", "Goal (km)": ""},
  {"Date": "05.03.2023", "Distance (km)": "107.5", "Goal (km)": ""}
]"#;

/// Serve `router` on a random local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture port");
    let addr = listener.local_addr().expect("fixture address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("fixture server");
    });
    format!("http://{addr}")
}

/// A source that answers `/sheet` with `body` as JSON.
pub async fn sheet_source(body: impl Into<String>) -> String {
    let body = body.into();
    let router = Router::new().route(
        "/sheet",
        get(move || {
            let body = body.clone();
            async move { ([(header::CONTENT_TYPE, "application/json")], body) }
        }),
    );
    format!("{}/sheet", serve(router).await)
}

/// A source that answers `/sheet` with a bare `status`.
pub async fn failing_source(status: StatusCode) -> String {
    let router = Router::new().route("/sheet", get(move || async move { status }));
    format!("{}/sheet", serve(router).await)
}

/// A source that accepts `/sheet` requests and never answers in time.
pub async fn hanging_source() -> String {
    let router = Router::new().route(
        "/sheet",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            StatusCode::OK
        }),
    );
    format!("{}/sheet", serve(router).await)
}

/// A URL nothing is listening on.
pub fn unreachable_source() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/sheet")
}
