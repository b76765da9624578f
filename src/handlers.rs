use crate::errors::AppError;
use crate::models::{Dataset, Phase, StatusResponse};
use crate::state::AppState;
use crate::stats::{build_summary, fill_target};
use crate::ui::{render_index, FAILURE_MESSAGE};
use axum::{extract::State, response::Html, Json};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let phase = state.phase.lock().await;
    Html(render_index(&phase, state.bar.width(), is_live(&state, &phase)))
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let phase = state.phase.lock().await;
    Json(StatusResponse {
        phase: phase.kind(),
        message: matches!(*phase, Phase::Failed).then(|| FAILURE_MESSAGE.to_string()),
        summary: phase.dataset().map(build_summary),
        bar_width: state.bar.width(),
        checked_at: Local::now().to_rfc3339(),
    })
}

pub async fn get_dataset(State(state): State<AppState>) -> Result<Json<Dataset>, AppError> {
    match &*state.phase.lock().await {
        Phase::Loaded(dataset) => Ok(Json(dataset.clone())),
        Phase::Failed => Err(AppError::bad_gateway(FAILURE_MESSAGE)),
        Phase::Idle | Phase::Loading => Err(AppError::unavailable("rides are still loading")),
    }
}

/// Whether the served page still has something to wait for.
///
/// A loaded page stays live until the bar shows its target, which also
/// covers a fill that has not been scheduled yet.
fn is_live(state: &AppState, phase: &Phase) -> bool {
    match phase {
        Phase::Idle | Phase::Loading => true,
        Phase::Loaded(dataset) => {
            state.bar.is_pending()
                || (!state.bar.is_torn_down() && state.bar.width() != fill_target(dataset))
        }
        Phase::Failed => false,
    }
}
