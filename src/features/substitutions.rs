use crate::AppState;
use crate::domain::Substitution;
use crate::features::error::ApiError;
use crate::features::model::{SubstitutionLogged, SubstitutionRequest};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};

pub fn substitutions_router() -> Router<AppState> {
    Router::new()
        .route("/", post(record_substitution_handler))
        .route("/{series_id}", get(list_substitutions_handler))
}

// keep track of WHO gets subbed in
async fn record_substitution_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubstitutionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubstitutionLogged>), ApiError> {
    let Json(request) = payload?;

    let substitution = state
        .substitutions
        .record(request.series_id, request.sub_player_id, request.game_number)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubstitutionLogged {
            status: "substitution logged",
            substitution,
        }),
    ))
}

async fn list_substitutions_handler(
    State(state): State<AppState>,
    series_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Substitution>>, ApiError> {
    let Path(series_id) = series_id?;
    Ok(Json(state.substitutions.for_series(series_id).await?))
}
