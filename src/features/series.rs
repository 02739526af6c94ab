use crate::AppState;
use crate::domain::Marks;
use crate::features::error::ApiError;
use crate::features::model::{JsonSeries, SubmitSeriesRequest};
use crate::services::SeriesReceipt;
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, post},
};

pub fn series_router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_series_handler))
        .route("/{series_id}", get(get_series_handler))
}

// the main "type in three scores" endpoint
async fn submit_series_handler(
    State(state): State<AppState>,
    payload: Result<Json<SubmitSeriesRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SeriesReceipt>), ApiError> {
    let Json(request) = payload?;
    let marks = Marks::new(request.strikes, request.spares)?;

    let receipt = state
        .series
        .submit(request.player_id, request.match_id, &request.game_scores(), marks)
        .await?;

    Ok((StatusCode::CREATED, Json(receipt)))
}

async fn get_series_handler(
    State(state): State<AppState>,
    series_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<JsonSeries>, ApiError> {
    let Path(series_id) = series_id?;

    match state.series.get(series_id).await? {
        Some(record) => Ok(Json(JsonSeries::from(&record))),
        None => Err(ApiError::NotFound(format!("series {} not found", series_id))),
    }
}
