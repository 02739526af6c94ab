use crate::AppState;
use crate::features::error::ApiError;
use crate::features::model::{JsonSeries, SeriesFilter};
use crate::stats::{GameSlotAverages, LocationAverage, PlayerSummary};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    routing::get,
};

// every stats endpoint answers with an empty or "no data" result for a player
// without series, never a 404
pub fn player_stats_router() -> Router<AppState> {
    Router::new()
        .route("/{player_id}/series", get(list_series_handler))
        .route("/{player_id}/location_averages", get(location_averages_handler))
        .route("/{player_id}/game_averages", get(game_averages_handler))
        .route("/{player_id}/summary", get(summary_handler))
}

// ?location_id= narrows the list to one bowling center
async fn list_series_handler(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
    filter: Result<Query<SeriesFilter>, QueryRejection>,
) -> Result<Json<Vec<JsonSeries>>, ApiError> {
    let Path(player_id) = player_id?;
    let Query(filter) = filter?;

    let records = state.series.series_at(player_id, filter.location_id).await?;
    Ok(Json(records.iter().map(JsonSeries::from).collect()))
}

// "quickly view averages from different locations"
async fn location_averages_handler(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<LocationAverage>>, ApiError> {
    let Path(player_id) = player_id?;
    Ok(Json(state.series.location_averages(player_id).await?))
}

// game 1 / game 2 / game 3 averages
async fn game_averages_handler(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GameSlotAverages>, ApiError> {
    let Path(player_id) = player_id?;
    Ok(Json(state.series.game_averages(player_id).await?))
}

async fn summary_handler(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<PlayerSummary>, ApiError> {
    let Path(player_id) = player_id?;
    Ok(Json(state.series.summary(player_id).await?))
}
