use crate::AppState;
use crate::domain::{
    Gender, Location, Match, NewLocation, NewMatch, NewPlayer, NewTeam, Player, Team,
};
use crate::features::error::ApiError;
use crate::features::model::{MatchFilter, PlayerFilter};
use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get},
};
use tracing::info;

// teams, players, locations and matches: the data series hang off of
pub fn roster_router() -> Router<AppState> {
    Router::new()
        .route("/players", get(list_players_handler).post(create_player_handler))
        .route("/players/{player_id}", get(get_player_handler).delete(delete_player_handler))
        .route("/teams", get(list_teams_handler).post(create_team_handler))
        // GET takes a gender, DELETE a team id
        .route("/teams/{team}", get(team_by_gender_handler).delete(delete_team_handler))
        .route("/locations", get(list_locations_handler).post(create_location_handler))
        .route("/locations/{location_id}", delete(delete_location_handler))
        .route("/matches", get(list_matches_handler).post(create_match_handler))
        .route("/matches/{match_id}", delete(delete_match_handler))
}

// 204 when the row went away, 404 when it was never there
fn deleted(found: bool, what: String) -> Result<StatusCode, ApiError> {
    if found {
        info!(%what, "Deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("{} not found", what)))
    }
}

// ?name= searches first and last name, case-insensitively
async fn list_players_handler(
    State(state): State<AppState>,
    filter: Result<Query<PlayerFilter>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(filter) = filter?;
    Ok(Json(state.roster.list_players(filter.name.as_deref()).await?))
}

async fn create_player_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewPlayer>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let Json(new_player) = payload?;
    let player = state.roster.insert_player(&new_player).await?;
    info!(player_id = player.player_id, %player, "Player created");
    Ok((StatusCode::CREATED, Json(player)))
}

async fn get_player_handler(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(player_id) = player_id?;

    state
        .roster
        .get_player(player_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("player {} not found", player_id)))
}

async fn delete_player_handler(
    State(state): State<AppState>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(player_id) = player_id?;
    let found = state.roster.delete_player(player_id).await?;
    deleted(found, format!("player {}", player_id))
}

async fn list_teams_handler(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    Ok(Json(state.roster.list_teams().await?))
}

async fn create_team_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewTeam>, JsonRejection>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let Json(new_team) = payload?;
    let team = state.roster.insert_team(&new_team).await?;
    info!(team_id = team.team_id, %team, "Team created");
    Ok((StatusCode::CREATED, Json(team)))
}

// separate pages for the boys' and girls' teams: active players only
async fn team_by_gender_handler(
    State(state): State<AppState>,
    gender: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Path(gender) = gender?;
    let gender: Gender = gender.parse()?;
    Ok(Json(state.roster.active_players_by_gender(gender).await?))
}

async fn delete_team_handler(
    State(state): State<AppState>,
    team_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(team_id) = team_id?;
    let found = state.roster.delete_team(team_id).await?;
    deleted(found, format!("team {}", team_id))
}

async fn list_locations_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, ApiError> {
    Ok(Json(state.roster.list_locations().await?))
}

async fn create_location_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewLocation>, JsonRejection>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    let Json(new_location) = payload?;
    let location = state.roster.insert_location(&new_location).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

async fn delete_location_handler(
    State(state): State<AppState>,
    location_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(location_id) = location_id?;
    let found = state.roster.delete_location(location_id).await?;
    deleted(found, format!("location {}", location_id))
}

async fn list_matches_handler(
    State(state): State<AppState>,
    filter: Result<Query<MatchFilter>, QueryRejection>,
) -> Result<Json<Vec<Match>>, ApiError> {
    let Query(filter) = filter?;
    Ok(Json(state.roster.list_matches(filter.season_id).await?))
}

async fn create_match_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewMatch>, JsonRejection>,
) -> Result<(StatusCode, Json<Match>), ApiError> {
    let Json(new_match) = payload?;
    let created = state.roster.insert_match(&new_match).await?;
    info!(match_id = created.match_id, %created, "Match created");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_match_handler(
    State(state): State<AppState>,
    match_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(match_id) = match_id?;
    let found = state.roster.delete_match(match_id).await?;
    deleted(found, format!("match {}", match_id))
}
