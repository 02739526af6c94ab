use crate::domain::{
    Gender, Location, Match, NewLocation, NewMatch, NewPlayer, NewTeam, Player, ScoreRecord,
    Substitution, Team,
};
use async_trait::async_trait;
use thiserror::Error;

pub mod model;
pub mod sqlite;

#[derive(Debug, Error)]
pub enum StoreError {
    // unique, foreign key or check constraint rejected the write
    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

// the storage port the services are built on.
// repositories are shared between request handlers, so they must be Send + Sync
// (sqlx::Pool already is). db specific implementations live in "sqlite.rs".
#[async_trait]
pub trait SeriesRepository: Send + Sync {
    /// Appends a series and returns its new id. Series are never updated.
    async fn insert_series(&self, record: &ScoreRecord) -> StoreResult<i64>;
    async fn get_series(&self, series_id: i64) -> StoreResult<Option<ScoreRecord>>;

    // location and date are filled in from the series' match
    async fn series_for_player(&self, player_id: i64) -> StoreResult<Vec<ScoreRecord>>;
}

#[async_trait]
pub trait SubstitutionRepository: Send + Sync {
    async fn insert_substitution(&self, substitution: &Substitution) -> StoreResult<i64>;
    async fn substitutions_for_series(&self, series_id: i64) -> StoreResult<Vec<Substitution>>;
}

#[async_trait]
pub trait RosterRepository: Send + Sync {
    async fn insert_team(&self, team: &NewTeam) -> StoreResult<Team>;
    async fn list_teams(&self) -> StoreResult<Vec<Team>>;

    async fn insert_player(&self, player: &NewPlayer) -> StoreResult<Player>;
    /// `name` keeps players whose full name contains it, ignoring case.
    async fn list_players(&self, name: Option<&str>) -> StoreResult<Vec<Player>>;
    async fn get_player(&self, player_id: i64) -> StoreResult<Option<Player>>;
    async fn active_players_by_gender(&self, gender: Gender) -> StoreResult<Vec<Player>>;

    async fn insert_location(&self, location: &NewLocation) -> StoreResult<Location>;
    async fn list_locations(&self) -> StoreResult<Vec<Location>>;

    async fn insert_match(&self, new_match: &NewMatch) -> StoreResult<Match>;
    /// Newest match first. `season_id` narrows the list when given.
    async fn list_matches(&self, season_id: Option<i64>) -> StoreResult<Vec<Match>>;

    // deletes return false when there was nothing to delete. rows still
    // referenced elsewhere (a player with series, a location with matches)
    // are refused with StoreError::Constraint
    async fn delete_team(&self, team_id: i64) -> StoreResult<bool>;
    async fn delete_player(&self, player_id: i64) -> StoreResult<bool>;
    async fn delete_location(&self, location_id: i64) -> StoreResult<bool>;
    async fn delete_match(&self, match_id: i64) -> StoreResult<bool>;
}
