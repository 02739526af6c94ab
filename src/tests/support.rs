use crate::AppState;
use crate::database::sqlite::SqliteRepository;
use crate::database::{
    RosterRepository, SeriesRepository, StoreError, StoreResult, SubstitutionRepository,
};
use crate::domain::{
    GameScores, Gender, NewLocation, NewMatch, NewPlayer, NewTeam, ScoreRecord, Substitution,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::{Arc, Mutex};

// create a sqlite database in memory to test against
pub async fn setup_test_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        // one connection, otherwise every connection gets its own empty in-memory db
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn setup_test_db() -> SqliteRepository {
    SqliteRepository::new(setup_test_pool().await)
}

pub async fn setup_api_state() -> (AppState, Arc<SqliteRepository>) {
    let repo = Arc::new(setup_test_db().await);
    let state = AppState::new(repo.clone(), repo.clone(), repo.clone());
    (state, repo)
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn games(a: i64, b: i64, c: i64) -> GameScores {
    GameScores::new(&[a, b, c]).unwrap()
}

/// Ids created by [`seed_league`].
pub struct League {
    pub boys_team: i64,
    pub girls_team: i64,
    pub alice: i64,
    pub bob: i64,
    pub carol: i64,
    pub home_lanes: i64,
    pub away_lanes: i64,
    pub home_match: i64,
    pub away_match: i64,
}

// two teams, three players, two locations and one match at each location
pub async fn seed_league(repo: &dyn RosterRepository) -> League {
    let boys = repo
        .insert_team(&NewTeam { name: "Boys Varsity".into(), gender: Gender::Male })
        .await
        .unwrap();
    let girls = repo
        .insert_team(&NewTeam { name: "Girls Varsity".into(), gender: Gender::Female })
        .await
        .unwrap();

    let player = |team_id: i64, first: &str, last: &str, is_active: bool| NewPlayer {
        team_id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        graduation_year: Some(2026),
        is_active,
    };

    let alice = repo.insert_player(&player(girls.team_id, "Alice", "Archer", true)).await.unwrap();
    let bob = repo.insert_player(&player(boys.team_id, "Bob", "Baker", true)).await.unwrap();
    let carol = repo.insert_player(&player(girls.team_id, "Carol", "Cole", false)).await.unwrap();

    let home = repo
        .insert_location(&NewLocation { name: "Home Lanes".into(), address: Some("123 Bowling St.".into()) })
        .await
        .unwrap();
    let away = repo
        .insert_location(&NewLocation { name: "Away Bowl".into(), address: None })
        .await
        .unwrap();

    let home_match = repo
        .insert_match(&NewMatch {
            season_id: Some(1),
            location_id: home.location_id,
            match_date: date("2025-11-01"),
            opponent_name: Some("Central".into()),
        })
        .await
        .unwrap();
    let away_match = repo
        .insert_match(&NewMatch {
            season_id: Some(1),
            location_id: away.location_id,
            match_date: date("2025-11-08"),
            opponent_name: Some("North".into()),
        })
        .await
        .unwrap();

    League {
        boys_team: boys.team_id,
        girls_team: girls.team_id,
        alice: alice.player_id,
        bob: bob.player_id,
        carol: carol.player_id,
        home_lanes: home.location_id,
        away_lanes: away.location_id,
        home_match: home_match.match_id,
        away_match: away_match.match_id,
    }
}

// --- Manual Mock: series + substitution storage ---
// fakes the database so service logic can be tested without sqlite.
// like sqlite, it hands out increasing ids and enforces one substitution per game.
#[derive(Clone, Default)]
pub struct MockRepository {
    pub series: Arc<Mutex<Vec<ScoreRecord>>>,
    pub substitutions: Arc<Mutex<Vec<Substitution>>>,
    // flip on to make every call fail like a dead connection
    pub fail: Arc<Mutex<bool>>,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    // helper to put a series straight into the fake store
    pub fn add_series(&self, record: ScoreRecord) -> i64 {
        let mut series = self.series.lock().unwrap();
        let id = series.len() as i64 + 1;
        series.push(ScoreRecord { series_id: Some(id), ..record });
        id
    }

    fn check_alive(&self) -> StoreResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(StoreError::Backend(anyhow::anyhow!("mock storage is down")));
        }
        Ok(())
    }
}

#[async_trait]
impl SeriesRepository for MockRepository {
    async fn insert_series(&self, record: &ScoreRecord) -> StoreResult<i64> {
        self.check_alive()?;
        Ok(self.add_series(record.clone()))
    }

    async fn get_series(&self, series_id: i64) -> StoreResult<Option<ScoreRecord>> {
        self.check_alive()?;
        let series = self.series.lock().unwrap();
        Ok(series.iter().find(|s| s.series_id == Some(series_id)).cloned())
    }

    async fn series_for_player(&self, player_id: i64) -> StoreResult<Vec<ScoreRecord>> {
        self.check_alive()?;
        let series = self.series.lock().unwrap();
        Ok(series.iter().filter(|s| s.player_id == player_id).cloned().collect())
    }
}

#[async_trait]
impl SubstitutionRepository for MockRepository {
    async fn insert_substitution(&self, substitution: &Substitution) -> StoreResult<i64> {
        self.check_alive()?;
        let mut substitutions = self.substitutions.lock().unwrap();
        if substitutions
            .iter()
            .any(|s| s.series_id == substitution.series_id && s.game_number == substitution.game_number)
        {
            return Err(StoreError::Constraint("UNIQUE constraint failed".into()));
        }
        let id = substitutions.len() as i64 + 1;
        substitutions.push(Substitution { substitution_id: Some(id), ..substitution.clone() });
        Ok(id)
    }

    async fn substitutions_for_series(&self, series_id: i64) -> StoreResult<Vec<Substitution>> {
        self.check_alive()?;
        let substitutions = self.substitutions.lock().unwrap();
        Ok(substitutions.iter().filter(|s| s.series_id == series_id).cloned().collect())
    }
}
