use crate::database::model::{DbLocation, DbMatch, DbPlayer, DbSeries, DbSubstitution, DbTeam};
use crate::database::{
    RosterRepository, SeriesRepository, StoreError, StoreResult, SubstitutionRepository,
};
use crate::domain::{
    Gender, Location, Match, NewLocation, NewMatch, NewPlayer, NewTeam, Player, ScoreRecord,
    Substitution, Team,
};
use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::{Pool, Sqlite};

// series joined with the location and date of the match they were bowled in
const SERIES_SELECT: &str = r#"
    SELECT
        s.series_id,
        s.player_id,
        s.match_id,
        s.game1_score,
        s.game2_score,
        s.game3_score,
        s.strikes,
        s.spares,
        m.location_id,
        m.match_date
    FROM series s
    LEFT JOIN matches m ON m.match_id = s.match_id
"#;

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    async fn delete_by_id(&self, sql: &str, id: i64, what: &str) -> StoreResult<bool> {
        let result = sqlx::query(sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, format!("Failed to delete {} {}", what, id)))?;

        Ok(result.rows_affected() > 0)
    }
}

// sort constraint failures (which the caller can act on) from everything else
fn store_error(err: sqlx::Error, context: String) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(
            db_err.kind(),
            ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
        ) {
            return StoreError::Constraint(format!("{}: {}", context, db_err.message()));
        }
    }
    StoreError::Backend(anyhow::Error::new(err).context(context))
}

#[async_trait]
impl SeriesRepository for SqliteRepository {
    async fn insert_series(&self, record: &ScoreRecord) -> StoreResult<i64> {
        let [game1, game2, game3] = record.game_scores.games();

        let result = sqlx::query(
            r#"
            INSERT INTO series (
                player_id, match_id, game1_score, game2_score, game3_score, strikes, spares
            )
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.player_id)
        .bind(record.match_id)
        .bind(i64::from(game1))
        .bind(i64::from(game2))
        .bind(i64::from(game3))
        .bind(record.marks.strikes.map(i64::from))
        .bind(record.marks.spares.map(i64::from))
        .execute(&self.pool)
        .await
        .map_err(|e| store_error(e, format!("Failed to save {}", record)))?;

        Ok(result.last_insert_rowid())
    }

    async fn get_series(&self, series_id: i64) -> StoreResult<Option<ScoreRecord>> {
        let row = sqlx::query_as::<_, DbSeries>(&format!("{SERIES_SELECT} WHERE s.series_id = ?"))
            .bind(series_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error(e, format!("Failed to load series {}", series_id)))?;

        // translate to the pure domain model
        match row {
            Some(row) => Ok(Some(ScoreRecord::try_from(row)?)),
            None => Ok(None),
        }
    }

    async fn series_for_player(&self, player_id: i64) -> StoreResult<Vec<ScoreRecord>> {
        let rows = sqlx::query_as::<_, DbSeries>(&format!(
            "{SERIES_SELECT} WHERE s.player_id = ? ORDER BY s.series_id"
        ))
        .bind(player_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, format!("Failed to load series for player {}", player_id)))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(ScoreRecord::try_from(row)?);
        }

        Ok(records)
    }
}

#[async_trait]
impl SubstitutionRepository for SqliteRepository {
    async fn insert_substitution(&self, substitution: &Substitution) -> StoreResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO substitutions (series_id, sub_player_id, game_number)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(substitution.series_id)
        .bind(substitution.sub_player_id)
        .bind(i64::from(substitution.game_number.get()))
        .execute(&self.pool)
        .await
        .map_err(|e| store_error(e, format!("Failed to save {}", substitution)))?;

        Ok(result.last_insert_rowid())
    }

    async fn substitutions_for_series(&self, series_id: i64) -> StoreResult<Vec<Substitution>> {
        let rows = sqlx::query_as::<_, DbSubstitution>(
            r#"
            SELECT substitution_id, series_id, sub_player_id, game_number
            FROM substitutions
            WHERE series_id = ?
            ORDER BY game_number
            "#,
        )
        .bind(series_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            store_error(e, format!("Failed to load substitutions for series {}", series_id))
        })?;

        let mut substitutions = Vec::with_capacity(rows.len());
        for row in rows {
            substitutions.push(Substitution::try_from(row)?);
        }

        Ok(substitutions)
    }
}

#[async_trait]
impl RosterRepository for SqliteRepository {
    async fn insert_team(&self, team: &NewTeam) -> StoreResult<Team> {
        let result = sqlx::query("INSERT INTO teams (name, gender) VALUES (?, ?)")
            .bind(&team.name)
            .bind(team.gender.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, format!("Failed to save team {}", team.name)))?;

        Ok(Team {
            team_id: result.last_insert_rowid(),
            name: team.name.clone(),
            gender: team.gender,
        })
    }

    async fn list_teams(&self) -> StoreResult<Vec<Team>> {
        let rows = sqlx::query_as::<_, DbTeam>(
            "SELECT team_id, name, gender FROM teams ORDER BY team_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to load teams".to_string()))?;

        let mut teams = Vec::with_capacity(rows.len());
        for row in rows {
            teams.push(Team::try_from(row)?);
        }

        Ok(teams)
    }

    async fn insert_player(&self, player: &NewPlayer) -> StoreResult<Player> {
        let result = sqlx::query(
            r#"
            INSERT INTO players (team_id, first_name, last_name, graduation_year, is_active)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(player.team_id)
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(player.graduation_year)
        .bind(player.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            store_error(
                e,
                format!("Failed to save player {} {}", player.first_name, player.last_name),
            )
        })?;

        Ok(Player {
            player_id: result.last_insert_rowid(),
            team_id: player.team_id,
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            graduation_year: player.graduation_year,
            is_active: player.is_active,
        })
    }

    async fn list_players(&self, name: Option<&str>) -> StoreResult<Vec<Player>> {
        // instr instead of LIKE so '%' and '_' in the search are taken literally
        let rows = sqlx::query_as::<_, DbPlayer>(
            r#"
            SELECT player_id, team_id, first_name, last_name, graduation_year, is_active
            FROM players
            WHERE ?1 IS NULL
                OR instr(lower(first_name || ' ' || last_name), lower(?1)) > 0
            ORDER BY player_id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to load players".to_string()))?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn get_player(&self, player_id: i64) -> StoreResult<Option<Player>> {
        let row = sqlx::query_as::<_, DbPlayer>(
            r#"
            SELECT player_id, team_id, first_name, last_name, graduation_year, is_active
            FROM players
            WHERE player_id = ?
            "#,
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error(e, format!("Failed to load player {}", player_id)))?;

        Ok(row.map(Player::from))
    }

    async fn active_players_by_gender(&self, gender: Gender) -> StoreResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, DbPlayer>(
            r#"
            SELECT p.player_id, p.team_id, p.first_name, p.last_name, p.graduation_year, p.is_active
            FROM players p
            JOIN teams t ON p.team_id = t.team_id
            WHERE t.gender = ? AND p.is_active = 1
            ORDER BY p.last_name, p.first_name
            "#,
        )
        .bind(gender.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, format!("Failed to load {} roster", gender)))?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn insert_location(&self, location: &NewLocation) -> StoreResult<Location> {
        let result = sqlx::query("INSERT INTO locations (name, address) VALUES (?, ?)")
            .bind(&location.name)
            .bind(&location.address)
            .execute(&self.pool)
            .await
            .map_err(|e| store_error(e, format!("Failed to save location {}", location.name)))?;

        Ok(Location {
            location_id: result.last_insert_rowid(),
            name: location.name.clone(),
            address: location.address.clone(),
        })
    }

    async fn list_locations(&self) -> StoreResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, DbLocation>(
            "SELECT location_id, name, address FROM locations ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to load locations".to_string()))?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    async fn insert_match(&self, new_match: &NewMatch) -> StoreResult<Match> {
        let result = sqlx::query(
            r#"
            INSERT INTO matches (season_id, location_id, match_date, opponent_name)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(new_match.season_id)
        .bind(new_match.location_id)
        .bind(new_match.match_date)
        .bind(&new_match.opponent_name)
        .execute(&self.pool)
        .await
        .map_err(|e| store_error(e, format!("Failed to save match on {}", new_match.match_date)))?;

        Ok(Match {
            match_id: result.last_insert_rowid(),
            season_id: new_match.season_id,
            location_id: new_match.location_id,
            match_date: new_match.match_date,
            opponent_name: new_match.opponent_name.clone(),
        })
    }

    async fn list_matches(&self, season_id: Option<i64>) -> StoreResult<Vec<Match>> {
        // a NULL season filter matches everything
        let rows = sqlx::query_as::<_, DbMatch>(
            r#"
            SELECT match_id, season_id, location_id, match_date, opponent_name
            FROM matches
            WHERE ?1 IS NULL OR season_id = ?1
            ORDER BY match_date DESC, match_id DESC
            "#,
        )
        .bind(season_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error(e, "Failed to load matches".to_string()))?;

        Ok(rows.into_iter().map(Match::from).collect())
    }

    async fn delete_team(&self, team_id: i64) -> StoreResult<bool> {
        self.delete_by_id("DELETE FROM teams WHERE team_id = ?", team_id, "team")
            .await
    }

    async fn delete_player(&self, player_id: i64) -> StoreResult<bool> {
        self.delete_by_id("DELETE FROM players WHERE player_id = ?", player_id, "player")
            .await
    }

    async fn delete_location(&self, location_id: i64) -> StoreResult<bool> {
        self.delete_by_id("DELETE FROM locations WHERE location_id = ?", location_id, "location")
            .await
    }

    async fn delete_match(&self, match_id: i64) -> StoreResult<bool> {
        self.delete_by_id("DELETE FROM matches WHERE match_id = ?", match_id, "match")
            .await
    }
}
