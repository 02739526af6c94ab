use crate::domain::{
    GameNumber, GameScores, Gender, Location, Marks, Match, Player, ScoreRecord, Substitution,
    Team,
};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use derive_more::derive::Display;

// rows as sqlite hands them back. converted into the pure domain types before
// leaving the database module.

#[derive(sqlx::FromRow, Debug, Clone, Display)]
#[display("series {}", series_id)]
pub struct DbSeries {
    pub series_id: i64,
    pub player_id: i64,
    pub match_id: i64,
    pub game1_score: i64,
    pub game2_score: i64,
    pub game3_score: i64,
    pub strikes: Option<i64>,
    pub spares: Option<i64>,
    pub location_id: Option<i64>,
    pub match_date: Option<NaiveDate>,
}

impl TryFrom<DbSeries> for ScoreRecord {
    type Error = anyhow::Error;

    fn try_from(row: DbSeries) -> Result<Self> {
        let game_scores = GameScores::new(&[row.game1_score, row.game2_score, row.game3_score])
            .with_context(|| format!("{} holds invalid game scores", row))?;
        let marks = Marks::new(row.strikes, row.spares)
            .with_context(|| format!("{} holds invalid strike or spare counts", row))?;

        Ok(ScoreRecord {
            series_id: Some(row.series_id),
            player_id: row.player_id,
            match_id: row.match_id,
            game_scores,
            marks,
            location_id: row.location_id,
            match_date: row.match_date,
        })
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DbSubstitution {
    pub substitution_id: i64,
    pub series_id: i64,
    pub sub_player_id: i64,
    pub game_number: i64,
}

impl TryFrom<DbSubstitution> for Substitution {
    type Error = anyhow::Error;

    fn try_from(row: DbSubstitution) -> Result<Self> {
        let game_number = GameNumber::try_from(row.game_number)
            .with_context(|| format!("substitution {} has a bad game number", row.substitution_id))?;

        Ok(Substitution {
            substitution_id: Some(row.substitution_id),
            series_id: row.series_id,
            sub_player_id: row.sub_player_id,
            game_number,
        })
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DbTeam {
    pub team_id: i64,
    pub name: String,
    pub gender: String,
}

impl TryFrom<DbTeam> for Team {
    type Error = anyhow::Error;

    fn try_from(row: DbTeam) -> Result<Self> {
        let gender: Gender = row
            .gender
            .parse()
            .with_context(|| format!("team {} has an unknown gender", row.team_id))?;

        Ok(Team {
            team_id: row.team_id,
            name: row.name,
            gender,
        })
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DbPlayer {
    pub player_id: i64,
    pub team_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub graduation_year: Option<i32>,
    pub is_active: bool,
}

impl From<DbPlayer> for Player {
    fn from(row: DbPlayer) -> Self {
        Player {
            player_id: row.player_id,
            team_id: row.team_id,
            first_name: row.first_name,
            last_name: row.last_name,
            graduation_year: row.graduation_year,
            is_active: row.is_active,
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DbLocation {
    pub location_id: i64,
    pub name: String,
    pub address: Option<String>,
}

impl From<DbLocation> for Location {
    fn from(row: DbLocation) -> Self {
        Location {
            location_id: row.location_id,
            name: row.name,
            address: row.address,
        }
    }
}

#[derive(sqlx::FromRow, Debug, Clone)]
pub struct DbMatch {
    pub match_id: i64,
    pub season_id: Option<i64>,
    pub location_id: i64,
    pub match_date: NaiveDate,
    pub opponent_name: Option<String>,
}

impl From<DbMatch> for Match {
    fn from(row: DbMatch) -> Self {
        Match {
            match_id: row.match_id,
            season_id: row.season_id,
            location_id: row.location_id,
            match_date: row.match_date,
            opponent_name: row.opponent_name,
        }
    }
}
