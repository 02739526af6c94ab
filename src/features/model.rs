use crate::domain::{ScoreRecord, Substitution};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// scores come either as "game_scores": [a, b, c] or as separate
// game1_score / game2_score / game3_score fields
#[derive(Deserialize)]
pub struct SubmitSeriesRequest {
    pub player_id: i64,
    pub match_id: i64,
    pub game_scores: Option<Vec<i64>>,
    pub game1_score: Option<i64>,
    pub game2_score: Option<i64>,
    pub game3_score: Option<i64>,
    pub strikes: Option<i64>,
    pub spares: Option<i64>,
}

impl SubmitSeriesRequest {
    // missing games come out as a short list, which fails validation downstream
    pub fn game_scores(&self) -> Vec<i64> {
        match &self.game_scores {
            Some(scores) => scores.clone(),
            None => [self.game1_score, self.game2_score, self.game3_score]
                .into_iter()
                .flatten()
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct SubstitutionRequest {
    // the series of the *original* player
    pub series_id: i64,
    pub sub_player_id: i64,
    pub game_number: i64,
}

#[derive(Serialize)]
pub struct SubstitutionLogged {
    pub status: &'static str,
    #[serde(flatten)]
    pub substitution: Substitution,
}

#[derive(Deserialize)]
pub struct MatchFilter {
    pub season_id: Option<i64>,
}

#[derive(Deserialize)]
pub struct PlayerFilter {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct SeriesFilter {
    pub location_id: Option<i64>,
}

// a stored series as the api shows it, with total and average filled in
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonSeries {
    pub series_id: Option<i64>,
    pub player_id: i64,
    pub match_id: i64,
    pub location_id: Option<i64>,
    pub match_date: Option<NaiveDate>,
    pub game_scores: [u16; 3],
    pub total_wood: u32,
    pub series_average: f64,
    pub strikes: Option<u16>,
    pub spares: Option<u16>,
}

impl From<&ScoreRecord> for JsonSeries {
    fn from(record: &ScoreRecord) -> Self {
        JsonSeries {
            series_id: record.series_id,
            player_id: record.player_id,
            match_id: record.match_id,
            location_id: record.location_id,
            match_date: record.match_date,
            game_scores: record.game_scores.games(),
            total_wood: record.total(),
            series_average: record.average().as_f64(),
            strikes: record.marks.strikes,
            spares: record.marks.spares,
        }
    }
}

