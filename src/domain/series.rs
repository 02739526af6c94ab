use crate::domain::{Average, ValidationError};
use chrono::NaiveDate;
use derive_more::derive::Display;
use serde::Serialize;

pub const GAMES_PER_SERIES: usize = 3;

// a perfect game
pub const MAX_GAME_SCORE: u16 = 300;

// twelve strikes make a perfect game; ten frames allow at most ten spares
pub const MAX_STRIKES_PER_GAME: u16 = 12;
pub const MAX_SPARES_PER_GAME: u16 = 10;

/// The three game scores of a series, in the order they were bowled.
///
/// Only constructible through [`GameScores::new`], so a value of this type
/// always holds exactly three scores in `0..=300`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GameScores([u16; GAMES_PER_SERIES]);

impl GameScores {
    pub fn new(scores: &[i64]) -> Result<Self, ValidationError> {
        if scores.len() != GAMES_PER_SERIES {
            return Err(ValidationError::WrongScoreCount {
                expected: GAMES_PER_SERIES,
                found: scores.len(),
            });
        }

        let mut games = [0u16; GAMES_PER_SERIES];
        for (slot, &score) in scores.iter().enumerate() {
            games[slot] = u16::try_from(score)
                .ok()
                .filter(|value| *value <= MAX_GAME_SCORE)
                .ok_or(ValidationError::ScoreOutOfRange {
                    game: slot + 1,
                    score,
                    max: MAX_GAME_SCORE,
                })?;
        }

        Ok(Self(games))
    }

    pub fn games(&self) -> [u16; GAMES_PER_SERIES] {
        self.0
    }

    /// Total wood: every pin knocked down across the series.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&game| u32::from(game)).sum()
    }

    pub fn average(&self) -> Average {
        // count is never zero here
        Average::of(u64::from(self.total()), GAMES_PER_SERIES as u64)
            .unwrap_or(Average::from_hundredths(0))
    }

    pub fn score(&self) -> SeriesScore {
        SeriesScore {
            total: self.total(),
            average: self.average(),
        }
    }
}

/// Total and average of one series. Always derived from [`GameScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesScore {
    pub total: u32,
    pub average: Average,
}

/// Strikes and spares bowled across a series. Either count may be unrecorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Marks {
    pub strikes: Option<u16>,
    pub spares: Option<u16>,
}

impl Marks {
    pub fn new(strikes: Option<i64>, spares: Option<i64>) -> Result<Self, ValidationError> {
        Ok(Self {
            strikes: count_in_range("strikes", strikes, MAX_STRIKES_PER_GAME)?,
            spares: count_in_range("spares", spares, MAX_SPARES_PER_GAME)?,
        })
    }
}

fn count_in_range(
    mark: &'static str,
    count: Option<i64>,
    per_game: u16,
) -> Result<Option<u16>, ValidationError> {
    let Some(count) = count else {
        return Ok(None);
    };

    let max = per_game * GAMES_PER_SERIES as u16;
    u16::try_from(count)
        .ok()
        .filter(|value| *value <= max)
        .map(Some)
        .ok_or(ValidationError::MarksOutOfRange { mark, count, max })
}

/// One player's series in one match.
///
/// `location_id` and `match_date` come from the match the series was bowled
/// in and are only used for grouping. Total and average are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("series by player {} in match {}", player_id, match_id)]
pub struct ScoreRecord {
    pub series_id: Option<i64>,
    pub player_id: i64,
    pub match_id: i64,
    pub game_scores: GameScores,
    pub marks: Marks,
    pub location_id: Option<i64>,
    pub match_date: Option<NaiveDate>,
}

impl ScoreRecord {
    pub fn new(player_id: i64, match_id: i64, game_scores: GameScores) -> Self {
        Self {
            series_id: None,
            player_id,
            match_id,
            game_scores,
            marks: Marks::default(),
            location_id: None,
            match_date: None,
        }
    }

    pub fn at_location(mut self, location_id: i64) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn with_marks(mut self, marks: Marks) -> Self {
        self.marks = marks;
        self
    }

    pub fn total(&self) -> u32 {
        self.game_scores.total()
    }

    pub fn average(&self) -> Average {
        self.game_scores.average()
    }
}
