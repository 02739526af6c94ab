use crate::domain::{ValidationError, GAMES_PER_SERIES};
use derive_more::derive::Display;
use serde::Serialize;

/// Which game of a series (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize)]
#[serde(transparent)]
pub struct GameNumber(u8);

impl GameNumber {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for GameNumber {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(game) if game >= 1 && usize::from(game) <= GAMES_PER_SERIES => Ok(Self(game)),
            _ => Err(ValidationError::InvalidGameNumber(value)),
        }
    }
}

/// `sub_player_id` bowled `game_number` in place of the series' own player.
#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("player {} subbed into game {} of series {}", sub_player_id, game_number, series_id)]
pub struct Substitution {
    pub substitution_id: Option<i64>,
    pub series_id: i64,
    pub sub_player_id: i64,
    pub game_number: GameNumber,
}

impl Substitution {
    pub fn new(series_id: i64, sub_player_id: i64, game_number: GameNumber) -> Self {
        Self {
            substitution_id: None,
            series_id,
            sub_player_id,
            game_number,
        }
    }
}
