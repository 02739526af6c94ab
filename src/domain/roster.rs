use crate::domain::ValidationError;
use chrono::NaiveDate;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// teams are split into a boys' and a girls' side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidGender(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("{} ({})", name, gender)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("{} {}", first_name, last_name)]
pub struct Player {
    pub player_id: i64,
    pub team_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub graduation_year: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub team_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub graduation_year: Option<i32>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("{}", name)]
pub struct Location {
    pub location_id: i64,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewLocation {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Serialize)]
#[display("match {} on {}", match_id, match_date)]
pub struct Match {
    pub match_id: i64,
    pub season_id: Option<i64>,
    pub location_id: i64,
    pub match_date: NaiveDate,
    pub opponent_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMatch {
    pub season_id: Option<i64>,
    pub location_id: i64,
    pub match_date: NaiveDate,
    pub opponent_name: Option<String>,
}
