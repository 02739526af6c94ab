pub mod average;
pub mod error;
pub mod roster;
pub mod series;
pub mod substitution;

pub use average::Average;
pub use error::ValidationError;
pub use roster::{Gender, Location, Match, NewLocation, NewMatch, NewPlayer, NewTeam, Player, Team};
pub use series::{GameScores, Marks, ScoreRecord, SeriesScore, GAMES_PER_SERIES};
pub use substitution::{GameNumber, Substitution};
