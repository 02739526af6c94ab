use thiserror::Error;

/// Malformed input rejected before anything is stored or computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a series needs exactly {expected} game scores, got {found}")]
    WrongScoreCount { expected: usize, found: usize },

    #[error("game {game} score {score} is outside 0..={max}")]
    ScoreOutOfRange { game: usize, score: i64, max: u16 },

    #[error("{count} {mark} is outside 0..={max} for a series")]
    MarksOutOfRange { mark: &'static str, count: i64, max: u16 },

    #[error("game number must be 1, 2 or 3, got {0}")]
    InvalidGameNumber(i64),

    #[error("game {game_number} of series {series_id} already has a substitution")]
    DuplicateSubstitution { series_id: i64, game_number: u8 },

    #[error("series {series_id} cannot have all of its games substituted")]
    AllGamesSubstituted { series_id: i64 },

    #[error("unknown team gender '{0}', expected Male or Female")]
    InvalidGender(String),
}
