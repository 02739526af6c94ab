//! Bowling statistics over series records.
//!
//! Everything here is a pure function of its arguments. Callers load the
//! records from whatever storage they use and pass them in; nothing is
//! cached between calls.

use crate::domain::{Average, GameScores, ScoreRecord, SeriesScore, ValidationError, GAMES_PER_SERIES};
use serde::Serialize;
use std::collections::HashMap;

/// Validates three raw game scores and returns the series total and average.
pub fn compute_series(game_scores: &[i64]) -> Result<SeriesScore, ValidationError> {
    GameScores::new(game_scores).map(|games| games.score())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationAverage {
    pub location_id: i64,
    pub average_at_location: Average,
    pub series_played: u32,
}

/// A player's series average at each location, in order of first appearance.
///
/// The location average is the mean of the (already rounded) series
/// averages bowled there. Series with no known location are skipped.
pub fn average_by_location(records: &[ScoreRecord], player_id: i64) -> Vec<LocationAverage> {
    // (location_id, sum of series averages in hundredths, series count)
    let mut groups: Vec<(i64, u64, u32)> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.player_id == player_id) {
        let Some(location_id) = record.location_id else {
            continue;
        };

        let slot = *index.entry(location_id).or_insert_with(|| {
            groups.push((location_id, 0, 0));
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.1 += record.average().hundredths();
        group.2 += 1;
    }

    groups
        .into_iter()
        .filter_map(|(location_id, sum, count)| {
            Average::of_hundredths(sum, u64::from(count)).map(|average_at_location| LocationAverage {
                location_id,
                average_at_location,
                series_played: count,
            })
        })
        .collect()
}

/// Per-game-slot averages. `None` means the player has no series at all,
/// which is not the same thing as averaging zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSlotAverages {
    #[serde(rename = "1")]
    pub game_1: Option<Average>,
    #[serde(rename = "2")]
    pub game_2: Option<Average>,
    #[serde(rename = "3")]
    pub game_3: Option<Average>,
}

pub fn average_by_game_slot(records: &[ScoreRecord], player_id: i64) -> GameSlotAverages {
    let mut sums = [0u64; GAMES_PER_SERIES];
    let mut count = 0u64;

    for record in records.iter().filter(|r| r.player_id == player_id) {
        for (sum, game) in sums.iter_mut().zip(record.game_scores.games()) {
            *sum += u64::from(game);
        }
        count += 1;
    }

    GameSlotAverages {
        game_1: Average::of(sums[0], count),
        game_2: Average::of(sums[1], count),
        game_3: Average::of(sums[2], count),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub player_id: i64,
    pub series_played: u32,
    pub total_wood: u64,
    /// Mean single-game score across the season.
    pub season_average: Option<Average>,
    pub high_game: Option<u16>,
    pub high_series: Option<u32>,
    /// Sums over the series that recorded them. Unrecorded counts add nothing.
    pub total_strikes: u32,
    pub total_spares: u32,
}

pub fn player_summary(records: &[ScoreRecord], player_id: i64) -> PlayerSummary {
    let mut summary = PlayerSummary {
        player_id,
        series_played: 0,
        total_wood: 0,
        season_average: None,
        high_game: None,
        high_series: None,
        total_strikes: 0,
        total_spares: 0,
    };

    for record in records.iter().filter(|r| r.player_id == player_id) {
        let total = record.total();
        let best_game = record.game_scores.games().into_iter().max();

        summary.series_played += 1;
        summary.total_wood += u64::from(total);
        summary.high_series = summary.high_series.max(Some(total));
        summary.high_game = summary.high_game.max(best_game);
        summary.total_strikes += u32::from(record.marks.strikes.unwrap_or(0));
        summary.total_spares += u32::from(record.marks.spares.unwrap_or(0));
    }

    let games_bowled = u64::from(summary.series_played) * GAMES_PER_SERIES as u64;
    summary.season_average = Average::of(summary.total_wood, games_bowled);

    summary
}
