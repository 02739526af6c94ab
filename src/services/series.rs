use crate::database::SeriesRepository;
use crate::domain::{Average, GameScores, Marks, ScoreRecord};
use crate::services::ServiceResult;
use crate::stats::{self, GameSlotAverages, LocationAverage, PlayerSummary};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// What the caller gets back after submitting three scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesReceipt {
    pub series_id: i64,
    pub player_id: i64,
    pub match_id: i64,
    pub total_wood: u32,
    pub series_average: Average,
    #[serde(flatten)]
    pub marks: Marks,
}

// records series and answers stats questions by feeding stored series
// through the stats engine. holds no state of its own besides the repository.
pub struct SeriesService {
    repo: Arc<dyn SeriesRepository>,
}

impl SeriesService {
    pub fn new(repo: Arc<dyn SeriesRepository>) -> Self {
        Self { repo }
    }

    /// Validates and stores one series, returning the computed total and average.
    pub async fn submit(
        &self,
        player_id: i64,
        match_id: i64,
        game_scores: &[i64],
        marks: Marks,
    ) -> ServiceResult<SeriesReceipt> {
        let games = GameScores::new(game_scores)?;
        let score = games.score();

        let record = ScoreRecord::new(player_id, match_id, games).with_marks(marks);
        let series_id = self.repo.insert_series(&record).await?;

        info!(
            series_id,
            player_id,
            match_id,
            total_wood = score.total,
            series_average = %score.average,
            "Series recorded"
        );

        Ok(SeriesReceipt {
            series_id,
            player_id,
            match_id,
            total_wood: score.total,
            series_average: score.average,
            marks,
        })
    }

    pub async fn get(&self, series_id: i64) -> ServiceResult<Option<ScoreRecord>> {
        Ok(self.repo.get_series(series_id).await?)
    }

    pub async fn series_for_player(&self, player_id: i64) -> ServiceResult<Vec<ScoreRecord>> {
        let records = self.repo.series_for_player(player_id).await?;
        debug!(player_id, count = records.len(), "Loaded series for player");
        Ok(records)
    }

    /// A player's series, optionally only those bowled at one location.
    pub async fn series_at(
        &self,
        player_id: i64,
        location_id: Option<i64>,
    ) -> ServiceResult<Vec<ScoreRecord>> {
        let mut records = self.series_for_player(player_id).await?;
        if let Some(location_id) = location_id {
            records.retain(|record| record.location_id == Some(location_id));
        }
        Ok(records)
    }

    pub async fn location_averages(&self, player_id: i64) -> ServiceResult<Vec<LocationAverage>> {
        let records = self.series_for_player(player_id).await?;
        Ok(stats::average_by_location(&records, player_id))
    }

    pub async fn game_averages(&self, player_id: i64) -> ServiceResult<GameSlotAverages> {
        let records = self.series_for_player(player_id).await?;
        Ok(stats::average_by_game_slot(&records, player_id))
    }

    pub async fn summary(&self, player_id: i64) -> ServiceResult<PlayerSummary> {
        let records = self.series_for_player(player_id).await?;
        Ok(stats::player_summary(&records, player_id))
    }
}
