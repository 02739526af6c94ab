use crate::database::SubstitutionRepository;
use crate::domain::{GameNumber, Substitution, ValidationError, GAMES_PER_SERIES};
use crate::services::ServiceResult;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Append-only log of who bowled which game in someone else's series.
///
/// A series can take at most one substitution per game and the original
/// player has to bowl at least one game. Checking those rules means reading
/// the series' existing substitutions before appending, so every record is
/// done under `writer`.
///
/// The log does not look up the series or the substitute itself; the
/// storage behind the repository rejects dangling ids.
pub struct SubstitutionLog {
    repo: Arc<dyn SubstitutionRepository>,
    writer: Mutex<()>,
}

impl SubstitutionLog {
    pub fn new(repo: Arc<dyn SubstitutionRepository>) -> Self {
        Self {
            repo,
            writer: Mutex::new(()),
        }
    }

    pub async fn record(
        &self,
        series_id: i64,
        sub_player_id: i64,
        game_number: i64,
    ) -> ServiceResult<Substitution> {
        let game_number = GameNumber::try_from(game_number)?;

        // one read-check-append cycle at a time
        let _guard = self.writer.lock().await;

        let taken: HashSet<GameNumber> = self
            .repo
            .substitutions_for_series(series_id)
            .await?
            .into_iter()
            .map(|s| s.game_number)
            .collect();

        if taken.contains(&game_number) {
            warn!(series_id, game_number = game_number.get(), "Rejected duplicate substitution");
            return Err(ValidationError::DuplicateSubstitution {
                series_id,
                game_number: game_number.get(),
            }
            .into());
        }

        if taken.len() + 1 >= GAMES_PER_SERIES {
            warn!(series_id, "Rejected substitution covering every game");
            return Err(ValidationError::AllGamesSubstituted { series_id }.into());
        }

        let mut substitution = Substitution::new(series_id, sub_player_id, game_number);
        substitution.substitution_id = Some(self.repo.insert_substitution(&substitution).await?);

        info!(%substitution, "Substitution logged");

        Ok(substitution)
    }

    pub async fn for_series(&self, series_id: i64) -> ServiceResult<Vec<Substitution>> {
        Ok(self.repo.substitutions_for_series(series_id).await?)
    }
}
