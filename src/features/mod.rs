pub mod error;
pub mod model;
pub mod player_stats;
pub mod roster;
pub mod series;
pub mod substitutions;

use crate::AppState;
use axum::Router;

// api router, where features are composed. mounted under /api by main
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/series", series::series_router())
        .nest("/player_stats", player_stats::player_stats_router())
        .nest("/substitution", substitutions::substitutions_router())
        .merge(roster::roster_router())
}
