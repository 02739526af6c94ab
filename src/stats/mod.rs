pub mod engine;

pub use self::engine::{
    average_by_game_slot, average_by_location, compute_series, player_summary, GameSlotAverages,
    LocationAverage, PlayerSummary,
};
