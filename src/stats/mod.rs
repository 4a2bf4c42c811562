pub mod classify;
pub mod feed;
pub mod player;
pub mod round;
pub mod visibility;

pub use classify::{classify, ScoreCategory};
pub use feed::{aggregate_feed_entry, FeedSummary};
pub use player::{aggregate_player, ClubDistance, PlayerStats, StatsWindow};
pub use round::{aggregate_round, recompute_total_score, RoundStats};
pub use visibility::is_visible;
