use serde::Serialize;

use super::classify::{count_birdies_simple, count_eagles_simple};
use super::round::{percentage, round_one_decimal};
use crate::domain::HoleRecord;

/// Cut-down per-round summary for the activity feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSummary {
    pub fairway_pct: Option<u32>,
    pub gir_pct: Option<u32>,
    /// Putts per putt-tracked HOLE. The feed card reads this as "putting
    /// average for the round", unlike the per-round normalization used on
    /// the player stats screen. The two conventions are intentionally
    /// separate operations; see `stats::round`.
    pub avg_putts: Option<f64>,
    pub birdie_count: u32,
    pub eagle_count: u32,
    pub wedge_total: Option<u32>,
}

/// Summarizes one round's holes for its feed card. Never fails; a round
/// with nothing tracked produces an all-`None`, zero-count summary.
pub fn aggregate_feed_entry(holes: &[HoleRecord]) -> FeedSummary {
    let fairway_known = holes.iter().filter(|h| h.fairway_hit.is_some()).count();
    let fairway_hits = holes
        .iter()
        .filter(|h| h.fairway_hit == Some(true))
        .count();
    let gir_hits = holes.iter().filter(|h| h.green_in_regulation).count();

    FeedSummary {
        fairway_pct: percentage(fairway_hits, fairway_known),
        gir_pct: percentage(gir_hits, holes.len()),
        avg_putts: putts_per_hole(holes),
        birdie_count: count_birdies_simple(holes),
        eagle_count: count_eagles_simple(holes),
        wedge_total: wedge_total(holes),
    }
}

fn putts_per_hole(holes: &[HoleRecord]) -> Option<f64> {
    let tracked: Vec<u32> = holes.iter().filter_map(|h| h.putts).collect();
    if tracked.is_empty() {
        return None;
    }
    let total: u32 = tracked.iter().sum();
    Some(round_one_decimal(total as f64 / tracked.len() as f64))
}

fn wedge_total(holes: &[HoleRecord]) -> Option<u32> {
    let tracked: Vec<u32> = holes.iter().filter_map(|h| h.wedge_and_in).collect();
    if tracked.is_empty() {
        return None;
    }
    Some(tracked.iter().sum())
}
