use serde::Serialize;

use super::classify::{classify, ScoreCategory};
use crate::domain::{HoleRecord, MissDirection};

/// Wedge & in subtotal; only present when at least one hole tracked it.
/// A tracked zero is reported, an untracked round is omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WedgeSummary {
    pub total: u32,
    pub tracked_holes: u32,
}

/// Score-vs-par entry for one hole, in card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleResult {
    pub hole_number: u32,
    pub category: ScoreCategory,
}

/// Derived statistics for a single round.
///
/// Percentages are `None` when no hole carried the relevant field; the UI
/// renders that as a dash, never as 0%.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStats {
    pub total_score: u32,
    pub total_putts: u32,
    pub fairway_pct: Option<u32>,
    pub gir_pct: Option<u32>,
    /// Putts per ROUND, not per hole. The player-level aggregator divides
    /// the pooled putt total by the number of rounds; keeping the same
    /// normalization here (round count 1) keeps the two screens consistent.
    /// The feed uses the per-hole convention instead, see `stats::feed`.
    pub avg_putts: f64,
    pub one_putts: u32,
    pub three_putts_or_worse: u32,
    pub miss_left_pct: Option<u32>,
    pub miss_right_pct: Option<u32>,
    pub birdie_count: u32,
    pub eagle_count: u32,
    pub wedge: Option<WedgeSummary>,
    pub score_vs_par: Vec<HoleResult>,
}

/// Shared accumulation over a pool of holes spanning `round_count` rounds.
/// Used with `round_count == 1` for a single round and with the selected
/// round count by the player-level aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct HolePoolStats {
    pub total_score: u32,
    pub total_putts: u32,
    pub fairway_pct: Option<u32>,
    pub gir_pct: Option<u32>,
    pub avg_putts: f64,
    pub one_putts: u32,
    pub three_putts_or_worse: u32,
    pub miss_left_pct: Option<u32>,
    pub miss_right_pct: Option<u32>,
    pub birdie_count: u32,
    pub eagle_count: u32,
    pub wedge_total: u32,
    pub wedge_tracked_holes: u32,
}

pub fn aggregate_hole_pool(holes: &[HoleRecord], round_count: usize) -> HolePoolStats {
    let total_score = recompute_total_score(holes);
    let total_putts: u32 = holes.iter().filter_map(|h| h.putts).sum();

    let fairway_known = holes.iter().filter(|h| h.fairway_hit.is_some()).count();
    let fairway_hits = holes
        .iter()
        .filter(|h| h.fairway_hit == Some(true))
        .count();

    // GIR is an always-defined bool, so every hole counts in the denominator
    let gir_hits = holes.iter().filter(|h| h.green_in_regulation).count();

    let misses: Vec<MissDirection> = holes
        .iter()
        .filter(|h| h.fairway_hit == Some(false))
        .filter_map(|h| h.fairway_miss)
        .collect();
    let miss_left = misses.iter().filter(|m| **m == MissDirection::Left).count();
    let miss_right = misses
        .iter()
        .filter(|m| **m == MissDirection::Right)
        .count();

    let mut birdie_count = 0;
    let mut eagle_count = 0;
    for hole in holes {
        match classify(hole.score, hole.par) {
            ScoreCategory::Birdie => birdie_count += 1,
            ScoreCategory::EagleOrBetter => eagle_count += 1,
            _ => {}
        }
    }

    let wedge_total: u32 = holes.iter().filter_map(|h| h.wedge_and_in).sum();
    let wedge_tracked_holes = holes.iter().filter(|h| h.wedge_and_in.is_some()).count() as u32;

    let avg_putts = if round_count == 0 {
        0.0
    } else {
        round_one_decimal(total_putts as f64 / round_count as f64)
    };

    HolePoolStats {
        total_score,
        total_putts,
        fairway_pct: percentage(fairway_hits, fairway_known),
        gir_pct: percentage(gir_hits, holes.len()),
        avg_putts,
        one_putts: holes.iter().filter(|h| h.putts == Some(1)).count() as u32,
        three_putts_or_worse: holes.iter().filter(|h| h.putts.is_some_and(|p| p >= 3)).count()
            as u32,
        miss_left_pct: percentage(miss_left, misses.len()),
        miss_right_pct: percentage(miss_right, misses.len()),
        birdie_count,
        eagle_count,
        wedge_total,
        wedge_tracked_holes,
    }
}

/// Derived statistics for one round. Pure and idempotent; an empty hole
/// list yields zero counts and `None` percentages.
pub fn aggregate_round(holes: &[HoleRecord]) -> RoundStats {
    let pool = aggregate_hole_pool(holes, 1);

    RoundStats {
        total_score: pool.total_score,
        total_putts: pool.total_putts,
        fairway_pct: pool.fairway_pct,
        gir_pct: pool.gir_pct,
        avg_putts: pool.avg_putts,
        one_putts: pool.one_putts,
        three_putts_or_worse: pool.three_putts_or_worse,
        miss_left_pct: pool.miss_left_pct,
        miss_right_pct: pool.miss_right_pct,
        birdie_count: pool.birdie_count,
        eagle_count: pool.eagle_count,
        wedge: wedge_summary(&pool),
        score_vs_par: score_vs_par(holes),
    }
}

pub fn wedge_summary(pool: &HolePoolStats) -> Option<WedgeSummary> {
    if pool.wedge_tracked_holes == 0 {
        return None;
    }
    Some(WedgeSummary {
        total: pool.wedge_total,
        tracked_holes: pool.wedge_tracked_holes,
    })
}

pub fn score_vs_par(holes: &[HoleRecord]) -> Vec<HoleResult> {
    holes
        .iter()
        .map(|h| HoleResult {
            hole_number: h.hole_number,
            category: classify(h.score, h.par),
        })
        .collect()
}

/// Re-derives a round's total from its hole scores. Callers run this after
/// any score edit so the stored `total_score` never drifts from the card.
pub fn recompute_total_score(holes: &[HoleRecord]) -> u32 {
    holes.iter().filter_map(|h| h.score).sum()
}

pub(crate) fn percentage(part: usize, whole: usize) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    Some((100.0 * part as f64 / whole as f64).round() as u32)
}

pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HoleRecord, MissDirection};

    fn putting_hole(hole_number: u32, putts: u32) -> HoleRecord {
        HoleRecord {
            putts: Some(putts),
            ..HoleRecord::played(hole_number, 4, 4)
        }
    }

    #[test]
    fn test_empty_round_yields_nulls_not_zeros() {
        let stats = aggregate_round(&[]);

        assert_eq!(stats.total_score, 0);
        assert_eq!(stats.total_putts, 0);
        assert_eq!(stats.fairway_pct, None);
        assert_eq!(stats.gir_pct, None);
        assert_eq!(stats.miss_left_pct, None);
        assert_eq!(stats.miss_right_pct, None);
        assert_eq!(stats.birdie_count, 0);
        assert_eq!(stats.eagle_count, 0);
        assert!(stats.wedge.is_none());
        assert!(stats.score_vs_par.is_empty());
    }

    #[test]
    fn test_fairway_pct_excludes_unknown_holes() {
        let holes = vec![
            HoleRecord {
                fairway_hit: Some(true),
                ..HoleRecord::played(1, 4, 4)
            },
            // Par 3, no fairway target: must not count as a miss
            HoleRecord {
                fairway_hit: None,
                ..HoleRecord::played(2, 3, 3)
            },
            HoleRecord {
                fairway_hit: Some(false),
                ..HoleRecord::played(3, 4, 5)
            },
        ];

        assert_eq!(aggregate_round(&holes).fairway_pct, Some(50));
    }

    #[test]
    fn test_avg_putts_is_per_round_not_per_hole() {
        let holes: Vec<HoleRecord> = (1..=18).map(|n| putting_hole(n, 2)).collect();

        let stats = aggregate_round(&holes);
        assert_eq!(stats.total_putts, 36);
        assert_eq!(stats.avg_putts, 36.0);
    }

    #[test]
    fn test_putt_counts() {
        let holes = vec![
            putting_hole(1, 1),
            putting_hole(2, 2),
            putting_hole(3, 3),
            putting_hole(4, 4),
            HoleRecord::played(5, 4, 4), // putts untracked
        ];

        let stats = aggregate_round(&holes);
        assert_eq!(stats.total_putts, 10);
        assert_eq!(stats.one_putts, 1);
        assert_eq!(stats.three_putts_or_worse, 2);
    }

    #[test]
    fn test_miss_direction_percentages() {
        let miss = |n, dir| HoleRecord {
            fairway_hit: Some(false),
            fairway_miss: Some(dir),
            ..HoleRecord::played(n, 4, 5)
        };
        let holes = vec![
            miss(1, MissDirection::Left),
            miss(2, MissDirection::Left),
            miss(3, MissDirection::Right),
            // Miss without a recorded direction stays out of the denominator
            HoleRecord {
                fairway_hit: Some(false),
                ..HoleRecord::played(4, 4, 5)
            },
            HoleRecord {
                fairway_hit: Some(true),
                ..HoleRecord::played(5, 4, 4)
            },
        ];

        let stats = aggregate_round(&holes);
        assert_eq!(stats.miss_left_pct, Some(67));
        assert_eq!(stats.miss_right_pct, Some(33));
    }

    #[test]
    fn test_birdie_and_eagle_buckets_stay_separate() {
        let holes = vec![
            HoleRecord::played(1, 4, 3),
            HoleRecord::played(2, 5, 3),
            HoleRecord::played(3, 5, 2),
            HoleRecord::played(4, 4, 4),
        ];

        let stats = aggregate_round(&holes);
        assert_eq!(stats.birdie_count, 1);
        assert_eq!(stats.eagle_count, 2);
    }

    #[test]
    fn test_wedge_section_omitted_when_untracked() {
        let untracked = vec![HoleRecord::played(1, 4, 4)];
        assert!(aggregate_round(&untracked).wedge.is_none());

        // Tracked-but-zero is reported, not omitted
        let tracked_zero = vec![HoleRecord {
            wedge_and_in: Some(0),
            ..HoleRecord::played(1, 4, 4)
        }];
        let stats = aggregate_round(&tracked_zero);
        assert_eq!(
            stats.wedge,
            Some(WedgeSummary {
                total: 0,
                tracked_holes: 1
            })
        );
    }

    #[test]
    fn test_unscored_holes_excluded_from_totals() {
        let holes = vec![
            HoleRecord::played(1, 4, 5),
            HoleRecord::unplayed(2, 4),
            HoleRecord::played(3, 3, 3),
        ];

        let stats = aggregate_round(&holes);
        assert_eq!(stats.total_score, 8);
        assert_eq!(stats.score_vs_par[1].category, ScoreCategory::Unknown);
    }

    #[test]
    fn test_recompute_matches_total_after_edit() {
        let mut holes: Vec<HoleRecord> = (1..=9).map(|n| HoleRecord::played(n, 4, 5)).collect();
        assert_eq!(recompute_total_score(&holes), 45);

        // Inline score correction in the feed
        holes[3].score = Some(4);
        assert_eq!(recompute_total_score(&holes), 44);

        // Idempotence: re-running the aggregation changes nothing
        assert_eq!(aggregate_round(&holes), aggregate_round(&holes));
    }
}
