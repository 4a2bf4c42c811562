use chrono::NaiveDate;
use serde::Serialize;

use super::round::{
    aggregate_hole_pool, round_one_decimal, score_vs_par, HoleResult,
};
use crate::config::settings::StatsSettings;
use crate::domain::{HoleRecord, Round, ShotRecord};

/// Recency scope for player statistics: every round, or the N most
/// recently played ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsWindow {
    All,
    LastN(usize),
}

impl StatsWindow {
    /// Parses the query-string form (`all` or a round count). Whether a
    /// given count is offered is the API layer's concern.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(StatsWindow::All);
        }
        match value.parse::<usize>() {
            Ok(n) if n > 0 => Some(StatsWindow::LastN(n)),
            _ => None,
        }
    }
}

/// Average carry per club, pooled across all of a player's recorded shots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDistance {
    pub club: String,
    pub avg_distance: u32,
    pub shot_count: u32,
}

/// Per-round projection for the "recent rounds" list. Presentation data,
/// but produced here because it shares the per-round hole grouping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentRound {
    pub round_id: i64,
    pub date_played: NaiveDate,
    pub total_score: u32,
    pub score_vs_par: Vec<HoleResult>,
    pub wedge_total: Option<u32>,
}

/// Cross-round statistics for one player over a recency window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub round_count: usize,
    pub avg_score: Option<f64>,
    /// Putts per round played, same normalization as `RoundStats::avg_putts`.
    pub avg_putts: f64,
    /// Per-round rates render as "0.0" when no rounds exist, never a dash.
    pub one_putts_per_round: f64,
    pub three_putts_per_round: f64,
    pub fairway_pct: Option<u32>,
    pub gir_pct: Option<u32>,
    pub miss_left_pct: Option<u32>,
    pub miss_right_pct: Option<u32>,
    pub birdie_count: u32,
    pub eagle_count: u32,
    pub club_distances: Vec<ClubDistance>,
    pub recent_rounds: Vec<RecentRound>,
}

/// Aggregates a player's rounds over the requested window, pooling the
/// selected holes through the same per-field formulas as the round
/// aggregator. `shot_pool` is the player's full shot history, independent
/// of round boundaries.
pub fn aggregate_player(
    rounds: &[Round],
    window: StatsWindow,
    shot_pool: &[ShotRecord],
    settings: &StatsSettings,
) -> PlayerStats {
    let ordered = order_by_date_played(rounds);
    let selected = apply_window(&ordered, window);
    let round_count = selected.len();

    let holes: Vec<HoleRecord> = selected
        .iter()
        .flat_map(|r| r.holes.iter().cloned())
        .collect();
    let pool = aggregate_hole_pool(&holes, round_count);

    PlayerStats {
        round_count,
        avg_score: average_score(&selected),
        avg_putts: pool.avg_putts,
        one_putts_per_round: per_round_rate(pool.one_putts, round_count),
        three_putts_per_round: per_round_rate(pool.three_putts_or_worse, round_count),
        fairway_pct: pool.fairway_pct,
        gir_pct: pool.gir_pct,
        miss_left_pct: pool.miss_left_pct,
        miss_right_pct: pool.miss_right_pct,
        birdie_count: pool.birdie_count,
        eagle_count: pool.eagle_count,
        club_distances: club_distances(shot_pool),
        recent_rounds: recent_rounds(&ordered, settings.recent_rounds_limit),
    }
}

fn order_by_date_played(rounds: &[Round]) -> Vec<Round> {
    let mut ordered = rounds.to_vec();
    ordered.sort_by_key(|r| r.date_played);
    ordered
}

/// "Last N" is the suffix of the date-ascending list.
fn apply_window(ordered: &[Round], window: StatsWindow) -> Vec<Round> {
    match window {
        StatsWindow::All => ordered.to_vec(),
        StatsWindow::LastN(n) => {
            let start = ordered.len().saturating_sub(n);
            ordered[start..].to_vec()
        }
    }
}

fn average_score(selected: &[Round]) -> Option<f64> {
    if selected.is_empty() {
        return None;
    }
    let total: u32 = selected.iter().map(|r| r.total_score).sum();
    Some(round_one_decimal(total as f64 / selected.len() as f64))
}

fn per_round_rate(count: u32, round_count: usize) -> f64 {
    if round_count == 0 {
        return 0.0;
    }
    round_one_decimal(count as f64 / round_count as f64)
}

struct ClubAccumulator {
    club: String,
    total_yards: u64,
    shot_count: u32,
}

/// Groups shots by exact club label (no case folding or synonym mapping)
/// and averages their distances. Shots with a blank club or non-positive
/// distance are excluded. Ties on average distance keep first-seen club
/// order (stable sort over insertion order).
pub fn club_distances(shot_pool: &[ShotRecord]) -> Vec<ClubDistance> {
    let mut clubs: Vec<ClubAccumulator> = Vec::new();

    for shot in shot_pool {
        if shot.club.is_empty() || shot.distance_yards == 0 {
            continue;
        }
        match clubs.iter_mut().find(|c| c.club == shot.club) {
            Some(acc) => {
                acc.total_yards += shot.distance_yards as u64;
                acc.shot_count += 1;
            }
            None => clubs.push(ClubAccumulator {
                club: shot.club.clone(),
                total_yards: shot.distance_yards as u64,
                shot_count: 1,
            }),
        }
    }

    let mut distances: Vec<ClubDistance> = clubs
        .into_iter()
        .map(|acc| ClubDistance {
            club: acc.club,
            avg_distance: (acc.total_yards as f64 / acc.shot_count as f64).round() as u32,
            shot_count: acc.shot_count,
        })
        .collect();

    distances.sort_by(|a, b| b.avg_distance.cmp(&a.avg_distance));
    distances
}

/// The most recent rounds for the profile list, newest first, capped at
/// `limit`. Always drawn from the full history regardless of the
/// statistics window.
fn recent_rounds(ordered: &[Round], limit: usize) -> Vec<RecentRound> {
    ordered
        .iter()
        .rev()
        .take(limit)
        .map(|round| RecentRound {
            round_id: round.id,
            date_played: round.date_played,
            total_score: round.total_score,
            score_vs_par: score_vs_par(&round.holes),
            wedge_total: round_wedge_total(&round.holes),
        })
        .collect()
}

fn round_wedge_total(holes: &[HoleRecord]) -> Option<u32> {
    let tracked: Vec<u32> = holes.iter().filter_map(|h| h.wedge_and_in).collect();
    if tracked.is_empty() {
        return None;
    }
    Some(tracked.iter().sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HoleRecord, Visibility};

    fn settings() -> StatsSettings {
        StatsSettings::default()
    }

    fn round_on(id: i64, date: &str, total_score: u32, holes: Vec<HoleRecord>) -> Round {
        Round {
            id,
            player_id: 1,
            course_id: 1,
            date_played: date.parse().unwrap(),
            total_score,
            visibility: Visibility::Private,
            wedge_tracking: false,
            holes,
        }
    }

    fn shot(club: &str, distance_yards: u32) -> ShotRecord {
        ShotRecord {
            club: club.to_string(),
            distance_yards,
        }
    }

    #[test]
    fn test_window_selects_suffix_of_date_ordered_rounds() {
        // Shuffled input; dates 2026-03-01 .. 2026-03-12
        let mut rounds: Vec<Round> = (1..=12)
            .map(|i| round_on(i, &format!("2026-03-{i:02}"), 70 + i as u32, vec![]))
            .collect();
        rounds.swap(0, 11);
        rounds.swap(3, 7);

        let stats = aggregate_player(&rounds, StatsWindow::LastN(5), &[], &settings());

        assert_eq!(stats.round_count, 5);
        // Rounds 8..=12 scored 78..=82, average 80.0
        assert_eq!(stats.avg_score, Some(80.0));
    }

    #[test]
    fn test_window_larger_than_history_takes_everything() {
        let rounds = vec![
            round_on(1, "2026-01-01", 80, vec![]),
            round_on(2, "2026-01-02", 90, vec![]),
        ];
        let stats = aggregate_player(&rounds, StatsWindow::LastN(25), &[], &settings());
        assert_eq!(stats.round_count, 2);
        assert_eq!(stats.avg_score, Some(85.0));
    }

    #[test]
    fn test_no_rounds_gives_zero_rates_and_null_average() {
        let stats = aggregate_player(&[], StatsWindow::All, &[], &settings());

        assert_eq!(stats.round_count, 0);
        assert_eq!(stats.avg_score, None);
        // Per-round rates display as 0.0, not as a dash
        assert_eq!(stats.avg_putts, 0.0);
        assert_eq!(stats.one_putts_per_round, 0.0);
        assert_eq!(stats.three_putts_per_round, 0.0);
        assert_eq!(stats.fairway_pct, None);
        assert_eq!(stats.gir_pct, None);
    }

    #[test]
    fn test_putts_normalized_per_round() {
        let putting_round = |id, date: &str| {
            let holes: Vec<HoleRecord> = (1..=18)
                .map(|n| HoleRecord {
                    putts: Some(2),
                    ..HoleRecord::played(n, 4, 4)
                })
                .collect();
            round_on(id, date, 72, holes)
        };
        let rounds = vec![
            putting_round(1, "2026-04-01"),
            putting_round(2, "2026-04-08"),
        ];

        let stats = aggregate_player(&rounds, StatsWindow::All, &[], &settings());
        // 72 putts over 2 rounds
        assert_eq!(stats.avg_putts, 36.0);
        assert_eq!(stats.one_putts_per_round, 0.0);
    }

    #[test]
    fn test_club_distance_aggregation() {
        let shots = vec![
            shot("7i", 150),
            shot("7i", 160),
            shot("Driver", 0), // non-positive distance, excluded
        ];

        let distances = club_distances(&shots);
        assert_eq!(distances.len(), 1);
        assert_eq!(distances[0].club, "7i");
        assert_eq!(distances[0].avg_distance, 155);
        assert_eq!(distances[0].shot_count, 2);
    }

    #[test]
    fn test_club_distances_sorted_descending_with_stable_ties() {
        let shots = vec![
            shot("PW", 120),
            shot("9i", 135),
            shot("Gap", 120),
            shot("Driver", 250),
            shot("", 200), // blank club, excluded
        ];

        let clubs: Vec<String> = club_distances(&shots).into_iter().map(|c| c.club).collect();
        // PW and Gap tie at 120; PW was seen first and stays ahead
        assert_eq!(clubs, vec!["Driver", "9i", "PW", "Gap"]);
    }

    #[test]
    fn test_club_labels_not_normalized() {
        let shots = vec![shot("driver", 240), shot("Driver", 260)];
        let distances = club_distances(&shots);
        assert_eq!(distances.len(), 2);
    }

    #[test]
    fn test_recent_rounds_capped_and_newest_first() {
        let rounds: Vec<Round> = (1..=12)
            .map(|i| {
                round_on(
                    i,
                    &format!("2026-05-{i:02}"),
                    70,
                    vec![HoleRecord::played(1, 4, 4)],
                )
            })
            .collect();

        // Narrow stats window must not shrink the recent-rounds list
        let stats = aggregate_player(&rounds, StatsWindow::LastN(3), &[], &settings());

        assert_eq!(stats.recent_rounds.len(), 10);
        assert_eq!(stats.recent_rounds[0].round_id, 12);
        assert_eq!(stats.recent_rounds[9].round_id, 3);
    }

    #[test]
    fn test_recent_round_wedge_subtotal_null_when_untracked() {
        let tracked = round_on(
            1,
            "2026-06-01",
            72,
            vec![
                HoleRecord {
                    wedge_and_in: Some(2),
                    ..HoleRecord::played(1, 4, 4)
                },
                HoleRecord {
                    wedge_and_in: Some(0),
                    ..HoleRecord::played(2, 4, 4)
                },
            ],
        );
        let untracked = round_on(2, "2026-06-02", 72, vec![HoleRecord::played(1, 4, 4)]);

        let stats = aggregate_player(&[tracked, untracked], StatsWindow::All, &[], &settings());
        assert_eq!(stats.recent_rounds[0].wedge_total, None);
        assert_eq!(stats.recent_rounds[1].wedge_total, Some(2));
    }
}
