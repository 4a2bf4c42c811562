use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    FollowEdge, FollowStatus, HoleRecord, MissDirection, ModeDetail, Round, ShotRecord, Visibility,
};

#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct CourseRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct RoundRow {
    pub id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub date_played: NaiveDate,
    pub total_score: i64,
    pub visibility: String,
    pub wedge_tracking: bool,
}

impl RoundRow {
    pub fn into_domain(self, holes: Vec<HoleRecord>) -> Round {
        Round {
            id: self.id,
            player_id: self.player_id,
            course_id: self.course_id,
            date_played: self.date_played,
            total_score: self.total_score.max(0) as u32,
            visibility: Visibility::parse(&self.visibility),
            wedge_tracking: self.wedge_tracking,
            holes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HoleScoreRow {
    pub round_id: i64,
    pub hole_number: i64,
    pub par: Option<i64>,
    pub score: Option<i64>,
    pub putts: Option<i64>,
    pub fairway_hit: Option<bool>,
    pub fairway_miss: Option<String>,
    pub green_in_regulation: bool,
    pub penalties: i64,
    pub wedge_and_in: Option<i64>,
    pub mode_detail: Option<String>,
}

impl HoleScoreRow {
    pub fn into_record(self) -> HoleRecord {
        HoleRecord {
            hole_number: self.hole_number.max(0) as u32,
            par: to_count(self.par),
            // Legacy rows use 0 for "not yet entered"
            score: to_count(self.score).filter(|s| *s > 0),
            putts: to_count(self.putts),
            fairway_hit: self.fairway_hit,
            fairway_miss: self.fairway_miss.as_deref().and_then(MissDirection::parse),
            green_in_regulation: self.green_in_regulation,
            penalties: to_count(Some(self.penalties)).unwrap_or(0),
            wedge_and_in: to_count(self.wedge_and_in),
            mode_detail: parse_mode_detail(self.mode_detail.as_deref()),
        }
    }
}

/// Negative values only appear in hand-edited databases; treat them as
/// unset rather than aborting the whole aggregation.
fn to_count(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

/// Tolerant parse of the tagged JSON column. A malformed payload degrades
/// to `None` detail instead of failing the round load.
fn parse_mode_detail(raw: Option<&str>) -> ModeDetail {
    let Some(raw) = raw else {
        return ModeDetail::None;
    };
    serde_json::from_str(raw).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct ShotRow {
    pub player_id: i64,
    pub club: String,
    pub distance_yards: i64,
}

impl ShotRow {
    pub fn into_record(self) -> ShotRecord {
        ShotRecord {
            club: self.club,
            distance_yards: self.distance_yards.max(0) as u32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FollowRow {
    pub follower_id: i64,
    pub followed_id: i64,
    pub status: String,
}

impl FollowRow {
    pub fn into_edge(self) -> FollowEdge {
        FollowEdge {
            follower_id: self.follower_id,
            followed_id: self.followed_id,
            status: FollowStatus::parse(&self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(mode_detail: Option<&str>) -> HoleScoreRow {
        HoleScoreRow {
            round_id: 1,
            hole_number: 1,
            par: Some(4),
            score: Some(4),
            putts: None,
            fairway_hit: None,
            fairway_miss: None,
            green_in_regulation: false,
            penalties: 0,
            wedge_and_in: None,
            mode_detail: mode_detail.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_mode_detail_parses_tagged_json() {
        let record = row(Some(
            r#"{"mode":"advanced","shots":[{"club":"7i","distanceYards":152}]}"#,
        ))
        .into_record();

        assert_eq!(record.mode_detail.shots().len(), 1);
        assert_eq!(record.mode_detail.shots()[0].club, "7i");
    }

    #[test]
    fn test_malformed_mode_detail_degrades_to_none() {
        let record = row(Some("{not json")).into_record();
        assert_eq!(record.mode_detail, ModeDetail::None);
    }

    #[test]
    fn test_zero_score_loads_as_unset() {
        let mut legacy = row(None);
        legacy.score = Some(0);
        assert_eq!(legacy.into_record().score, None);
    }
}
