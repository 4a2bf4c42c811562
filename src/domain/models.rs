use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One hole played within one round.
///
/// `score` is `None` until the player enters it; aggregations that assume a
/// completed hole skip `None` scores instead of treating them as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleRecord {
    pub hole_number: u32,
    pub par: Option<u32>,
    pub score: Option<u32>,
    pub putts: Option<u32>,
    /// `None` means "no fairway target" (par 3), not a miss.
    pub fairway_hit: Option<bool>,
    pub fairway_miss: Option<MissDirection>,
    pub green_in_regulation: bool,
    pub penalties: u32,
    /// `None` means the round did not track wedge & in on this hole,
    /// distinct from a tracked zero.
    pub wedge_and_in: Option<u32>,
    pub mode_detail: ModeDetail,
}

impl HoleRecord {
    /// A hole with a recorded score and no optional tracking.
    pub fn played(hole_number: u32, par: u32, score: u32) -> Self {
        Self {
            hole_number,
            par: Some(par),
            score: Some(score),
            putts: None,
            fairway_hit: None,
            fairway_miss: None,
            green_in_regulation: false,
            penalties: 0,
            wedge_and_in: None,
            mode_detail: ModeDetail::None,
        }
    }

    /// A hole that exists on the card but has no score entered yet.
    pub fn unplayed(hole_number: u32, par: u32) -> Self {
        Self {
            score: None,
            ..Self::played(hole_number, par, 0)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissDirection {
    Left,
    Right,
}

impl MissDirection {
    pub fn as_str(&self) -> &str {
        match self {
            MissDirection::Left => "left",
            MissDirection::Right => "right",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(MissDirection::Left),
            "right" => Some(MissDirection::Right),
            _ => None,
        }
    }
}

/// Mode-specific detail attached to a hole. Stored as tagged JSON in the
/// `hole_scores.mode_detail` column; aggregation only reads the `Advanced`
/// variant's shot list, the rest is carried opaquely for the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum ModeDetail {
    #[default]
    None,
    Advanced {
        shots: Vec<ShotRecord>,
    },
    Strategy {
        target: Option<String>,
        notes: Option<String>,
    },
    Mental {
        focus: Option<String>,
        notes: Option<String>,
    },
}

impl ModeDetail {
    pub fn shots(&self) -> &[ShotRecord] {
        match self {
            ModeDetail::Advanced { shots } => shots,
            _ => &[],
        }
    }
}

/// A single shot, as recorded in advanced-shot mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    pub club: String,
    pub distance_yards: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Partners,
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &str {
        match self {
            Visibility::Private => "private",
            Visibility::Partners => "partners",
            Visibility::Public => "public",
        }
    }

    /// Unrecognized values fall back to private rather than leaking a round.
    pub fn parse(value: &str) -> Self {
        match value {
            "public" => Visibility::Public,
            "partners" => Visibility::Partners,
            _ => Visibility::Private,
        }
    }
}

/// One played round: an ordered set of hole records for one player on one
/// course. `total_score` is stored redundantly and must equal the sum of
/// recorded hole scores after any edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub date_played: NaiveDate,
    pub total_score: u32,
    pub visibility: Visibility,
    pub wedge_tracking: bool,
    pub holes: Vec<HoleRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FollowStatus {
    Pending,
    Accepted,
}

impl FollowStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FollowStatus::Pending => "pending",
            FollowStatus::Accepted => "accepted",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "accepted" => FollowStatus::Accepted,
            _ => FollowStatus::Pending,
        }
    }
}

/// Directed follow relationship between two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowEdge {
    pub follower_id: i64,
    pub followed_id: i64,
    pub status: FollowStatus,
}

// --- Scorecard export file structures ---
//
// The `import` command consumes a JSON export of logged rounds; shapes
// mirror what the mobile client writes out.

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorecardExport {
    #[serde(default)]
    pub players: Vec<PlayerExport>,
    pub rounds: Vec<RoundExport>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerExport {
    pub name: String,
    #[serde(default)]
    pub follows: Vec<FollowExport>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowExport {
    pub followed: String,
    pub status: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundExport {
    pub player: String,
    pub course: String,
    pub date_played: NaiveDate,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub wedge_tracking: bool,
    pub holes: Vec<HoleExport>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleExport {
    pub hole_number: u32,
    #[serde(default)]
    pub par: Option<u32>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub putts: Option<u32>,
    #[serde(default)]
    pub fairway_hit: Option<bool>,
    #[serde(default)]
    pub fairway_miss: Option<String>,
    #[serde(default)]
    pub green_in_regulation: bool,
    #[serde(default)]
    pub penalties: u32,
    #[serde(default)]
    pub wedge_and_in: Option<u32>,
    #[serde(default)]
    pub mode_detail: Option<ModeDetail>,
}

impl HoleExport {
    pub fn into_record(self) -> HoleRecord {
        HoleRecord {
            hole_number: self.hole_number,
            par: self.par,
            // Older exports store 0 for "not yet entered"
            score: self.score.filter(|s| *s > 0),
            putts: self.putts,
            fairway_hit: self.fairway_hit,
            fairway_miss: self.fairway_miss.as_deref().and_then(MissDirection::parse),
            green_in_regulation: self.green_in_regulation,
            penalties: self.penalties,
            wedge_and_in: self.wedge_and_in,
            mode_detail: self.mode_detail.unwrap_or_default(),
        }
    }
}
