use crate::domain::{FollowEdge, FollowStatus, Round, Visibility};

/// Whether `viewer_id` may see `round` in the feed.
///
/// Partners visibility requires only that the viewer follows the owner
/// with an accepted request; the owner does not have to follow back. The
/// asymmetry is inherited behavior and kept as-is pending product review.
pub fn is_visible(round: &Round, viewer_id: i64, edges: &[FollowEdge]) -> bool {
    if round.player_id == viewer_id {
        return true;
    }
    match round.visibility {
        Visibility::Public => true,
        Visibility::Private => false,
        Visibility::Partners => follows_accepted(edges, viewer_id, round.player_id),
    }
}

fn follows_accepted(edges: &[FollowEdge], follower_id: i64, followed_id: i64) -> bool {
    edges.iter().any(|e| {
        e.follower_id == follower_id
            && e.followed_id == followed_id
            && e.status == FollowStatus::Accepted
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_owned_by(player_id: i64, visibility: Visibility) -> Round {
        Round {
            id: 1,
            player_id,
            course_id: 1,
            date_played: "2026-07-01".parse().unwrap(),
            total_score: 72,
            visibility,
            wedge_tracking: false,
            holes: vec![],
        }
    }

    fn edge(follower_id: i64, followed_id: i64, status: FollowStatus) -> FollowEdge {
        FollowEdge {
            follower_id,
            followed_id,
            status,
        }
    }

    #[test]
    fn test_owner_always_sees_own_round() {
        let round = round_owned_by(1, Visibility::Private);
        assert!(is_visible(&round, 1, &[]));
    }

    #[test]
    fn test_private_hidden_from_everyone_else() {
        let round = round_owned_by(1, Visibility::Private);
        let edges = [edge(2, 1, FollowStatus::Accepted)];
        assert!(!is_visible(&round, 2, &edges));
    }

    #[test]
    fn test_public_visible_without_any_edge() {
        let round = round_owned_by(1, Visibility::Public);
        assert!(is_visible(&round, 99, &[]));
    }

    #[test]
    fn test_partners_visible_on_one_directional_accepted_follow() {
        // B follows A; A does not follow B back. Still visible to B.
        let round = round_owned_by(1, Visibility::Partners);
        let edges = [edge(2, 1, FollowStatus::Accepted)];
        assert!(is_visible(&round, 2, &edges));
    }

    #[test]
    fn test_partners_hidden_when_follow_pending() {
        let round = round_owned_by(1, Visibility::Partners);
        let edges = [edge(2, 1, FollowStatus::Pending)];
        assert!(!is_visible(&round, 2, &edges));
    }

    #[test]
    fn test_partners_hidden_when_only_owner_follows_viewer() {
        // Edge points the wrong way: owner follows viewer
        let round = round_owned_by(1, Visibility::Partners);
        let edges = [edge(1, 2, FollowStatus::Accepted)];
        assert!(!is_visible(&round, 2, &edges));
    }
}
