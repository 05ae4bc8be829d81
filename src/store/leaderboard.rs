//! Points leaderboard.

use serde::{Deserialize, Serialize};

use super::{Profile, UserId};
use crate::core::config::UNKNOWN_USER_NAME;

/// One row of the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position.
    pub rank: usize,
    pub user: UserId,
    pub name: String,
    pub points: i64,
}

/// Rank users by points, highest first.
///
/// Ties are ordered by user ID so the output does not depend on
/// iteration order. Empty names are shown as `UNKNOWN_USER_NAME`.
pub fn rank<'a, I>(profiles: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = (&'a UserId, &'a Profile)>,
{
    let mut rows: Vec<_> = profiles.into_iter().collect();
    rows.sort_by(|(ua, pa), (ub, pb)| pb.points.cmp(&pa.points).then_with(|| ua.cmp(ub)));

    rows.into_iter()
        .enumerate()
        .map(|(i, (user, profile))| LeaderboardEntry {
            rank: i + 1,
            user: user.clone(),
            name: if profile.name.is_empty() {
                UNKNOWN_USER_NAME.to_string()
            } else {
                profile.name.clone()
            },
            points: profile.points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_orders_by_points_desc() {
        let users = vec![
            (UserId::new("a"), Profile::named("Ana").with_points(10)),
            (UserId::new("b"), Profile::named("Bo").with_points(-4)),
            (UserId::new("c"), Profile::named("Cid").with_points(25)),
        ];

        let board = rank(users.iter().map(|(u, p)| (u, p)));
        let names: Vec<_> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Cid", "Ana", "Bo"]);
        assert_eq!(board[0].rank, 1);
        assert_eq!(board[2].rank, 3);
        assert_eq!(board[2].points, -4);
    }

    #[test]
    fn test_rank_ties_and_unknown_name() {
        let users = vec![
            (UserId::new("z"), Profile::default().with_points(5)),
            (UserId::new("m"), Profile::named("Mia").with_points(5)),
        ];

        let board = rank(users.iter().map(|(u, p)| (u, p)));
        assert_eq!(board[0].user, UserId::new("m"));
        assert_eq!(board[1].name, UNKNOWN_USER_NAME);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(std::iter::empty::<(&UserId, &Profile)>()).is_empty());
    }
}
