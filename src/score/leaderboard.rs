use crate::model::{Player, Teebox};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub player_id: i64,
    pub name: String,
    pub holes_played: usize,
    pub gross_score: i32,
    pub net_score: f64,
    pub relative_to_par: i32,
    pub position: usize,
}

/// Worst-possible tiebreak value for a player with no valid holes in the
/// window; it loses the tiebreak without upsetting the sort.
const EMPTY_WINDOW: i64 = i64::MAX;

fn window_gross(player: &Player, start: u8, end: u8) -> Option<i32> {
    let scores: Vec<i32> = (start..=end)
        .filter_map(|hole| player.usable_score(hole))
        .collect();
    if scores.is_empty() {
        None
    } else {
        Some(scores.iter().sum())
    }
}

fn back9_net(player: &Player, teebox: &Teebox) -> i64 {
    window_gross(player, 10, 18).map_or(EMPTY_WINDOW, |gross| {
        i64::from(gross)
            - (player.tournament_handicap / 2.0).floor() as i64
            - i64::from(teebox.back9_par())
    })
}

fn last6_net(player: &Player, teebox: &Teebox) -> i64 {
    window_gross(player, 13, 18).map_or(EMPTY_WINDOW, |gross| {
        i64::from(gross)
            - (player.tournament_handicap / 3.0).floor() as i64
            - i64::from(teebox.last6_par())
    })
}

/// Net-score standings over every player with at least one valid hole. Ties
/// on net break by back-9 net, then last-6 net, then gross, in that order.
#[must_use]
pub fn build_leaderboard(players: &[Player], teebox: &Teebox) -> Vec<LeaderboardEntry> {
    let course_par = teebox.course_par();

    let mut entries: Vec<(LeaderboardEntry, i64, i64)> = players
        .iter()
        .filter_map(|player| {
            let scores: Vec<i32> = (1..=18)
                .filter_map(|hole| player.usable_score(hole))
                .collect();
            if scores.is_empty() {
                return None;
            }
            let gross_score: i32 = scores.iter().sum();
            let entry = LeaderboardEntry {
                player_id: player.id,
                name: player.name.clone(),
                holes_played: scores.len(),
                gross_score,
                net_score: f64::from(gross_score) - player.tournament_handicap,
                relative_to_par: gross_score - course_par,
                position: 0,
            };
            Some((entry, back9_net(player, teebox), last6_net(player, teebox)))
        })
        .collect();

    entries.sort_by(|(a, a_back9, a_last6), (b, b_back9, b_last6)| {
        a.net_score
            .total_cmp(&b.net_score)
            .then_with(|| a_back9.cmp(b_back9))
            .then_with(|| a_last6.cmp(b_last6))
            .then_with(|| a.gross_score.cmp(&b.gross_score))
    });

    let mut board: Vec<LeaderboardEntry> = entries.into_iter().map(|(e, _, _)| e).collect();
    for (i, entry) in board.iter_mut().enumerate() {
        entry.position = i + 1;
    }
    debug!(entries = board.len(), "built leaderboard");
    board
}
