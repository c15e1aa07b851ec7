use crate::model::{NassauMatchType, Player};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NassauStandings {
    pub front: i32,
    pub back: i32,
    pub overall: i32,
}

/// Net score for the nassau wager: gross minus one stroke when the hole sits
/// in the player's per-half stroke set. `None` when the hole is DNF or not
/// yet entered.
#[must_use]
pub fn nassau_net(player: &Player, hole_number: u8) -> Option<f64> {
    let gross = player.usable_score(hole_number)?;
    let set = if hole_number <= 9 {
        &player.stroke_holes.nassau_front
    } else {
        &player.stroke_holes.nassau_back
    };
    let stroke = i32::from(set.contains(&hole_number));
    Some(f64::from(gross - stroke))
}

/// Running match standing over `start_hole..=end_hole`, positive favoring
/// `p1`. A hole where either side has no net score is skipped entirely;
/// otherwise the lower net takes the hole. The standing is cumulative and
/// never capped; there is no concession logic.
#[must_use]
pub fn match_standing<F>(p1: &Player, p2: &Player, start_hole: u8, end_hole: u8, net: F) -> i32
where
    F: Fn(&Player, u8) -> Option<f64>,
{
    let mut standing = 0;
    for hole in start_hole..=end_hole {
        let (Some(n1), Some(n2)) = (net(p1, hole), net(p2, hole)) else {
            continue;
        };
        if n1 < n2 {
            standing += 1;
        } else if n2 < n1 {
            standing -= 1;
        }
    }
    standing
}

/// Front/back/overall standings. For [`NassauMatchType::All`] the overall is
/// an independent continuous pass over all 18 holes, which need not equal
/// front + back; for [`NassauMatchType::FrontBack`] it is defined as the
/// sum of the halves.
#[must_use]
pub fn match_standings<F>(
    p1: &Player,
    p2: &Player,
    match_type: NassauMatchType,
    net: F,
) -> NassauStandings
where
    F: Fn(&Player, u8) -> Option<f64>,
{
    let front = match_standing(p1, p2, 1, 9, &net);
    let back = match_standing(p1, p2, 10, 18, &net);
    let overall = match match_type {
        NassauMatchType::All => match_standing(p1, p2, 1, 18, &net),
        NassauMatchType::FrontBack => front + back,
    };
    NassauStandings {
        front,
        back,
        overall,
    }
}
