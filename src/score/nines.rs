use crate::model::{Hole, Player};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct HolePoints {
    pub player_id: i64,
    pub points: f64,
}

/// Rank-slot allocations for however many players are still rankable on the
/// hole. The full 9-point pool is 5/3/1; with one player DNF-substituted the
/// remaining 8 points sit in 5/3 slots; with two substituted the last live
/// player takes 7.
fn slots(live: usize) -> &'static [f64] {
    match live {
        3 => &[5.0, 3.0, 1.0],
        2 => &[5.0, 3.0],
        _ => &[7.0],
    }
}

/// Net score for the nines game: gross minus one stroke when the hole is in
/// the player's nines stroke set, minus a further half stroke on a par 3
/// when that option is on. Nets may be fractional.
#[must_use]
pub fn nines_net(player: &Player, hole: &Hole, half_stroke_on_par3: bool) -> Option<f64> {
    let gross = player.usable_score(hole.number)?;
    let mut net = f64::from(gross);
    if player.stroke_holes.nines.contains(&hole.number) {
        net -= 1.0;
    }
    if half_stroke_on_par3 && hole.is_par3() {
        net -= 0.5;
    }
    Some(net)
}

/// Distributes the hole's 9 points across the three players by ascending net
/// score, tied players splitting their combined rank slots evenly:
/// distinct nets pay 5/3/1, two tied for best pay 4/4/1, two tied for worst
/// pay 5/2/2, a three-way tie pays 3 each.
///
/// Returns `None` until all three have reported (a DNF mark counts as
/// reported: that player is excluded from ranking and paid exactly 1 point,
/// with the remainder split over the live players by the same slot rules).
/// A hole with all three DNF has nothing to rank and also yields `None`.
#[must_use]
pub fn calculate_points(
    players: &[Player; 3],
    hole: &Hole,
    half_stroke_on_par3: bool,
) -> Option<Vec<HolePoints>> {
    let mut live: Vec<(i64, f64)> = Vec::new();
    let mut dnf_ids: Vec<i64> = Vec::new();
    for player in players {
        if player.is_dnf(hole.number) {
            dnf_ids.push(player.id);
        } else if let Some(net) = nines_net(player, hole, half_stroke_on_par3) {
            live.push((player.id, net));
        } else {
            return None;
        }
    }
    if live.is_empty() {
        return None;
    }

    live.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let slots = slots(live.len());
    let mut out: Vec<HolePoints> = Vec::with_capacity(3);
    let mut rank = 0;
    while rank < live.len() {
        let mut next = rank + 1;
        while next < live.len() && live[next].1 == live[rank].1 {
            next += 1;
        }
        let share = slots[rank..next].iter().sum::<f64>() / (next - rank) as f64;
        for &(player_id, _) in &live[rank..next] {
            out.push(HolePoints {
                player_id,
                points: share,
            });
        }
        rank = next;
    }
    for player_id in dnf_ids {
        out.push(HolePoints {
            player_id,
            points: 1.0,
        });
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_pools_always_rebuild_nine_points() {
        // live slots plus one fixed point per substituted player
        assert_eq!(slots(3).iter().sum::<f64>(), 9.0);
        assert_eq!(slots(2).iter().sum::<f64>() + 1.0, 9.0);
        assert_eq!(slots(1).iter().sum::<f64>() + 2.0, 9.0);
    }
}
