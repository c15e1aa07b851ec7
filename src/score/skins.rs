use crate::model::{Hole, Player, PotOverride, SkinsSettings, Teebox};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SkinResult {
    pub hole: u8,
    pub score: f64,
}

/// Net score used only for handicap-pool comparison: a full stroke when the
/// player's differential over the group's lowest reaches the hole's rating,
/// and a further half stroke on a par 3 when that option is on. Fractional
/// nets never leak into display rounding elsewhere.
#[must_use]
pub fn handicap_net_score(
    player_handicap: f64,
    lowest_in_group: f64,
    hole: &Hole,
    gross_score: i32,
    half_stroke_on_par3: bool,
) -> f64 {
    let differential = player_handicap - lowest_in_group;
    let mut net = f64::from(gross_score);
    if differential >= f64::from(hole.handicap_rating) {
        net -= 1.0;
    }
    if half_stroke_on_par3 && hole.is_par3() {
        net -= 0.5;
    }
    net
}

/// Skin winners for one pool, keyed by player id. A skin goes to a strict
/// single minimum; any tie voids the hole. A hole is skipped while any
/// participant still has an unentered, non-DNF score, so mid-round output
/// stays stable as scores arrive; DNF players never block the rest.
#[must_use]
pub fn pool_skins(
    players: &[Player],
    teebox: &Teebox,
    use_scratch: bool,
    half_stroke_on_par3: bool,
) -> BTreeMap<i64, Vec<SkinResult>> {
    let field: Vec<&Player> = players
        .iter()
        .filter(|p| p.skins_pool.includes(use_scratch))
        .collect();

    let mut winners: BTreeMap<i64, Vec<SkinResult>> = BTreeMap::new();
    if field.is_empty() {
        return winners;
    }

    let lowest = field
        .iter()
        .map(|p| p.tournament_handicap)
        .fold(f64::INFINITY, f64::min);

    for hole in &teebox.holes {
        if field.iter().any(|p| p.is_unreported(hole.number)) {
            continue;
        }

        let scores: Vec<(i64, f64)> = field
            .iter()
            .filter_map(|p| {
                let gross = p.usable_score(hole.number)?;
                let score = if use_scratch {
                    f64::from(gross)
                } else {
                    handicap_net_score(
                        p.tournament_handicap,
                        lowest,
                        hole,
                        gross,
                        half_stroke_on_par3,
                    )
                };
                Some((p.id, score))
            })
            .collect();

        let Some(&(_, best)) = scores
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1))
        else {
            continue;
        };
        let mut at_best = scores.iter().filter(|&&(_, s)| s == best);
        let Some(&(winner, _)) = at_best.next() else {
            continue;
        };
        if at_best.next().is_some() {
            continue; // tie voids the skin
        }

        winners.entry(winner).or_default().push(SkinResult {
            hole: hole.number,
            score: best,
        });
    }
    winners
}

/// Pot for a pool: the manual override when armed, otherwise heads times
/// buy-in.
#[must_use]
pub fn pot_size(participants: usize, buy_in_per_player: i64, manual_override: &PotOverride) -> i64 {
    if manual_override.enabled {
        manual_override.amount
    } else {
        participants as i64 * buy_in_per_player
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PotStats {
    pub total_skins: usize,
    pub base_skin_value: i64,
    pub residual_amount: i64,
}

#[must_use]
pub fn pot_stats(pot_size: i64, total_skins: usize) -> PotStats {
    if total_skins == 0 {
        return PotStats::default();
    }
    let base_skin_value = pot_size / total_skins as i64;
    PotStats {
        total_skins,
        base_skin_value,
        residual_amount: pot_size - base_skin_value * total_skins as i64,
    }
}

/// Per-skin dollar values, descending. The residual is concentrated into
/// whole-unit bumps on the first (highest) skins rather than split
/// fractionally: `residual_amount` skins pay base + 1, the rest pay base.
#[must_use]
pub fn skin_values(pot_size: i64, total_skins: usize) -> Vec<i64> {
    let stats = pot_stats(pot_size, total_skins);
    (0..total_skins)
        .map(|rank| {
            if (rank as i64) < stats.residual_amount {
                stats.base_skin_value + 1
            } else {
                stats.base_skin_value
            }
        })
        .collect()
}

/// Hands the descending value list out with the fewest-skins winners served
/// first, so rarer skins land on the higher-value slots. Equal skin counts
/// are ordered by ascending player id to keep output deterministic. The
/// assigned totals always sum to the value list exactly.
#[must_use]
pub fn distribute_skin_values(
    players: &[(i64, usize)],
    skin_values: &[i64],
) -> Vec<(i64, i64)> {
    let mut order: Vec<(i64, usize)> = players.to_vec();
    order.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut remaining = skin_values.iter();
    order
        .into_iter()
        .map(|(player_id, skin_count)| {
            (player_id, remaining.by_ref().take(skin_count).sum::<i64>())
        })
        .collect()
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PoolPayouts {
    pub skins: BTreeMap<i64, Vec<SkinResult>>,
    pub pot: i64,
    pub stats: PotStats,
    pub earnings: Vec<(i64, i64)>,
}

/// Full pool resolution: detect skins, size the pot, and distribute values.
#[must_use]
pub fn pool_payouts(
    players: &[Player],
    teebox: &Teebox,
    use_scratch: bool,
    settings: &SkinsSettings,
) -> PoolPayouts {
    let skins = pool_skins(players, teebox, use_scratch, settings.half_stroke_on_par3);
    let participants = players
        .iter()
        .filter(|p| p.skins_pool.includes(use_scratch))
        .count();
    let manual_override = if use_scratch {
        &settings.scratch_pot_override
    } else {
        &settings.handicap_pot_override
    };
    let pot = pot_size(participants, settings.buy_in_per_player, manual_override);

    let total_skins: usize = skins.values().map(Vec::len).sum();
    let stats = pot_stats(pot, total_skins);
    let values = skin_values(pot, total_skins);
    let counts: Vec<(i64, usize)> = skins.iter().map(|(&id, won)| (id, won.len())).collect();
    let earnings = distribute_skin_values(&counts, &values);

    debug!(
        scratch = use_scratch,
        participants, pot, total_skins, "resolved skins pool"
    );
    PoolPayouts {
        skins,
        pot,
        stats,
        earnings,
    }
}
