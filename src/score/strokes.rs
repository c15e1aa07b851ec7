use crate::model::{
    GameSettings, Group, HandicapStyle, Hole, Player, RuleLimits, StrokeHoles, Teebox,
};
use std::collections::BTreeSet;

/// Format-aware handicap extraction: `Custom` floors before any use,
/// `Standard` keeps the fraction so it still decides who is lowest in the
/// group. Stroke counts are floored separately in [`strokes_for_player`].
#[must_use]
pub fn handicap_value(player: &Player, style: HandicapStyle) -> f64 {
    match style {
        HandicapStyle::Custom => player.tournament_handicap.floor(),
        HandicapStyle::Standard => player.tournament_handicap,
    }
}

/// Strokes a player receives for the round, clamped to
/// `[0, limits.max_strokes]`.
#[must_use]
pub fn strokes_for_player(
    player: &Player,
    group: &Group,
    use_differential: bool,
    style: HandicapStyle,
    limits: &RuleLimits,
) -> i32 {
    let own = handicap_value(player, style);
    let raw = if use_differential {
        let low = group
            .players
            .iter()
            .map(|p| handicap_value(p, style))
            .fold(f64::INFINITY, f64::min);
        own - if low.is_finite() { low } else { 0.0 }
    } else {
        own
    };
    (raw.floor() as i32).clamp(0, limits.max_strokes)
}

/// One stroke per hole in ascending `handicap_rating` order (index 1 first)
/// until the count is exhausted. The returned set's size equals
/// `total_strokes` capped at the hole count, and the set for `n` is always a
/// subset of the set for `n + 1`.
#[must_use]
pub fn distribute_strokes(total_strokes: i32, holes: &[Hole]) -> BTreeSet<u8> {
    let mut by_rating: Vec<&Hole> = holes.iter().collect();
    by_rating.sort_by_key(|h| h.handicap_rating);

    let take = usize::try_from(total_strokes.max(0)).unwrap_or(0).min(by_rating.len());
    by_rating[..take].iter().map(|h| h.number).collect()
}

/// Hole numbers in play order for a round starting at `starting_hole`,
/// wrapping modulo the round length. Segment boundaries for Sixes games and
/// nine-hole halves are computed on this sequence, not on absolute numbers.
#[must_use]
pub fn wrapped_hole_order(starting_hole: u8, limits: &RuleLimits) -> Vec<u8> {
    let n = u16::from(limits.holes_per_round.max(1));
    let start = u16::from(starting_hole.clamp(1, limits.holes_per_round.max(1))) - 1;
    (0..n).map(|i| u8::try_from((start + i) % n + 1).unwrap_or(1)).collect()
}

/// Splits a round's strokes as evenly as possible across the three Sixes
/// games, remainder to the earliest game(s) in play order. The parts always
/// sum to `total_strokes` (after the usual non-negative clamp).
#[must_use]
pub fn sixes_stroke_split(total_strokes: i32) -> [i32; 3] {
    let total = total_strokes.max(0);
    let base = total / 3;
    let remainder = total % 3;
    let mut split = [base; 3];
    for (game, slot) in split.iter_mut().enumerate() {
        if (game as i32) < remainder {
            *slot += 1;
        }
    }
    split
}

/// The wrapped hole numbers making up one Sixes game (1..=3).
#[must_use]
pub fn sixes_game_holes(game: u8, starting_hole: u8, limits: &RuleLimits) -> Vec<u8> {
    let len = usize::from(limits.sixes_game_len);
    let order = wrapped_hole_order(starting_hole, limits);
    let start = usize::from(game.clamp(1, 3) - 1) * len;
    order.into_iter().skip(start).take(len).collect()
}

/// Per-game stroke holes for Sixes: the 3-way split of the round total, each
/// part distributed by ascending rating within its wrapped 6-hole segment.
#[must_use]
pub fn sixes_stroke_holes(
    total_strokes: i32,
    teebox: &Teebox,
    starting_hole: u8,
    limits: &RuleLimits,
) -> [BTreeSet<u8>; 3] {
    let split = sixes_stroke_split(total_strokes.clamp(0, limits.max_strokes));
    let mut out: [BTreeSet<u8>; 3] = Default::default();
    for game in 1..=3u8 {
        let numbers = sixes_game_holes(game, starting_hole, limits);
        let segment: Vec<Hole> = numbers
            .iter()
            .filter_map(|&n| teebox.hole(n).copied())
            .collect();
        out[usize::from(game - 1)] = distribute_strokes(split[usize::from(game - 1)], &segment);
    }
    out
}

fn half_holes(teebox: &Teebox, start: u8, end: u8) -> Vec<Hole> {
    teebox
        .holes
        .iter()
        .filter(|h| h.number >= start && h.number <= end)
        .copied()
        .collect()
}

/// Nassau strokes are recomputed per nine-hole half: the same
/// ascending-rating rule restricted to that half's holes.
#[must_use]
pub fn nassau_half_stroke_holes(
    total_strokes: i32,
    teebox: &Teebox,
) -> (BTreeSet<u8>, BTreeSet<u8>) {
    let front = distribute_strokes(total_strokes, &half_holes(teebox, 1, 9));
    let back = distribute_strokes(total_strokes, &half_holes(teebox, 10, 18));
    (front, back)
}

/// One-shot snapshot of every format's stroke holes for a player. The
/// persistence layer calls this once per settings change and carries the
/// result across partial score updates, so sets are never rebuilt mid-round
/// from incomplete data.
#[must_use]
pub fn allocate_stroke_holes(
    player: &Player,
    group: &Group,
    teebox: &Teebox,
    settings: &GameSettings,
    limits: &RuleLimits,
) -> StrokeHoles {
    let style = settings.handicap_style;
    let count = |use_differential| {
        strokes_for_player(player, group, use_differential, style, limits)
    };

    let dots = distribute_strokes(count(settings.dots.use_differential_handicap), &teebox.holes);
    let nines = distribute_strokes(count(settings.nines.use_differential_handicap), &teebox.holes);
    let (nassau_front, nassau_back) =
        nassau_half_stroke_holes(count(settings.nassau.use_differential_handicap), teebox);
    let sixes = sixes_stroke_holes(
        count(settings.sixes.use_differential_handicap),
        teebox,
        settings.starting_hole,
        limits,
    );

    StrokeHoles {
        dots,
        nines,
        nassau_front,
        nassau_back,
        sixes,
    }
}
