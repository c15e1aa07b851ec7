use crate::model::{CartPosition, CartSide, Group, Player, RuleLimits, SixesSettings};
use crate::score::strokes::{sixes_game_holes, wrapped_hole_order};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug)]
pub struct SixesTeam<'a> {
    pub players: [&'a Player; 2],
}

impl SixesTeam<'_> {
    /// Better-ball team score: the lower of the members' nets for the game's
    /// stroke set. A member without a usable score simply drops out; the
    /// team has no score only when both members are out.
    #[must_use]
    pub fn net_for_hole(&self, hole_number: u8, game: u8) -> Option<f64> {
        self.players
            .iter()
            .filter_map(|p| member_net(p, hole_number, game))
            .min_by(f64::total_cmp)
    }
}

fn member_net(player: &Player, hole_number: u8, game: u8) -> Option<f64> {
    let gross = player.usable_score(hole_number)?;
    let set = &player.stroke_holes.sixes[usize::from(game.clamp(1, 3) - 1)];
    Some(f64::from(gross - i32::from(set.contains(&hole_number))))
}

fn find(
    group: &Group,
    cart: CartSide,
    position: CartPosition,
) -> Option<&Player> {
    group
        .players
        .iter()
        .find(|p| p.cart == Some(cart) && p.position == Some(position))
}

/// Team pairings for one of the three games: 1 pits the carts against each
/// other, 2 crosses them (each driver with the other cart's rider), 3 pits
/// drivers against riders. `None` unless the group has all four seats
/// filled.
#[must_use]
pub fn teams_for_game<'a>(group: &'a Group, game: u8) -> Option<(SixesTeam<'a>, SixesTeam<'a>)> {
    let d1 = find(group, CartSide::One, CartPosition::Driver)?;
    let r1 = find(group, CartSide::One, CartPosition::Rider)?;
    let d2 = find(group, CartSide::Two, CartPosition::Driver)?;
    let r2 = find(group, CartSide::Two, CartPosition::Rider)?;

    let (team1, team2) = match game {
        1 => ([d1, r1], [d2, r2]),
        2 => ([d1, r2], [d2, r1]),
        3 => ([d1, d2], [r1, r2]),
        _ => return None,
    };
    Some((SixesTeam { players: team1 }, SixesTeam { players: team2 }))
}

/// Which of the three games a hole belongs to, honoring shotgun wraparound:
/// the first six holes in play order are game 1, the next six game 2, the
/// last six game 3.
#[must_use]
pub fn game_number(hole_number: u8, starting_hole: u8, limits: &RuleLimits) -> u8 {
    let order = wrapped_hole_order(starting_hole, limits);
    let position = order
        .iter()
        .position(|&h| h == hole_number)
        .unwrap_or_default();
    u8::try_from(position / usize::from(limits.sixes_game_len.max(1)))
        .unwrap_or_default()
        .min(2)
        + 1
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SixesHoleRange {
    pub start_hole: u8,
    pub end_hole: u8,
}

/// First and last hole of a game on the wrapped sequence; for a shotgun
/// start the end hole can be a lower number than the start hole.
#[must_use]
pub fn game_hole_range(game: u8, starting_hole: u8, limits: &RuleLimits) -> SixesHoleRange {
    let holes = sixes_game_holes(game, starting_hole, limits);
    SixesHoleRange {
        start_hole: holes.first().copied().unwrap_or(starting_hole),
        end_hole: holes.last().copied().unwrap_or(starting_hole),
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct SixesHolePoints {
    pub team1: f64,
    pub team2: f64,
}

/// Points for one hole: the lower better-ball net takes all the points at
/// stake; a tied hole splits them evenly in 2-point mode and pays nothing in
/// 1-point mode. `None` when either team has no usable score on the hole.
#[must_use]
pub fn calculate_points(
    team1: &SixesTeam<'_>,
    team2: &SixesTeam<'_>,
    hole_number: u8,
    game: u8,
    points_per_hole: i32,
    use_2_points: bool,
) -> Option<SixesHolePoints> {
    let n1 = team1.net_for_hole(hole_number, game)?;
    let n2 = team2.net_for_hole(hole_number, game)?;
    let stake = f64::from(points_per_hole);

    let points = if n1 < n2 {
        SixesHolePoints {
            team1: stake,
            team2: 0.0,
        }
    } else if n2 < n1 {
        SixesHolePoints {
            team1: 0.0,
            team2: stake,
        }
    } else if use_2_points {
        SixesHolePoints {
            team1: stake / 2.0,
            team2: stake / 2.0,
        }
    } else {
        SixesHolePoints::default()
    };
    Some(points)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SixesGameTally {
    pub game: u8,
    pub team1_ids: [i64; 2],
    pub team2_ids: [i64; 2],
    pub points: SixesHolePoints,
}

/// Running totals for all three games, summing each game's holes on the
/// wrapped sequence. `None` when the group cannot seat two full teams.
#[must_use]
pub fn match_totals(
    group: &Group,
    settings: &SixesSettings,
    starting_hole: u8,
    limits: &RuleLimits,
) -> Option<Vec<SixesGameTally>> {
    let mut tallies = Vec::with_capacity(3);
    for game in 1..=3u8 {
        let (team1, team2) = teams_for_game(group, game)?;
        let mut points = SixesHolePoints::default();
        for hole_number in sixes_game_holes(game, starting_hole, limits) {
            if let Some(hole_points) = calculate_points(
                &team1,
                &team2,
                hole_number,
                game,
                settings.points_per_hole,
                settings.use_2_points,
            ) {
                points.team1 += hole_points.team1;
                points.team2 += hole_points.team2;
            }
        }
        tallies.push(SixesGameTally {
            game,
            team1_ids: [team1.players[0].id, team1.players[1].id],
            team2_ids: [team2.players[0].id, team2.players[1].id],
            points,
        });
    }
    Some(tallies)
}
