use crate::error::DotsEntryError;
use crate::model::Player;

/// Dots earned on one hole. DNF or a missing score short-circuits everything
/// to zero. Base dots come from score-to-par (2 for eagle or better, 1 for a
/// birdie), plus one each for a greenie and a sandy. Carried-over par-3 dots
/// are only claimed alongside an awarded greenie; the carry state itself
/// lives with the caller.
#[must_use]
pub fn calculate_dots(
    score: Option<i32>,
    par: i32,
    greenie: bool,
    sandy: bool,
    dnf: bool,
    carry_over_dots: i32,
) -> i32 {
    if dnf {
        return 0;
    }
    let Some(score) = score else {
        return 0;
    };

    let mut dots = match score - par {
        d if d <= -2 => 2,
        -1 => 1,
        _ => 0,
    };
    if greenie {
        dots += 1 + carry_over_dots.max(0);
    }
    if sandy {
        dots += 1;
    }
    dots
}

/// A greenie or sandy needs par or better, and a single shot on a par 3
/// cannot be both a green-in-regulation save and a bunker save.
pub fn validate_dots_entry(
    score: i32,
    par: i32,
    greenie: bool,
    sandy: bool,
) -> Result<(), DotsEntryError> {
    if (greenie || sandy) && score > par {
        return Err(DotsEntryError::BonusOverPar { score, par });
    }
    if greenie && sandy && par == 3 {
        return Err(DotsEntryError::GreenieAndSandyOnPar3);
    }
    Ok(())
}

/// ESC-style cap for one hole: a player stroking on the hole (their stroke
/// count reaches its rating) caps at par + 3, otherwise par + 2.
#[must_use]
pub fn max_score(par: i32, handicap_rating: u8, player_strokes: i32) -> i32 {
    if player_strokes < i32::from(handicap_rating) {
        par + 2
    } else {
        par + 3
    }
}

/// Players with a usable score of 3 or less on the hole. DNF excludes a
/// player regardless of any recorded score.
#[must_use]
pub fn eligible_greenie_players(players: &[Player], hole_number: u8) -> Vec<i64> {
    players
        .iter()
        .filter(|p| p.usable_score(hole_number).is_some_and(|s| s <= 3))
        .map(|p| p.id)
        .collect()
}

/// Round total from the per-hole dot tracker, skipping DNF holes.
#[must_use]
pub fn round_dots(player: &Player) -> i32 {
    player
        .dots
        .iter()
        .zip(player.dnf.iter())
        .filter(|&(_, &dnf)| !dnf)
        .map(|(&dots, _)| dots)
        .sum()
}
