#![allow(dead_code)]

use rusty_sidegames::model::{HOLES, Hole, Player, Teebox};

/// Par-72 layout with the usual odd-front / even-back stroke index split.
pub fn standard_teebox() -> Teebox {
    let pars = [4, 4, 3, 5, 4, 3, 4, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4];
    let ratings = [5, 9, 17, 1, 11, 15, 7, 3, 13, 6, 16, 8, 2, 10, 14, 18, 4, 12];
    Teebox {
        name: "blue".to_string(),
        holes: (0..HOLES)
            .map(|i| Hole {
                number: (i + 1) as u8,
                par: pars[i],
                handicap_rating: ratings[i],
                yardage: None,
            })
            .collect(),
    }
}

pub fn scores(vals: &[i32]) -> [Option<i32>; HOLES] {
    let mut out = [None; HOLES];
    for (slot, &v) in out.iter_mut().zip(vals.iter()) {
        *slot = Some(v);
    }
    out
}

pub fn player_with_scores(id: i64, name: &str, handicap: f64, vals: &[i32]) -> Player {
    let mut player = Player::new(id, name, handicap);
    player.scores = scores(vals);
    player
}

/// All pars on the standard teebox.
pub fn level_par_scores(teebox: &Teebox) -> [Option<i32>; HOLES] {
    let mut out = [None; HOLES];
    for hole in &teebox.holes {
        out[usize::from(hole.number - 1)] = Some(hole.par);
    }
    out
}
