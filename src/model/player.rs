use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const HOLES: usize = 18;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartSide {
    One,
    Two,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartPosition {
    Driver,
    Rider,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SkinsPool {
    #[default]
    None,
    Scratch,
    Handicap,
    Both,
}

impl SkinsPool {
    /// Whether this player plays the scratch pool (`use_scratch`) or the
    /// handicap pool (`!use_scratch`).
    #[must_use]
    pub fn includes(self, use_scratch: bool) -> bool {
        match self {
            Self::None => false,
            Self::Both => true,
            Self::Scratch => use_scratch,
            Self::Handicap => !use_scratch,
        }
    }
}

/// Per-format stroke-hole sets, computed once per settings snapshot by
/// [`crate::score::strokes::allocate_stroke_holes`] and never recomputed
/// mid-round from partial data. `BTreeSet` keeps iteration deterministic.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StrokeHoles {
    pub dots: BTreeSet<u8>,
    pub nines: BTreeSet<u8>,
    pub nassau_front: BTreeSet<u8>,
    pub nassau_back: BTreeSet<u8>,
    pub sixes: [BTreeSet<u8>; 3],
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub tournament_handicap: f64,
    pub cart: Option<CartSide>,
    pub position: Option<CartPosition>,
    /// `None` means not yet entered. Index 0 = hole 1.
    pub scores: [Option<i32>; HOLES],
    /// A DNF hole is excluded from every calculation regardless of any
    /// recorded score value.
    pub dnf: [bool; HOLES],
    pub dots: [i32; HOLES],
    pub greenies: [bool; HOLES],
    pub sandies: [bool; HOLES],
    pub skins_pool: SkinsPool,
    #[serde(default)]
    pub stroke_holes: StrokeHoles,
}

impl Player {
    #[must_use]
    pub fn new(id: i64, name: &str, tournament_handicap: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            tournament_handicap,
            cart: None,
            position: None,
            scores: [None; HOLES],
            dnf: [false; HOLES],
            dots: [0; HOLES],
            greenies: [false; HOLES],
            sandies: [false; HOLES],
            skins_pool: SkinsPool::default(),
            stroke_holes: StrokeHoles::default(),
        }
    }

    /// Entered, non-DNF gross score for a hole number (1..=18).
    #[must_use]
    pub fn usable_score(&self, hole_number: u8) -> Option<i32> {
        let idx = usize::from(hole_number.checked_sub(1)?);
        if idx >= HOLES || self.dnf[idx] {
            return None;
        }
        self.scores[idx]
    }

    #[must_use]
    pub fn is_dnf(&self, hole_number: u8) -> bool {
        hole_number
            .checked_sub(1)
            .map(usize::from)
            .is_some_and(|idx| idx < HOLES && self.dnf[idx])
    }

    /// Hole has neither an entered score nor a DNF mark.
    #[must_use]
    pub fn is_unreported(&self, hole_number: u8) -> bool {
        !self.is_dnf(hole_number) && self.usable_score(hole_number).is_none()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Group {
    pub id: i64,
    pub tee_time: Option<NaiveTime>,
    pub players: Vec<Player>,
}

impl Group {
    #[must_use]
    pub fn new(id: i64, players: Vec<Player>) -> Self {
        Self {
            id,
            tee_time: None,
            players,
        }
    }

    /// Lowest tournament handicap in the group; differential strokes inside
    /// Dots/Nines/Sixes are always relative to this, never globally.
    #[must_use]
    pub fn lowest_handicap(&self) -> f64 {
        let low = self
            .players
            .iter()
            .map(|p| p.tournament_handicap)
            .fold(f64::INFINITY, f64::min);
        if low.is_finite() { low } else { 0.0 }
    }

    #[must_use]
    pub fn player(&self, id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }
}
