use serde::{Deserialize, Serialize};

/// One hole of a teebox. `handicap_rating` is the stroke index, 1 = hardest;
/// ratings form a permutation of 1..=18 within a teebox.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u8,
    pub par: i32,
    pub handicap_rating: u8,
    pub yardage: Option<u32>,
}

impl Hole {
    #[must_use]
    pub fn is_par3(&self) -> bool {
        self.par == 3
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Teebox {
    pub name: String,
    pub holes: Vec<Hole>,
}

impl Teebox {
    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    #[must_use]
    pub fn course_par(&self) -> i32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    #[must_use]
    pub fn front9_par(&self) -> i32 {
        self.par_for_range(1, 9)
    }

    #[must_use]
    pub fn back9_par(&self) -> i32 {
        self.par_for_range(10, 18)
    }

    #[must_use]
    pub fn last6_par(&self) -> i32 {
        self.par_for_range(13, 18)
    }

    fn par_for_range(&self, start: u8, end: u8) -> i32 {
        self.holes
            .iter()
            .filter(|h| h.number >= start && h.number <= end)
            .map(|h| h.par)
            .sum()
    }
}
