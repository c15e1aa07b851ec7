use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HandicapStyle {
    /// Fractional handicaps stay fractional in comparisons; only the final
    /// stroke count is floored.
    #[default]
    Standard,
    /// Handicap is floored to an integer before any use.
    Custom,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NassauMatchType {
    /// Front, back, and an independent continuous 18-hole overall match.
    #[default]
    All,
    /// Front and back wagers only; overall reported as front + back.
    FrontBack,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct PotOverride {
    pub enabled: bool,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NassauSettings {
    pub enabled: bool,
    pub amount_per_unit: f64,
    pub use_differential_handicap: bool,
    pub match_type: NassauMatchType,
}

impl Default for NassauSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amount_per_unit: 1.0,
            use_differential_handicap: true,
            match_type: NassauMatchType::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct NinesSettings {
    pub enabled: bool,
    pub amount_per_point: f64,
    pub use_differential_handicap: bool,
    pub half_stroke_on_par3: bool,
}

impl Default for NinesSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amount_per_point: 1.0,
            use_differential_handicap: true,
            half_stroke_on_par3: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SixesSettings {
    pub enabled: bool,
    pub amount_per_point: f64,
    pub use_differential_handicap: bool,
    /// 1 or 2 points at stake per hole.
    pub points_per_hole: i32,
    /// In 2-point mode a tied hole splits the points; in 1-point mode a tie
    /// awards nothing.
    pub use_2_points: bool,
}

impl Default for SixesSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amount_per_point: 1.0,
            use_differential_handicap: true,
            points_per_hole: 1,
            use_2_points: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkinsSettings {
    pub enabled: bool,
    pub buy_in_per_player: i64,
    pub half_stroke_on_par3: bool,
    pub scratch_pot_override: PotOverride,
    pub handicap_pot_override: PotOverride,
}

impl Default for SkinsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            buy_in_per_player: 5,
            half_stroke_on_par3: false,
            scratch_pot_override: PotOverride::default(),
            handicap_pot_override: PotOverride::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DotsSettings {
    pub enabled: bool,
    pub amount_per_dot: f64,
    pub use_differential_handicap: bool,
}

impl Default for DotsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            amount_per_dot: 0.25,
            use_differential_handicap: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GameSettings {
    pub handicap_style: HandicapStyle,
    /// First hole of the round; shotgun starts wrap segment math modulo 18.
    pub starting_hole: u8,
    pub nassau: NassauSettings,
    pub nines: NinesSettings,
    pub sixes: SixesSettings,
    pub skins: SkinsSettings,
    pub dots: DotsSettings,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            handicap_style: HandicapStyle::default(),
            starting_hole: 1,
            nassau: NassauSettings::default(),
            nines: NinesSettings::default(),
            sixes: SixesSettings::default(),
            skins: SkinsSettings::default(),
            dots: DotsSettings::default(),
        }
    }
}

/// One variant per game format with an exhaustive field set; unknown fields
/// are rejected at the serde boundary instead of being absorbed into an
/// untyped map.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "game", rename_all = "snake_case", deny_unknown_fields)]
pub enum SettingsUpdate {
    Nassau {
        enabled: bool,
        amount_per_unit: f64,
        use_differential_handicap: bool,
        match_type: NassauMatchType,
    },
    Nines {
        enabled: bool,
        amount_per_point: f64,
        use_differential_handicap: bool,
        half_stroke_on_par3: bool,
    },
    Sixes {
        enabled: bool,
        amount_per_point: f64,
        use_differential_handicap: bool,
        points_per_hole: i32,
        use_2_points: bool,
    },
    Skins {
        enabled: bool,
        buy_in_per_player: i64,
        half_stroke_on_par3: bool,
        scratch_pot_override: PotOverride,
        handicap_pot_override: PotOverride,
    },
    Dots {
        enabled: bool,
        amount_per_dot: f64,
        use_differential_handicap: bool,
    },
    Round {
        handicap_style: HandicapStyle,
        starting_hole: u8,
    },
}

fn valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

impl GameSettings {
    /// Applies a typed update, or ignores it when a numeric field is out of
    /// range (non-finite or non-positive amount, bad point mode, bad hole).
    /// Returns whether the update stuck.
    #[must_use]
    pub fn apply(&mut self, update: SettingsUpdate) -> bool {
        match update {
            SettingsUpdate::Nassau {
                enabled,
                amount_per_unit,
                use_differential_handicap,
                match_type,
            } => {
                if !valid_amount(amount_per_unit) {
                    return false;
                }
                self.nassau = NassauSettings {
                    enabled,
                    amount_per_unit,
                    use_differential_handicap,
                    match_type,
                };
            }
            SettingsUpdate::Nines {
                enabled,
                amount_per_point,
                use_differential_handicap,
                half_stroke_on_par3,
            } => {
                if !valid_amount(amount_per_point) {
                    return false;
                }
                self.nines = NinesSettings {
                    enabled,
                    amount_per_point,
                    use_differential_handicap,
                    half_stroke_on_par3,
                };
            }
            SettingsUpdate::Sixes {
                enabled,
                amount_per_point,
                use_differential_handicap,
                points_per_hole,
                use_2_points,
            } => {
                if !valid_amount(amount_per_point) || !(1..=2).contains(&points_per_hole) {
                    return false;
                }
                self.sixes = SixesSettings {
                    enabled,
                    amount_per_point,
                    use_differential_handicap,
                    points_per_hole,
                    use_2_points,
                };
            }
            SettingsUpdate::Skins {
                enabled,
                buy_in_per_player,
                half_stroke_on_par3,
                scratch_pot_override,
                handicap_pot_override,
            } => {
                if buy_in_per_player <= 0
                    || (scratch_pot_override.enabled && scratch_pot_override.amount <= 0)
                    || (handicap_pot_override.enabled && handicap_pot_override.amount <= 0)
                {
                    return false;
                }
                self.skins = SkinsSettings {
                    enabled,
                    buy_in_per_player,
                    half_stroke_on_par3,
                    scratch_pot_override,
                    handicap_pot_override,
                };
            }
            SettingsUpdate::Dots {
                enabled,
                amount_per_dot,
                use_differential_handicap,
            } => {
                if !valid_amount(amount_per_dot) {
                    return false;
                }
                self.dots = DotsSettings {
                    enabled,
                    amount_per_dot,
                    use_differential_handicap,
                };
            }
            SettingsUpdate::Round {
                handicap_style,
                starting_hole,
            } => {
                if !(1..=18).contains(&starting_hole) {
                    return false;
                }
                self.handicap_style = handicap_style;
                self.starting_hole = starting_hole;
            }
        }
        true
    }
}

/// Round shape limits, threaded into engine calls instead of living as
/// process-wide constants.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleLimits {
    pub max_strokes: i32,
    pub holes_per_round: u8,
    pub sixes_game_len: u8,
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_strokes: 18,
            holes_per_round: 18,
            sixes_game_len: 6,
        }
    }
}
