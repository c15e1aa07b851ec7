use rusty_sidegames::model::{
    GameSettings, HandicapStyle, NassauMatchType, SettingsUpdate,
};

fn nassau_update(amount: f64) -> SettingsUpdate {
    SettingsUpdate::Nassau {
        enabled: true,
        amount_per_unit: amount,
        use_differential_handicap: true,
        match_type: NassauMatchType::All,
    }
}

#[test]
fn valid_updates_stick() {
    let mut settings = GameSettings::default();
    assert!(settings.apply(nassau_update(2.0)));
    assert!(settings.nassau.enabled);
    assert_eq!(settings.nassau.amount_per_unit, 2.0);

    assert!(settings.apply(SettingsUpdate::Round {
        handicap_style: HandicapStyle::Custom,
        starting_hole: 10,
    }));
    assert_eq!(settings.starting_hole, 10);
}

#[test]
fn bad_amounts_are_silently_ignored() {
    let mut settings = GameSettings::default();
    let before = settings;

    assert!(!settings.apply(nassau_update(0.0)));
    assert!(!settings.apply(nassau_update(-3.0)));
    assert!(!settings.apply(nassau_update(f64::NAN)));
    assert_eq!(
        settings, before,
        "a rejected update must leave settings untouched"
    );
}

#[test]
fn out_of_range_round_and_sixes_values_are_rejected() {
    let mut settings = GameSettings::default();
    assert!(!settings.apply(SettingsUpdate::Round {
        handicap_style: HandicapStyle::Standard,
        starting_hole: 0,
    }));
    assert!(!settings.apply(SettingsUpdate::Round {
        handicap_style: HandicapStyle::Standard,
        starting_hole: 19,
    }));
    assert!(!settings.apply(SettingsUpdate::Sixes {
        enabled: true,
        amount_per_point: 1.0,
        use_differential_handicap: true,
        points_per_hole: 3,
        use_2_points: true,
    }));
}

#[test]
fn unknown_fields_are_rejected_at_the_boundary() {
    let with_unknown = serde_json::json!({
        "game": "dots",
        "enabled": true,
        "amount_per_dot": 0.5,
        "use_differential_handicap": false,
        "carry_limit": 4
    });
    assert!(
        serde_json::from_value::<SettingsUpdate>(with_unknown).is_err(),
        "arbitrary keys must not be absorbed"
    );

    let clean = serde_json::json!({
        "game": "dots",
        "enabled": true,
        "amount_per_dot": 0.5,
        "use_differential_handicap": false
    });
    let update: SettingsUpdate = serde_json::from_value(clean).expect("well-formed update");
    let mut settings = GameSettings::default();
    assert!(settings.apply(update));
    assert_eq!(settings.dots.amount_per_dot, 0.5);
}
