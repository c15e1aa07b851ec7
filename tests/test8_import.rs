mod common;

use common::{player_with_scores, standard_teebox};
use rusty_sidegames::error::CoreError;
use rusty_sidegames::import::{export_score_grid, import_score_grid};
use rusty_sidegames::model::Player;

#[test]
fn export_caps_scores_and_blanks_missing_holes() -> Result<(), CoreError> {
    let teebox = standard_teebox();
    // no stroke holes: every cap is par + 2
    let mut player = player_with_scores(1, "Pat", 0.0, &[9, 4]);
    player.dnf[1] = true;

    let grid = export_score_grid(&[player], &teebox)?;
    let mut lines = grid.lines();
    let header = lines.next().expect("header row");
    assert!(header.starts_with("Player,1,2,3"));
    assert!(header.ends_with("17,18,Gross"));

    let row = lines.next().expect("player row");
    let cells: Vec<&str> = row.split(',').collect();
    assert_eq!(cells[0], "Pat");
    assert_eq!(cells[1], "6", "9 on a par 4 caps at par + 2");
    assert_eq!(cells[2], "", "DNF exports blank");
    assert_eq!(cells[3], "", "unentered exports blank");
    assert_eq!(cells[19], "6", "gross sums the capped cells");
    Ok(())
}

#[test]
fn stroked_players_cap_a_shot_higher() -> Result<(), CoreError> {
    let teebox = standard_teebox();
    let mut player = player_with_scores(1, "Pat", 5.0, &[9]);
    // five strokes reach hole 1's rating of 5
    player.stroke_holes.dots = (1u8..=5).map(|r| {
        teebox
            .holes
            .iter()
            .find(|h| h.handicap_rating == r)
            .map(|h| h.number)
            .unwrap_or(r)
    }).collect();

    let grid = export_score_grid(&[player], &teebox)?;
    let row = grid.lines().nth(1).expect("player row");
    assert_eq!(row.split(',').nth(1), Some("7"), "cap loosens to par + 3");
    Ok(())
}

#[test]
fn import_round_trips_an_exported_grid() -> Result<(), CoreError> {
    let teebox = standard_teebox();
    let players = vec![
        player_with_scores(1, "John Smith", 4.0, &[4, 5, 3]),
        player_with_scores(2, "Jane Doe", 8.0, &[5, 4, 4]),
    ];

    let grid = export_score_grid(&players, &teebox)?;
    let rows = import_score_grid(&grid, &players)?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player_id, 1);
    assert_eq!(rows[0].scores[0], Some(4));
    assert_eq!(rows[0].scores[3], None);
    assert_eq!(rows[1].player_id, 2);
    Ok(())
}

#[test]
fn fuzzy_matching_tolerates_initials_and_typos() -> Result<(), CoreError> {
    let players = vec![
        Player::new(1, "John Smith", 4.0),
        Player::new(2, "Jane Doe", 8.0),
    ];
    let csv = "Player,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,Gross\n\
               J. Smith,4,,,,,,,,,,,,,,,,,,4\n\
               Jayne Doh,5,,,,,,,,,,,,,,,,,,5\n";

    let rows = import_score_grid(csv, &players)?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].player_id, 1, "shared surname clears the word bar");
    assert_eq!(rows[1].player_id, 2, "misspelling clears the bigram bar");
    Ok(())
}

#[test]
fn unmatched_rows_surface_as_a_typed_error() {
    let players = vec![Player::new(1, "John Smith", 4.0)];
    let csv = "Player,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18\n\
               John Smith,4,,,,,,,,,,,,,,,,,\n\
               Zebra Quux,5,,,,,,,,,,,,,,,,,\n";

    match import_score_grid(csv, &players) {
        Err(CoreError::Import { unmatched }) => {
            assert_eq!(unmatched, vec!["Zebra Quux".to_string()]);
        }
        other => panic!("expected an import error, got {other:?}"),
    }
}

#[test]
fn structural_problems_are_parse_errors() {
    let players = vec![Player::new(1, "John Smith", 4.0)];

    let bad_header = "Name,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18\n";
    assert!(matches!(
        import_score_grid(bad_header, &players),
        Err(CoreError::Parse(_))
    ));

    let bad_cell = "Player,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18\n\
                    John Smith,four,,,,,,,,,,,,,,,,,\n";
    assert!(matches!(
        import_score_grid(bad_cell, &players),
        Err(CoreError::Parse(_))
    ));
}
