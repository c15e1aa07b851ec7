use crate::error::CoreError;
use crate::model::{HOLES, Player, Teebox};
use crate::score::dots::max_score;
use ahash::RandomState;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Capped score grid for export: one row per player, a blank cell for a DNF
/// or unentered hole, and each entered score capped by the ESC rule (the
/// player's round stroke count against the hole rating).
pub fn export_score_grid(players: &[Player], teebox: &Teebox) -> Result<String, CoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Player".to_string()];
    header.extend((1..=HOLES).map(|n| n.to_string()));
    header.push("Gross".to_string());
    writer.write_record(&header)?;

    for player in players {
        let strokes = player.stroke_holes.dots.len() as i32;
        let mut gross = 0;
        let mut row = vec![player.name.clone()];
        for hole in &teebox.holes {
            match player.usable_score(hole.number) {
                Some(score) => {
                    let capped = score.min(max_score(hole.par, hole.handicap_rating, strokes));
                    gross += capped;
                    row.push(capped.to_string());
                }
                None => row.push(String::new()),
            }
        }
        row.push(gross.to_string());
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Parse(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Parse(e.to_string()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportedRow {
    pub player_id: i64,
    pub scores: [Option<i32>; HOLES],
}

fn normalize(name: &str, strip: &Regex) -> String {
    let lowered = name.to_lowercase();
    strip.replace_all(&lowered, " ").trim().to_string()
}

fn bigrams(s: &str) -> HashSet<(char, char), RandomState> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Word-overlap score: shared words over the larger word count.
fn word_score(a: &str, b: &str) -> f64 {
    let wa: HashSet<&str, RandomState> = a.split_whitespace().collect();
    let wb: HashSet<&str, RandomState> = b.split_whitespace().collect();
    let larger = wa.len().max(wb.len());
    if larger == 0 {
        return 0.0;
    }
    wa.intersection(&wb).count() as f64 / larger as f64
}

/// Character-bigram Dice coefficient, the fallback for nicknames and
/// misspellings that share no whole word.
fn char_score(a: &str, b: &str) -> f64 {
    let ba = bigrams(a);
    let bb = bigrams(b);
    if ba.is_empty() || bb.is_empty() {
        return 0.0;
    }
    2.0 * ba.intersection(&bb).count() as f64 / (ba.len() + bb.len()) as f64
}

const WORD_THRESHOLD: f64 = 0.5;
const CHAR_THRESHOLD: f64 = 0.4;

fn best_match(name: &str, players: &[Player], strip: &Regex) -> Option<i64> {
    let target = normalize(name, strip);
    players
        .iter()
        .filter_map(|p| {
            let candidate = normalize(&p.name, strip);
            let words = word_score(&target, &candidate);
            let chars = char_score(&target, &candidate);
            if words >= WORD_THRESHOLD || chars >= CHAR_THRESHOLD {
                Some((p.id, words.max(chars)))
            } else {
                None
            }
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

fn validate_headers(headers: &csv::StringRecord) -> Result<(), CoreError> {
    let first = headers.get(0).unwrap_or_default();
    if !first.trim().eq_ignore_ascii_case("player") {
        return Err(CoreError::Parse(format!(
            "expected Player header, got {first:?}"
        )));
    }
    for hole in 1..=HOLES {
        let got = headers.get(hole).unwrap_or_default().trim();
        if got.parse::<usize>() != Ok(hole) {
            return Err(CoreError::Parse(format!(
                "expected hole column {hole}, got {got:?}"
            )));
        }
    }
    Ok(())
}

/// Parses an exported grid back into per-player score arrays, fuzzy-matching
/// row names against the known players. Every unmatched row is collected
/// into a single [`CoreError::Import`] so the caller can present a
/// correction UI; this is the only hard failure the system surfaces.
pub fn import_score_grid(
    csv_text: &str,
    players: &[Player],
) -> Result<Vec<ImportedRow>, CoreError> {
    let strip = Regex::new(r"[^a-z0-9 ]+").map_err(|e| CoreError::Parse(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    validate_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    let mut unmatched = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record.get(0).unwrap_or_default().trim();
        if name.is_empty() {
            continue;
        }
        let Some(player_id) = best_match(name, players, &strip) else {
            debug!(row = name, "no player matched import row");
            unmatched.push(name.to_string());
            continue;
        };

        let mut scores = [None; HOLES];
        for (idx, slot) in scores.iter_mut().enumerate() {
            let cell = record.get(idx + 1).unwrap_or_default().trim();
            if cell.is_empty() {
                continue;
            }
            let value = cell
                .parse::<i32>()
                .map_err(|_| CoreError::Parse(format!("bad score {cell:?} for {name}")))?;
            *slot = Some(value);
        }
        rows.push(ImportedRow { player_id, scores });
    }

    if unmatched.is_empty() {
        debug!(rows = rows.len(), "imported score grid");
        Ok(rows)
    } else {
        Err(CoreError::Import { unmatched })
    }
}
