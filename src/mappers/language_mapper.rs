use std::collections::HashMap;

use serde::Serialize;

use crate::models::language_tally::LanguageTally;
use crate::models::repository::Repository;

const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// One wedge of the language pie, in percent of the whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageSlice {
    pub language: String,
    pub count: usize,
    pub percent: f64,
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
}

/// Counts repositories per language in order of first appearance.
///
/// Repositories without a language are left out entirely.
pub fn tally_languages(repositories: &[Repository]) -> Vec<LanguageTally> {
    let mut tallies: Vec<LanguageTally> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for language in repositories.iter().filter_map(|r| r.language.as_deref()) {
        match positions.get(language) {
            Some(&position) => tallies[position].count += 1,
            None => {
                positions.insert(language, tallies.len());
                tallies.push(LanguageTally {
                    language: language.to_string(),
                    count: 1,
                });
            }
        }
    }

    tallies
}

pub fn language_color(position: usize) -> &'static str {
    PALETTE[position % PALETTE.len()]
}

pub fn to_chart_slices(tallies: &[LanguageTally]) -> Vec<LanguageSlice> {
    let total: usize = tallies.iter().map(|t| t.count).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    tallies
        .iter()
        .enumerate()
        .map(|(position, tally)| {
            let percent = tally.count as f64 * 100.0 / total as f64;
            let end = if position + 1 == tallies.len() {
                100.0
            } else {
                start + percent
            };
            let slice = LanguageSlice {
                language: tally.language.clone(),
                count: tally.count,
                percent,
                start,
                end,
                color: language_color(position),
            };
            start = end;
            slice
        })
        .collect()
}

/// CSS background drawing the slices as a pie.
pub fn to_conic_gradient(slices: &[LanguageSlice]) -> Option<String> {
    if slices.is_empty() {
        return None;
    }
    let stops: Vec<String> = slices
        .iter()
        .map(|s| format!("{} {:.2}% {:.2}%", s.color, s.start, s.end))
        .collect();
    Some(format!("conic-gradient({})", stops.join(", ")))
}
