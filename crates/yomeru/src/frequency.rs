//! Weighs the classified kanji by how often they occur in the text.

use crate::{CharacterSequence, CharacterSet, Classification, Extraction};
use serde::Serialize;
use std::collections::HashMap;

/// The percentage of `original` made up of occurrences of the kanji in `subset`.
///
/// A kanji that occurs 50 times in the text contributes 50 occurrences.
/// Returns 0 for an empty `original`.
pub fn percentage(subset: &CharacterSet, original: &CharacterSequence) -> f64 {
    weighted_percentage(subset, &original.occurrences(), original.len())
}

fn weighted_percentage(
    subset: &CharacterSet,
    occurrences: &HashMap<char, usize>,
    total: usize,
) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let count: usize = subset
        .iter()
        .filter_map(|c| occurrences.get(&c))
        .sum();
    count as f64 / total as f64 * 100.0
}

/// The size of a class of kanji and the share of the text it accounts for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bucket {
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Frequencies {
    /// Every unique kanji in the text.
    pub all: Bucket,
    pub known: Bucket,
    pub unknown: Bucket,
    pub unknown_in_curriculum: Bucket,
    pub not_in_curriculum: Bucket,
    /// The percentage of all characters in the text that are kanji.
    pub density: f64,
}

impl Frequencies {
    pub fn score(classification: &Classification, extraction: &Extraction) -> Self {
        let occurrences = extraction.kanji.occurrences();
        let total = extraction.kanji.len();
        let bucket = |set: &CharacterSet| Bucket {
            count: set.len(),
            percentage: weighted_percentage(set, &occurrences, total),
        };

        let all = Bucket {
            count: classification.total_unique(),
            percentage: if total == 0 { 0.0 } else { 100.0 },
        };
        Self {
            all,
            known: bucket(&classification.known),
            unknown: bucket(&classification.unknown),
            unknown_in_curriculum: bucket(&classification.unknown_in_curriculum),
            not_in_curriculum: bucket(&classification.not_in_curriculum),
            density: extraction.density(),
        }
    }
}
