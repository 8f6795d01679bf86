//! Splits the kanji of a text into known and unknown kanji.

use crate::CharacterSet;
use serde::Serialize;

/// The unique kanji of a text, partitioned by whether the learner knows them
/// and whether the curriculum teaches them.
///
/// `known` and `unknown` partition the text's unique kanji, and
/// `unknown_in_curriculum` and `not_in_curriculum` partition `unknown`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub known: CharacterSet,
    pub unknown: CharacterSet,
    pub unknown_in_curriculum: CharacterSet,
    pub not_in_curriculum: CharacterSet,
}

impl Classification {
    /// `learner_known` is not required to be a subset of `curriculum`.
    /// A known kanji outside the curriculum still counts as known.
    pub fn classify(
        curriculum: &CharacterSet,
        learner_known: &CharacterSet,
        text_unique: &CharacterSet,
    ) -> Self {
        let unknown = text_unique.difference(learner_known);
        let not_in_curriculum = unknown.difference(curriculum);
        let unknown_in_curriculum = unknown.difference(&not_in_curriculum);
        let known = text_unique.difference(&unknown);
        tracing::debug!(
            "known {}, unknown {} ({} in curriculum, {} not in curriculum)",
            known.len(),
            unknown.len(),
            unknown_in_curriculum.len(),
            not_in_curriculum.len(),
        );
        Self {
            known,
            unknown,
            unknown_in_curriculum,
            not_in_curriculum,
        }
    }

    /// The amount of unique kanji in the text.
    pub fn total_unique(&self) -> usize {
        self.known.len() + self.unknown.len()
    }
}
