//! Provides the kanji coverage analysis of yomeru.
//!
//! Given the kanji of a curriculum, the kanji a learner already knows and
//! some Japanese text, works out which of the text's kanji are known and
//! how much of the text they account for.

pub mod analysis;
pub mod charset;
pub mod classify;
pub mod error;
pub mod extract;
pub mod frequency;
pub mod known;
pub mod report;

pub use analysis::{analyse, analyse_text, Analysis, Config};
pub use charset::{CharacterSequence, CharacterSet};
pub use classify::Classification;
pub use error::{Error, Result};
pub use extract::Extraction;
pub use frequency::{percentage, Bucket, Frequencies};
pub use known::{FileSource, KnownKanjiSource, Levels, StaticSource};
pub use report::{OutputFormat, Report};

use std::ops::RangeInclusive;

/// The CJK Unified Ideographs block as used by kanji curricula.
pub const KANJI_RANGE: RangeInclusive<char> = '\u{4E00}'..='\u{9FAF}';

/// Checks whether the character is a kanji.
pub fn is_kanji(c: char) -> bool {
    KANJI_RANGE.contains(&c)
}

/// Iterates over the kanji in the text in order of appearance.
pub fn kanji_in(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(|c| is_kanji(*c))
}
