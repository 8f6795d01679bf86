//! Character sequences and sets.

use serde::{Serialize, Serializer};
use std::{
    collections::{HashMap, HashSet},
    fmt,
};

/// Characters in the order they appeared in a text, duplicates included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterSequence(Vec<char>);

impl CharacterSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Counts how many times each character occurs.
    pub fn occurrences(&self) -> HashMap<char, usize> {
        let mut occurrences = HashMap::new();
        for c in self.iter() {
            *occurrences.entry(c).or_default() += 1;
        }
        occurrences
    }

    pub(crate) fn push(&mut self, c: char) {
        self.0.push(c);
    }

    pub(crate) fn append(&mut self, other: CharacterSequence) {
        self.0.extend(other.0);
    }
}

impl FromIterator<char> for CharacterSequence {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for CharacterSequence {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl fmt::Display for CharacterSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Distinct characters, kept in first-seen order so output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CharacterSet {
    ordered: Vec<char>,
    members: HashSet<char>,
}

impl CharacterSet {
    /// Reduces a sequence to its distinct characters.
    pub fn dedup(sequence: &CharacterSequence) -> Self {
        sequence.iter().collect()
    }

    /// Returns the characters of `self` that are not in `other`.
    pub fn difference(&self, other: &CharacterSet) -> CharacterSet {
        self.iter().filter(|c| !other.contains(*c)).collect()
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.ordered.iter().copied()
    }

    fn insert(&mut self, c: char) {
        if self.members.insert(c) {
            self.ordered.push(c);
        }
    }
}

// order is only for display, membership is what makes two sets equal
impl PartialEq for CharacterSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for CharacterSet {}

impl FromIterator<char> for CharacterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        let mut set = Self::default();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl From<&str> for CharacterSet {
    fn from(value: &str) -> Self {
        value.chars().collect()
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ordered.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl Serialize for CharacterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dedup_keeps_first_seen_order() {
        let set = CharacterSet::dedup(&CharacterSequence::from("水木水火木"));
        assert_eq!(set.iter().collect::<String>(), "水木火");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn dedup_is_idempotent() {
        let once = CharacterSet::dedup(&CharacterSequence::from("日日本本語"));
        let twice = CharacterSet::dedup(&once.iter().collect());
        assert_eq!(once, twice);
        assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn difference_is_asymmetric() {
        let a = CharacterSet::from("木水火");
        let b = CharacterSet::from("水山");
        assert_eq!(a.difference(&b).to_string(), "木火");
        assert_eq!(b.difference(&a).to_string(), "山");
    }

    #[test]
    fn difference_with_empty_sets() {
        let a = CharacterSet::from("木水");
        let empty = CharacterSet::default();
        assert_eq!(a.difference(&empty), a);
        assert!(empty.difference(&a).is_empty());
        assert!(a.difference(&a).is_empty());
    }

    #[test]
    fn equality_ignores_order() {
        assert_eq!(CharacterSet::from("木水"), CharacterSet::from("水木"));
        assert_ne!(CharacterSet::from("木水"), CharacterSet::from("水"));
    }

    #[test]
    fn counts_occurrences() {
        let occurrences = CharacterSequence::from("木木水山木").occurrences();
        assert_eq!(occurrences[&'木'], 3);
        assert_eq!(occurrences[&'水'], 1);
        assert_eq!(occurrences.get(&'火'), None);
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&CharacterSet::from("木水")).unwrap();
        assert_eq!(json, r#""木水""#);
    }
}
