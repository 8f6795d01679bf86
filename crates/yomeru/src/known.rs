//! Sources for the kanji a learner already knows.

use crate::error::Error;
use std::{fmt, fs, ops::RangeInclusive, path::PathBuf, str::FromStr};

/// Provides the kanji a learner knows as a single string.
///
/// The string may contain duplicates and non-kanji, callers deduplicate it.
/// Any failure is fatal to the analysis.
pub trait KnownKanjiSource {
    fn known_kanji(&self, levels: Option<&Levels>) -> crate::Result<String>;
}

/// A set of curriculum levels such as `1,2,5-7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    ranges: Vec<RangeInclusive<u32>>,
}

impl Levels {
    pub fn contains(&self, level: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(&level))
    }
}

impl FromStr for Levels {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidLevels(s.to_string());
        let parse = |n: &str| n.trim().parse::<u32>().map_err(|_| invalid());

        let mut ranges = vec![];
        for part in s.split(',') {
            let range = match part.split_once('-') {
                Some((start, end)) => parse(start)?..=parse(end)?,
                None => {
                    let level = parse(part)?;
                    level..=level
                }
            };
            if range.is_empty() {
                return Err(invalid());
            }
            ranges.push(range);
        }
        Ok(Self { ranges })
    }
}

impl fmt::Display for Levels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, range) in self.ranges.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}

/// Known kanji given directly as a string.
#[derive(Debug, Clone)]
pub struct StaticSource(pub String);

impl KnownKanjiSource for StaticSource {
    fn known_kanji(&self, levels: Option<&Levels>) -> crate::Result<String> {
        if let Some(levels) = levels {
            tracing::debug!("Known kanji given directly, ignoring levels {levels}");
        }
        Ok(self.0.clone())
    }
}

/// Known kanji exported into a file.
///
/// Each line is either `<level>:<kanji>` or just kanji without a level.
/// When filtering by levels, only lines with a matching level are used.
#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl KnownKanjiSource for FileSource {
    fn known_kanji(&self, levels: Option<&Levels>) -> crate::Result<String> {
        tracing::info!("Loading known kanji from {}", self.path.display());
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::collaborator_from(format!("failed to read '{}'", self.path.display()), e)
        })?;
        parse_known_kanji(&contents, levels)
    }
}

// lines look like "5:休体何" or "休体何"
fn parse_known_kanji(contents: &str, levels: Option<&Levels>) -> crate::Result<String> {
    let mut known = String::new();
    for (idx, line) in contents.lines().enumerate() {
        let (level, kanji) = match line.split_once(':') {
            Some((level, kanji)) => {
                let level = level.trim().parse::<u32>().map_err(|e| {
                    Error::collaborator_from(
                        format!("invalid level '{level}' on line {}", idx + 1),
                        e,
                    )
                })?;
                (Some(level), kanji)
            }
            None => (None, line),
        };
        let included = match (levels, level) {
            (None, _) => true,
            (Some(levels), Some(level)) => levels.contains(level),
            (Some(_), None) => false,
        };
        if included {
            known.extend(crate::kanji_in(kanji));
        }
    }
    Ok(known)
}
