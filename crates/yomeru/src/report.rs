//! Presents the results of an analysis.

use crate::{Bucket, CharacterSet, Classification, Frequencies};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
    pub kanji: String,
}

impl Row {
    fn new(label: &'static str, bucket: Bucket, kanji: &CharacterSet) -> Self {
        Self {
            label,
            count: bucket.count,
            percentage: bucket.percentage,
            kanji: kanji.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub all: Row,
    pub known: Row,
    pub unknown: Row,
    pub unknown_in_curriculum: Row,
    pub not_in_curriculum: Row,
    pub density: f64,
}

impl Report {
    /// `text_unique` is only used for listing, the counts come from `frequencies`.
    pub fn new(
        text_unique: &CharacterSet,
        classification: &Classification,
        frequencies: &Frequencies,
    ) -> Self {
        Self {
            all: Row::new("All", frequencies.all, text_unique),
            known: Row::new("Known", frequencies.known, &classification.known),
            unknown: Row::new("Unknown", frequencies.unknown, &classification.unknown),
            unknown_in_curriculum: Row::new(
                "In curriculum",
                frequencies.unknown_in_curriculum,
                &classification.unknown_in_curriculum,
            ),
            not_in_curriculum: Row::new(
                "Not in curriculum",
                frequencies.not_in_curriculum,
                &classification.not_in_curriculum,
            ),
            density: frequencies.density,
        }
    }

    /// The (label, count, percentage) tuples in display order.
    pub fn rows(&self) -> [(&'static str, usize, f64); 5] {
        [
            &self.all,
            &self.known,
            &self.unknown,
            &self.unknown_in_curriculum,
            &self.not_in_curriculum,
        ]
        .map(|r| (r.label, r.count, r.percentage))
    }

    pub fn render(&self, format: OutputFormat) -> crate::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Lists the kanji of each non-empty class, one class per line.
    pub fn kanji_listing(&self) -> String {
        let mut listing = String::new();
        for row in [
            &self.known,
            &self.unknown_in_curriculum,
            &self.not_in_curriculum,
        ] {
            if !row.kanji.is_empty() {
                listing.push_str(&format!("{}: {}\n", row.label, row.kanji));
            }
        }
        listing
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (label, count, percentage)) in self.rows().into_iter().enumerate() {
            // the last two rows are a breakdown of the unknown kanji
            let indent = if idx >= 3 { "   " } else { "" };
            writeln!(f, "{indent}{label}: {count}\t{percentage:.1}%")?;
        }
        writeln!(f, "Kanji percent in texts: {:.1}%", self.density)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Extraction;

    fn report(curriculum: &str, known: &str, text: &str) -> Report {
        let extraction = Extraction::from_lines([text]);
        let text_unique = CharacterSet::dedup(&extraction.kanji);
        let classification = Classification::classify(
            &CharacterSet::from(curriculum),
            &CharacterSet::from(known),
            &text_unique,
        );
        let frequencies = Frequencies::score(&classification, &extraction);
        Report::new(&text_unique, &classification, &frequencies)
    }

    #[test]
    fn renders_text() {
        let report = report("木水火", "木", "木木水山");
        let text = report.render(OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "All: 3\t100.0%\n\
             Known: 1\t50.0%\n\
             Unknown: 2\t50.0%\n   \
             In curriculum: 1\t25.0%\n   \
             Not in curriculum: 1\t25.0%\n\
             Kanji percent in texts: 100.0%\n"
        );
    }

    #[test]
    fn renders_json() {
        let report = report("木水火", "木", "木木水山です");
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["known"]["count"], 1);
        assert_eq!(value["known"]["kanji"], "木");
        assert_eq!(value["not_in_curriculum"]["kanji"], "山");
        assert_eq!(value["unknown"]["percentage"], 50.0);
        assert!((value["density"].as_f64().unwrap() - 4.0 / 6.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn rows_are_in_display_order() {
        let labels = report("", "", "").rows().map(|r| r.0);
        assert_eq!(
            labels,
            ["All", "Known", "Unknown", "In curriculum", "Not in curriculum"]
        );
    }

    #[test]
    fn lists_non_empty_classes() {
        let listing = report("木水火", "木", "木水").kanji_listing();
        assert_eq!(listing, "Known: 木\nIn curriculum: 水\n");
    }
}
