//! Extracts kanji from text.

use crate::{error::Error, is_kanji, CharacterSequence};
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// The kanji found in some text along with the amount of characters scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Every kanji in order of appearance.
    pub kanji: CharacterSequence,
    /// Every character scanned, kanji or not. Line terminators are not counted.
    pub total_chars: usize,
}

impl Extraction {
    pub fn push_line(&mut self, line: &str) {
        for c in line.chars() {
            self.total_chars += 1;
            if is_kanji(c) {
                self.kanji.push(c);
            }
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut extraction = Self::default();
        for line in lines {
            extraction.push_line(line.as_ref());
        }
        extraction
    }

    /// Invalid UTF-8 is counted as replacement characters instead of failing.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut extraction = Self::default();
        let mut buf = vec![];
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = buf
                .strip_suffix(b"\n")
                .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
                .unwrap_or(&buf[..]);
            extraction.push_line(&String::from_utf8_lossy(line));
        }
        Ok(extraction)
    }

    /// Appends the results of another extraction, e.g. from the next file.
    pub fn extend(&mut self, other: Extraction) {
        self.kanji.append(other.kanji);
        self.total_chars += other.total_chars;
    }

    /// The percentage of scanned characters that are kanji.
    pub fn density(&self) -> f64 {
        if self.total_chars == 0 {
            return 0.0;
        }
        self.kanji.len() as f64 / self.total_chars as f64 * 100.0
    }
}

/// Extracts the kanji of a single file.
pub fn read_file(path: &Path) -> crate::Result<Extraction> {
    let file = File::open(path).map_err(|e| Error::input_unavailable(path, e))?;
    Extraction::from_reader(BufReader::new(file)).map_err(|e| Error::input_unavailable(path, e))
}

/// Extracts the kanji of all the files, in order, as if they were one text.
pub fn read_files<P: AsRef<Path>>(paths: &[P]) -> crate::Result<Extraction> {
    let mut extraction = Extraction::default();
    for path in paths {
        let path = path.as_ref();
        tracing::info!("Reading {}", path.display());
        let file_extraction = read_file(path)?;
        tracing::debug!(
            "{} kanji in {} characters",
            file_extraction.kanji.len(),
            file_extraction.total_chars
        );
        extraction.extend(file_extraction);
    }
    Ok(extraction)
}
