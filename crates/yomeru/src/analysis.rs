//! Runs a complete analysis from files.

use crate::{
    extract, CharacterSet, Classification, Extraction, Frequencies, KnownKanjiSource, Levels,
    Report,
};
use std::path::PathBuf;

/// Everything needed for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// A file containing every kanji of the curriculum.
    pub curriculum: PathBuf,
    /// The texts to analyse, treated as one text.
    pub inputs: Vec<PathBuf>,
    /// Restricts the learner's known kanji to these levels.
    pub levels: Option<Levels>,
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub curriculum_size: usize,
    pub known_size: usize,
    pub extraction: Extraction,
    pub text_unique: CharacterSet,
    pub classification: Classification,
    pub frequencies: Frequencies,
}

impl Analysis {
    pub fn report(&self) -> Report {
        Report::new(&self.text_unique, &self.classification, &self.frequencies)
    }
}

/// Reads the curriculum, fetches the learner's known kanji and analyses the inputs.
///
/// Stops at the first file that can't be read or if the known kanji are unavailable.
pub fn analyse(config: &Config, source: &dyn KnownKanjiSource) -> crate::Result<Analysis> {
    tracing::info!("Reading curriculum");
    let curriculum = extract::read_files(std::slice::from_ref(&config.curriculum))?;
    let curriculum = CharacterSet::dedup(&curriculum.kanji);

    let known = source.known_kanji(config.levels.as_ref())?;
    let known = crate::kanji_in(&known).collect::<CharacterSet>();
    tracing::info!(
        "You already know {}/{} of the curriculum kanji",
        known.iter().filter(|k| curriculum.contains(*k)).count(),
        curriculum.len()
    );

    tracing::info!("Reading texts");
    let text = extract::read_files(config.inputs.as_slice())?;
    Ok(analyse_text(&curriculum, &known, text))
}

/// Analyses already extracted text.
pub fn analyse_text(curriculum: &CharacterSet, known: &CharacterSet, text: Extraction) -> Analysis {
    if text.kanji.is_empty() {
        tracing::warn!("No kanji found in {} characters of text", text.total_chars);
    }
    let text_unique = CharacterSet::dedup(&text.kanji);
    let classification = Classification::classify(curriculum, known, &text_unique);
    let frequencies = Frequencies::score(&classification, &text);
    Analysis {
        curriculum_size: curriculum.len(),
        known_size: known.len(),
        extraction: text,
        text_unique,
        classification,
        frequencies,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Error, StaticSource};

    struct FailingSource;

    impl KnownKanjiSource for FailingSource {
        fn known_kanji(&self, _levels: Option<&Levels>) -> crate::Result<String> {
            Err(Error::collaborator_from(
                "unreachable service",
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            ))
        }
    }

    #[test]
    fn analyses_text() {
        let analysis = analyse_text(
            &CharacterSet::from("木水火"),
            &CharacterSet::from("木"),
            Extraction::from_lines(["木木水山"]),
        );
        assert_eq!(analysis.curriculum_size, 3);
        assert_eq!(analysis.known_size, 1);
        assert_eq!(analysis.text_unique.to_string(), "木水山");
        assert_eq!(analysis.frequencies.known.percentage, 50.0);
        assert_eq!(analysis.frequencies.not_in_curriculum.percentage, 25.0);
    }

    #[test]
    fn text_without_kanji() {
        let analysis = analyse_text(
            &CharacterSet::from("木水火"),
            &CharacterSet::from("木"),
            Extraction::from_lines(["no kanji here", "かなだけ"]),
        );
        assert!(analysis.text_unique.is_empty());
        assert_eq!(analysis.classification, Classification::default());
        assert_eq!(analysis.frequencies.density, 0.0);
        assert_eq!(analysis.frequencies.known.percentage, 0.0);
    }

    #[test]
    fn known_kanji_ignore_non_kanji() {
        let dir = tempfile::tempdir().unwrap();
        let curriculum = dir.path().join("curriculum.txt");
        std::fs::write(&curriculum, "木水火").unwrap();
        let config = Config {
            curriculum,
            inputs: vec![],
            levels: None,
        };
        let analysis = analyse(&config, &StaticSource("木, 水 and more".to_string())).unwrap();
        assert_eq!(analysis.known_size, 2);
        assert_eq!(analysis.curriculum_size, 3);
    }

    #[test]
    fn missing_curriculum_is_input_unavailable() {
        let config = Config {
            curriculum: "/definitely/not/here.txt".into(),
            inputs: vec![],
            levels: None,
        };
        let err = analyse(&config, &StaticSource(String::new())).unwrap_err();
        assert!(matches!(err, Error::InputUnavailable { .. }), "{err:?}");
    }

    #[test]
    fn source_failure_stops_analysis() {
        let dir = tempfile::tempdir().unwrap();
        let curriculum = dir.path().join("curriculum.txt");
        std::fs::write(&curriculum, "木水火").unwrap();
        let config = Config {
            curriculum,
            inputs: vec![dir.path().join("missing.txt")],
            levels: None,
        };
        let err = analyse(&config, &FailingSource).unwrap_err();
        assert!(matches!(err, Error::CollaboratorFailure { .. }), "{err:?}");
    }
}
