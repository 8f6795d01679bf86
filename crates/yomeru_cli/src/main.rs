//! Prints how much of the given texts can be read with the learner's known kanji.

mod cli;

use clap::Parser;
use cli::{Cli, Format};
use eyre::WrapErr;
use std::{env, path::PathBuf};
use yomeru::{Config, FileSource, KnownKanjiSource, Levels, OutputFormat, StaticSource};

const DEFAULT_CURRICULUM: &str = "wkkanji.txt";

fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config = config_from_cli(&cli)?;
    let source: Box<dyn KnownKanjiSource> = match (cli.known.known, cli.known.known_kanji) {
        (Some(path), _) => Box::new(FileSource::new(path)),
        (None, Some(kanji)) => Box::new(StaticSource(kanji)),
        (None, None) => eyre::bail!("No known kanji given"),
    };

    let analysis = yomeru::analyse(&config, source.as_ref()).wrap_err("Analysis failed")?;
    tracing::info!(
        "Analysed {} kanji against {} known and {} curriculum kanji",
        analysis.extraction.kanji.len(),
        analysis.known_size,
        analysis.curriculum_size
    );
    let report = analysis.report();
    let format = match cli.format {
        Format::Text => OutputFormat::Text,
        Format::Json => OutputFormat::Json,
    };
    print!("{}", report.render(format)?);
    if cli.list {
        print!("{}", report.kanji_listing());
    }
    Ok(())
}

fn config_from_cli(cli: &Cli) -> eyre::Result<Config> {
    let curriculum = match &cli.curriculum {
        Some(curriculum) => curriculum.clone(),
        None => env::var("YOMERU_CURRICULUM")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CURRICULUM)),
    };
    let levels = cli
        .levels
        .as_deref()
        .map(str::parse::<Levels>)
        .transpose()
        .wrap_err("Invalid --levels")?;
    if let Some(levels) = &levels {
        tracing::info!("Counting known kanji only for levels {levels}");
    }
    for input in &cli.inputs {
        tracing::info!("Input file: {}", input.display());
    }
    Ok(Config {
        curriculum,
        inputs: cli.inputs.clone(),
        levels,
    })
}
