use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Estimates how much of a Japanese text you can read with the kanji you know.
#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The texts to analyse.
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
    /// The path to a file containing every kanji of the curriculum.
    /// Defaults to $YOMERU_CURRICULUM or wkkanji.txt.
    #[arg(short, long)]
    pub curriculum: Option<PathBuf>,
    #[command(flatten)]
    pub known: Known,
    /// Only count known kanji from these levels, e.g. 1,2,5-7.
    #[arg(short, long)]
    pub levels: Option<String>,
    /// The format of the report.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Also list the kanji in each class.
    #[arg(long)]
    pub list: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Known {
    /// The path to a file with your known kanji, one `<level>:<kanji>` entry per line.
    #[arg(short, long)]
    pub known: Option<PathBuf>,
    /// Your known kanji as a string.
    #[arg(long)]
    pub known_kanji: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Text,
    Json,
}
