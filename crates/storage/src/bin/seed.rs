use std::fmt;
use std::path::PathBuf;

use flashdeck_core::model::{UserPrefs, UserPrefsDraft};
use storage::repository::Storage;
use storage::{export_cards, sample_collection};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Args {
    db_url: String,
    scores: Vec<u32>,
    export: Option<PathBuf>,
    shuffle: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidScore { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidScore { raw } => {
                write!(f, "invalid --score value (expected 0..=100): {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_score(raw: String) -> Result<u32, ArgsError> {
    match raw.parse::<u32>() {
        Ok(score) if score <= 100 => Ok(score),
        _ => Err(ArgsError::InvalidScore { raw }),
    }
}

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("FLASHDECK_DB_URL")
            .unwrap_or_else(|_| flashdeck_core::model::DEFAULT_DATA_URL.into());
        let mut scores = Vec::new();
        let mut export = std::env::var("FLASHDECK_EXPORT").ok().map(PathBuf::from);
        let mut shuffle = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = value;
                }
                "--score" => {
                    let value = require_value(&mut args, "--score")?;
                    scores.push(parse_score(value)?);
                }
                "--export" => {
                    let value = require_value(&mut args, "--export")?;
                    export = Some(PathBuf::from(value));
                }
                "--shuffle" => shuffle = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            scores,
            export,
            shuffle,
        })
    }

    fn prefs(&self) -> Result<UserPrefs, ArgsError> {
        UserPrefsDraft {
            data_url: Some(self.db_url.clone()),
            style_sheet: None,
            shuffle_tests: self.shuffle,
        }
        .validate()
        .map_err(|_| ArgsError::InvalidDbUrl {
            raw: self.db_url.clone(),
        })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>         SQLite URL (default: sqlite:flashdeck.sqlite3?mode=rwc)");
    eprintln!("  --score <0..=100>         Append a performance score (repeatable)");
    eprintln!("  --export <file.json>      Also write the sample cards to an exchange file");
    eprintln!("  --shuffle                 Save preferences with shuffled tests enabled");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  FLASHDECK_DB_URL, FLASHDECK_EXPORT");
    eprintln!("Logging is controlled by RUST_LOG (default: info).");
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let prefs = args.prefs()?;

    let storage = Storage::sqlite(&args.db_url).await?;
    let sample = sample_collection();
    storage.collection.save_collection(&sample).await?;
    storage.prefs.save_prefs(&prefs).await?;
    for score in &args.scores {
        storage.performance.append_score(*score).await?;
    }

    if let Some(path) = &args.export {
        let written = export_cards(path, &sample.cards)?;
        tracing::info!(path = %path.display(), cards = written, "exported sample cards");
    }

    println!(
        "Seeded {} cards, {} deadlines and {} scores into {}",
        sample.cards.len(),
        sample.deadlines.len(),
        args.scores.len(),
        args.db_url
    );

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
