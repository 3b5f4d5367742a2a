use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::QuestionBank;
use services::{AppServices, BankSource, QuizSession};
use storage::repository::Storage;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://quiz.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidBankPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBankPath { raw } => write!(f, "invalid --bank value: {raw}"),
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

struct DesktopApp {
    session: Option<QuizSession>,
}

impl UiApp for DesktopApp {
    fn initial_session(&self) -> Option<QuizSession> {
        self.session.clone()
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    bank: BankSource,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--db <sqlite_url>] [--bank <path>]");
    eprintln!("  cargo run -p app -- report [--db <sqlite_url>] [--bank <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --bank (bundled 24-question bank)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_BANK, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Report,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "report" => Some(Self::Report),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("QUIZ_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url);
        let mut bank = std::env::var("QUIZ_BANK")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or(BankSource::Bundled, |path| BankSource::File(PathBuf::from(path)));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--bank" => {
                    let value = require_value(args, "--bank")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBankPath { raw: value });
                    }
                    bank = BankSource::File(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, bank })
    }
}

/// In-memory and `sqlite:file:` URIs are handed to sqlx untouched.
fn is_uri_form(url: &str) -> bool {
    url == "sqlite::memory:" || url.starts_with("sqlite:file:")
}

fn normalize_sqlite_url(raw: String) -> String {
    if is_uri_form(&raw) || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Answers are best-effort: if the database cannot be opened the window still
/// works, it just forgets everything on exit.
async fn open_storage(db_url: &str) -> Storage {
    let opened = match prepare_sqlite_file(db_url) {
        Ok(()) => Storage::sqlite(db_url).await.map_err(|err| err.to_string()),
        Err(err) => Err(err.to_string()),
    };
    opened.unwrap_or_else(|err| {
        warn!(db_url, error = %err, "answer storage unavailable, keeping answers in memory");
        Storage::in_memory()
    })
}

async fn restore_session(bank: QuestionBank, storage: &Storage) -> QuizSession {
    AppServices::from_parts(bank, storage).restore_session().await
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    info!(command = ?cmd, db_url = %parsed.db_url, bank = ?parsed.bank, "starting");

    match cmd {
        Command::Ui => {
            // A bad bank still opens the window; it shows the empty-bank message.
            let session = match parsed.bank.load() {
                Ok(bank) => {
                    let storage = open_storage(&parsed.db_url).await;
                    Some(restore_session(bank, &storage).await)
                }
                Err(err) => {
                    error!(error = %err, "question bank unavailable");
                    None
                }
            };

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { session });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            // Explicitly disable it so the app doesn't behave like a modal window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("DISC Questionnaire")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Report => {
            let bank = parsed.bank.load()?;
            let storage = open_storage(&parsed.db_url).await;
            let report = restore_session(bank, &storage).await.report();
            match report.nudge() {
                Some(nudge) => println!("{nudge}"),
                None => println!("{}", report.summary_text()),
            }
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if is_uri_form(db_url) {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
