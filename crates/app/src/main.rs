use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Difficulty, Mode};
use services::{AppServices, Clock, GameLoopService, RecordsService, load_bank};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMode { raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMode { raw } => {
                write!(f, "invalid --mode value: {raw} (expected easy, medium, hard or mixed)")
            }
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
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
    game_loop: Arc<GameLoopService>,
    records: Arc<RecordsService>,
    initial_mode: Mode,
    sound_enabled: bool,
}

impl UiApp for DesktopApp {
    fn game_loop(&self) -> Arc<GameLoopService> {
        Arc::clone(&self.game_loop)
    }

    fn records(&self) -> Arc<RecordsService> {
        Arc::clone(&self.records)
    }

    fn initial_mode(&self) -> Mode {
        self.initial_mode
    }

    fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }
}

struct Args {
    db_url: String,
    bank: Option<PathBuf>,
    mode: Mode,
    muted: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui         [--db <sqlite_url>] [--bank <file.json>] [--mode <mode>] [--mute]");
    eprintln!("  cargo run -p app -- check-bank [--bank <file.json>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --db sqlite://quiz.sqlite3");
    eprintln!("  --mode mixed");
    eprintln!("  built-in questions when --bank is omitted");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_DB_URL, QUIZ_BANK, QUIZ_MODE, QUIZ_MUTE=1, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    CheckBank,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check-bank" => Some(Self::CheckBank),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("QUIZ_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://quiz.sqlite3".into(), normalize_sqlite_url);
        let mut bank = std::env::var_os("QUIZ_BANK").map(PathBuf::from);
        let mut mode = match std::env::var("QUIZ_MODE") {
            Ok(raw) => raw.parse().map_err(|_| ArgsError::InvalidMode { raw })?,
            Err(_) => Mode::Mixed,
        };
        let mut muted = std::env::var("QUIZ_MUTE").is_ok_and(|value| value == "1");

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
                    bank = Some(PathBuf::from(require_value(args, "--bank")?));
                }
                "--mode" => {
                    let value = require_value(args, "--mode")?;
                    mode = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidMode { raw: value.clone() })?;
                }
                "--mute" => muted = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            db_url,
            bank,
            mode,
            muted,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
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

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

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

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let bank = load_bank(parsed.bank.as_deref())?;

    match cmd {
        Command::CheckBank => {
            let source = parsed
                .bank
                .as_ref()
                .map_or_else(|| "built-in bank".to_owned(), |path| path.display().to_string());
            println!("{source}: {} questions", bank.len());
            for difficulty in Difficulty::ALL {
                println!("  {:<6} {}", difficulty.as_str(), bank.count(difficulty));
            }
            Ok(())
        }
        Command::Ui => {
            prepare_sqlite_file(&parsed.db_url)?;
            let services =
                AppServices::new_sqlite(&parsed.db_url, Clock::system(), bank).await?;
            log::info!(
                "launching ui: mode={} sound={}",
                parsed.mode.as_str(),
                if parsed.muted { "off" } else { "on" }
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                game_loop: services.game_loop(),
                records: services.records(),
                initial_mode: parsed.mode,
                sound_enabled: !parsed.muted,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Math Quiz")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
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
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        log::error!("{err}");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
