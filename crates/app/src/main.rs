use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use kids_core::model::{AppState, PREP_STEPS};
use services::{
    AppServices, AudioBackend, Clock, FeedbackService, GameLoopService, NullAudio,
    ProgressService,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::vm::{map_home_cards, voice_button_label};
use ui::{App, UiApp, WebviewAudio, build_app_context};

const APP_DIR: &str = "kids-learning";
const DB_FILE: &str = "progress.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
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
    initial_state: AppState,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn initial_state(&self) -> AppState {
        self.initial_state
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn game_loop(&self) -> Arc<GameLoopService> {
        self.services.game_loop()
    }

    fn feedback(&self) -> Arc<FeedbackService> {
        self.services.feedback()
    }
}

struct Args {
    db_url: String,
    verbose: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--verbose]");
    eprintln!("  cargo run -p app -- show  [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db <data dir>/{APP_DIR}/{DB_FILE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  KIDS_DB_URL, KIDS_LOG_VERBOSE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Show,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "show" => Some(Self::Show),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("KIDS_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(default_db_url, normalize_sqlite_url);
        let mut verbose = env_flag("KIDS_LOG_VERBOSE");

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--verbose" | "-v" => verbose = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, verbose })
    }
}

fn default_db_url() -> String {
    let dir = dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."));
    format!("sqlite://{}", dir.join(DB_FILE).display())
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

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,app={level},ui={level},services={level},storage={level}"
        ))
    });
    // Ignore a second init; the desktop runtime may install its own subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

async fn load_state(services: &AppServices) -> AppState {
    match services.progress().load().await {
        Ok(state) => state,
        Err(err) => {
            warn!(error = %err, "could not read progress, starting fresh");
            AppState::default()
        }
    }
}

fn print_progress(state: &mut AppState) {
    println!("{}", voice_button_label(state.voice_on));
    for card in map_home_cards(state) {
        println!("{}: {}", card.title, card.meta);
    }
    let index = state.progress.prep.step_index.min(PREP_STEPS.len() - 1);
    let step = state.prep_step();
    println!(
        "Prep step: {}/{} ({})",
        index + 1,
        PREP_STEPS.len(),
        step.title
    );
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the window.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(parsed.verbose);

    prepare_sqlite_file(&parsed.db_url)?;
    let clock = Clock::default_clock();
    let audio: Arc<dyn AudioBackend> = match cmd {
        Command::Ui => Arc::new(WebviewAudio),
        Command::Show | Command::Reset => Arc::new(NullAudio),
    };
    let services = AppServices::new_sqlite(&parsed.db_url, clock, audio).await?;
    info!(db = %parsed.db_url, ?cmd, "storage ready");

    match cmd {
        Command::Ui => {
            let initial_state = load_state(&services).await;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                initial_state,
                services,
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Kids Learning")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Show => {
            let mut state = services.progress().load().await?;
            print_progress(&mut state);
            Ok(())
        }
        Command::Reset => {
            let mut state = services.progress().load().await?;
            services.progress().reset(&mut state).await?;
            println!("Progress reset.");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn relative_paths_become_absolute_urls() {
        let url = normalize_sqlite_url("sqlite:progress.sqlite3".to_string());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("progress.sqlite3"), "{url}");
    }

    #[test]
    fn memory_and_full_urls_pass_through() {
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".to_string()),
            "sqlite::memory:"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/kids.sqlite3".to_string()),
            "sqlite:///tmp/kids.sqlite3"
        );
    }

    #[test]
    fn default_url_points_at_the_app_file() {
        let url = default_db_url();
        assert!(url.starts_with("sqlite://"), "{url}");
        assert!(url.ends_with(DB_FILE), "{url}");
    }

    #[test]
    fn flags_are_parsed() {
        let args = parse(&["--db", "sqlite:///tmp/x.sqlite3", "--verbose"]).unwrap();
        assert_eq!(args.db_url, "sqlite:///tmp/x.sqlite3");
        assert!(args.verbose);
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert!(matches!(
            parse(&["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(&["--db", "  "]),
            Err(ArgsError::InvalidDbUrl { .. })
        ));
        assert!(matches!(
            parse(&["--nope"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn memory_db_needs_no_file() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://x").is_err());
    }
}
