use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use account_tracker::app::{App, StatusLevel};
use account_tracker::config;
use account_tracker::domain::KeyGenerator;
use account_tracker::infrastructure::EvmKeyGenerator;
use account_tracker::services::AccountPipeline;
use account_tracker::store::{AccountStore, SqliteAccountStore};
use account_tracker::ui;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(
    name = "account-tracker",
    version,
    about = "Create and track EVM accounts from the terminal"
)]
struct Args {
    /// SQLite database file (overrides `db_path` in the config)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Log file (overrides `log_file` in the config)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load();

    let log_path = args
        .log_file
        .clone()
        .or_else(|| config.log_file())
        .unwrap_or_else(|| PathBuf::from("debug.log"));
    let _guard = init_logging(&log_path, config.log_level())?;

    let db_path = args
        .db
        .clone()
        .or_else(|| config.db_path())
        .unwrap_or_else(|| PathBuf::from("accounts.sqlite3"));
    let store = open_store(&db_path).inspect_err(|err| error!(error = ?err, "store init failed"))?;
    info!(db = %db_path.display(), "store ready");

    let pipeline = AccountPipeline::new(EvmKeyGenerator::new(), store);

    let mut app = App::new();
    match pipeline.accounts() {
        Ok(accounts) => app.set_accounts(accounts),
        Err(err) => {
            error!(error = %err, "failed to load accounts");
            app.set_status(format!("Failed to load accounts: {err}"), StatusLevel::Warn);
        }
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &pipeline);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "event loop failed");
        eprintln!("{err:?}");
    }
    info!("exit");

    Ok(())
}

fn init_logging(path: &Path, level: &str) -> Result<WorkerGuard> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Ok(guard)
}

fn open_store(path: &Path) -> Result<SqliteAccountStore> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create data dir {}", parent.display()))?;
    }
    let store = SqliteAccountStore::open(path)?;
    store.migrate()?;
    Ok(store)
}

fn run_app<B, K, S>(
    terminal: &mut Terminal<B>,
    mut app: App,
    pipeline: &AccountPipeline<K, S>,
) -> Result<()>
where
    B: ratatui::backend::Backend,
    K: KeyGenerator,
    S: AccountStore,
{
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key, pipeline);
                }
            }
        }

        if let Some(text) = app.take_copy_request() {
            copy_to_clipboard(&mut app, text);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn copy_to_clipboard(app: &mut App, text: String) {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => {
            if clipboard.set_text(&text).is_ok() {
                app.set_status(format!("Copied: {text}"), StatusLevel::Info);
            } else {
                app.set_status("Failed to copy to clipboard", StatusLevel::Error);
            }
        }
        Err(_) => {
            app.set_status("Clipboard not available", StatusLevel::Error);
        }
    }
}
