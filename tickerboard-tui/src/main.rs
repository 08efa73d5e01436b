//! Tickerboard TUI — filterable market ticker table in the terminal.
//!
//! Keys: ←/→ switch quote-unit filter, ↑/↓ move the cursor, Enter opens
//! trading for the selected market, q quits. Mouse clicks on tabs and
//! trade buttons work too.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use tickerboard_core::{Catalog, MarketSnapshot, TableConfig};
use tickerboard_tui::{persistence, sample_data, ui, App};

#[derive(Parser)]
#[command(name = "tickerboard-tui", about = "Terminal market ticker board")]
struct Args {
    /// Market snapshot JSON (`{"markets": [...], "currencies": [...]}`).
    /// Bundled sample data when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Table config TOML.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Message catalog TOML for another locale.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log file. Defaults to the user cache directory.
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let base_dir = |dir: Option<PathBuf>| dir.unwrap_or_else(|| PathBuf::from(".")).join("tickerboard");
    let log_path = args
        .log
        .clone()
        .unwrap_or_else(|| base_dir(dirs::cache_dir()).join("tickerboard.log"));
    init_logging(&log_path)?;

    let state_path = base_dir(dirs::config_dir()).join("state.json");

    let snapshot = match &args.data {
        Some(path) => MarketSnapshot::load(path)?,
        None => sample_data::sample_snapshot(),
    };
    let config = TableConfig::load_or_default(args.config.as_deref())?;
    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::english(),
    };

    let mut app = App::new(snapshot, catalog, config);
    persistence::apply(&mut app, persistence::load(&state_path));

    // Restore the terminal before printing a panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    if let Err(err) = persistence::save(&state_path, &persistence::extract(&app)) {
        tracing::warn!(%err, "failed to save state");
    }

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps resize handling responsive
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

/// Logs go to a file; stderr would scribble over the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("opening log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
