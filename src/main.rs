mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use repobrowse::config::Config;
use repobrowse::input::map_key_to_intent;
use repobrowse::view;
use repobrowse::viewmodel::{Action, AppViewModel};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = init_logging(cli.log_file.as_deref())?;

    let mut config = Config::load()?;
    cli.apply_to(&mut config);
    let registry = config.registry()?;
    if registry.is_empty() {
        bail!("No repositories to browse: pass repository paths or set REPOBROWSE_REPOS");
    }
    info!(repos = registry.len(), log = %log_path.display(), "starting");

    let app = AppViewModel::start(registry, cli.ref_id.as_deref(), &cli.path)
        .context("Could not open repository")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: AppViewModel) -> Result<()> {
    loop {
        terminal.draw(|f| view::render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(intent) = map_key_to_intent(&key, app.view_mode(), app.can_go_back()) {
                    match app.handle_intent(intent) {
                        Action::Quit => break,
                        Action::Redraw => {}
                    }
                }
            }
        }
    }
    Ok(())
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(log_file: Option<&Path>) -> Result<PathBuf> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = dirs::cache_dir()
                .context("Could not determine cache directory")?
                .join("repobrowse");
            fs::create_dir_all(&dir)?;
            dir.join("repobrowse.log")
        }
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Could not open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env("REPOBROWSE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}
