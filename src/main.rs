use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use runlog::{
    app::{Action, App},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore, Theme},
    journal::Journal,
    logging,
    persistence::{FileStore, StoreBackend},
    runtime::{self, Clock, CrosstermEventSource, LocalClock, Runner},
    ui,
};
use tracing::{info, warn};

const TICK_RATE_MS: u64 = 1000;

/// personal running log with pace, calorie and daily target tracking
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Log runs by distance, duration and body weight; see pace, speed and calories, track a daily distance target and browse your history."
)]
pub struct Cli {
    /// running log file to use instead of the one in the state directory
    #[clap(short = 'd', long)]
    data_file: Option<PathBuf>,

    /// colour theme for this run (saved themes are toggled with ctrl+t)
    #[clap(short = 't', long, value_enum)]
    theme: Option<Theme>,
}

impl Cli {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.data_file {
            config.data_file = Some(path.clone());
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    // Logging is best effort, but say so while the terminal is still ours.
    let log_path = AppDirs::log_path();
    if let Err(e) = logging::init(&log_path) {
        eprintln!("runlog: logging disabled, {}: {e}", log_path.display());
    }

    let config_store = FileConfigStore::new();
    let saved = config_store.load();
    let config = cli.apply(saved.clone());
    let data_path = config.data_path();
    info!(path = %data_path.display(), theme = %config.theme, "starting runlog");

    let (journal, load_status) = Journal::open(FileStore::with_path(&data_path));
    let mut app = App::new(journal, &load_status, config.theme, LocalClock.now().date());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = start_tui(&mut terminal, &mut app, &config_store, saved);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.shutdown() {
        eprintln!("runlog: {e}");
    }
    info!("exiting runlog");

    result
}

fn start_tui<B: Backend, S: StoreBackend>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
    config_store: &FileConfigStore,
    mut saved: Config,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        LocalClock,
        Duration::from_millis(TICK_RATE_MS),
    );

    loop {
        terminal.draw(|f| ui::draw(app, f))?;

        match runtime::dispatch(app, runner.step()) {
            Action::Continue => {}
            Action::ThemeChanged(theme) => {
                // Only the theme is persisted; command-line overrides stay per-run.
                saved.theme = theme;
                if let Err(e) = config_store.save(&saved) {
                    warn!(error = %e, "failed to save config");
                }
            }
            Action::Quit => break,
        }
    }

    Ok(())
}
