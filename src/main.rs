pub mod app_dirs;
pub mod config;
pub mod engine;
pub mod history;
pub mod metrics;
pub mod report;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod util;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::Duration,
};

use crate::app_dirs::AppDirs;
use crate::config::{Config, ConfigStore, FileConfigStore};
use crate::engine::Engine;
use crate::runtime::{CrosstermEventSource, Event, EventSource, FixedTicker, Runner, Ticker};

/// How many ticks a transient status message stays on screen.
const STATUS_TICKS: u8 = 3;

/// sleek carbon-aware workload dashboard tui
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal dashboard that simulates the environmental footprint of an AI workload: live energy and carbon metrics, a progress gauge, a sliding emissions chart, and CSV report export."
)]
pub struct Cli {
    /// simulation tick interval in milliseconds
    #[clap(short = 't', long)]
    tick_ms: Option<u64>,

    /// directory where downloaded reports are written
    #[clap(short = 'o', long)]
    report_dir: Option<PathBuf>,

    /// begin the simulation immediately instead of idle
    #[clap(long)]
    autostart: bool,
}

/// CLI flags win over the saved config; the config wins over platform
/// fallbacks.
fn resolve_settings(cli: &Cli, cfg: &Config) -> (Duration, PathBuf) {
    let tick_ms = cli.tick_ms.unwrap_or(cfg.tick_ms).max(1);
    let report_dir = cli
        .report_dir
        .clone()
        .or_else(|| cfg.report_dir.clone())
        .unwrap_or_else(AppDirs::report_dir);
    (Duration::from_millis(tick_ms), report_dir)
}

/// Transient footer message, the terminal's stand-in for a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub text: String,
    ticks_left: u8,
}

impl StatusLine {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ticks_left: STATUS_TICKS,
        }
    }

    /// Returns true once the message has expired.
    fn decay(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}

#[derive(Debug)]
pub struct App {
    pub engine: Engine,
    pub report_dir: PathBuf,
    pub status: Option<StatusLine>,
}

impl App {
    pub fn new(report_dir: PathBuf) -> Self {
        Self {
            engine: Engine::new(),
            report_dir,
            status: None,
        }
    }

    /// Start when idle, pause when running; the single visible control.
    pub fn toggle(&mut self) {
        if self.engine.is_running() {
            self.engine.stop();
        } else {
            self.engine.start();
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.status = None;
    }

    pub fn download_report(&mut self) {
        if self.engine.state.history.is_empty() {
            self.set_status("Nothing to export yet, start the demo first");
            return;
        }
        match report::write(&self.engine.state, &self.report_dir) {
            Ok(path) => self.set_status(format!("Report saved to {}", path.display())),
            Err(err) => self.set_status(format!("Report failed: {}", err)),
        }
    }

    /// Tick routing: the engine only advances while running; the status
    /// message decays on every tick regardless.
    pub fn on_tick(&mut self) {
        if self.engine.is_running() {
            self.engine.tick();
        }
        if let Some(status) = &mut self.status {
            if status.decay() {
                self.status = None;
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine::new(text));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let cfg = store.load();
    let (tick, report_dir) = resolve_settings(&cli, &cfg);

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(report_dir);
    if cli.autostart {
        app.engine.start();
    }

    let runner = Runner::new(CrosstermEventSource::new(), FixedTicker::new(tick));
    let res = run(&mut terminal, &mut app, &runner);

    // best-effort: remember the resolved settings for the next session
    let _ = store.save(&Config {
        tick_ms: tick.as_millis() as u64,
        report_dir: Some(app.report_dir.clone()),
    });

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(app, f))?;

        match runner.step() {
            Event::Tick => app.on_tick(),
            Event::Resize => {}
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('s') | KeyCode::Char(' ') => app.toggle(),
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char('d') => app.download_report(),
                _ => {}
            },
        }
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    f.render_widget(app, f.area());
}
