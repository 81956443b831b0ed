//! Folio TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_core::{nav_entries, region_ids, validate_nav_targets, Field, Profile};
use folio_tui::config::TuiConfig;
use folio_tui::error::TuiError;
use folio_tui::events::TuiEvent;
use folio_tui::keys::{map_key, Action};
use folio_tui::state::App;
use folio_tui::views::render_page;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config)?;

    let profile = match &config.profile_path {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };
    validate_nav_targets(&nav_entries(), &region_ids())?;

    let mut app = App::new(config, profile, Instant::now());

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let size = terminal.size()?;
    app.relayout(size.width, size.height);
    app.observe_now();

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_page(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.on_tick(Instant::now());
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event) {
                    break;
                }
            }
        }
    }

    app.detach();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn init_logging(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::options()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn handle_event(app: &mut App, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => {
            // Ctrl+C always quits, even while the form has focus.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }
            if app.form.focus.is_some() {
                handle_form_key(app, key);
                return false;
            }
            if let Some(action) = map_key(key) {
                return handle_action(app, action);
            }
        }
        TuiEvent::Resize { width, height } => {
            app.relayout(width, height);
            app.observe_now();
        }
        TuiEvent::Tick => {}
    }
    false
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.form.focus = None,
        KeyCode::Tab => app.form.focus_next(),
        KeyCode::BackTab => app.form.focus_previous(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.submit_form(),
        // Enter submits from the single-line fields; in the message field
        // it inserts a newline.
        KeyCode::Enter if app.form.focus != Some(Field::Message) => app.submit_form(),
        _ => app.form.input(key),
    }
}

fn handle_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::ToggleMenu => app.toggle_menu(),
        Action::ToggleLinks => app.toggle_links(),
        Action::OpenHelp => app.open_help(),
        Action::FocusForm => app.focus_form(),
        Action::DownloadCv => app.download_cv(),
        Action::Confirm => app.confirm(),
        Action::Cancel => app.cancel(),
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollDown => app.scroll_down(),
        Action::PageUp => app.page_up(),
        Action::PageDown => app.page_down(),
        Action::ScrollTop => app.scroll_to_top(),
        Action::ScrollBottom => app.scroll_to_bottom(),
        Action::NextEntry => app.navigate_adjacent(1),
        Action::PrevEntry => app.navigate_adjacent(-1),
        Action::JumpTo(index) => app.jump_to(index),
    }
    false
}
