//! slidekit TUI — a mouse-driven slider in the terminal.
//!
//! Rows:
//! 1. Header — range, step, committed value
//! 2. Tooltip — value above the handle while hovering
//! 3. Track — filled bar and handle
//! 4. Tickmarks and labels
//! 5. Event log — `input` / `change` notifications

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use slidekit_tui::app::ConfigLoad;
use slidekit_tui::{input, persistence, ui, AppState};

/// Overrides the config file location.
const CONFIG_ENV: &str = "SLIDEKIT_CONFIG";

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        default_hook(info);
    }));

    // Paths
    let app_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("slidekit");
    let state_path = app_dir.join("state.json");
    let config_path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| app_dir.join("slider.toml"));

    init_logging(&app_dir.join("slidekit.log"))?;

    let mut app = AppState::from_config_load(&ConfigLoad::read(&config_path));
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Tickmarks need a track width before the first frame.
    let size = terminal.size()?;
    app.host
        .set_track(ui::layout(Rect::new(0, 0, size.width, size.height)).track);
    app.refresh_tickmarks();

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Save state before exit
    if let Err(err) = persistence::save(&state_path, &persistence::extract(&app)) {
        tracing::warn!(%err, "failed to save state");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

/// Log to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Layout + render
        terminal.draw(|f| {
            let areas = ui::layout(f.area());
            app.host.set_track(areas.track);
            ui::draw(f, &areas, app);
        })?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::FocusLost => input::handle_focus_lost(app),
                _ => {}
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
