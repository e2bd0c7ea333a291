pub mod commands;
pub mod events;
pub mod state;
pub mod ui;
pub mod utils;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::CliError;
use crate::i18n::Text;
use events::handle_key;
use state::{App, AppEvent};
use ui::draw_ui;

pub fn run(runtime: tokio::runtime::Handle, workspace_root: PathBuf) -> Result<(), CliError> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(runtime, workspace_root, tx)?;

    let banner = format!("{} · {}", app.tr(Text::AppName), app.tr(Text::AppTagline));
    app.push_message(banner);
    app.push_message("Type /help to see commands.");
    app.push_message("");
    commands::render_view(&mut app);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    // Enable Mouse Capture
    execute!(stdout, EnterAlternateScreen, event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, &mut rx);

    disable_raw_mode()?;
    // Disable Mouse Capture
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        event::DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), CliError> {
    while !app.should_quit {
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Check for async events
        while let Ok(event) = rx.try_recv() {
            match event {
                AppEvent::ExportDone(Ok((path, bytes))) => {
                    tracing::info!(path = %path.display(), bytes, "export written");
                    app.push_message(format!(
                        "export written: {} ({bytes} bytes)",
                        path.display()
                    ));
                }
                AppEvent::ExportDone(Err(err)) => {
                    tracing::warn!(error = %err, "export failed");
                    app.push_message(format!("export failed: {err}"));
                }
            }
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                event::Event::Key(key) => handle_key(app, key)?,
                event::Event::Mouse(mouse) => match mouse.kind {
                    event::MouseEventKind::ScrollDown => {
                        app.scroll_offset = app.scroll_offset.saturating_sub(1);
                    }
                    event::MouseEventKind::ScrollUp => {
                        app.scroll_offset = app.scroll_offset.saturating_add(1);
                    }
                    _ => {}
                },
                _ => {}
            }
        }
    }
    Ok(())
}
