use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::CliError;
use crate::tui::commands::{command_palette_matches, execute_command};
use crate::tui::state::App;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), CliError> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Esc if app.show_notifications => {
            app.show_notifications = false;
        }
        KeyCode::PageUp => {
            app.scroll_offset = app.scroll_offset.saturating_add(5);
        }
        KeyCode::PageDown => {
            app.scroll_offset = app.scroll_offset.saturating_sub(5);
        }
        KeyCode::Down => {
            if app.input.starts_with('/') {
                let matches = command_palette_matches(&app.input);
                if !matches.is_empty() {
                    app.palette_select =
                        (app.palette_select + 1).min(matches.len().saturating_sub(1));
                }
            } else if app.input.is_empty() {
                step_grid(app, 1);
            }
        }
        KeyCode::Up => {
            if app.input.starts_with('/') {
                let matches = command_palette_matches(&app.input);
                if !matches.is_empty() {
                    app.palette_select = app.palette_select.saturating_sub(1);
                }
            } else if app.input.is_empty() {
                step_grid(app, -1);
            }
        }
        KeyCode::Enter => {
            if app.input.starts_with('/') {
                let matches = command_palette_matches(&app.input);
                if !matches.is_empty()
                    && app.palette_select < matches.len()
                    && app.input.trim() != matches[app.palette_select].command
                {
                    app.input = matches[app.palette_select].command.to_string();
                    app.palette_select = 0;
                    // Intentionally fall through to execution instead of returning
                }
            }

            let input = app.input.drain(..).collect::<String>();
            let input = input.trim();
            if !input.is_empty() {
                app.record_command(input);
                if let Err(err) = execute_command(app, input) {
                    app.push_message(format!("error: {err}"));
                }
                app.scroll_offset = 0;
                app.palette_select = 0;
            }
        }
        KeyCode::Backspace => {
            app.input.pop();
            app.palette_select = 0;
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return Ok(());
            }
            app.input.push(ch);
            app.palette_select = 0;
        }
        _ => {}
    }
    Ok(())
}

/// Arrow keys drive the grid window when the input line is empty and a
/// grid belongs to the current view.
fn step_grid(app: &mut App, delta: isize) {
    let view = app.settings.view;
    if let Some(grid) = app.grid.as_mut() {
        if grid.source.visible_in(view) {
            grid.engine.step(delta);
        }
    }
}
