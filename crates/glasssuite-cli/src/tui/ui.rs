use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text as UiText};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::i18n::Text;
use crate::tui::commands::command_palette_matches;
use crate::tui::state::{ActiveGrid, App, GridSource, PaletteEntry};
use crate::tui::utils::{clipped_input, pad_cell};
use crate::workspace::ActiveView;

pub const INPUT_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1; // context/status line
pub const HEADER_HEIGHT: u16 = 6;
pub const HEADER_WIDTH: u16 = 72;
pub const GRID_HEIGHT: u16 = 12;
pub const MAX_PALETTE_LINES: usize = 8;

pub fn draw_ui(frame: &mut ratatui::Frame, app: &App) {
    let size = frame.size();

    let palette = command_palette_matches(&app.input);
    let palette_height = palette.len().min(MAX_PALETTE_LINES) as u16;
    let bottom_reserved = INPUT_HEIGHT + FOOTER_HEIGHT + palette_height + 1; // +1 for spacer

    let grid_pane = if app.show_notifications {
        None
    } else {
        app.visible_grid()
    };
    let grid_height = if grid_pane.is_some() { GRID_HEIGHT } else { 0 };

    let body_height = size
        .height
        .saturating_sub(HEADER_HEIGHT)
        .saturating_sub(grid_height)
        .saturating_sub(bottom_reserved)
        .max(1);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(grid_height),
            Constraint::Length(body_height),
            Constraint::Length(1),            // Spacer
            Constraint::Length(INPUT_HEIGHT), // Input (taller)
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(palette_height),
        ])
        .split(size);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(HEADER_WIDTH), Constraint::Min(1)])
        .split(layout[0]);
    frame.render_widget(render_header(app), header_layout[0]);

    if let Some(grid) = grid_pane {
        frame.render_widget(render_grid_pane(app, grid), layout[1]);
    }

    let body = if app.show_notifications {
        render_notifications(app)
    } else {
        render_body(app, layout[2].height as usize)
    };
    frame.render_widget(body, layout[2]);

    // Layout[3] is spacer, leave empty

    let (input_area, cursor) = render_input_bar(app, layout[4]);
    frame.render_widget(input_area, layout[4]);

    frame.render_widget(render_status_line(app), layout[5]);

    if palette_height > 0 {
        frame.render_widget(render_palette(&palette, app.palette_select), layout[6]);
    }
    if let Some((x, y)) = cursor {
        frame.set_cursor(x, y);
    }
}

fn nav_label_key(view: ActiveView) -> Text {
    match view {
        ActiveView::Dashboard => Text::NavDashboard,
        ActiveView::Queries => Text::NavQueries,
        ActiveView::Reports => Text::NavReports,
        ActiveView::Overview => Text::NavOverview,
        ActiveView::Settings => Text::NavSettings,
        ActiveView::Admin => Text::NavAdmin,
    }
}

fn render_header(app: &App) -> Paragraph<'static> {
    let theme = app.theme();

    let title = Line::from(vec![
        Span::styled(">_ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("GlassSuite (v{})", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(theme.accent1)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.tr(Text::AppTagline), Style::default().fg(theme.accent2)),
    ]);

    // Codex style: keys in dark gray, values in white/color
    let line_dir = Line::from(vec![
        Span::styled("workspace: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", app.paths.root.display()),
            Style::default().fg(Color::White),
        ),
    ]);

    let line_nav = if app.settings.sidebar_collapsed {
        Line::from(vec![
            Span::styled("view:      ", Style::default().fg(Color::DarkGray)),
            Span::styled(app.settings.view.name(), Style::default().fg(theme.accent2)),
        ])
    } else {
        let mut spans = vec![Span::styled(
            "nav:       ",
            Style::default().fg(Color::DarkGray),
        )];
        for (i, view) in ActiveView::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            let label = app.tr(nav_label_key(*view));
            if *view == app.settings.view {
                spans.push(Span::styled(
                    label,
                    Style::default()
                        .fg(theme.accent2)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
            }
        }
        Line::from(spans)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .border_type(BorderType::Rounded);

    Paragraph::new(UiText::from(vec![
        title,
        Line::from(""), // spacer
        line_dir,
        line_nav,
    ]))
    .block(block)
}

/// Bordered table over the active engine's window: one header row, the
/// visible data rows, then the engine's status line.
fn render_grid_pane(app: &App, grid: &ActiveGrid) -> Paragraph<'static> {
    let theme = app.theme();
    let columns = grid.engine.columns();
    let widths: Vec<usize> = columns.iter().map(|f| f.label.len().max(12) + 2).collect();

    let inner_height = GRID_HEIGHT.saturating_sub(2) as usize;
    let data_rows = inner_height.saturating_sub(2);

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(inner_height);

    let header: String = columns
        .iter()
        .zip(&widths)
        .map(|(field, &width)| pad_cell(field.label, width))
        .collect();
    lines.push(Line::from(Span::styled(
        header,
        Style::default()
            .fg(theme.accent2)
            .add_modifier(Modifier::BOLD),
    )));

    for index in grid.engine.window(data_rows) {
        let row: String = grid
            .engine
            .row(index)
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| pad_cell(&cell.to_csv(), width))
            .collect();
        lines.push(Line::from(Span::raw(row)));
    }

    lines.push(Line::from(Span::styled(
        grid.engine.status(),
        Style::default().fg(Color::DarkGray),
    )));

    let title = match &grid.source {
        GridSource::QueryRun { entity } => {
            format!(" {} · {} ", app.tr(Text::QueryResultsTitle), entity.label())
        }
        GridSource::ReportRuns { key } => {
            format!(" {} · {} ", app.tr(Text::ReportDataTitle), key)
        }
    };

    Paragraph::new(UiText::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .border_type(BorderType::Rounded)
            .title(title),
    )
}

fn render_body(app: &App, height: usize) -> Paragraph<'static> {
    let total_lines = app.messages.len();
    if total_lines == 0 {
        return Paragraph::new("");
    }

    let view_end = total_lines.saturating_sub(app.scroll_offset as usize);
    let view_start = view_end.saturating_sub(height);

    let lines: Vec<Line<'static>> = app.messages[view_start..view_end]
        .iter()
        .map(|line| {
            if line.starts_with("►") {
                let text = line.trim_start_matches(|c| c == '►' || c == ' ');
                Line::from(vec![
                    Span::styled("●", Style::default().fg(Color::Green)),
                    Span::raw(" "),
                    Span::styled(
                        text.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::raw(line.clone()))
            }
        })
        .collect();

    Paragraph::new(UiText::from(lines)).wrap(Wrap { trim: false })
}

fn render_notifications(app: &App) -> Paragraph<'static> {
    let theme = app.theme();
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            app.tr(Text::NotificationsTitle),
            Style::default()
                .fg(theme.accent1)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} {}",
                app.notifications.unread_count(),
                app.tr(Text::Unread)
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let mut tab_spans: Vec<Span<'static>> = Vec::new();
    for (i, tab) in [
        crate::notifications::NotificationTab::All,
        crate::notifications::NotificationTab::Mentions,
        crate::notifications::NotificationTab::System,
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            tab_spans.push(Span::raw("  "));
        }
        let label = app.tr(tab.label_key());
        if tab == app.notifications.tab {
            tab_spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent2)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            tab_spans.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        }
    }
    lines.push(Line::from(tab_spans));
    lines.push(Line::from(""));

    let items = app.notifications.items_for(app.notifications.tab);
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            app.tr(Text::NotificationsEmpty),
            Style::default().fg(Color::Gray),
        )));
    }
    for item in items {
        let marker = if item.unread {
            Span::styled("● ", Style::default().fg(Color::Green))
        } else {
            Span::raw("  ")
        };
        lines.push(Line::from(vec![
            marker,
            Span::styled(
                app.tr(item.title_key),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", item.time),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", app.tr(item.body_key)),
            Style::default().fg(Color::Gray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Esc closes · /notifications read = {}",
            app.tr(Text::NotificationsMarkAll)
        ),
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(UiText::from(lines)).wrap(Wrap { trim: false })
}

fn render_input_bar(app: &App, area: Rect) -> (Paragraph<'static>, Option<(u16, u16)>) {
    let theme = app.theme();
    // Codex style: >_ prompt, dark bg bar
    let prefix = "> ";
    let prefix_len = prefix.len();
    let (visible, cursor_x) = clipped_input(&app.input, area.width as usize, prefix_len);

    // Placeholder if empty
    let content = if app.input.is_empty() {
        vec![
            Span::styled(prefix, Style::default().fg(theme.accent1)),
            Span::styled(
                "Type a command, or / for the palette...",
                Style::default().fg(Color::DarkGray),
            ),
        ]
    } else {
        vec![
            Span::styled(prefix, Style::default().fg(theme.accent1)),
            Span::raw(visible),
        ]
    };

    let padding_line = Line::from("");
    let content_line = Line::from(content);

    // 3-line Layout: Padding, Content, Padding (centered)
    let paragraph = Paragraph::new(vec![padding_line.clone(), content_line, padding_line])
        .style(Style::default().bg(Color::Rgb(30, 30, 30))); // Dark gray background strip

    let cursor = Some((area.x + cursor_x + prefix_len as u16, area.y + 1));
    (paragraph, cursor)
}

fn render_status_line(app: &App) -> Paragraph<'static> {
    let left = "Tip: Use /help to list commands.";
    let status = format!(
        "view: {} · engine: {} · theme: {}/{} · lang: {} · unread: {}",
        app.settings.view.name(),
        app.settings.engine.label(),
        app.theme().title,
        app.settings.mode.label(),
        app.settings.lang.code(),
        app.notifications.unread_count()
    );

    Paragraph::new(Line::from(vec![
        Span::styled(left, Style::default().fg(Color::DarkGray)),
        Span::raw("   "),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
}

fn render_palette(entries: &[PaletteEntry], selected_idx: usize) -> Paragraph<'static> {
    let total_cnt = entries.len();
    let max_lines = MAX_PALETTE_LINES;

    // Keep the selection visible once it scrolls past the window.
    let start_idx = if selected_idx >= max_lines {
        selected_idx - max_lines + 1
    } else {
        0
    };

    let end_idx = (start_idx + max_lines).min(total_cnt);

    let lines: Vec<Line<'static>> = entries[start_idx..end_idx]
        .iter()
        .enumerate()
        .map(|(offset, entry)| {
            let actual_idx = start_idx + offset;
            let is_selected = actual_idx == selected_idx;
            let raw_str = format!("{:<20}  {}", entry.command, entry.description);

            if is_selected {
                Line::from(Span::styled(
                    raw_str,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(raw_str, Style::default().fg(Color::DarkGray)))
            }
        })
        .collect();
    Paragraph::new(UiText::from(lines))
}
