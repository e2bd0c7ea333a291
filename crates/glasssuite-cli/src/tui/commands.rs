use glasssuite_core::{
    ALL_REPORTS_KEY, EntityKind, Report, builtin_reports, entity_fields, find_report,
    report_run_fields,
};
use glasssuite_generate::{Row, RowKind, generate_rows_now, write_cells_csv};
use glasssuite_grid::{EngineKind, GridData};
use glasssuite_query::{Clause, ClauseOp, filter_descriptor, render_sql};

use crate::CliError;
use crate::i18n::{Lang, Text};
use crate::theme::{THEMES, ThemeId};
use crate::tui::state::{ActiveGrid, App, AppEvent, GridSource, PaletteEntry};
use crate::tui::utils::read_tail_lines;
use crate::workspace::{ActiveView, DoctorLevel, run_doctor};

/// Row count floor for `/run`, matching the production result pager.
const MIN_QUERY_ROWS: usize = 200;
/// Rows generated when `/run` is given no explicit count.
const DEFAULT_QUERY_ROWS: usize = 1200;
/// Run-history depth for the report detail grid.
const RUN_HISTORY_ROWS: usize = 1600;

const AI_GREETING: &str = "Hi — I'm a UI placeholder AI. Connect me to your backend when ready.";
const AI_REPLY: &str = "(Placeholder) I can help draft a query or summarize a report.";

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

pub fn execute_command(app: &mut App, input: &str) -> Result<(), CliError> {
    let mut parts = input.split_whitespace();
    let command = match parts.next() {
        Some(cmd) => cmd,
        None => return Ok(()),
    };

    match command {
        "/help" => cmd_help(app),
        "/exit" => {
            app.should_quit = true;
            Ok(())
        }
        "/status" => cmd_status(app),
        "/doctor" => cmd_doctor(app),
        "/logs" => cmd_logs(app),
        "/view" => cmd_view(app, parts.collect()),
        "/entity" => cmd_entity(app, parts.collect()),
        "/name" => cmd_name(app, parts.collect()),
        "/where" => cmd_where(app, parts.collect()),
        "/filters" => cmd_filters(app, parts.collect()),
        "/sql" => cmd_sql(app),
        "/json" => cmd_json(app),
        "/run" => cmd_run(app, parts.collect()),
        "/save" => cmd_save(app, parts.collect()),
        "/queries" => cmd_queries(app, parts.collect()),
        "/reports" => cmd_reports(app, parts.collect()),
        "/report" => cmd_report(app, parts.collect()),
        "/grid" => cmd_grid(app, parts.collect()),
        "/notifications" => cmd_notifications(app, parts.collect()),
        "/ai" => cmd_ai(app, parts.collect()),
        "/theme" => cmd_theme(app, parts.collect()),
        "/mode" => cmd_mode(app),
        "/lang" => cmd_lang(app, parts.collect()),
        "/sidebar" => cmd_sidebar(app),
        "/settings" => cmd_settings(app, parts.collect()),
        _ => {
            app.push_message(format!("unknown command: {command}"));
            Ok(())
        }
    }
}

pub fn cmd_help(app: &mut App) -> Result<(), CliError> {
    app.push_message("COMMANDS");
    app.push_message("shell:");
    app.push_message("  /view <dashboard|queries|reports|overview|settings|admin>");
    app.push_message("  /theme [list|<name>]");
    app.push_message("  /mode");
    app.push_message("  /lang [EN|DE|FR]");
    app.push_message("  /sidebar");
    app.push_message("  /notifications [tab|read]");
    app.push_message("  /ai [message]");
    app.push_message("");
    app.push_message("query builder:");
    app.push_message("  /entity <customers|orders|invoices|users>");
    app.push_message("  /name <text>");
    app.push_message("  /where <field:op:value>");
    app.push_message("  /filters [list|add|set <n> <field:op:value>|pop|clear]");
    app.push_message("  /sql");
    app.push_message("  /json");
    app.push_message("  /run [count]");
    app.push_message("  /save [name]");
    app.push_message("  /queries [list|load <id>|delete <id>|clear]");
    app.push_message("");
    app.push_message("reports:");
    app.push_message("  /reports [search <text>|clear]");
    app.push_message("  /report <id|all>");
    app.push_message("");
    app.push_message("grid:");
    app.push_message("  /grid engine [virtual|paged]");
    app.push_message("  /grid filter [text]");
    app.push_message("  /grid sort <column>");
    app.push_message("  /grid page-size");
    app.push_message("  /grid density");
    app.push_message("  /grid export [file]");
    app.push_message("  /grid reset");
    app.push_message("");
    app.push_message("workspace:");
    app.push_message("  /status");
    app.push_message("  /doctor");
    app.push_message("  /logs");
    app.push_message("  /settings show");
    app.push_message("");
    app.push_message("/help");
    app.push_message("/exit");
    Ok(())
}

fn cmd_status(app: &mut App) -> Result<(), CliError> {
    let active = app.clauses.iter().filter(|c| !c.is_inert()).count();
    app.push_message("");
    app.push_message("WORKSPACE STATUS");
    app.push_message(RULE);
    app.push_message(format!("Root:     {}", app.paths.root.display()));
    app.push_message(format!("View:     {}", app.settings.view.name()));
    app.push_message(format!("Entity:   {}", app.entity.label()));
    app.push_message(format!(
        "Filters:  {} ({} active)",
        app.clauses.len(),
        active
    ));
    app.push_message(format!(
        "Results:  {}",
        app.results_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "none".to_string())
    ));
    app.push_message(format!("Saved:    {} queries", app.saved.len()));
    app.push_message(format!(
        "Report:   {}",
        app.selected_report.unwrap_or("none")
    ));
    app.push_message(format!("Unread:   {}", app.notifications.unread_count()));
    app.push_message(RULE);
    app.push_message(format!(
        "Engine: {}  |  Theme: {}/{}  |  Lang: {}",
        app.settings.engine.label(),
        app.theme().title,
        app.settings.mode.label(),
        app.settings.lang.code()
    ));
    app.push_message("");
    Ok(())
}

fn cmd_doctor(app: &mut App) -> Result<(), CliError> {
    let report = run_doctor(&app.paths)?;
    if report.issues.is_empty() {
        app.push_message("doctor: no issues found.");
        return Ok(());
    }

    for issue in report.issues {
        let level = match issue.level {
            DoctorLevel::Warning => "warn",
            DoctorLevel::Error => "error",
        };
        if let Some(hint) = issue.hint {
            app.push_message(format!("{level}: {} ({hint})", issue.message));
        } else {
            app.push_message(format!("{level}: {}", issue.message));
        }
    }
    Ok(())
}

fn cmd_logs(app: &mut App) -> Result<(), CliError> {
    let path = app.paths.console_log_path();
    if !path.exists() {
        app.push_message("log not found.");
        return Ok(());
    }
    let lines = read_tail_lines(&path, 50)?;
    for line in lines {
        app.push_message(line);
    }
    Ok(())
}

fn cmd_view(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    let Some(name) = args.first() else {
        app.push_message(format!("view: {}", app.settings.view.name()));
        let names: Vec<&str> = ActiveView::ALL.iter().map(|v| v.name()).collect();
        app.push_message(format!("available: {}", names.join(", ")));
        return Ok(());
    };

    let Ok(view) = name.parse::<ActiveView>() else {
        app.push_message(format!("unknown view: {name}"));
        return Ok(());
    };

    app.settings.view = view;
    app.persist_settings()?;
    render_view(app);
    Ok(())
}

/// Print the static content of the current view into the log, the way the
/// page body would render it.
pub fn render_view(app: &mut App) {
    match app.settings.view {
        ActiveView::Dashboard => render_dashboard(app),
        ActiveView::Queries => render_queries(app),
        ActiveView::Reports => render_reports_list(app),
        ActiveView::Overview => render_simple_panel(app, Text::NavOverview),
        ActiveView::Settings => render_settings_view(app),
        ActiveView::Admin => render_simple_panel(app, Text::NavAdmin),
    }
}

fn render_dashboard(app: &mut App) {
    app.push_message(app.tr(Text::NavDashboard).to_uppercase());
    app.push_message(app.tr(Text::HeroSubtitle));
    app.push_message(RULE);
    app.push_message(format!(
        "{}: {}",
        app.tr(Text::CardHealth),
        app.tr(Text::CardHealthSub)
    ));
    app.push_message(format!("  {}", app.tr(Text::Uptime)));
    app.push_message(format!(
        "{}: {}",
        app.tr(Text::CardUsage),
        app.tr(Text::CardUsageSub)
    ));
    app.push_message(format!("  {}", app.tr(Text::UsageMetrics)));
    app.push_message(format!(
        "{}: {}",
        app.tr(Text::CardSecurity),
        app.tr(Text::CardSecuritySub)
    ));
    app.push_message(format!("  {}", app.tr(Text::SecurityMetrics)));
    app.push_message(RULE);
    app.push_message(format!(
        "{} · {}",
        app.tr(Text::Activity),
        app.tr(Text::ActivitySub)
    ));
    app.push_message(format!("  - {}", app.tr(Text::Activity1)));
    app.push_message(format!("  - {}", app.tr(Text::Activity2)));
    app.push_message(format!("  - {}", app.tr(Text::Activity3)));
    app.push_message(format!(
        "{} · {}",
        app.tr(Text::QuickActions),
        app.tr(Text::QuickActionsSub)
    ));
    app.push_message(format!("  - {}", app.tr(Text::InviteMembers)));
    app.push_message(format!("  - {}", app.tr(Text::ConfigureSso)));
    app.push_message(format!("  - {}", app.tr(Text::SetPolicies)));
}

fn format_clause(index: usize, clause: &Clause) -> String {
    let marker = if clause.is_inert() { "  (inactive)" } else { "" };
    format!(
        "  {}. {} {} \"{}\"{marker}",
        index + 1,
        clause.field_id,
        clause.op,
        clause.value
    )
}

fn render_queries(app: &mut App) {
    app.push_message(app.tr(Text::QueriesTitle));
    app.push_message(app.tr(Text::QueriesSubtitle));
    let name = if app.query_name.trim().is_empty() {
        "(unset)".to_string()
    } else {
        app.query_name.clone()
    };
    app.push_message(format!("{}: {name}", app.tr(Text::QueryName)));
    app.push_message(format!("{}: {}", app.tr(Text::Entity), app.entity.label()));
    app.push_message(format!("{}:", app.tr(Text::Filters)));
    let lines: Vec<String> = app
        .clauses
        .iter()
        .enumerate()
        .map(|(i, c)| format_clause(i, c))
        .collect();
    for line in lines {
        app.push_message(line);
    }
    app.push_message(format!(
        "{}: {}",
        app.tr(Text::ResultsCount),
        app.results_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "none".to_string())
    ));
    app.push_message(format!(
        "{}: {}",
        app.tr(Text::SavedQueries),
        app.saved.len()
    ));
}

/// Case-insensitive title/description match, the same rule the web report
/// browser applies.
fn report_matches(report: &Report, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    report.title.to_lowercase().contains(&needle)
        || report.description.to_lowercase().contains(&needle)
}

fn render_reports_list(app: &mut App) {
    app.push_message(app.tr(Text::ReportsTitle));
    app.push_message(app.tr(Text::ReportsSubtitle));
    if !app.report_search.trim().is_empty() {
        app.push_message(format!(
            "{}: \"{}\"",
            app.tr(Text::ReportSearch),
            app.report_search.trim()
        ));
    }
    let search = app.report_search.clone();
    let mut shown = 0;
    for report in builtin_reports() {
        if !report_matches(report, &search) {
            continue;
        }
        shown += 1;
        let marker = if app.selected_report == Some(report.id) {
            " *"
        } else {
            ""
        };
        app.push_message(format!(
            "  {} · {} · {} · {}{marker}",
            report.id,
            report.title,
            report.category.label(),
            report.updated
        ));
        app.push_message(format!("     {}", report.description));
    }
    if shown == 0 {
        app.push_message(format!("  {}", app.tr(Text::NoRows)));
    }
    if app.selected_report.is_none() {
        app.push_message(app.tr(Text::OpenReportHint));
    }
}

fn render_settings_view(app: &mut App) {
    app.push_message(app.tr(Text::NavSettings));
    app.push_message(format!(
        "{} · {}",
        app.tr(Text::ThemesTitle),
        app.tr(Text::ThemesSubtitle)
    ));
    let active = app.settings.theme;
    for theme in &THEMES {
        let marker = if theme.id == active { "  (active)" } else { "" };
        app.push_message(format!("  {:<10} · {}{marker}", theme.title, theme.description));
    }
    let mode_key = match app.settings.mode {
        crate::theme::Mode::Light => Text::Light,
        crate::theme::Mode::Dark => Text::Dark,
    };
    app.push_message(format!(
        "mode: {}  |  {}: {}  |  {}: {}",
        app.tr(mode_key),
        app.tr(Text::Language),
        app.settings.lang.code(),
        app.tr(Text::GridEngine),
        app.settings.engine.label()
    ));
}

fn render_simple_panel(app: &mut App, title: Text) {
    app.push_message(app.tr(title));
    let body = match title {
        Text::NavAdmin => "Another panel for future settings.",
        _ => "Placeholder content panel.",
    };
    app.push_message(body);
}

fn cmd_entity(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    let Some(name) = args.first() else {
        app.push_message(format!("{}: {}", app.tr(Text::Entity), app.entity.label()));
        let names: Vec<&str> = EntityKind::ALL.iter().map(|e| e.table_name()).collect();
        app.push_message(format!("available: {}", names.join(", ")));
        return Ok(());
    };

    match name.parse::<EntityKind>() {
        Ok(entity) => {
            // Switching entities keeps the clause list; stale fields
            // surface through /sql and /run.
            app.entity = entity;
            app.push_message(format!("{}: {}", app.tr(Text::Entity), entity.label()));
        }
        Err(err) => app.push_message(format!("error: {err}")),
    }
    Ok(())
}

fn cmd_name(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    if args.is_empty() {
        let name = if app.query_name.trim().is_empty() {
            "(unset)".to_string()
        } else {
            app.query_name.clone()
        };
        app.push_message(format!("{}: {name}", app.tr(Text::QueryName)));
        return Ok(());
    }
    app.query_name = args.join(" ");
    let line = format!("{}: {}", app.tr(Text::QueryName), app.query_name);
    app.push_message(line);
    Ok(())
}

/// Parse a `field:op:value` token. The value may be empty (an inert
/// clause) and may contain further colons.
pub fn parse_where_clause(raw: &str) -> Result<Clause, CliError> {
    let mut parts = raw.splitn(3, ':');
    let field = parts
        .next()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or_else(|| CliError::InvalidConfig(format!("expected field:op:value, got `{raw}`")))?;
    let op_token = parts
        .next()
        .map(str::trim)
        .ok_or_else(|| CliError::InvalidConfig(format!("expected field:op:value, got `{raw}`")))?;
    let op: ClauseOp = op_token.parse()?;
    let value = parts.next().unwrap_or("");
    Ok(Clause::new(field, op, value))
}

fn cmd_where(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    if args.is_empty() {
        app.push_message("usage: /where <field:op:value>  (ops: equals, contains, greater-than, less-than)");
        return Ok(());
    }
    let clause = parse_where_clause(&args.join(" "))?;
    let line = format_clause(app.clauses.len(), &clause);
    app.clauses.push(clause);
    app.push_message("filter added:");
    app.push_message(line);
    Ok(())
}

fn cmd_filters(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    match args.first().copied() {
        None | Some("list") => {
            app.push_message(format!("{}:", app.tr(Text::Filters)));
            if app.clauses.is_empty() {
                app.push_message("  (none)");
                return Ok(());
            }
            let lines: Vec<String> = app
                .clauses
                .iter()
                .enumerate()
                .map(|(i, c)| format_clause(i, c))
                .collect();
            for line in lines {
                app.push_message(line);
            }
            Ok(())
        }
        Some("add") => {
            let first_field = entity_fields(app.entity)[0].id;
            let clause = Clause::new(first_field, ClauseOp::Equals, "");
            let line = format_clause(app.clauses.len(), &clause);
            app.clauses.push(clause);
            app.push_message("filter added:");
            app.push_message(line);
            Ok(())
        }
        Some("set") => {
            let Some(index_token) = args.get(1) else {
                app.push_message("usage: /filters set <n> <field:op:value>");
                return Ok(());
            };
            let index: usize = index_token.parse().map_err(|_| {
                CliError::InvalidConfig(format!("bad filter index: {index_token}"))
            })?;
            if index == 0 || index > app.clauses.len() {
                app.push_message(format!("no filter {index} (have {})", app.clauses.len()));
                return Ok(());
            }
            let Some(spec) = args.get(2..).filter(|rest| !rest.is_empty()) else {
                app.push_message("usage: /filters set <n> <field:op:value>");
                return Ok(());
            };
            let clause = parse_where_clause(&spec.join(" "))?;
            let line = format_clause(index - 1, &clause);
            app.clauses[index - 1] = clause;
            app.push_message("filter updated:");
            app.push_message(line);
            Ok(())
        }
        Some("pop") => {
            if app.clauses.pop().is_some() {
                app.push_message("last filter removed.");
            } else {
                app.push_message("no filters to remove.");
            }
            Ok(())
        }
        Some("clear") => {
            app.clauses.clear();
            app.push_message("filters cleared.");
            Ok(())
        }
        Some(other) => {
            app.push_message(format!("unknown subcommand: {other}"));
            app.push_message("usage: /filters [list|add|set <n> <field:op:value>|pop|clear]");
            Ok(())
        }
    }
}

fn cmd_sql(app: &mut App) -> Result<(), CliError> {
    let sql = render_sql(app.entity, &app.clauses)?;
    let label = app.tr(Text::QuerySqlPreview);
    app.push_message(format!("{label}:"));
    app.push_message(format!("  {sql}"));
    Ok(())
}

fn cmd_json(app: &mut App) -> Result<(), CliError> {
    let descriptor = filter_descriptor(app.entity, &app.clauses)?;
    let pretty = descriptor.to_pretty_json()?;
    let label = app.tr(Text::QueryJsonPreview);
    app.push_message(format!("{label}:"));
    for line in pretty.lines() {
        app.push_message(format!("  {line}"));
    }
    Ok(())
}

fn cmd_run(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    let requested = match args.first() {
        Some(token) => Some(token.parse::<usize>().map_err(|_| {
            CliError::InvalidConfig(format!("bad row count: {token}"))
        })?),
        None => None,
    };
    let count = requested.unwrap_or(DEFAULT_QUERY_ROWS).max(MIN_QUERY_ROWS);

    let entity = app.entity;
    let sql = render_sql(entity, &app.clauses)?;
    let seed = format!("{}:{}", entity.table_name(), sql);
    let rows = generate_rows_now(&RowKind::Entity(entity), count, &seed);
    let produced = rows.len();
    app.results_count = Some(produced);

    let data = GridData::new(
        entity_fields(entity),
        rows.iter().map(Row::cells).collect(),
    );
    app.grid = Some(ActiveGrid::new(
        app.grids,
        app.settings.engine,
        GridSource::QueryRun { entity },
        data,
    ));
    if app.settings.view != ActiveView::Queries {
        app.settings.view = ActiveView::Queries;
        app.persist_settings()?;
    }

    tracing::info!(entity = entity.table_name(), rows = produced, "query run");
    app.push_message(format!("{}: {}", app.tr(Text::ResultsCount), produced));
    if let Some(grid) = &app.grid {
        let status = grid.engine.status();
        app.push_message(status);
    }
    Ok(())
}

fn cmd_save(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    let name = if args.is_empty() {
        app.query_name.clone()
    } else {
        args.join(" ")
    };
    let entry = app.saved.save(&name, app.entity, app.clauses.clone());
    let (id, saved_name) = (entry.id.clone(), entry.name.clone());
    app.persist_saved_queries()?;
    app.query_name.clear();
    tracing::info!(id = %id, "query saved");
    app.push_message(format!("saved: {saved_name} ({id})"));
    Ok(())
}

/// Accept either a saved-query id or a 1-based list position.
fn resolve_saved_query(app: &App, token: &str) -> Option<String> {
    if app.saved.get(token).is_some() {
        return Some(token.to_string());
    }
    let index: usize = token.parse().ok()?;
    app.saved
        .entries()
        .get(index.checked_sub(1)?)
        .map(|entry| entry.id.clone())
}

fn cmd_queries(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    match args.first().copied() {
        None | Some("list") => {
            if app.saved.is_empty() {
                let line = app.tr(Text::NoSavedQueries);
                app.push_message(line);
                return Ok(());
            }
            app.push_message(format!("{}:", app.tr(Text::SavedQueries)));
            let lines: Vec<String> = app
                .saved
                .entries()
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    let when = chrono::DateTime::from_timestamp_millis(q.created_at)
                        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "-".to_string());
                    format!(
                        "  {}. {} · {} · {} filters · {} · {}",
                        i + 1,
                        q.name,
                        q.entity.label(),
                        q.clauses.len(),
                        when,
                        q.id
                    )
                })
                .collect();
            for line in lines {
                app.push_message(line);
            }
            Ok(())
        }
        Some("load") => {
            let Some(token) = args.get(1) else {
                app.push_message("usage: /queries load <id>");
                return Ok(());
            };
            let Some(id) = resolve_saved_query(app, token) else {
                app.push_message(format!("query not found: {token}"));
                return Ok(());
            };
            // Id resolved against the log just above.
            if let Some(query) = app.saved.get(&id).cloned() {
                app.query_name = query.name.clone();
                app.entity = query.entity;
                app.clauses = query.clauses;
                app.results_count = None;
                app.push_message(format!("loaded: {}", query.name));
            }
            Ok(())
        }
        Some("delete") => {
            let Some(token) = args.get(1) else {
                app.push_message("usage: /queries delete <id>");
                return Ok(());
            };
            let Some(id) = resolve_saved_query(app, token) else {
                app.push_message(format!("query not found: {token}"));
                return Ok(());
            };
            if let Some(removed) = app.saved.remove(&id) {
                app.persist_saved_queries()?;
                app.push_message(format!("deleted: {} ({})", removed.name, removed.id));
            }
            Ok(())
        }
        Some("clear") => {
            app.saved.clear();
            app.persist_saved_queries()?;
            app.push_message("saved queries cleared.");
            Ok(())
        }
        Some(other) => {
            app.push_message(format!("unknown subcommand: {other}"));
            app.push_message("usage: /queries [list|load <id>|delete <id>|clear]");
            Ok(())
        }
    }
}

fn cmd_reports(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    match args.first().copied() {
        Some("search") => {
            app.report_search = args[1..].join(" ");
        }
        Some("clear") => {
            app.report_search.clear();
        }
        Some(other) => {
            app.push_message(format!("unknown subcommand: {other}"));
            app.push_message("usage: /reports [search <text>|clear]");
            return Ok(());
        }
        None => {}
    }
    render_reports_list(app);
    Ok(())
}

fn cmd_report(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    let Some(token) = args.first() else {
        app.push_message(format!(
            "report: {}",
            app.selected_report.unwrap_or("none")
        ));
        app.push_message("usage: /report <id|all>");
        return Ok(());
    };

    let key: &str = if *token == ALL_REPORTS_KEY {
        app.selected_report = None;
        ALL_REPORTS_KEY
    } else {
        let Some(report) = find_report(token) else {
            app.push_message(format!("unknown report: {token}"));
            return Ok(());
        };
        app.selected_report = Some(report.id);
        app.push_message(format!("{} · {}", report.title, report.category.label()));
        app.push_message(format!(
            "{} {} · {}",
            app.tr(Text::ReportUpdated),
            report.updated,
            report.description
        ));
        report.id
    };

    let rows = generate_rows_now(
        &RowKind::ReportRun {
            report: key.to_string(),
        },
        RUN_HISTORY_ROWS,
        key,
    );
    let data = GridData::new(report_run_fields(), rows.iter().map(Row::cells).collect());
    app.grid = Some(ActiveGrid::new(
        app.grids,
        app.settings.engine,
        GridSource::ReportRuns {
            key: key.to_string(),
        },
        data,
    ));
    if app.settings.view != ActiveView::Reports {
        app.settings.view = ActiveView::Reports;
        app.persist_settings()?;
    }

    tracing::info!(report = key, rows = RUN_HISTORY_ROWS, "report runs loaded");
    app.push_message(format!(
        "{}: {} {}",
        app.tr(Text::ReportDataTitle),
        RUN_HISTORY_ROWS,
        app.tr(Text::Rows)
    ));
    if let Some(grid) = &app.grid {
        let status = grid.engine.status();
        app.push_message(status);
    }
    Ok(())
}

fn cmd_grid(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    if app.grid.is_none() {
        app.push_message("no grid active. run a query (/run) or open a report (/report).");
        return Ok(());
    }

    match args.first().copied() {
        None => {
            if let Some(grid) = &app.grid {
                let line = format!("{} engine · {}", grid.engine.kind().label(), grid.engine.status());
                app.push_message(line);
            }
            Ok(())
        }
        Some("engine") => {
            let grids = app.grids;
            let target = match args.get(1) {
                Some(token) => match token.parse::<EngineKind>() {
                    Ok(kind) => kind,
                    Err(()) => {
                        app.push_message(format!("unknown engine: {token} (virtual, paged)"));
                        return Ok(());
                    }
                },
                None => app.settings.engine.toggle(),
            };
            let status = if let Some(grid) = app.grid.as_mut() {
                grid.swap_engine(grids, target);
                grid.engine.status()
            } else {
                String::new()
            };
            app.settings.engine = target;
            app.persist_settings()?;
            tracing::info!(engine = target.label(), "grid engine switched");
            app.push_message(format!(
                "{}: {} · {status}",
                app.tr(Text::GridEngine),
                target.label()
            ));
            Ok(())
        }
        Some("filter") => {
            let needle = args[1..].join(" ");
            let status = if let Some(grid) = app.grid.as_mut() {
                grid.engine.set_quick_filter(&needle);
                grid.engine.status()
            } else {
                String::new()
            };
            if needle.trim().is_empty() {
                app.push_message(format!("filter cleared · {status}"));
            } else {
                app.push_message(format!("filter: \"{}\" · {status}", needle.trim()));
            }
            Ok(())
        }
        Some("sort") => {
            let Some(token) = args.get(1) else {
                app.push_message("usage: /grid sort <column>");
                return Ok(());
            };
            let mut message = None;
            if let Some(grid) = app.grid.as_mut() {
                let columns = grid.engine.columns();
                let index = columns
                    .iter()
                    .position(|f| f.id == *token)
                    .or_else(|| token.parse::<usize>().ok().and_then(|n| n.checked_sub(1)));
                match index {
                    Some(index) if index < columns.len() => {
                        grid.engine.toggle_sort(index);
                        let line = match grid.engine.sort() {
                            Some(sort) => {
                                let direction = match sort.direction {
                                    glasssuite_grid::SortDirection::Ascending => "ascending",
                                    glasssuite_grid::SortDirection::Descending => "descending",
                                };
                                format!("sort: {} {direction}", columns[sort.column].id)
                            }
                            None => "sort cleared".to_string(),
                        };
                        message = Some(line);
                    }
                    _ => message = Some(format!("unknown column: {token}")),
                }
            }
            if let Some(line) = message {
                app.push_message(line);
            }
            Ok(())
        }
        Some("page-size") => {
            let status = if let Some(grid) = app.grid.as_mut() {
                grid.engine.cycle_page_size();
                grid.engine.status()
            } else {
                String::new()
            };
            app.push_message(format!("{}: {status}", app.tr(Text::PageSize)));
            Ok(())
        }
        Some("density") => {
            let status = if let Some(grid) = app.grid.as_mut() {
                grid.engine.toggle_density();
                grid.engine.status()
            } else {
                String::new()
            };
            app.push_message(format!("{}: {status}", app.tr(Text::Density)));
            Ok(())
        }
        Some("export") => cmd_grid_export(app, args.get(1).copied()),
        Some("reset") => {
            let status = if let Some(grid) = app.grid.as_mut() {
                grid.engine.reset();
                grid.engine.status()
            } else {
                String::new()
            };
            app.push_message(format!("{} · {status}", app.tr(Text::ResetGrid)));
            Ok(())
        }
        Some(other) => {
            app.push_message(format!("unknown subcommand: {other}"));
            app.push_message("usage: /grid [engine|filter|sort|page-size|density|export|reset]");
            Ok(())
        }
    }
}

/// Write the current view (filter and sort applied) as CSV, off the UI
/// thread. Completion comes back through [`AppEvent::ExportDone`].
fn cmd_grid_export(app: &mut App, file: Option<&str>) -> Result<(), CliError> {
    let Some(grid) = app.grid.as_ref() else {
        return Ok(());
    };
    let fields = grid.engine.columns();
    let cells = grid.export_cells();
    let default_name = match &grid.source {
        GridSource::QueryRun { entity } => format!("{}.csv", entity.table_name()),
        GridSource::ReportRuns { key } => format!("report_{key}.csv"),
    };
    let file_name = file.map(str::to_string).unwrap_or(default_name);
    let path = app.paths.export_path(&file_name);
    let row_count = cells.len();

    let tx = app.tx.clone();
    app.runtime.spawn(async move {
        let result = write_cells_csv(&path, fields, cells.iter().map(|row| row.as_slice()))
            .map(|bytes| (path.clone(), bytes))
            .map_err(|err| err.to_string());
        tx.send(AppEvent::ExportDone(result)).ok();
    });

    app.push_message(format!(
        "{}: {row_count} {} → {file_name}",
        app.tr(Text::ExportCsv),
        app.tr(Text::Rows)
    ));
    Ok(())
}

fn cmd_notifications(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    match args.first().copied() {
        None => {
            app.show_notifications = !app.show_notifications;
            if !app.show_notifications {
                app.push_message("notifications closed.");
            }
            Ok(())
        }
        Some("tab") => {
            app.notifications.tab = app.notifications.tab.cycle();
            let label = app.tr(app.notifications.tab.label_key());
            app.push_message(format!("tab: {label}"));
            Ok(())
        }
        Some("read") => {
            app.notifications.mark_all_read();
            app.persist_notifications()?;
            let line = app.tr(Text::NotificationsEmpty);
            app.push_message(line);
            Ok(())
        }
        Some(other) => {
            app.push_message(format!("unknown subcommand: {other}"));
            app.push_message("usage: /notifications [tab|read]");
            Ok(())
        }
    }
}

fn cmd_ai(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    app.push_message(format!("{} · {}", app.tr(Text::AiAssistant), app.tr(Text::AiHint)));
    if app.ai_history.is_empty() {
        app.ai_history.push(format!("ai: {AI_GREETING}"));
    }
    if args.is_empty() {
        let history = app.ai_history.clone();
        for line in history {
            app.push_message(format!("  {line}"));
        }
        return Ok(());
    }

    let message = args.join(" ");
    app.ai_history.push(format!("you: {message}"));
    app.ai_history.push(format!("ai: {AI_REPLY}"));
    app.push_message(format!("  you: {message}"));
    app.push_message(format!("  ai: {AI_REPLY}"));
    Ok(())
}

fn cmd_theme(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    match args.first().copied() {
        Some("list") => {
            let active = app.settings.theme;
            for theme in &THEMES {
                let marker = if theme.id == active { "  (active)" } else { "" };
                app.push_message(format!(
                    "  {:<10} · {}{marker}",
                    theme.title, theme.description
                ));
            }
            return Ok(());
        }
        Some(token) => match token.parse::<ThemeId>() {
            Ok(id) => app.settings.theme = id,
            Err(()) => {
                let names: Vec<&str> = THEMES.iter().map(|t| t.title).collect();
                app.push_message(format!("unknown theme: {token} ({})", names.join(", ")));
                return Ok(());
            }
        },
        None => app.settings.theme = app.settings.theme.cycle(),
    }
    app.persist_settings()?;
    let theme = app.theme();
    app.push_message(format!(
        "{}: {} · {}",
        app.tr(Text::Theme),
        theme.title,
        theme.description
    ));
    Ok(())
}

fn cmd_mode(app: &mut App) -> Result<(), CliError> {
    app.settings.mode = app.settings.mode.toggle();
    app.persist_settings()?;
    let key = match app.settings.mode {
        crate::theme::Mode::Light => Text::Light,
        crate::theme::Mode::Dark => Text::Dark,
    };
    let label = app.tr(key);
    app.push_message(format!("mode: {label}"));
    Ok(())
}

fn cmd_lang(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    match args.first() {
        Some(token) => match token.parse::<Lang>() {
            Ok(lang) => app.settings.lang = lang,
            Err(()) => {
                app.push_message(format!("unknown language: {token} (EN, DE, FR)"));
                return Ok(());
            }
        },
        None => app.settings.lang = app.settings.lang.cycle(),
    }
    app.persist_settings()?;
    let line = format!("{}: {}", app.tr(Text::Language), app.settings.lang.code());
    app.push_message(line);
    Ok(())
}

fn cmd_sidebar(app: &mut App) -> Result<(), CliError> {
    app.settings.sidebar_collapsed = !app.settings.sidebar_collapsed;
    app.persist_settings()?;
    let state = if app.settings.sidebar_collapsed {
        "collapsed"
    } else {
        "expanded"
    };
    app.push_message(format!("sidebar: {state}"));
    Ok(())
}

fn cmd_settings(app: &mut App, args: Vec<&str>) -> Result<(), CliError> {
    if let Some(other) = args.first().filter(|a| **a != "show") {
        app.push_message(format!("unknown subcommand: {other}"));
        app.push_message("usage: /settings show");
        return Ok(());
    }
    app.push_message("SETTINGS");
    app.push_message(RULE);
    app.push_message(format!("mode:     {}", app.settings.mode.label()));
    app.push_message(format!("lang:     {}", app.settings.lang.code()));
    app.push_message(format!("theme:    {}", app.theme().title));
    app.push_message(format!("engine:   {}", app.settings.engine.label()));
    app.push_message(format!("view:     {}", app.settings.view.name()));
    app.push_message(format!(
        "sidebar:  {}",
        if app.settings.sidebar_collapsed {
            "collapsed"
        } else {
            "expanded"
        }
    ));
    Ok(())
}

pub fn command_palette_matches(input: &str) -> Vec<PaletteEntry> {
    if !input.starts_with('/') {
        return Vec::new();
    }

    if input.starts_with("/view ") {
        let entries = vec![
            PaletteEntry {
                command: "/view dashboard",
                description: "cards and recent activity",
            },
            PaletteEntry {
                command: "/view queries",
                description: "query builder",
            },
            PaletteEntry {
                command: "/view reports",
                description: "report browser",
            },
            PaletteEntry {
                command: "/view overview",
                description: "placeholder panel",
            },
            PaletteEntry {
                command: "/view settings",
                description: "themes and preferences",
            },
            PaletteEntry {
                command: "/view admin",
                description: "placeholder panel",
            },
        ];
        return entries
            .into_iter()
            .filter(|e| e.command.starts_with(input.trim()))
            .collect();
    }

    if input.starts_with("/entity ") {
        let entries = vec![
            PaletteEntry {
                command: "/entity customers",
                description: "id, name, email, country, created_at",
            },
            PaletteEntry {
                command: "/entity orders",
                description: "id, customer_id, status, total, created_at",
            },
            PaletteEntry {
                command: "/entity invoices",
                description: "id, order_id, amount, paid, issued_at",
            },
            PaletteEntry {
                command: "/entity users",
                description: "id, name, role, active, created_at",
            },
        ];
        return entries
            .into_iter()
            .filter(|e| e.command.starts_with(input.trim()))
            .collect();
    }

    if input.starts_with("/filters ") {
        let entries = vec![
            PaletteEntry {
                command: "/filters list",
                description: "show clause list",
            },
            PaletteEntry {
                command: "/filters add",
                description: "append an empty clause",
            },
            PaletteEntry {
                command: "/filters set",
                description: "replace clause n",
            },
            PaletteEntry {
                command: "/filters pop",
                description: "remove last clause",
            },
            PaletteEntry {
                command: "/filters clear",
                description: "remove all clauses",
            },
        ];
        return entries
            .into_iter()
            .filter(|e| e.command.starts_with(input.trim()))
            .collect();
    }

    if input.starts_with("/queries ") {
        let entries = vec![
            PaletteEntry {
                command: "/queries list",
                description: "list saved queries",
            },
            PaletteEntry {
                command: "/queries load",
                description: "restore builder state",
            },
            PaletteEntry {
                command: "/queries delete",
                description: "remove one entry",
            },
            PaletteEntry {
                command: "/queries clear",
                description: "empty the log",
            },
        ];
        return entries
            .into_iter()
            .filter(|e| e.command.starts_with(input.trim()))
            .collect();
    }

    if input.starts_with("/grid ") {
        let entries = vec![
            PaletteEntry {
                command: "/grid engine",
                description: "toggle virtual/paged",
            },
            PaletteEntry {
                command: "/grid filter",
                description: "quick filter rows",
            },
            PaletteEntry {
                command: "/grid sort",
                description: "cycle sort on a column",
            },
            PaletteEntry {
                command: "/grid page-size",
                description: "25/50/100 rows per page",
            },
            PaletteEntry {
                command: "/grid density",
                description: "comfortable/compact",
            },
            PaletteEntry {
                command: "/grid export",
                description: "write view as CSV",
            },
            PaletteEntry {
                command: "/grid reset",
                description: "clear filter, sort, position",
            },
        ];
        return entries
            .into_iter()
            .filter(|e| e.command.starts_with(input.trim()))
            .collect();
    }

    if input.starts_with("/theme ") {
        let entries = vec![
            PaletteEntry {
                command: "/theme discord",
                description: "Deep blue + soft purple glow",
            },
            PaletteEntry {
                command: "/theme turbo",
                description: "Clean dark with neon accents",
            },
            PaletteEntry {
                command: "/theme github",
                description: "Graphite + crisp contrast",
            },
            PaletteEntry {
                command: "/theme next",
                description: "Slate-black with subtle light",
            },
            PaletteEntry {
                command: "/theme tailwind",
                description: "Gray-blue with modern cyan",
            },
            PaletteEntry {
                command: "/theme list",
                description: "show all palettes",
            },
        ];
        return entries
            .into_iter()
            .filter(|e| e.command.starts_with(input.trim()))
            .collect();
    }

    let query = input.trim();
    let entries = command_palette_entries();
    if query == "/" {
        return entries;
    }
    entries
        .into_iter()
        .filter(|entry| entry.command.starts_with(query))
        .collect()
}

pub fn command_palette_entries() -> Vec<PaletteEntry> {
    vec![
        PaletteEntry {
            command: "/view",
            description: "switch console view",
        },
        PaletteEntry {
            command: "/entity",
            description: "pick query entity",
        },
        PaletteEntry {
            command: "/name",
            description: "set query name",
        },
        PaletteEntry {
            command: "/where",
            description: "add filter clause",
        },
        PaletteEntry {
            command: "/filters",
            description: "edit filter clauses",
        },
        PaletteEntry {
            command: "/sql",
            description: "show generated SQL",
        },
        PaletteEntry {
            command: "/json",
            description: "show filter JSON",
        },
        PaletteEntry {
            command: "/run",
            description: "run query into a grid",
        },
        PaletteEntry {
            command: "/save",
            description: "save builder state",
        },
        PaletteEntry {
            command: "/queries",
            description: "saved query log",
        },
        PaletteEntry {
            command: "/reports",
            description: "browse reports",
        },
        PaletteEntry {
            command: "/report",
            description: "open run history",
        },
        PaletteEntry {
            command: "/grid",
            description: "grid controls",
        },
        PaletteEntry {
            command: "/notifications",
            description: "inbox popup",
        },
        PaletteEntry {
            command: "/ai",
            description: "assistant placeholder",
        },
        PaletteEntry {
            command: "/theme",
            description: "switch accent palette",
        },
        PaletteEntry {
            command: "/mode",
            description: "light/dark",
        },
        PaletteEntry {
            command: "/lang",
            description: "EN/DE/FR",
        },
        PaletteEntry {
            command: "/sidebar",
            description: "collapse nav",
        },
        PaletteEntry {
            command: "/settings",
            description: "show preferences",
        },
        PaletteEntry {
            command: "/status",
            description: "workspace status",
        },
        PaletteEntry {
            command: "/doctor",
            description: "check workspace health",
        },
        PaletteEntry {
            command: "/logs",
            description: "tail structured log",
        },
        PaletteEntry {
            command: "/help",
            description: "list commands",
        },
        PaletteEntry {
            command: "/exit",
            description: "quit",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn where_clause_parses_field_op_value() {
        let clause = parse_where_clause("total:greater-than:100").expect("parse");
        assert_eq!(clause.field_id, "total");
        assert_eq!(clause.op, ClauseOp::GreaterThan);
        assert_eq!(clause.value, "100");
    }

    #[test]
    fn where_clause_value_may_contain_colons() {
        let clause = parse_where_clause("name:contains:acme:eu").expect("parse");
        assert_eq!(clause.value, "acme:eu");
    }

    #[test]
    fn where_clause_without_a_value_is_inert() {
        let clause = parse_where_clause("name:contains").expect("parse");
        assert!(clause.is_inert());
        let clause = parse_where_clause("name:contains:").expect("parse");
        assert!(clause.is_inert());
    }

    #[test]
    fn where_clause_rejects_unknown_operator() {
        assert!(parse_where_clause("name:like:acme").is_err());
    }

    #[test]
    fn where_clause_rejects_missing_operator() {
        assert!(parse_where_clause("name").is_err());
        assert!(parse_where_clause(":equals:x").is_err());
    }

    #[test]
    fn report_search_matches_title_or_description() {
        let report = find_report("r1").expect("r1 exists");
        assert!(report_matches(report, "spend"));
        assert!(report_matches(report, "COST CENTER"));
        assert!(report_matches(report, "   "));
        assert!(!report_matches(report, "authentication"));
    }

    #[test]
    fn palette_narrows_by_prefix() {
        let all = command_palette_matches("/");
        assert!(all.len() > 10);
        let narrowed = command_palette_matches("/qu");
        assert!(!narrowed.is_empty());
        assert!(narrowed.iter().all(|e| e.command.starts_with("/qu")));
        assert!(command_palette_matches("status").is_empty());
    }

    #[test]
    fn subcommands_get_their_own_palette() {
        let entries = command_palette_matches("/grid ");
        assert!(entries.iter().any(|e| e.command == "/grid export"));
        let entries = command_palette_matches("/view ");
        assert_eq!(entries.len(), 6);
        let entries = command_palette_matches("/theme t");
        assert!(entries.iter().all(|e| e.command.starts_with("/theme t")));
    }
}
