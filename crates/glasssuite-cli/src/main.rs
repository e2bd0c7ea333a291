mod i18n;
mod notifications;
mod theme;
mod tui;
mod workspace;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use glasssuite_core::{ALL_REPORTS_KEY, EntityKind, Error as CoreError, find_report};
use glasssuite_generate::{
    GenerationError, RowKind, generate_rows_now, write_rows_csv, write_rows_json,
};
use glasssuite_query::{QueryError, filter_descriptor, render_sql};
use thiserror::Error;

use tui::commands::parse_where_clause;
use workspace::{
    DoctorLevel, SavedQueriesFile, WorkspaceError, WorkspacePaths, init_console_logging,
    load_or_create_saved_queries, run_doctor, save_saved_queries,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("workspace error: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("query error: {0}")]
    Query(#[from] QueryError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "glasssuite", version, about = "GlassSuite enterprise console")]
struct Cli {
    /// Workspace directory holding config, exports, and logs.
    #[arg(long, global = true, default_value = ".glasssuite")]
    workspace: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive console (the default).
    Tui,
    /// Generate deterministic rows straight to a file.
    Generate(GenerateArgs),
    /// Render SQL or filter JSON for a clause list.
    Query(QueryArgs),
    /// Inspect or clear the saved query log.
    Queries(QueriesArgs),
    /// Check workspace files without repairing them.
    Doctor,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// What to generate: an entity table, or "report-run" for run history.
    #[arg(long, value_name = "KIND", default_value = "customers")]
    kind: String,
    /// Number of rows.
    #[arg(long, default_value_t = 1200)]
    count: usize,
    /// Deterministic seed; defaults to the kind's canonical seed.
    #[arg(long)]
    seed: Option<String>,
    /// Report id when kind is "report".
    #[arg(long, value_name = "REPORT_ID")]
    report: Option<String>,
    /// Output file; defaults into the workspace exports directory.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format: csv or json.
    #[arg(long, default_value = "csv")]
    format: String,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// What to print: sql or json.
    #[arg(value_name = "MODE")]
    mode: String,
    /// Entity the clauses apply to.
    #[arg(long, default_value = "customers")]
    entity: String,
    /// Filter clause as field:op:value; repeatable.
    #[arg(long = "where", value_name = "FIELD:OP:VALUE")]
    clauses: Vec<String>,
}

#[derive(Args, Debug)]
struct QueriesArgs {
    /// list or clear.
    #[arg(value_name = "ACTION", default_value = "list")]
    action: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let paths = WorkspacePaths::new(cli.workspace.clone());

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            paths.ensure_dirs()?;
            init_console_logging(&paths.console_log_path())?;
            tui::run(tokio::runtime::Handle::current(), cli.workspace)
        }
        Command::Generate(args) => {
            paths.ensure_dirs()?;
            init_console_logging(&paths.console_log_path())?;
            run_generate(&paths, args)
        }
        Command::Query(args) => run_query(args),
        Command::Queries(args) => {
            paths.ensure_dirs()?;
            init_console_logging(&paths.console_log_path())?;
            run_queries(&paths, &args.action)
        }
        Command::Doctor => run_doctor_command(&paths),
    }
}

fn run_generate(paths: &WorkspacePaths, args: GenerateArgs) -> Result<(), CliError> {
    let kind = parse_row_kind(&args.kind, args.report.as_deref())?;
    let seed = match args.seed {
        Some(seed) => seed,
        None => kind.default_seed().to_string(),
    };

    tracing::info!(kind = kind.label(), rows = args.count, seed = %seed, "generation started");
    let rows = generate_rows_now(&kind, args.count, &seed);

    let out = match args.out {
        Some(path) => path,
        None => paths.export_path(&format!("{}.{}", args.kind, args.format)),
    };
    let bytes = match args.format.as_str() {
        "csv" => write_rows_csv(&out, kind.fields(), &rows).map_err(GenerationError::from)?,
        "json" => write_rows_json(&out, &rows)?,
        other => {
            return Err(CliError::InvalidConfig(format!(
                "unsupported format: {other} (csv, json)"
            )));
        }
    };

    tracing::info!(path = %out.display(), rows = rows.len(), bytes, "rows written");
    println!("wrote {} rows to {} ({bytes} bytes)", rows.len(), out.display());
    Ok(())
}

fn parse_row_kind(kind: &str, report: Option<&str>) -> Result<RowKind, CliError> {
    if kind == "report" || kind == "report-run" {
        let key = report.unwrap_or(ALL_REPORTS_KEY);
        if key != ALL_REPORTS_KEY && find_report(key).is_none() {
            return Err(CliError::InvalidConfig(format!("unknown report: {key}")));
        }
        return Ok(RowKind::ReportRun {
            report: key.to_string(),
        });
    }
    let entity: EntityKind = kind.parse()?;
    Ok(RowKind::Entity(entity))
}

fn run_query(args: QueryArgs) -> Result<(), CliError> {
    let entity: EntityKind = args.entity.parse()?;
    let mut clauses = Vec::new();
    for spec in &args.clauses {
        clauses.push(parse_where_clause(spec)?);
    }

    match args.mode.as_str() {
        "sql" => println!("{}", render_sql(entity, &clauses)?),
        "json" => println!("{}", filter_descriptor(entity, &clauses)?.to_pretty_json()?),
        other => {
            return Err(CliError::InvalidConfig(format!(
                "unsupported mode: {other} (sql, json)"
            )));
        }
    }
    Ok(())
}

fn run_queries(paths: &WorkspacePaths, action: &str) -> Result<(), CliError> {
    match action {
        "list" => {
            let file = load_or_create_saved_queries(paths)?;
            if file.queries.is_empty() {
                println!("no saved queries.");
                return Ok(());
            }
            for (i, query) in file.queries.iter().enumerate() {
                println!(
                    "{}. {} · {} · {} filters · {}",
                    i + 1,
                    query.name,
                    query.entity.label(),
                    query.clauses.len(),
                    query.id
                );
            }
        }
        "clear" => {
            save_saved_queries(paths, &SavedQueriesFile::default())?;
            println!("saved queries cleared.");
        }
        other => {
            return Err(CliError::InvalidConfig(format!(
                "unsupported action: {other} (list, clear)"
            )));
        }
    }
    Ok(())
}

fn run_doctor_command(paths: &WorkspacePaths) -> Result<(), CliError> {
    let report = run_doctor(paths)?;
    if report.issues.is_empty() {
        println!("doctor: no issues found.");
        return Ok(());
    }
    for issue in &report.issues {
        let level = match issue.level {
            DoctorLevel::Warning => "warn",
            DoctorLevel::Error => "error",
        };
        match &issue.hint {
            Some(hint) => println!("{level}: {} ({hint})", issue.message),
            None => println!("{level}: {}", issue.message),
        }
    }
    Ok(())
}
