use std::env;
use std::path::PathBuf;

use glasssuite_core::EntityKind;
use glasssuite_generate::{RowKind, generate_rows_now, write_rows_csv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut entity: Option<String> = None;
    let mut report: Option<String> = None;
    let mut count: usize = 1200;
    let mut seed: Option<String> = None;
    let mut out: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--entity" => entity = args.next(),
            "--report" => report = args.next(),
            "--count" => count = args.next().ok_or("missing --count value")?.parse()?,
            "--seed" => seed = args.next(),
            "--out" => out = args.next().map(PathBuf::from),
            _ => return Err("unexpected argument".into()),
        }
    }

    let kind = match report {
        Some(report) => RowKind::ReportRun { report },
        None => {
            let entity: EntityKind = entity.as_deref().unwrap_or("customers").parse()?;
            RowKind::Entity(entity)
        }
    };
    let seed = seed.unwrap_or_else(|| kind.default_seed().to_string());
    let out = out.unwrap_or_else(|| PathBuf::from(format!("{}.csv", kind.label())));

    let rows = generate_rows_now(&kind, count, &seed);
    let bytes = write_rows_csv(&out, kind.fields(), &rows)?;

    println!("rows={} bytes={} out={}", rows.len(), bytes, out.display());
    Ok(())
}
