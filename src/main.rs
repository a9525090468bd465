use anyhow::Result;
use crimerates::{extract, tables, write};
use std::{fs, path::Path};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // logs go to stderr; stdout carries only the final summary line
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) fixed paths ──────────────────────────────────────────────
    let input_path = Path::new("uploads/only_crime_tables.json");
    let output_path = Path::new("uploads/filtered_crime_reports.json");
    fs::create_dir_all("uploads")?;

    // ─── 3) load the scraped table collection ────────────────────────
    let all_tables = tables::load_tables(input_path)?;
    info!(
        "loaded {} tables from {}",
        all_tables.len(),
        input_path.display()
    );

    // ─── 4) pull the state rate rows out of the configured tables ────
    let records = extract::extract_records(&all_tables);
    info!("extracted {} records", records.len());

    // ─── 5) write the filtered report ────────────────────────────────
    write::write_records(&records, output_path)?;
    println!(
        "extracted {} records to: {}",
        records.len(),
        output_path.display()
    );

    Ok(())
}
