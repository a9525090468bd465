use crimerates::{extract, tables};
use serde_json::Value;
use std::{env, path::Path, process::exit};

fn main() {
    // Expect exactly one CLI argument: path to a table-collection JSON.
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <TABLES_JSON>", args[0]);
        exit(1);
    }
    if let Err(e) = inspect_tables(Path::new(&args[1])) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

/// Load the collection and print per-table details: row count, columns,
/// and for tables the pipeline is configured to read, how many rows would
/// survive extraction.
fn inspect_tables(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let all_tables = tables::load_tables(path)?;

    println!("=== Table collection: {} ===", path.display());
    println!("Tables: {}", all_tables.len());
    println!();

    for (idx, table) in all_tables.iter().enumerate() {
        println!("--- Table {} ---", idx);
        println!("  Rows:    {}", table.rows.len());
        println!("  Columns: {}", table.column_names().join(", "));

        let crime = match extract::crime_for_table(idx) {
            Some(c) => c,
            None => continue,
        };
        println!("  Crime:   {}", crime.as_str());

        if !table.has_column(extract::STATE_COLUMN) {
            println!("  ! missing \"{}\" column", extract::STATE_COLUMN);
            continue;
        }

        let mut parseable = 0usize;
        let mut rejected = 0usize;
        for cell in table.column(extract::STATE_COLUMN) {
            match cell {
                Some(Value::String(text)) if extract::parse_state_row(text).is_some() => {
                    parseable += 1
                }
                _ => rejected += 1,
            }
        }
        println!("  Parseable rows: {}", parseable);
        println!("  Rejected rows:  {}", rejected);
    }

    Ok(())
}
