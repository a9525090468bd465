// src/tables/mod.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::Path,
};
use tracing::debug;

/// One row of a parsed report table: column name → cell value.
/// Rows are sparse; the upstream parser only emits the keys it managed to
/// read for a given row.
pub type Row = BTreeMap<String, Value>;

/// A single table lifted out of the report collection, in row-major form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    /// True when any row in the table carries `name`.
    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.contains_key(name))
    }

    /// The `name` cell of each row in row order; `None` where a row lacks
    /// the key.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.rows.iter().map(move |row| row.get(name))
    }

    /// Union of column names across all rows, sorted.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Load the full table collection from a JSON document: an array of tables,
/// each an array of row objects.
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<Vec<Table>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("opening table collection {}", path.display()))?;
    let tables: Vec<Table> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing table collection {}", path.display()))?;
    debug!(tables = tables.len(), "loaded table collection");
    Ok(tables)
}
