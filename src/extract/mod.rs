// src/extract/mod.rs
use crate::tables::Table;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Which tables in the report collection carry the state-level rate
/// figures, by position, and the crime bucket each one covers.
pub static TABLE_MAP: &[(usize, CrimeType)] = &[
    (29, CrimeType::Ipc),
    (30, CrimeType::Sll),
    (31, CrimeType::IpcSll),
];

/// Column whose text holds the whole packed table row.
pub const STATE_COLUMN: &str = "SL";

/// Year the source report covers.
pub const REPORT_YEAR: u16 = 2022;

/// Crime bucket a table reports: IPC offences, SLL offences, or the
/// combined total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrimeType {
    #[serde(rename = "IPC")]
    Ipc,
    #[serde(rename = "SLL")]
    Sll,
    #[serde(rename = "IPC+SLL")]
    IpcSll,
}

impl CrimeType {
    pub fn as_str(&self) -> &str {
        match self {
            CrimeType::Ipc => "IPC",
            CrimeType::Sll => "SLL",
            CrimeType::IpcSll => "IPC+SLL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "IPC" => Some(CrimeType::Ipc),
            "SLL" => Some(CrimeType::Sll),
            "IPC+SLL" => Some(CrimeType::IpcSll),
            _ => None,
        }
    }
}

/// One extracted figure: a state's rate for one crime bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub crime: CrimeType,
    pub rate: f64,
    pub year: u16,
}

/// Crime bucket for the table at `idx`, if it is one of the configured
/// positions.
pub fn crime_for_table(idx: usize) -> Option<CrimeType> {
    TABLE_MAP
        .iter()
        .find(|(pos, _)| *pos == idx)
        .map(|(_, crime)| *crime)
}

/// Split a packed row into the state name and the rate figure.
///
/// Rows arrive from the PDF layer as one whitespace-joined string: a serial
/// number, the state name, then six numeric columns of which the
/// second-to-last is the rate. The offsets are tied to this one report's
/// layout and are applied literally; anything that does not fit the shape
/// is rejected.
pub fn parse_state_row(text: &str) -> Option<(String, f64)> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() < 8 {
        return None;
    }
    let state = parts[1..parts.len() - 6].join(" ");
    let rate: f64 = parts[parts.len() - 2].parse().ok()?;
    Some((state, rate))
}

/// Walk every table in the collection and pull state rate records out of
/// the configured ones. Rows that fail extraction are dropped without
/// aborting their table; tables without the packed column are dropped
/// without aborting the run.
#[instrument(level = "info", skip(tables))]
pub fn extract_records(tables: &[Table]) -> Vec<Record> {
    let mut records = Vec::new();

    for (idx, table) in tables.iter().enumerate() {
        let crime = match crime_for_table(idx) {
            Some(c) => c,
            None => continue,
        };

        if !table.has_column(STATE_COLUMN) {
            debug!(table = idx, crime = crime.as_str(), "no SL column; skipping table");
            continue;
        }

        let mut kept = 0usize;
        let mut skipped = 0usize;
        for cell in table.column(STATE_COLUMN) {
            let text = match cell {
                Some(Value::String(s)) => s,
                _ => {
                    skipped += 1;
                    continue;
                }
            };
            match parse_state_row(text) {
                Some((state, rate)) => {
                    records.push(Record {
                        state,
                        crime,
                        rate,
                        year: REPORT_YEAR,
                    });
                    kept += 1;
                }
                None => skipped += 1,
            }
        }
        debug!(table = idx, crime = crime.as_str(), kept, skipped, "table extracted");
    }

    records
}
