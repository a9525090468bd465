// src/write/mod.rs
use crate::extract::Record;
use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufReader, Write},
    path::{Path, PathBuf},
};
use tracing::debug;

/// Serialize the extracted records to `path` as pretty-printed JSON with a
/// trailing newline. Written to a sibling tmp file first, then renamed over
/// the target.
pub fn write_records<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let path = path.as_ref();
    let tmp_path: PathBuf = path.with_extension("json.tmp");

    let mut tmp = File::create(&tmp_path)
        .with_context(|| format!("creating {}", tmp_path.display()))?;
    serde_json::to_writer_pretty(&mut tmp, records)
        .with_context(|| format!("serializing records to {}", tmp_path.display()))?;
    tmp.write_all(b"\n")?;

    fs::rename(&tmp_path, path).with_context(|| {
        format!("renaming {} -> {}", tmp_path.display(), path.display())
    })?;

    debug!(records = records.len(), path = %path.display(), "wrote records");
    Ok(())
}

/// Parse a records file back into memory.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing records from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{CrimeType, Record};
    use anyhow::Result;
    use tempfile::tempdir;

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                state: "Andhra Pradesh".into(),
                crime: CrimeType::Ipc,
                rate: 26.3,
                year: 2022,
            },
            Record {
                state: "Bihar".into(),
                crime: CrimeType::IpcSll,
                rate: 680.1,
                year: 2022,
            },
        ]
    }

    #[test]
    fn test_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("filtered_crime_reports.json");

        let records = sample_records();
        write_records(&records, &path)?;
        let loaded = read_records(&path)?;
        assert_eq!(loaded, records);

        // no stray tmp file left behind
        assert!(!path.with_extension("json.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_output_shape() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.json");
        write_records(&sample_records(), &path)?;

        let text = fs::read_to_string(&path)?;
        // pretty-printed with 2-space indentation and the literal wire names
        assert!(text.starts_with("[\n  {\n"));
        assert!(text.contains("\"crime\": \"IPC\""));
        assert!(text.contains("\"crime\": \"IPC+SLL\""));
        assert!(text.contains("\"year\": 2022"));
        assert!(text.ends_with("\n"));
        Ok(())
    }

    #[test]
    fn test_load_extract_write_chain() -> Result<()> {
        use crate::{extract, tables};
        use serde_json::{json, Value};
        use std::io::Write as _;
        use tempfile::NamedTempFile;

        // 29 filler tables, then the three the pipeline reads
        let mut doc: Vec<Value> = vec![json!([]); 29];
        doc.push(json!([
            {"SL": "1 Andhra Pradesh 140019 139824 99.9 1305.7 26.3 662.5"},
            {"SL": "Rate of Total Cognizable Crimes"}
        ]));
        doc.push(json!([{"SL": "1 Andhra Pradesh 90021 89911 99.9 811.2 17.0 402.3"}]));
        doc.push(json!([{"SL": "1 Andhra Pradesh 230040 229735 99.8 2116.9 43.3 1064.8"}]));

        let mut input = NamedTempFile::new()?;
        input.write_all(Value::Array(doc).to_string().as_bytes())?;

        let all_tables = tables::load_tables(input.path())?;
        let records = extract::extract_records(&all_tables);
        assert_eq!(records.len(), 3);

        let dir = tempdir()?;
        let out = dir.path().join("filtered_crime_reports.json");
        write_records(&records, &out)?;
        assert_eq!(read_records(&out)?, records);
        Ok(())
    }

    #[test]
    fn test_empty_collection_writes_empty_array() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.json");
        write_records(&[], &path)?;
        assert_eq!(read_records(&path)?, Vec::<Record>::new());
        Ok(())
    }
}
