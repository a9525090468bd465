pub mod extract;
pub mod tables;
pub mod write;

pub use extract::{extract_records, CrimeType, Record};
pub use tables::{load_tables, Table};
pub use write::{read_records, write_records};
