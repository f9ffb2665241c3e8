//! JSON-lines export and reload of enriched records.

pub mod jsonl;

pub use jsonl::{read_json_lines, write_json_lines};
