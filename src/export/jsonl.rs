use crate::Result;
use crate::event::EventRecord;
use anyhow::{Context, bail};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write one JSON object per record, one per line.
///
/// Dates are written as ISO-8601 text, absent values as null.
pub fn write_json_lines(path: &Path, records: &[EventRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    for record in records {
        serde_json::to_writer(&mut w, record)
            .with_context(|| format!("serialize record from line {}", record.line))?;
        w.write_all(b"\n")?;
    }
    w.flush().with_context(|| format!("write {}", path.display()))?;

    if !path.exists() {
        bail!("export file {} missing after write", path.display());
    }
    info!(path = %path.display(), records = records.len(), "wrote json lines");
    Ok(())
}

/// Load records exported by `write_json_lines`.
///
/// `line` is set to the 1-based line in this file. Blank lines are skipped.
pub fn read_json_lines(path: &Path) -> Result<Vec<EventRecord>> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        if line.trim().is_empty() {
            continue;
        }
        let mut record: EventRecord = serde_json::from_str(line)
            .with_context(|| format!("json parse error at {}:{}", path.display(), lno))?;
        record.line = lno;
        out.push(record);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::activity::Activity;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<EventRecord> {
        vec![
            EventRecord {
                line: 1,
                date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2020, 1, 3),
                title: "Camping MTB".into(),
                raw_tags: "[L/R W]".into(),
                distance: "L".into(),
                difficulty: "R".into(),
                wet: "W".into(),
                activities: Some(vec![Activity::Mtb]),
                starts_after_last: None,
            },
            EventRecord {
                line: 2,
                date: NaiveDate::from_ymd_opt(2020, 1, 4).unwrap(),
                end_date: None,
                title: "Picnic".into(),
                raw_tags: "".into(),
                distance: "".into(),
                difficulty: "".into(),
                wet: "".into(),
                activities: None,
                starts_after_last: Some(true),
            },
        ]
    }

    #[test]
    fn writes_one_object_per_line_with_text_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        write_json_lines(&path, &sample()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                r#"{"date":"2020-01-01","end_date":"2020-01-03","title":"Camping MTB","raw_tags":"[L/R W]","distance":"L","difficulty":"R","wet":"W","activities":["MTB"],"starts_after_last":null}"#,
                r#"{"date":"2020-01-04","end_date":null,"title":"Picnic","raw_tags":"","distance":"","difficulty":"","wet":"","activities":null,"starts_after_last":true}"#,
            ]
        );
    }

    #[test]
    fn reload_gives_back_the_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.jsonl");
        write_json_lines(&path, &sample()).unwrap();
        assert_eq!(read_json_lines(&path).unwrap(), sample());
    }

    #[test]
    fn malformed_line_names_its_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.jsonl");
        fs::write(&path, "\n{\"date\": 5}\n").unwrap();
        let err = read_json_lines(&path).unwrap_err();
        assert!(err.to_string().ends_with(":2"), "{err}");
    }
}
