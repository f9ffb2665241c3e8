use crate::error::RecordError;
use crate::event::EventRecord;
use crate::event::date::DATE_FORMAT;
use crate::validate::ValidationReport;

const HEADERS: [&str; 10] = [
    "line",
    "date",
    "end_date",
    "title",
    "raw_tags",
    "distance",
    "difficulty",
    "wet",
    "activities",
    "starts_after_last",
];

/// Plain-text table of all records, columns padded to the widest cell.
pub fn render_table(records: &[EventRecord]) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(cells).collect();
    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    layout(&headers, &rows)
}

/// Failed rule checks and rejected lines, each with a count.
/// Empty when there is nothing to report.
pub fn render_error_report(validation: &ValidationReport, errors: &[RecordError]) -> String {
    let mut out = String::new();

    let violations = validation.error_count();
    if violations > 0 {
        let headers: Vec<String> = ["line", "rule", "field", "passed"]
            .iter()
            .map(|h| h.to_string())
            .collect();
        let rows: Vec<Vec<String>> = validation
            .failures()
            .map(|o| {
                vec![
                    o.line.to_string(),
                    o.rule.to_string(),
                    o.field.to_string(),
                    o.passed.to_string(),
                ]
            })
            .collect();
        out.push_str(&format!("{} validation error(s):\n", violations));
        out.push_str(&layout(&headers, &rows));
    }

    if !errors.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{} line(s) could not be read:\n", errors.len()));
        for err in errors {
            out.push_str(&format!("  {}\n", err));
        }
    }

    out
}

fn cells(r: &EventRecord) -> Vec<String> {
    let activities = match &r.activities {
        Some(list) => list
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(","),
        None => String::new(),
    };
    let after_last = match r.starts_after_last {
        Some(b) => b.to_string(),
        None => "-".to_string(),
    };

    vec![
        r.line.to_string(),
        r.date.format(DATE_FORMAT).to_string(),
        r.end_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
        r.title.clone(),
        r.raw_tags.clone(),
        r.distance.clone(),
        r.difficulty.clone(),
        r.wet.clone(),
        activities,
        after_last,
    ]
}

fn layout(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        out.push_str(padded.join(" | ").trim_end());
        out.push('\n');
    };

    line(headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(&rule);
    for row in rows {
        line(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::activity::Activity;
    use crate::validate::{DEFAULT_RULES, validate};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record() -> EventRecord {
        EventRecord {
            line: 3,
            date: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            end_date: None,
            title: "Bushwalk".into(),
            raw_tags: "[M/M W]".into(),
            distance: "M".into(),
            difficulty: "M".into(),
            wet: "W".into(),
            activities: Some(vec![Activity::Bushwalking]),
            starts_after_last: Some(true),
        }
    }

    #[test]
    fn table_has_header_rule_and_rows() {
        let table = render_table(&[record()]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("line | date       | end_date | title    | raw_tags | distance"));
        assert_eq!(
            lines[2],
            "3    | 02/01/2020 |          | Bushwalk | [M/M W]  | M        | M          | W   | Bushwalking | true"
        );
    }

    #[test]
    fn clean_run_has_empty_error_report() {
        let records = vec![record()];
        let report = validate(&records, DEFAULT_RULES);
        assert_eq!(render_error_report(&report, &[]), "");
    }

    #[test]
    fn error_report_counts_violations_and_rejected_lines() {
        let mut r = record();
        r.distance = "Q".into();
        let report = validate(&[r], DEFAULT_RULES);
        let errors = vec![RecordError::MissingStartDate { line: 1 }];

        let text = render_error_report(&report, &errors);
        assert!(text.starts_with("1 validation error(s):\n"), "{text}");
        assert!(text.contains("3    | distance_valid | distance | false"), "{text}");
        assert!(text.contains("1 line(s) could not be read:\n  line 1: no start date"), "{text}");
    }
}
