//! Rule checks over enriched records.
//!
//! Every rule is evaluated against every record; violations are counted and
//! reported but never stop the run or the export.

pub mod rules;

pub use rules::{DEFAULT_RULES, Rule};

use crate::event::EventRecord;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Source line of the record.
    pub line: usize,
    pub rule: &'static str,
    pub field: &'static str,
    pub passed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub outcomes: Vec<RuleOutcome>,
}

impl ValidationReport {
    pub fn failures(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn error_count(&self) -> usize {
        self.failures().count()
    }
}

pub fn validate(records: &[EventRecord], rules: &[Rule]) -> ValidationReport {
    let outcomes: Vec<RuleOutcome> = records
        .iter()
        .flat_map(|record| {
            rules.iter().map(move |rule| RuleOutcome {
                line: record.line,
                rule: rule.name,
                field: rule.field,
                passed: (rule.check)(record),
            })
        })
        .collect();

    let report = ValidationReport { outcomes };
    info!(
        checks = report.outcomes.len(),
        violations = report.error_count(),
        "validated records"
    );
    report
}
