use crate::model::{CommitInfo, MonthlyTotals, ReportRow};
use crate::util::month_key;
use std::collections::HashMap;

/// Per-month running totals, keyed by `YYYY-MM`.
#[derive(Debug, Default)]
pub struct Aggregator {
    months: HashMap<String, MonthlyTotals>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, commit: &CommitInfo, java_lines: u64, python_lines: u64) {
        self.record_month(month_key(&commit.timestamp), java_lines, python_lines);
    }

    pub fn record_month(&mut self, month: String, java_lines: u64, python_lines: u64) {
        self.months
            .entry(month)
            .or_default()
            .add_commit(java_lines, python_lines);
    }

    #[cfg(test)]
    pub fn get(&self, month: &str) -> Option<&MonthlyTotals> {
        self.months.get(month)
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn commit_count(&self) -> u64 {
        self.months.values().map(|m| m.commit_count).sum()
    }

    /// Consume the totals into one averaged row per month, oldest first.
    pub fn into_rows(self, branch: &str) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = self
            .months
            .into_iter()
            .map(|(month, totals)| ReportRow {
                month,
                branch: branch.to_string(),
                average_java: totals.average_java(),
                average_python: totals.average_python(),
                average_total: totals.average_total(),
            })
            .collect();

        rows.sort_by(|a, b| a.month.cmp(&b.month));
        rows
    }
}
