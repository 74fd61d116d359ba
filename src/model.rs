use chrono::{DateTime, Utc};
use gix::ObjectId;
use std::fmt;

pub const CSV_HEADER: [&str; 5] = [
    "Month",
    "Branch",
    "Average Java Lines of Code",
    "Average Python Lines of Code",
    "Average Total Lines of Code",
];

pub const DEFAULT_OUTPUT_CSV: &str = "lines_of_code.csv";

/// A commit on the analysed branch. `timestamp` is the committer time.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub id: ObjectId,
    pub short_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    Python,
}

impl Language {
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".java") {
            Some(Language::Java)
        } else if name.ends_with(".py") {
            Some(Language::Python)
        } else {
            None
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Java => f.write_str("Java"),
            Language::Python => f.write_str("Python"),
        }
    }
}

/// Running totals for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub java_lines: u64,
    pub python_lines: u64,
    pub commit_count: u64,
}

impl MonthlyTotals {
    pub fn add_commit(&mut self, java_lines: u64, python_lines: u64) {
        self.java_lines += java_lines;
        self.python_lines += python_lines;
        self.commit_count += 1;
    }

    pub fn average_java(&self) -> f64 {
        self.java_lines as f64 / self.commit_count as f64
    }

    pub fn average_python(&self) -> f64 {
        self.python_lines as f64 / self.commit_count as f64
    }

    pub fn average_total(&self) -> f64 {
        (self.java_lines + self.python_lines) as f64 / self.commit_count as f64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub month: String,
    pub branch: String,
    pub average_java: f64,
    pub average_python: f64,
    pub average_total: f64,
}

/// Line totals for a single checked-out commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitCounts {
    pub java_lines: u64,
    pub python_lines: u64,
    pub java_files: usize,
    pub python_files: usize,
    pub skipped_files: usize,
}

impl CommitCounts {
    pub fn total_lines(&self) -> u64 {
        self.java_lines + self.python_lines
    }
}
