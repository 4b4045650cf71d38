pub mod annotation;
pub mod source_index;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Identity of the check that produced a violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// TAE001: annotation nesting depth exceeds the configured maximum
    Complexity,
    /// TAE002: flattened annotation length exceeds the configured maximum
    Length,
    /// TAE003: deprecated comment-style annotation
    OldStyle,
}

impl Rule {
    pub fn code(&self) -> &'static str {
        match self {
            Rule::Complexity => "TAE001",
            Rule::Length => "TAE002",
            Rule::OldStyle => "TAE003",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One reported problem at a source position. Lines are 1-based,
/// columns are 0-based byte offsets, matching Python's `col_offset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub rule: Rule,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnalysisResults {
    pub files: Vec<FileReport>,
}

impl AnalysisResults {
    pub fn total_violations(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }
}
