//! Code-review results supplied by callers of the notification endpoint.
//!
//! None of these types are persisted. Status and severity arrive as free
//! strings; they are lifted into enums with an explicit catch-all variant
//! so that unrecognized values are an ordinary match arm.

use std::fmt;

/// Overall outcome of a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewStatus {
    /// No blocking findings.
    Passed,
    /// Findings that do not block the merge.
    Warnings,
    /// Blocking findings.
    Failed,
    /// Any other status string, kept verbatim.
    Other(String),
}

impl ReviewStatus {
    /// Indicator shown in front of the message headline.
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        match self {
            Self::Passed => "✅",
            Self::Warnings => "⚠️",
            Self::Failed => "❌",
            Self::Other(_) => "📋",
        }
    }

    /// Raw status string as received.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Passed => "passed",
            Self::Warnings => "warnings",
            Self::Failed => "failed",
            Self::Other(raw) => raw,
        }
    }

    /// Status with the first character upper-cased and the rest lower-cased.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut chars = self.as_str().chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl From<&str> for ReviewStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "passed" => Self::Passed,
            "warnings" => Self::Warnings,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a single review finding.
///
/// Matching is exact: `"Error"` is not [`Severity::Error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    /// Must be fixed.
    Error,
    /// Should be looked at.
    Warning,
    /// Informational.
    Info,
    /// Any other severity string, kept verbatim.
    Other(String),
}

impl Severity {
    /// Indicator shown next to an itemized issue.
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        match self {
            Self::Error => "🔴",
            Self::Warning => "🟡",
            Self::Info => "🔵",
            Self::Other(_) => "⚪",
        }
    }
}

impl From<&str> for Severity {
    fn from(raw: &str) -> Self {
        match raw {
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A single finding produced by a review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewIssue {
    /// Caller-assigned identifier.
    pub id: String,
    /// Path of the affected file.
    pub file: String,
    /// Line number in `file`.
    pub line: i64,
    /// Finding severity.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
    /// Rule that produced the finding.
    pub rule: String,
    /// Optional remediation hint.
    pub suggestion: Option<String>,
}

/// A finished review of one merge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReport {
    /// Merge request title.
    pub title: String,
    /// Link back to the merge request.
    pub url: String,
    /// Merge request author.
    pub author: String,
    /// Number of files touched by the diff.
    pub files_changed: i64,
    /// Lines added by the diff.
    pub lines_added: i64,
    /// Lines removed by the diff.
    pub lines_removed: i64,
    /// Preformatted review duration, e.g. `"2m 13s"`.
    pub review_time: String,
    /// Overall outcome.
    pub status: ReviewStatus,
    /// Findings in caller order.
    pub issues: Vec<ReviewIssue>,
    /// Free-text summary.
    pub summary: String,
}

/// Per-severity issue counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    /// Issues with severity `error`.
    pub errors: usize,
    /// Issues with severity `warning`.
    pub warnings: usize,
    /// Issues with severity `info`.
    pub info: usize,
}

impl ReviewReport {
    /// Counts issues per known severity. Unrecognized severities are not
    /// counted anywhere.
    #[must_use]
    pub fn severity_counts(&self) -> SeverityCounts {
        self.issues
            .iter()
            .fold(SeverityCounts::default(), |mut acc, issue| {
                match issue.severity {
                    Severity::Error => acc.errors += 1,
                    Severity::Warning => acc.warnings += 1,
                    Severity::Info => acc.info += 1,
                    Severity::Other(_) => {}
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lookup_with_fallback() {
        assert_eq!(ReviewStatus::from("passed").indicator(), "✅");
        assert_eq!(ReviewStatus::from("warnings").indicator(), "⚠️");
        assert_eq!(ReviewStatus::from("failed").indicator(), "❌");
        assert_eq!(ReviewStatus::from("skipped").indicator(), "📋");
        assert_eq!(ReviewStatus::from("PASSED").indicator(), "📋");
    }

    #[test]
    fn status_text_is_capitalized() {
        assert_eq!(ReviewStatus::from("passed").display_text(), "Passed");
        assert_eq!(ReviewStatus::from("iN_pRoGrEsS").display_text(), "In_progress");
        assert_eq!(ReviewStatus::from("").display_text(), "");
    }

    #[test]
    fn severity_match_is_exact() {
        assert_eq!(Severity::from("error"), Severity::Error);
        assert_eq!(Severity::from("Error"), Severity::Other("Error".to_string()));
        assert_eq!(Severity::from("critical").indicator(), "⚪");
    }

    #[test]
    fn counts_ignore_unknown_severities() {
        let issue = |severity: &str| ReviewIssue {
            id: "x".to_string(),
            file: "a.rs".to_string(),
            line: 1,
            severity: Severity::from(severity),
            message: String::new(),
            rule: String::new(),
            suggestion: None,
        };
        let report = ReviewReport {
            title: String::new(),
            url: String::new(),
            author: String::new(),
            files_changed: 0,
            lines_added: 0,
            lines_removed: 0,
            review_time: String::new(),
            status: ReviewStatus::Passed,
            issues: vec![
                issue("error"),
                issue("error"),
                issue("warning"),
                issue("info"),
                issue("info"),
                issue("info"),
                issue("critical"),
            ],
            summary: String::new(),
        };
        let counts = report.severity_counts();
        assert_eq!(
            counts,
            SeverityCounts {
                errors: 2,
                warnings: 1,
                info: 3,
            }
        );
    }
}
