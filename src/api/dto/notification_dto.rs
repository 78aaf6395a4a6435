//! Code-review notification DTOs.
//!
//! Field names follow the camelCase the review frontend sends.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{ReviewIssue, ReviewReport, ReviewStatus, Severity};

/// One review finding as sent by the client.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewIssueDto {
    /// Caller-assigned identifier.
    pub id: String,
    /// Path of the affected file.
    pub file: String,
    /// Line number in `file`.
    pub line: i64,
    /// `error`, `warning`, `info`, or any other string.
    pub severity: String,
    /// Human-readable description.
    pub message: String,
    /// Rule that produced the finding.
    pub rule: String,
    /// Optional remediation hint.
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl From<ReviewIssueDto> for ReviewIssue {
    fn from(dto: ReviewIssueDto) -> Self {
        Self {
            severity: Severity::from(dto.severity.as_str()),
            id: dto.id,
            file: dto.file,
            line: dto.line,
            message: dto.message,
            rule: dto.rule,
            suggestion: dto.suggestion,
        }
    }
}

/// Request body for `POST /api/send-telegram-notification`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TelegramNotificationRequest {
    /// Merge request title.
    pub mr_title: String,
    /// Link to the merge request.
    pub mr_url: String,
    /// Merge request author.
    pub author: String,
    /// Files touched by the diff.
    pub files_changed: i64,
    /// Lines added.
    pub lines_added: i64,
    /// Lines removed.
    pub lines_removed: i64,
    /// Preformatted review duration.
    pub review_time: String,
    /// `passed`, `warnings`, `failed`, or any other string.
    pub status: String,
    /// Findings in display order.
    pub issues: Vec<ReviewIssueDto>,
    /// Free-text summary.
    pub summary: String,
}

impl From<TelegramNotificationRequest> for ReviewReport {
    fn from(req: TelegramNotificationRequest) -> Self {
        Self {
            status: ReviewStatus::from(req.status.as_str()),
            title: req.mr_title,
            url: req.mr_url,
            author: req.author,
            files_changed: req.files_changed,
            lines_added: req.lines_added,
            lines_removed: req.lines_removed,
            review_time: req.review_time,
            issues: req.issues.into_iter().map(ReviewIssue::from).collect(),
            summary: req.summary,
        }
    }
}
