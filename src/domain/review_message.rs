//! Renders a [`ReviewReport`] into a Telegram HTML message body.

use super::review::ReviewReport;

/// Number of issues itemized in the message; the rest are summarized
/// in a single "...and N more issues" line.
pub const MAX_LISTED_ISSUES: usize = 5;

/// Builds the HTML-formatted notification text for a review.
///
/// Caller-supplied text is escaped, so the body is always valid for
/// Telegram's `HTML` parse mode.
#[must_use]
pub fn render_review_message(report: &ReviewReport) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(32);

    lines.push(format!(
        "{} <b>Code Review Complete</b>",
        report.status.indicator()
    ));
    lines.push(String::new());
    lines.push(format!("📝 <b>MR:</b> {}", escape_html(&report.title)));
    lines.push(format!("👤 <b>Author:</b> {}", escape_html(&report.author)));
    lines.push(format!(
        "📊 <b>Status:</b> {}",
        escape_html(&report.status.display_text())
    ));
    lines.push(String::new());

    lines.push("📁 <b>Stats:</b>".to_string());
    lines.push(format!("• Files Changed: {}", report.files_changed));
    lines.push(format!("• Lines Added: +{}", report.lines_added));
    lines.push(format!("• Lines Removed: -{}", report.lines_removed));
    lines.push(format!(
        "• Review Time: {}",
        escape_html(&report.review_time)
    ));

    if !report.issues.is_empty() {
        let counts = report.severity_counts();
        lines.push(String::new());
        lines.push("🔍 <b>Issues Found:</b>".to_string());
        lines.push(format!("• 🔴 Errors: {}", counts.errors));
        lines.push(format!("• 🟡 Warnings: {}", counts.warnings));
        lines.push(format!("• 🔵 Info: {}", counts.info));
        lines.push(String::new());

        lines.push("📋 <b>Top Issues:</b>".to_string());
        for (idx, issue) in report.issues.iter().take(MAX_LISTED_ISSUES).enumerate() {
            lines.push(format!(
                "{}. {} <code>{}:{}</code>",
                idx + 1,
                issue.severity.indicator(),
                escape_html(&issue.file),
                issue.line
            ));
            lines.push(format!("   {}", escape_html(&issue.message)));
        }

        let hidden = report.issues.len().saturating_sub(MAX_LISTED_ISSUES);
        if hidden > 0 {
            lines.push(String::new());
            lines.push(format!("<i>...and {hidden} more issues</i>"));
        }
    }

    lines.push(String::new());
    lines.push("💡 <b>Summary:</b>".to_string());
    lines.push(escape_html(&report.summary));
    lines.push(String::new());
    lines.push(format!(
        "🔗 <a href='{}'>View Merge Request</a>",
        escape_html(&report.url)
    ));

    lines.join("\n")
}

/// Escapes the characters Telegram's HTML parser treats as markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::{ReviewIssue, ReviewStatus, Severity};

    fn issue(n: usize, severity: &str) -> ReviewIssue {
        ReviewIssue {
            id: format!("issue-{n}"),
            file: format!("src/file_{n}.rs"),
            line: i64::try_from(n).unwrap_or_default() * 10,
            severity: Severity::from(severity),
            message: format!("problem number {n}"),
            rule: "no-op".to_string(),
            suggestion: None,
        }
    }

    fn report(issues: Vec<ReviewIssue>) -> ReviewReport {
        ReviewReport {
            title: "Add login flow".to_string(),
            url: "https://gitlab.example.com/group/app/-/merge_requests/42".to_string(),
            author: "dev".to_string(),
            files_changed: 3,
            lines_added: 120,
            lines_removed: 8,
            review_time: "1m 05s".to_string(),
            status: ReviewStatus::from("warnings"),
            issues,
            summary: "Mostly fine.".to_string(),
        }
    }

    #[test]
    fn header_and_stats() {
        let text = render_review_message(&report(vec![]));
        assert!(text.starts_with("⚠️ <b>Code Review Complete</b>"));
        assert!(text.contains("📝 <b>MR:</b> Add login flow"));
        assert!(text.contains("👤 <b>Author:</b> dev"));
        assert!(text.contains("📊 <b>Status:</b> Warnings"));
        assert!(text.contains("• Files Changed: 3"));
        assert!(text.contains("• Lines Added: +120"));
        assert!(text.contains("• Lines Removed: -8"));
        assert!(text.contains("• Review Time: 1m 05s"));
        assert!(text.contains("💡 <b>Summary:</b>\nMostly fine."));
        assert!(text.ends_with(
            "🔗 <a href='https://gitlab.example.com/group/app/-/merge_requests/42'>View Merge Request</a>"
        ));
    }

    #[test]
    fn no_issue_block_without_issues() {
        let text = render_review_message(&report(vec![]));
        assert!(!text.contains("Issues Found"));
        assert!(!text.contains("Top Issues"));
    }

    #[test]
    fn seven_issues_lists_five_and_notes_rest() {
        let issues = (1..=7).map(|n| issue(n, "warning")).collect();
        let text = render_review_message(&report(issues));

        for n in 1..=5 {
            assert!(text.contains(&format!("{n}. 🟡 <code>src/file_{n}.rs:{}</code>", n * 10)));
            assert!(text.contains(&format!("   problem number {n}")));
        }
        assert!(!text.contains("src/file_6.rs"));
        assert!(!text.contains("src/file_7.rs"));
        assert!(text.contains("...and 2 more issues"));
    }

    #[test]
    fn five_issues_has_no_suppressed_line() {
        let issues = (1..=5).map(|n| issue(n, "info")).collect();
        let text = render_review_message(&report(issues));
        assert!(text.contains("5. 🔵 <code>src/file_5.rs:50</code>"));
        assert!(!text.contains("more issues"));
    }

    #[test]
    fn severity_counts_are_rendered() {
        let issues = ["error", "error", "warning", "info", "info", "info"]
            .iter()
            .enumerate()
            .map(|(n, sev)| issue(n, sev))
            .collect();
        let text = render_review_message(&report(issues));
        assert!(text.contains("Errors: 2"));
        assert!(text.contains("Warnings: 1"));
        assert!(text.contains("Info: 3"));
    }

    #[test]
    fn unknown_severity_gets_neutral_indicator() {
        let text = render_review_message(&report(vec![issue(1, "blocker")]));
        assert!(text.contains("1. ⚪ <code>src/file_1.rs:10</code>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut r = report(vec![]);
        r.title = "Fix <script> & 'quotes'".to_string();
        let text = render_review_message(&r);
        assert!(text.contains("Fix &lt;script&gt; &amp; &#39;quotes&#39;"));
    }
}
