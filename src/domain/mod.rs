//! Domain layer: status records, project LLM configuration, and
//! code-review reports with their message rendering.

pub mod llm_config;
pub mod review;
pub mod review_message;
pub mod status_check;

pub use llm_config::{LlmConfigDraft, LlmConfigPatch, LlmProvider, ProjectLlmConfig};
pub use review::{ReviewIssue, ReviewReport, ReviewStatus, Severity, SeverityCounts};
pub use review_message::render_review_message;
pub use status_check::StatusCheck;
