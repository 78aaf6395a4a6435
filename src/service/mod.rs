//! Service layer: business logic orchestration.
//!
//! Each service owns an `Arc<dyn Store>` handed in at construction;
//! [`NotificationService`] additionally owns the [`TelegramClient`].

pub mod llm_config_service;
pub mod notification_service;
pub mod status_service;
pub mod telegram;

pub use llm_config_service::LlmConfigService;
pub use notification_service::{NotificationReceipt, NotificationService};
pub use status_service::StatusService;
pub use telegram::TelegramClient;
