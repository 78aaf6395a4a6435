//! # review-gateway
//!
//! HTTP backend for a code-review tool. It stores per-project LLM
//! provider configuration, keeps a simple client status log, and relays
//! finished code reviews to a Telegram chat.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── StatusService / LlmConfigService / NotificationService (service/)
//!     │       │                                   │
//!     │       └── Store (persistence/)            └── TelegramClient ── Bot API
//!     │              ├── PostgresStore
//!     │              └── MemoryStore
//!     │
//!     └── Domain types + message rendering (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
