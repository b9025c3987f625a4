pub mod client;
pub mod embed;
pub mod models;
pub mod webhook;

// 重新导出主要类型以便外部使用
pub use client::{HttpTransport, Transport};
pub use embed::EmbedPanel;
pub use models::*;
pub use webhook::{MessagePayload, WebhookConfig, WEBHOOK_URL_ENV};
