use bytes::Bytes;
use serde::Serialize;
use std::env;
use std::time::Duration;
use crate::client::{HttpTransport, Transport};
use crate::embed::EmbedPanel;
use crate::models::*;

/// 读取 Webhook URL 的环境变量名
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Webhook 客户端配置
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// 请求头中的 User-Agent
    pub user_agent: String,
    /// 单次请求的超时时间
    pub timeout: Duration,
    /// 只允许 HTTPS 地址
    pub https_only: bool,
    /// 非 2xx 状态码视为传输错误
    pub error_for_status: bool,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("DiscordWebhookSDK/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            https_only: true,
            error_for_status: true,
        }
    }
}

/// 一条 Webhook 消息
///
/// 先设置用户名、头像、正文并追加 Embed，再调用 [`MessagePayload::deliver`] 发送。
/// 未设置的字段不会出现在 JSON 中；`embeds` 只在至少追加过一个面板后出现。
/// 同一实例可以多次发送，每次都是一个独立的请求。
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    #[serde(skip)]
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<EmbedPanel>,
}

impl MessagePayload {
    /// 使用目标 Webhook URL 创建空消息
    pub fn new(url: &str) -> Self {
        MessagePayload {
            url: url.to_string(),
            username: None,
            avatar_url: None,
            content: None,
            embeds: Vec::new(),
        }
    }

    /// 从环境变量 `DISCORD_WEBHOOK_URL` 读取目标地址
    pub fn from_env() -> Result<Self, WebhookError> {
        let url = env::var(WEBHOOK_URL_ENV)
            .map_err(|_| WebhookError::Configuration(format!("{} environment variable not set", WEBHOOK_URL_ENV)))?;
        Ok(Self::new(&url))
    }

    /// 覆盖默认的发送者名称
    pub fn set_username(&mut self, username: &str) -> &mut Self {
        self.username = Some(username.to_string());
        self
    }

    /// 覆盖默认的发送者头像
    pub fn set_avatar_url(&mut self, avatar_url: &str) -> &mut Self {
        self.avatar_url = Some(avatar_url.to_string());
        self
    }

    pub fn set_content(&mut self, content: &str) -> &mut Self {
        self.content = Some(content.to_string());
        self
    }

    /// 按参数顺序追加 Embed，之前追加的面板保持不变
    pub fn add_embed_panels<I>(&mut self, panels: I) -> &mut Self
    where
        I: IntoIterator<Item = EmbedPanel>,
    {
        self.embeds.extend(panels);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn embeds(&self) -> &[EmbedPanel] {
        &self.embeds
    }

    /// 序列化为 JSON 文档 (不包含目标 URL)
    pub fn to_json(&self) -> Result<serde_json::Value, WebhookError> {
        serde_json::to_value(self).map_err(|e| WebhookError::Json(e.to_string()))
    }

    /// 序列化为实际发送的 JSON 文本
    pub fn to_json_string(&self) -> Result<String, WebhookError> {
        serde_json::to_string(self).map_err(|e| WebhookError::Json(e.to_string()))
    }

    /// 使用默认配置发送消息
    pub async fn deliver(&self) -> Result<(), WebhookError> {
        self.ensure_url()?;
        let transport = HttpTransport::new(&WebhookConfig::default())?;
        self.deliver_with(&transport).await
    }

    /// 通过指定的传输层发送消息
    ///
    /// URL 为空时直接返回 [`WebhookError::Configuration`]，不会调用传输层。
    /// 传输层的任何错误原样返回，不做重试。
    pub async fn deliver_with<T: Transport>(&self, transport: &T) -> Result<(), WebhookError> {
        self.ensure_url()?;

        let body = self.to_json_string()?;
        log::debug!("发送 Webhook 消息: {}", body);

        transport
            .post_json(&self.url, Bytes::from(body))
            .await
            .map_err(|e| {
                log::error!("Webhook 发送失败: {}", e);
                e
            })
    }

    /// 阻塞当前线程直到发送完成，使用默认配置
    pub fn deliver_blocking(&self) -> Result<(), WebhookError> {
        self.ensure_url()?;
        let transport = HttpTransport::new(&WebhookConfig::default())?;
        self.deliver_blocking_with(&transport)
    }

    /// 阻塞当前线程，通过指定的传输层发送消息
    ///
    /// 内部创建单线程 tokio 运行时；在异步上下文中调用时返回
    /// [`WebhookError::Configuration`]，应改用 [`MessagePayload::deliver_with`]。
    pub fn deliver_blocking_with<T: Transport>(&self, transport: &T) -> Result<(), WebhookError> {
        self.ensure_url()?;
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(WebhookError::Configuration(
                "deliver_blocking called inside an async runtime".to_string(),
            ));
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| WebhookError::Configuration(format!("Failed to build runtime: {}", e)))?;
        runtime.block_on(self.deliver_with(transport))
    }

    fn ensure_url(&self) -> Result<(), WebhookError> {
        if self.url.trim().is_empty() {
            return Err(WebhookError::Configuration("Url is empty".to_string()));
        }
        Ok(())
    }
}
