use bytes::Bytes;
use reqwest::{Client, header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT}};
use std::future::Future;
use crate::models::WebhookError;
use crate::webhook::WebhookConfig;

/// HTTPS POST 传输层
///
/// `MessagePayload` 只依赖这个特征发送请求，便于替换 HTTP 客户端或在测试中注入替身。
pub trait Transport: Send + Sync {
    /// 以 `application/json` 将 `body` POST 到 `url`，读完响应后返回
    fn post_json(
        &self,
        url: &str,
        body: Bytes,
    ) -> impl Future<Output = Result<(), WebhookError>> + Send;
}

/// 基于 reqwest 的默认传输实现
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    error_for_status: bool,
}

impl HttpTransport {
    /// 按配置创建 HTTP 客户端
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| WebhookError::Configuration(format!("Invalid User-Agent: {}", e)))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder()
            .https_only(config.https_only)
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| WebhookError::Configuration(e.to_string()))?;

        Ok(HttpTransport {
            client,
            error_for_status: config.error_for_status,
        })
    }
}

impl Transport for HttpTransport {
    fn post_json(
        &self,
        url: &str,
        body: Bytes,
    ) -> impl Future<Output = Result<(), WebhookError>> + Send {
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let error_for_status = self.error_for_status;

        async move {
            let resp = request.send().await
                .map_err(|e| WebhookError::Transport(e.to_string()))?;

            let status = resp.status();
            // 读完响应体，连接随 resp 释放
            let response_text = resp.text().await
                .map_err(|e| WebhookError::Transport(e.to_string()))?;

            if error_for_status && !status.is_success() {
                log::warn!("Webhook 返回非成功状态: {}", status);
                return Err(WebhookError::Transport(format!("HTTP {}: {}", status, response_text)));
            }

            log::info!("Webhook 发送完成: HTTP {}", status);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        assert!(HttpTransport::new(&WebhookConfig::default()).is_ok());
    }

    #[test]
    fn rejects_user_agent_with_control_characters() {
        let config = WebhookConfig {
            user_agent: "bad\nagent".to_string(),
            ..WebhookConfig::default()
        };

        let err = HttpTransport::new(&config).unwrap_err();
        assert!(matches!(err, WebhookError::Configuration(_)));
    }

    #[tokio::test]
    async fn https_only_refuses_plain_http() {
        let transport = HttpTransport::new(&WebhookConfig::default()).unwrap();

        let err = transport
            .post_json("http://127.0.0.1:9/hook", Bytes::from_static(b"{}"))
            .await
            .unwrap_err();
        assert!(matches!(err, WebhookError::Transport(_)));
    }
}
