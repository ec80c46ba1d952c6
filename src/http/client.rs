use std::time::Duration;

use crate::config::Config;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::{ApiCheckError, Result};

/// 可复用的 HTTP 客户端
///
/// 默认配置不设置超时，服务端挂起时会一直等待。
#[derive(Clone, Default)]
pub struct Client {
    inner: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置文件构建，仅在显式配置了 timeout 时设置超时
    pub fn from_config(config: &Config) -> Result<Self> {
        match config.timeout() {
            Some(timeout) => Self::with_timeout(timeout),
            None => Ok(Self::new()),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiCheckError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { inner })
    }

    /// 发送请求并读取完整响应体
    ///
    /// 发送失败为 `Transport`，读取响应体失败为 `BodyRead`。
    pub async fn execute(&self, request: Request) -> Result<Response> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let req = self
            .inner
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body);

        let start = std::time::Instant::now();
        let response = req.send().await.map_err(ApiCheckError::Transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(ApiCheckError::BodyRead)?;
        let duration = start.elapsed();

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = duration.as_millis() as u64,
            "Received response"
        );
        Ok(Response::new(status, headers, body, duration))
    }
}
