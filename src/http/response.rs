use std::time::Duration;

use reqwest::header::{HeaderMap as Headers, HeaderValue};

use crate::http::types::Status;

/// 已完整读取响应体的 HTTP 响应
#[derive(Debug, Clone)]
pub struct Response {
    pub status: Status,
    pub headers: Headers,
    pub body: String,
    pub duration: Duration,
}

impl Response {
    pub fn new(
        status: impl Into<Status>,
        headers: Headers,
        body: String,
        duration: Duration,
    ) -> Self {
        Self {
            status: status.into(),
            headers,
            body,
            duration,
        }
    }

    /// 大小写不敏感地读取 header 原始值
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// header 的可读形式，非 UTF-8 字节按替换字符显示
    pub fn header_lossy(&self, name: &str) -> Option<String> {
        self.header(name)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
    }
}
