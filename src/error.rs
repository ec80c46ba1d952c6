use std::error::Error as StdError;

use thiserror::Error;

use crate::assertion::AssertionFailure;

#[derive(Error, Debug)]
pub enum ApiCheckError {
    #[error("请求构建失败: {0}")]
    RequestBuild(String),

    #[error("网络错误: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("读取响应体失败: {0}")]
    BodyRead(#[source] reqwest::Error),

    #[error(transparent)]
    Assertion(#[from] AssertionFailure),

    #[error("加载测试定义失败: {0}")]
    Load(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON 解析错误: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML 解析错误: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ApiCheckError {
    /// 请求是否在发送前就失败了
    pub fn is_request_build(&self) -> bool {
        matches!(self, ApiCheckError::RequestBuild(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiCheckError::Transport(_))
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, ApiCheckError::Assertion(_))
    }

    /// 拼接完整的 source 链，例如连接被拒绝、DNS 失败、超时等底层原因
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            source = err.source();
        }
        message
    }
}

impl From<url::ParseError> for ApiCheckError {
    fn from(err: url::ParseError) -> Self {
        ApiCheckError::RequestBuild(format!("invalid URL: {}", err))
    }
}

/// Result type for api-check crate
pub type Result<T> = std::result::Result<T, ApiCheckError>;
