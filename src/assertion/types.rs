use std::fmt;

use serde_json::Value;

const MISSING: &str = "<missing>";

/// 响应与期望不符时的诊断信息
///
/// 每个变体都同时带上期望值和实际值，便于定位问题。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssertionFailure {
    #[error("Unexpected status code received\n\nExpected:\n{expected}\n\nActual:\n{actual}")]
    StatusCode { expected: u16, actual: u16 },

    #[error("Mismatching bodies\n\nExpected:\n{expected}\n\nActual:\n{actual}")]
    Body { expected: String, actual: String },

    #[error("Response body did not contain JSON or contained invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Mismatching JSON {0}")]
    Json(JsonMismatch),

    #[error("Mismatching {name} header\n\nExpected:\n{expected}\n\nActual:\n{}", or_missing(.actual))]
    Header {
        name: String,
        expected: String,
        actual: Option<String>,
    },
}

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

/// JSON 子集匹配失败的位置
#[derive(Debug, Clone, PartialEq)]
pub struct JsonMismatch {
    /// 形如 `$.user.tags` 的路径
    pub path: String,
    pub expected: Value,
    /// `None` 表示实际 JSON 中缺少该 key
    pub actual: Option<Value>,
}

impl JsonMismatch {
    pub fn new(path: impl Into<String>, expected: &Value, actual: &Value) -> Self {
        Self {
            path: path.into(),
            expected: expected.clone(),
            actual: Some(actual.clone()),
        }
    }

    pub fn missing(path: impl Into<String>, expected: &Value) -> Self {
        Self {
            path: path.into(),
            expected: expected.clone(),
            actual: None,
        }
    }
}

impl fmt::Display for JsonMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}\n\nExpected:\n{}\n\nActual:\n", self.path, self.expected)?;
        match &self.actual {
            Some(actual) => write!(f, "{}", actual),
            None => write!(f, "{}", MISSING),
        }
    }
}
