use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 单个声明式 HTTP 测试：请求描述 + 期望响应
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TestCase {
    /// 测试名称（可选，仅用于报告）
    #[serde(default)]
    pub name: Option<String>,

    /// 目标主机，例如 `http://localhost:8080`
    #[serde(default)]
    pub hostname: String,

    /// 接口路径，例如 `/api/users`
    #[serde(default)]
    pub endpoint: String,

    /// HTTP 方法，缺省为 GET
    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default)]
    pub request: RequestSpec,

    #[serde(default)]
    pub response: ResponseSpec,
}

impl TestCase {
    pub fn new(
        hostname: impl Into<String>,
        endpoint: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            hostname: hostname.into(),
            endpoint: endpoint.into(),
            method: method.into(),
            request: RequestSpec::default(),
            response: ResponseSpec::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_request(mut self, request: RequestSpec) -> Self {
        self.request = request;
        self
    }

    pub fn with_response(mut self, response: ResponseSpec) -> Self {
        self.response = response;
        self
    }

    /// 报告中展示用的标签：名称优先，否则 `METHOD host+endpoint`
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {}{}", self.method, self.hostname, self.endpoint),
        }
    }
}

fn default_method() -> String {
    "GET".to_string()
}

/// 请求部分的描述
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RequestSpec {
    #[serde(default)]
    pub query_params: HashMap<String, String>,

    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// 原始请求体；`json` 非空时被覆盖
    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub json: Option<Value>,
}

impl RequestSpec {
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query_params.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_owned();
        self
    }

    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    /// JSON 请求体是否需要发送：存在且不是 null 或空对象
    pub fn has_json_body(&self) -> bool {
        match &self.json {
            None | Some(Value::Null) => false,
            Some(Value::Object(map)) => !map.is_empty(),
            Some(_) => true,
        }
    }
}

/// 期望的响应
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResponseSpec {
    #[serde(default = "default_status_code")]
    pub status_code: u16,

    /// 期望的原始响应体；为空时不做断言
    #[serde(default)]
    pub body: Option<String>,

    /// 期望的 JSON（子集匹配）
    #[serde(default)]
    pub json: Option<Value>,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for ResponseSpec {
    fn default() -> Self {
        Self::new(default_status_code())
    }
}

impl ResponseSpec {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            body: None,
            json: None,
            headers: HashMap::new(),
        }
    }

    pub fn with_body(mut self, body: &str) -> Self {
        self.body = Some(body.to_owned());
        self
    }

    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    /// 非空时才返回期望的响应体
    pub fn expected_body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.is_empty())
    }

    /// 是否声明了 JSON 期望（null 视为未声明）
    pub fn expects_json(&self) -> bool {
        !matches!(self.json, None | Some(Value::Null))
    }
}

fn default_status_code() -> u16 {
    200
}
