use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap as Headers, HeaderName, HeaderValue};
use url::Url;

use crate::http::url::build_url;
use crate::suite::TestCase;
use crate::{ApiCheckError, Result};

/// 已构建、可直接发送的请求
#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub headers: Headers,
    pub body: String,
}

impl Request {
    /// 方法名统一转为大写；非法 token 视为构建失败
    pub fn new(method: &str, url: &str) -> Result<Self> {
        let method = Method::from_bytes(method.to_ascii_uppercase().as_bytes()).map_err(|e| {
            ApiCheckError::RequestBuild(format!("invalid HTTP method '{}': {}", method, e))
        })?;

        Ok(Self {
            method,
            url: Url::parse(url)?,
            headers: Headers::new(),
            body: String::new(),
        })
    }

    /// 根据测试定义构建请求，不涉及网络 I/O
    pub fn from_test(test: &TestCase) -> Result<Self> {
        let spec = &test.request;
        let url = build_url(&test.hostname, &test.endpoint, &spec.query_params);
        let mut request = Self::new(&test.method, &url)?;

        // 排序后插入，大小写不同的同名 header 结果固定
        let mut headers: Vec<(&String, &String)> = spec.headers.iter().collect();
        headers.sort();
        for (key, value) in headers {
            request.insert_header(key, value)?;
        }

        if spec.has_json_body() {
            let json = serde_json::to_string(&spec.json).map_err(|e| {
                ApiCheckError::RequestBuild(format!("failed to encode JSON body: {}", e))
            })?;
            if !request.headers.contains_key(CONTENT_TYPE) {
                request.insert_header(CONTENT_TYPE.as_str(), "application/json")?;
            }
            request.body = json;
        } else {
            request.body = spec.body.clone();
        }

        Ok(request)
    }

    fn insert_header(&mut self, key: &str, value: &str) -> Result<()> {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ApiCheckError::RequestBuild(format!("invalid header name '{}': {}", key, e))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            ApiCheckError::RequestBuild(format!("invalid value for header '{}': {}", key, e))
        })?;
        self.headers.insert(name, value);
        Ok(())
    }
}
