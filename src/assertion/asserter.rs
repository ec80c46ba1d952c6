use serde_json::{Map, Value};

use crate::assertion::matcher::find_mismatch;
use crate::assertion::types::AssertionFailure;
use crate::http::Response;
use crate::suite::ResponseSpec;

/// 校验响应是否符合期望
///
/// 按顺序检查：状态码、原始响应体、JSON、响应头，遇到第一个失败即返回。
pub fn assert_response(
    response: &Response,
    expected: &ResponseSpec,
) -> Result<(), AssertionFailure> {
    check_status(response, expected)?;
    check_body(response, expected)?;
    check_json(response, expected)?;
    check_headers(response, expected)
}

fn check_status(response: &Response, expected: &ResponseSpec) -> Result<(), AssertionFailure> {
    let actual = response.status.code();
    if expected.status_code != actual {
        return Err(AssertionFailure::StatusCode {
            expected: expected.status_code,
            actual,
        });
    }
    Ok(())
}

/// 期望 body 为空时不检查，因此无法断言响应体为空
fn check_body(response: &Response, expected: &ResponseSpec) -> Result<(), AssertionFailure> {
    match expected.expected_body() {
        Some(body) if body != response.body => Err(AssertionFailure::Body {
            expected: body.to_string(),
            actual: response.body.clone(),
        }),
        _ => Ok(()),
    }
}

fn check_json(response: &Response, expected: &ResponseSpec) -> Result<(), AssertionFailure> {
    if response.body.is_empty() {
        return Ok(());
    }

    match serde_json::from_str::<Map<String, Value>>(&response.body) {
        Ok(map) => {
            let actual = Value::Object(map);
            match find_mismatch(&actual, expected.json.as_ref()) {
                Some(mismatch) => Err(AssertionFailure::Json(mismatch)),
                None => Ok(()),
            }
        }
        Err(e) if expected.expects_json() => Err(AssertionFailure::InvalidJson(e.to_string())),
        // 非 JSON 响应且没有 JSON 期望
        Err(_) => Ok(()),
    }
}

fn check_headers(response: &Response, expected: &ResponseSpec) -> Result<(), AssertionFailure> {
    // 排序后检查，保证诊断信息稳定
    let mut headers: Vec<(&String, &String)> = expected.headers.iter().collect();
    headers.sort();

    for (name, value) in headers {
        let matched = response
            .header(name)
            .is_some_and(|actual| actual.as_bytes() == value.as_bytes());
        if !matched {
            return Err(AssertionFailure::Header {
                name: name.clone(),
                expected: value.clone(),
                actual: response.header_lossy(name),
            });
        }
    }
    Ok(())
}
