//! JSON 子集匹配
//!
//! 期望 JSON 只需是实际 JSON 的"子集"：两边都是对象时，实际对象中多出的 key
//! 会被忽略（任意嵌套层级）；期望中出现的每个 key 都必须存在且值相等。
//! 数组、标量以及类型不一致的位置一律按完全相等比较，数组对顺序敏感。
//!
//! 比较过程不会修改实际值。

use serde_json::Value;

use crate::assertion::types::JsonMismatch;

/// 实际 JSON 是否满足期望
pub fn matches(actual: &Value, expected: Option<&Value>) -> bool {
    find_mismatch(actual, expected).is_none()
}

/// 返回第一个不匹配的位置；匹配时返回 `None`
///
/// 未声明期望（`None` 或 `null`）以及空对象都视为"不关心"，总是匹配。
pub fn find_mismatch(actual: &Value, expected: Option<&Value>) -> Option<JsonMismatch> {
    match expected {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) if map.is_empty() => None,
        Some(expected) => compare(actual, expected, "$"),
    }
}

fn compare(actual: &Value, expected: &Value, path: &str) -> Option<JsonMismatch> {
    match (actual, expected) {
        (Value::Object(actual_map), Value::Object(expected_map)) => {
            expected_map.iter().find_map(|(key, expected_value)| {
                let child_path = format!("{}.{}", path, key);
                match actual_map.get(key) {
                    Some(actual_value) => compare(actual_value, expected_value, &child_path),
                    None => Some(JsonMismatch::missing(child_path, expected_value)),
                }
            })
        }
        _ if json_eq(actual, expected) => None,
        _ => Some(JsonMismatch::new(path, expected, actual)),
    }
}

/// 严格的深度相等；数字按数值比较（`1` 与 `1.0` 相等）
fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x == y || matches!((x.as_f64(), y.as_f64()), (Some(x), Some(y)) if x == y)
        }
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(a, b)| json_eq(a, b))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, value)| y.get(key).is_some_and(|other| json_eq(value, other)))
        }
        _ => a == b,
    }
}
