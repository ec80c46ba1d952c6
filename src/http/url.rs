use std::collections::HashMap;

/// 拼接 query string：`?k1=v1&k2=v2`，无参数时为空串
///
/// 参数按 map 的迭代顺序输出，`HashMap` 下顺序不固定。
/// key/value 不做转义。
pub fn build_query_string(query: &HashMap<String, String>) -> String {
    if query.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();

    format!("?{}", pairs.join("&"))
}

/// hostname + endpoint + query string
pub fn build_url(hostname: &str, endpoint: &str, query: &HashMap<String, String>) -> String {
    format!("{}{}{}", hostname, endpoint, build_query_string(query))
}
