use std::time::Duration;

use api_check::config::ConfigLoader;
use api_check::http::Client;
use api_check::runner::{TestExecutor, TestSummary};
use api_check::{ApiCheckError, RequestSpec, ResponseSpec, TestCase};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 返回一个当前没有服务监听的地址
fn refused_hostname() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// 期望 JSON 是实际 JSON 的子集时测试通过
#[tokio::test]
async fn test_partial_json_match_passes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 1, "extra": "x"})),
        )
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/api/users/1", "GET")
        .with_response(ResponseSpec::new(200).with_json(json!({"id": 1})));

    let executor = TestExecutor::new();
    let result = executor.run_test(&test).await;

    assert!(result.success, "unexpected failure: {:?}", result.message);
    assert!(result.error.is_none());
    assert_eq!(result.status, Some(200));
}

/// 状态码不一致时，错误信息包含期望值和实际值
#[tokio::test]
async fn test_unexpected_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/missing", "GET");
    let result = TestExecutor::new().run_test(&test).await;

    assert!(!result.success);
    assert!(result.error.as_ref().unwrap().is_assertion());
    let message = result.message.unwrap();
    assert!(message.contains("Unexpected status code"));
    assert!(message.contains("200"));
    assert!(message.contains("404"));
}

#[tokio::test]
async fn test_missing_response_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/plain"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/plain", "GET").with_response(
        ResponseSpec::new(200).with_header("Content-Type", "application/json"),
    );
    let result = TestExecutor::new().run_test(&test).await;

    assert!(!result.success);
    assert!(result.message.unwrap().contains("Content-Type"));
}

#[tokio::test]
async fn test_response_header_matches_case_insensitively() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "healthy", "uptime": 12345}))
                .insert_header("X-Request-ID", "req-123"),
        )
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/status", "GET").with_response(
        ResponseSpec::new(200)
            .with_json(json!({"status": "healthy"}))
            .with_header("x-request-id", "req-123"),
    );
    let result = TestExecutor::new().run_test(&test).await;

    assert!(result.success, "unexpected failure: {:?}", result.message);
}

/// JSON 请求体按紧凑格式发送，并带上 Content-Type
#[tokio::test]
async fn test_json_request_body_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(header("Content-Type", "application/json"))
        .and(body_string(r#"{"name":"a"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "a"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/api/users", "POST")
        .with_request(RequestSpec::default().with_json(json!({"name": "a"})))
        .with_response(ResponseSpec::new(201).with_json(json!({"name": "a"})));
    let result = TestExecutor::new().run_test(&test).await;

    assert!(result.success, "unexpected failure: {:?}", result.message);
}

#[tokio::test]
async fn test_query_params_and_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "rust"))
        .and(query_param("page", "2"))
        .and(header("Authorization", "Bearer token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("found"))
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/search", "GET")
        .with_request(
            RequestSpec::default()
                .with_query("q", "rust")
                .with_query("page", "2")
                .with_header("Authorization", "Bearer token"),
        )
        .with_response(ResponseSpec::new(200).with_body("found"));
    let result = TestExecutor::new().run_test(&test).await;

    assert!(result.success, "unexpected failure: {:?}", result.message);
}

#[tokio::test]
async fn test_literal_body_mismatch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/ping", "GET")
        .with_response(ResponseSpec::new(200).with_body("PONG"));
    let result = TestExecutor::new().run_test(&test).await;

    assert!(!result.success);
    let message = result.message.unwrap();
    assert!(message.contains("PONG"));
    assert!(message.contains("pong"));
}

/// 构建失败的测试不会发起请求
#[tokio::test]
async fn test_build_error_sends_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let test = TestCase::new(mock_server.uri(), "/x", "NOT A METHOD");
    let result = TestExecutor::new().run_test(&test).await;

    assert!(!result.success);
    assert!(result.status.is_none());
    assert!(matches!(result.error, Some(ApiCheckError::RequestBuild(_))));
}

/// 中间的测试连接失败，不影响其它测试，结果顺序与输入一致
#[tokio::test]
async fn test_batch_isolates_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teapot"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&mock_server)
        .await;

    let tests = vec![
        TestCase::new(mock_server.uri(), "/ok", "GET").with_name("first"),
        TestCase::new(refused_hostname(), "/ok", "GET").with_name("refused"),
        TestCase::new(mock_server.uri(), "/teapot", "GET").with_name("third"),
    ];

    let results = TestExecutor::new().run_tests(&tests).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].test.name.as_deref(), Some("first"));
    assert!(results[0].success);

    assert_eq!(results[1].test.name.as_deref(), Some("refused"));
    assert!(!results[1].success);
    assert!(results[1].error.as_ref().unwrap().is_transport());
    let message = results[1].message.as_deref().unwrap().to_lowercase();
    assert!(message.contains("connect"), "{}", message);

    assert_eq!(results[2].test.name.as_deref(), Some("third"));
    assert!(!results[2].success);
    assert_eq!(results[2].status, Some(418));

    let summary = TestSummary::from_results(&results);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
}

/// 响应头声明的长度大于实际发送的内容时，读取响应体失败而不是断言失败
#[tokio::test]
async fn test_truncated_body_is_body_read_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buffer = [0u8; 1024];
        let _ = socket.read(&mut buffer).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let test = TestCase::new(format!("http://{}", address), "/", "GET");
    let result = TestExecutor::new().run_test(&test).await;

    assert!(!result.success);
    assert!(
        matches!(result.error, Some(ApiCheckError::BodyRead(_))),
        "{:?}",
        result.error
    );
    assert!(result.message.unwrap().contains("读取响应体失败"));
}

/// 配置了 timeout_secs 时，超时的请求作为网络错误失败
#[tokio::test]
async fn test_configured_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let config = ConfigLoader::parse("timeout_secs = 1").unwrap();
    let executor = TestExecutor::with_client(Client::from_config(&config).unwrap());

    let test = TestCase::new(mock_server.uri(), "/slow", "GET");
    let result = executor.run_test(&test).await;

    assert!(!result.success);
    assert!(result.error.as_ref().unwrap().is_transport());
    assert!(result.duration < Duration::from_secs(3));
}
