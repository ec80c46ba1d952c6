use std::time::Instant;

use crate::assertion::assert_response;
use crate::http::{Client, Request};
use crate::runner::types::RunResult;
use crate::suite::TestCase;

/// 顺序执行测试：构建请求 -> 发送 -> 校验响应
pub struct TestExecutor {
    client: Client,
}

impl TestExecutor {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// 按输入顺序逐个执行，单个失败不影响后续测试
    pub async fn run_tests<'a>(&self, tests: &'a [TestCase]) -> Vec<RunResult<'a>> {
        let mut results = Vec::with_capacity(tests.len());

        for (index, test) in tests.iter().enumerate() {
            tracing::debug!(index = index + 1, test = %test.label(), "Running test");
            results.push(self.run_test(test).await);
        }

        let passed = results.iter().filter(|r| r.success).count();
        tracing::info!(total = results.len(), passed, "Finished test run");
        results
    }

    /// 执行单个测试
    pub async fn run_test<'a>(&self, test: &'a TestCase) -> RunResult<'a> {
        let start = Instant::now();

        // 构建失败时不发起网络请求
        let request = match Request::from_test(test) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(test = %test.label(), error = %e, "Failed to build request");
                return RunResult::failed(test, e, None, start.elapsed());
            }
        };

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(test = %test.label(), error = %e, "Request failed");
                return RunResult::failed(test, e, None, start.elapsed());
            }
        };

        let status = response.status.code();
        match assert_response(&response, &test.response) {
            Ok(()) => RunResult::passed(test, status, start.elapsed()),
            Err(failure) => {
                tracing::debug!(test = %test.label(), status, "Assertion failed");
                RunResult::failed(test, failure.into(), Some(status), start.elapsed())
            }
        }
    }
}

impl Default for TestExecutor {
    fn default() -> Self {
        Self::new()
    }
}
