use std::time::Duration;

use crate::ApiCheckError;
use crate::suite::TestCase;

/// 单个测试的执行结果
#[derive(Debug)]
pub struct RunResult<'a> {
    /// 对应的测试定义
    pub test: &'a TestCase,

    /// 是否通过
    pub success: bool,

    /// 失败原因（构建、网络、读取或断言错误）
    pub error: Option<ApiCheckError>,

    /// 面向人的诊断信息
    pub message: Option<String>,

    /// 响应状态码（收到响应时）
    pub status: Option<u16>,

    /// 执行耗时
    pub duration: Duration,
}

impl<'a> RunResult<'a> {
    pub fn passed(test: &'a TestCase, status: u16, duration: Duration) -> Self {
        Self {
            test,
            success: true,
            error: None,
            message: None,
            status: Some(status),
            duration,
        }
    }

    pub fn failed(
        test: &'a TestCase,
        error: ApiCheckError,
        status: Option<u16>,
        duration: Duration,
    ) -> Self {
        Self {
            test,
            success: false,
            message: Some(error.detailed_message()),
            error: Some(error),
            status,
            duration,
        }
    }
}

/// 测试摘要
#[derive(Debug, Clone, PartialEq)]
pub struct TestSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub total_duration: Duration,
}

impl TestSummary {
    pub fn from_results(results: &[RunResult<'_>]) -> Self {
        let passed = results.iter().filter(|r| r.success).count();
        let total_duration = results.iter().map(|r| r.duration).sum();

        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
            total_duration,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
