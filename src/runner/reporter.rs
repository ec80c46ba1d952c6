use colored::Colorize;

use crate::http::Status;
use crate::runner::types::{RunResult, TestSummary};

pub struct TestReporter {
    verbose: bool,
}

impl TestReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// 打印测试开始
    pub fn print_header(&self, source: &str, total: usize) {
        println!("\nRunning {} tests from {}...\n", total, source.bold());
    }

    /// 打印单个测试结果
    pub fn print_result(&self, index: usize, result: &RunResult<'_>) {
        let symbol = if result.success {
            "✓".green()
        } else {
            "✗".red()
        };
        let status = result
            .status
            .map(|code| format!(" {}", colorize_status(Status::new(code))))
            .unwrap_or_default();

        println!(
            " {} [{}] {}{} ({}ms)",
            symbol,
            index,
            result.test.label(),
            status,
            result.duration.as_millis()
        );

        // verbose 模式下显示请求目标
        if self.verbose {
            println!(
                "   {} {}{}",
                result.test.method.cyan(),
                result.test.hostname,
                result.test.endpoint
            );
        }

        if let Some(message) = &result.message {
            for line in message.lines() {
                println!("   {}", line.red());
            }
            println!();
        }
    }

    /// 打印测试摘要
    pub fn print_summary(&self, summary: &TestSummary) {
        println!("\n{}", "━".repeat(50));
        println!("{}", "Summary".bold());
        println!("{}", "━".repeat(50));

        if summary.all_passed() {
            println!(
                "  {}: {} passed, {} total",
                "Tests".bold(),
                summary.passed.to_string().green(),
                summary.total
            );
        } else {
            println!(
                "  {}: {} passed, {} failed, {} total",
                "Tests".bold(),
                summary.passed.to_string().green(),
                summary.failed.to_string().red(),
                summary.total
            );
        }

        println!(
            "  {}: {:.3}s",
            "Duration".bold(),
            summary.total_duration.as_secs_f64()
        );
        println!();
    }

    /// 打印全部结果及摘要
    pub fn report(&self, results: &[RunResult<'_>]) -> TestSummary {
        for (index, result) in results.iter().enumerate() {
            self.print_result(index + 1, result);
        }

        let summary = TestSummary::from_results(results);
        self.print_summary(&summary);
        summary
    }
}

fn colorize_status(status: Status) -> String {
    let text = status.to_string();
    if status.is_success() {
        text.green().to_string()
    } else if status.is_client_error() {
        text.yellow().to_string()
    } else if status.is_server_error() {
        text.red().to_string()
    } else {
        text
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new(false)
    }
}
