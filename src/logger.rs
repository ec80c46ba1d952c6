use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 优先使用 RUST_LOG 环境变量；未设置时默认 info，verbose 模式下为 debug。
///
/// 示例:
/// - RUST_LOG=api_check=debug api-check run tests/
/// - RUST_LOG=trace api-check run suite.json
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 重复初始化（例如测试中）时忽略错误
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .try_init();

    tracing::debug!(verbose, "Logger initialized");
}
