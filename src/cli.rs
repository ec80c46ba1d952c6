use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use api_check::config::{Config, ConfigLoader};
use api_check::http::Client;
use api_check::runner::{TestExecutor, TestReporter, TestSummary};
use api_check::suite;
use clap::{Parser, Subcommand};

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出更详细的信息（同时把日志级别调到 debug）
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 运行测试文件或目录
    Run {
        /// `.json` / `.toml` 测试文件，或包含它们的目录
        path: PathBuf,

        /// 使用配置文件中的环境
        #[arg(short, long)]
        env: Option<String>,

        /// 配置文件路径，默认自动查找 api-check.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// 执行命令，返回是否全部通过
pub async fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Run { path, env, config } => {
            let summary = run_suite(&path, env.as_deref(), config, cli.verbose).await?;
            Ok(summary.all_passed())
        }
    }
}

async fn run_suite(
    path: &Path,
    env: Option<&str>,
    config_path: Option<PathBuf>,
    verbose: bool,
) -> Result<TestSummary> {
    let config = load_config(config_path)?;

    let mut tests = suite::load_path(path)
        .with_context(|| format!("failed to load tests from {}", path.display()))?;

    if let Some(name) = env {
        let environment = config.environment(name).ok_or_else(|| {
            anyhow!(
                "unknown environment '{}' (available: {})",
                name,
                config.environment_names().join(", ")
            )
        })?;
        environment.apply(&mut tests);
    }

    let executor = TestExecutor::with_client(Client::from_config(&config)?);
    let reporter = TestReporter::new(verbose);

    reporter.print_header(&path.display().to_string(), tests.len());
    let results = executor.run_tests(&tests).await;
    Ok(reporter.report(&results))
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Some(ConfigLoader::load_from_path(path)?),
        None => ConfigLoader::find_and_load()?,
    };
    Ok(config.unwrap_or_default())
}
