use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::suite::TestCase;
use crate::{ApiCheckError, Result};

/// 环境配置：覆盖 hostname 并补充公共请求头
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Environment {
    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Environment {
    /// 应用到测试列表；测试自身声明的 header 优先
    pub fn apply(&self, tests: &mut [TestCase]) {
        for test in tests.iter_mut() {
            if let Some(hostname) = &self.hostname {
                test.hostname = hostname.clone();
            }
            for (key, value) in &self.headers {
                let declared = test
                    .request
                    .headers
                    .keys()
                    .any(|k| k.eq_ignore_ascii_case(key));
                if !declared {
                    test.request.headers.insert(key.clone(), value.clone());
                }
            }
        }
    }
}

/// 完整的配置文件
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// 请求超时（秒），不配置则不超时
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub environments: HashMap<String, Environment>,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    pub fn environment_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.environments.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

/// 配置文件加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置文件名
    const CONFIG_FILE: &'static str = "api-check.toml";

    /// 从指定路径加载配置文件
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ApiCheckError::Config(format!(
                "failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Config> {
        toml::from_str(content)
            .map_err(|e| ApiCheckError::Config(format!("failed to parse config: {}", e)))
    }

    /// 查找并加载配置文件
    /// 查找顺序：
    /// 1. 当前目录及其父目录
    /// 2. 用户配置目录 ~/.config/api-check/
    pub fn find_and_load() -> Result<Option<Config>> {
        if let Some(config) = Self::try_load_from_current_dir()? {
            return Ok(Some(config));
        }

        Self::try_load_from_user_dir()
    }

    fn try_load_from_current_dir() -> Result<Option<Config>> {
        let mut current = std::env::current_dir()?;

        loop {
            let config_path = current.join(Self::CONFIG_FILE);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "Found config file");
                return Self::load_from_path(&config_path).map(Some);
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    fn try_load_from_user_dir() -> Result<Option<Config>> {
        let Some(home) = dirs::home_dir() else {
            return Ok(None);
        };
        let config_path = home.join(".config").join("api-check").join(Self::CONFIG_FILE);

        if config_path.exists() {
            Self::load_from_path(&config_path).map(Some)
        } else {
            Ok(None)
        }
    }
}
