use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::suite::types::TestCase;
use crate::{ApiCheckError, Result};

/// 测试定义文件的格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    Json,
    Toml,
}

impl SuiteFormat {
    /// 根据文件扩展名判断格式
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(SuiteFormat::Json),
            "toml" => Some(SuiteFormat::Toml),
            _ => None,
        }
    }
}

/// 一个测试文件的内容：可选的公共 hostname + 测试列表
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestSuite {
    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub tests: Vec<TestCase>,
}

impl TestSuite {
    /// 将 suite 级别的 hostname 填充到未声明 hostname 的测试中
    pub fn into_tests(self) -> Vec<TestCase> {
        let Some(hostname) = self.hostname else {
            return self.tests;
        };

        self.tests
            .into_iter()
            .map(|mut test| {
                if test.hostname.is_empty() {
                    test.hostname = hostname.clone();
                }
                test
            })
            .collect()
    }
}

/// 测试定义加载器
pub struct SuiteLoader;

impl SuiteLoader {
    /// 加载文件或目录
    ///
    /// 目录下的 `.json` / `.toml` 文件按文件名排序后依次加载。
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Self::load_file(path);
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && SuiteFormat::from_path(p).is_some())
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(ApiCheckError::Load(format!(
                "no .json or .toml test files in {}",
                path.display()
            )));
        }

        let mut tests = Vec::new();
        for file in files {
            tests.extend(Self::load_file(&file)?);
        }
        Ok(tests)
    }

    /// 从单个文件加载
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
        let path = path.as_ref();
        let format = SuiteFormat::from_path(path).ok_or_else(|| {
            ApiCheckError::Load(format!("unsupported test file: {}", path.display()))
        })?;

        let content = std::fs::read_to_string(path)?;
        let tests = Self::parse_content(&content, format)
            .map_err(|e| ApiCheckError::Load(format!("{}: {}", path.display(), e)))?;

        // 至少要有一个测试
        if tests.is_empty() {
            return Err(ApiCheckError::Load(format!(
                "{}: no tests defined",
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), count = tests.len(), "Loaded test file");
        Ok(tests)
    }

    /// 从字符串内容解析
    ///
    /// JSON 文件既可以是测试数组，也可以是带 `tests` 字段的对象。
    pub fn parse_content(content: &str, format: SuiteFormat) -> Result<Vec<TestCase>> {
        let suite = match format {
            SuiteFormat::Json if content.trim_start().starts_with('[') => TestSuite {
                hostname: None,
                tests: serde_json::from_str(content)?,
            },
            SuiteFormat::Json => serde_json::from_str::<TestSuite>(content)?,
            SuiteFormat::Toml => toml::from_str::<TestSuite>(content)?,
        };

        Ok(suite.into_tests())
    }
}
