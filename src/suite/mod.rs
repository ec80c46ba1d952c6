pub mod loader;
pub mod types;

// Re-export commonly used types
pub use loader::{SuiteFormat, SuiteLoader, TestSuite};
pub use types::{RequestSpec, ResponseSpec, TestCase};

/// 从文件或目录加载测试定义
pub fn load_path<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Vec<TestCase>> {
    SuiteLoader::load_path(path)
}
