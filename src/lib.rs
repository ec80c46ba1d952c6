pub mod assertion;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod runner;
pub mod suite;

// Re-export commonly used types
pub use error::{ApiCheckError, Result};
pub use runner::{RunResult, TestExecutor};
pub use suite::{RequestSpec, ResponseSpec, TestCase};
