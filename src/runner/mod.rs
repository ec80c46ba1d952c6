pub mod executor;
pub mod reporter;
pub mod types;

pub use executor::TestExecutor;
pub use reporter::TestReporter;
pub use types::{RunResult, TestSummary};
