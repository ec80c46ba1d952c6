/// 断言模块 - 响应校验与 JSON 子集匹配
mod asserter;
mod matcher;
mod types;

pub use asserter::assert_response;
pub use matcher::{find_mismatch, matches};
pub use types::{AssertionFailure, JsonMismatch};
