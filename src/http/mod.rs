pub mod client;
pub mod request;
pub mod response;
pub mod types;
pub mod url;

// Re-export commonly used types for convenient access
pub use client::Client;
pub use request::Request;
pub use response::Response;
pub use types::Status;
pub use self::url::{build_query_string, build_url};
