pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, Result};
pub use types::{ChatAnswer, Document};
