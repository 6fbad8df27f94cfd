//! Payloads exchanged with downstream callers of the proxy.

pub mod error;
pub mod health;
pub mod prompt;

pub use error::ErrorPayload;
pub use health::HealthResponse;
pub use prompt::{PromptRejection, PromptRequest};
