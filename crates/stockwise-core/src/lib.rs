pub mod config;
pub mod core;
pub mod envelope;
pub mod error;
pub mod handler;

pub use crate::config::ProxyConfig;
pub use crate::core::{Core, CoreState};
pub use crate::error::{ProxyError, map_upstream_failure};
