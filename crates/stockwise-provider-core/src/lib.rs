pub mod credential;
pub mod provider;
pub mod response;

pub use credential::ApiKey;
pub use provider::{CallContext, Provider};
pub use response::{ProxyResponse, UpstreamFailure};
