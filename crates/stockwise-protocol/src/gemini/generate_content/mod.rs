pub mod types;
pub mod request;

pub use request::GenerateContentRequestBody;
pub use types::*;
