use serde::Deserialize;
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct PromptRequest {
    #[serde(default)]
    #[validate(min_length = 1)]
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRejection {
    /// Body is not a JSON object with a string `prompt`.
    InvalidBody(String),
    MissingPrompt,
}

impl PromptRequest {
    /// Decodes and validates a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PromptRejection> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(PromptRejection::MissingPrompt);
        }
        let request: PromptRequest = serde_json::from_slice(body)
            .map_err(|err| PromptRejection::InvalidBody(err.to_string()))?;
        request
            .validate()
            .map_err(|_| PromptRejection::MissingPrompt)?;
        Ok(request)
    }
}
