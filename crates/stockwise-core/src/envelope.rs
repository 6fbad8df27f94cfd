use stockwise_protocol::gemini::generate_content::{
    Content, GenerateContentRequestBody, GenerationConfig,
};

pub const TEMPERATURE: f64 = 0.7;
pub const TOP_K: u32 = 40;
pub const TOP_P: f64 = 0.95;
pub const MAX_OUTPUT_TOKENS: u32 = 1024;

/// Wraps a prompt as the sole content part with the fixed generation settings.
pub fn build_envelope(prompt: String) -> GenerateContentRequestBody {
    GenerateContentRequestBody {
        contents: vec![Content::text(prompt)],
        generation_config: Some(GenerationConfig {
            temperature: Some(TEMPERATURE),
            top_k: Some(TOP_K),
            top_p: Some(TOP_P),
            max_output_tokens: Some(MAX_OUTPUT_TOKENS),
            stop_sequences: None,
        }),
    }
}
