use std::fmt;

/// Server-held upstream credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for a missing or empty value. Any other value is kept
    /// byte for byte, surrounding whitespace included.
    pub fn from_env_value(value: Option<String>) -> Option<Self> {
        value.filter(|value| !value.is_empty()).map(Self)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
