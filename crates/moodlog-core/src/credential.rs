//! Inference service credential

use crate::error::{Error, Result};
use std::fmt;

/// Required prefix for Hugging Face access tokens
pub const TOKEN_PREFIX: &str = "hf_";

/// Bearer token for the inference service
///
/// Validated once at startup and handed to the transport explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Parse a raw token value, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self> {
        let token = raw.trim();
        if token.is_empty() {
            return Err(Error::credential(
                "HF token missing. Set HF_TOKEN=hf_xxx and restart.",
            ));
        }
        if !token.starts_with(TOKEN_PREFIX) {
            return Err(Error::credential(format!(
                "HF token malformed: expected a value starting with '{TOKEN_PREFIX}'"
            )));
        }
        Ok(Self(token.to_string()))
    }

    /// Parse an optional value, treating absence as a credential error
    pub fn from_optional(raw: Option<&str>) -> Result<Self> {
        Self::parse(raw.unwrap_or_default())
    }

    /// The raw token
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Authorization header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(hf_***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_token() {
        let cred = Credential::parse("  hf_abc123\n").unwrap();
        assert_eq!(cred.expose(), "hf_abc123");
        assert_eq!(cred.bearer(), "Bearer hf_abc123");
    }

    #[test]
    fn test_missing_token_is_credential_error() {
        assert!(matches!(
            Credential::from_optional(None),
            Err(Error::Credential(_))
        ));
        assert!(matches!(Credential::parse("   "), Err(Error::Credential(_))));
    }

    #[test]
    fn test_wrong_prefix_is_rejected() {
        let err = Credential::parse("sk-123").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_debug_redacts_token() {
        let cred = Credential::parse("hf_secret").unwrap();
        assert!(!format!("{cred:?}").contains("secret"));
    }
}
