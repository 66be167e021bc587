//! Access token supply.
//!
//! Token acquisition and refresh belong to the surrounding session (OAuth
//! consent, external tooling); this module only hands the current bearer
//! token to the provider, once per call. A missing or empty token surfaces
//! as an authentication error before any API request is made.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};

/// Supplies the current session's access token.
pub trait TokenSource: std::fmt::Debug + Send + Sync {
    /// Returns the bearer token to use for the next provider call.
    fn access_token(&self) -> ProviderResult<String>;
}

/// A fixed token value, resolved once at startup (e.g. from configuration
/// or the environment).
#[derive(Debug, Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Creates a static token source.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl TokenSource for StaticToken {
    fn access_token(&self) -> ProviderResult<String> {
        if self.token.is_empty() {
            return Err(ProviderError::authentication("access token is empty"));
        }
        Ok(self.token.clone())
    }
}

/// Shape of the token file: a JSON object with an `access_token` field.
/// Extra fields (refresh tokens, expiry) are ignored.
#[derive(Debug, Deserialize)]
struct TokenFile {
    access_token: String,
}

/// Reads the access token from a JSON file on every call, so an externally
/// refreshed token is picked up without restarting.
#[derive(Debug, Clone)]
pub struct FileToken {
    path: PathBuf,
}

impl FileToken {
    /// Creates a file-backed token source.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenSource for FileToken {
    fn access_token(&self) -> ProviderResult<String> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            ProviderError::authentication(format!(
                "failed to read token file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let file: TokenFile = serde_json::from_str(&content).map_err(|e| {
            ProviderError::authentication(format!(
                "failed to parse token file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        if file.access_token.is_empty() {
            return Err(ProviderError::authentication(format!(
                "token file {} has an empty access_token",
                self.path.display()
            )));
        }

        debug!("loaded access token from {}", self.path.display());
        Ok(file.access_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderErrorCode;
    use std::io::Write;

    #[test]
    fn static_token_returns_value() {
        let source = StaticToken::new("ya29.token");
        assert_eq!(source.access_token().unwrap(), "ya29.token");
    }

    #[test]
    fn static_empty_token_is_authentication_error() {
        let source = StaticToken::new("");
        let err = source.access_token().unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);
    }

    #[test]
    fn file_token_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"access_token": "ya29.from-file", "refresh_token": "ignored"}}"#
        )
        .unwrap();

        let source = FileToken::new(file.path());
        assert_eq!(source.access_token().unwrap(), "ya29.from-file");
    }

    #[test]
    fn file_token_missing_file_is_authentication_error() {
        let source = FileToken::new("/nonexistent/calsweep-tokens.json");
        let err = source.access_token().unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);
    }

    #[test]
    fn file_token_malformed_json_is_authentication_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = FileToken::new(file.path());
        let err = source.access_token().unwrap_err();
        assert_eq!(err.code(), ProviderErrorCode::AuthenticationFailed);
    }

    #[test]
    fn file_token_empty_value_is_authentication_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"access_token": ""}}"#).unwrap();

        let source = FileToken::new(file.path());
        assert!(source.access_token().is_err());
    }
}
