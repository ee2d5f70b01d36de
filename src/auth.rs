use reqwest::RequestBuilder;
use std::fmt::{self, Debug};

use crate::error::TochkaError;

/// Signed bearer token used for every API call. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct JwtToken {
    token: String,
}

impl JwtToken {
    pub fn new(token: impl Into<String>) -> Result<Self, TochkaError> {
        let token = token.into();
        if token.is_empty() {
            return Err(TochkaError::InvalidArgument("JWT empty".to_string()));
        }
        Ok(JwtToken { token })
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn into_inner(self) -> String {
        self.token
    }

    pub(crate) fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

impl Debug for JwtToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtToken")
            .field("token", &"***") // Don't expose the actual token
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        let err = JwtToken::new("").unwrap_err();
        assert!(matches!(err, TochkaError::InvalidArgument(ref msg) if msg == "JWT empty"));
    }

    #[test]
    fn keeps_non_empty_token() {
        for raw in ["abc123", " ", "0", "header.payload.signature"] {
            let token = JwtToken::new(raw).unwrap();
            assert_eq!(token.as_str(), raw);
        }
    }

    #[test]
    fn debug_hides_token() {
        let token = JwtToken::new("super-secret").unwrap();
        let rendered = format!("{:?}", token);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn applies_bearer_header() {
        let token = JwtToken::new("abc123").unwrap();
        let request = token
            .apply_auth(reqwest::Client::new().get("http://localhost/"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer abc123"
        );
    }
}
