//! Token resolution against the instance metadata server

use reqwest::Client;
use runhook_core::domain::metadata::{METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE};
use runhook_core::dto::token::Token;

use crate::error::{ClientError, Result};

/// Client for the metadata server's token endpoint
///
/// Owns its own HTTP client. Callers that want per-request isolation build a
/// new instance for each request and drop it afterwards.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    token_url: String,
    client: Client,
}

impl MetadataClient {
    /// Create a client for the given token URL
    pub fn new(token_url: impl Into<String>) -> Self {
        Self::with_client(token_url, Client::new())
    }

    /// Create a client with a preconfigured reqwest client (timeouts, proxies)
    pub fn with_client(token_url: impl Into<String>, client: Client) -> Self {
        Self {
            token_url: token_url.into(),
            client,
        }
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Fetch the token document as returned by the server, unparsed
    pub async fn fetch_raw(&self) -> Result<String> {
        tracing::debug!("Requesting access token from {}", self.token_url);

        let response = self
            .client
            .get(&self.token_url)
            .header(METADATA_FLAVOR_HEADER, METADATA_FLAVOR_VALUE)
            .send()
            .await
            .map_err(ClientError::ResolverUnreachable)?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::resolver_status(status.as_u16(), error_text));
        }

        response.text().await.map_err(ClientError::ResolverUnreachable)
    }

    /// Fetch and parse the token document
    pub async fn resolve(&self) -> Result<Token> {
        let raw = self.fetch_raw().await?;
        let token = Token::parse(&raw)?;

        tracing::debug!("Resolved access token (expires_in={:?})", token.expires_in);

        Ok(token)
    }
}
