//! Client for the recorder backend the proxy forwards to.

use std::time::Duration;

use camdash_domain::endpoint::ApiEndpoints;
use reqwest::{Client, Response, Url};

use crate::error::ProxyError;

/// A reachable recorder backend.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    base: String,
    timeout: Duration,
}

impl Upstream {
    /// Build a client for the backend at `base` (e.g. `http://192.168.1.10:8080`).
    ///
    /// `timeout` bounds connecting and, for non-streaming requests, the whole
    /// exchange. Live feeds are only bounded by the connect timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidUrl`] when `base` is not an absolute
    /// http(s) URL, or [`ProxyError::Client`] if the client cannot be built.
    pub fn new(base: &str, timeout: Duration) -> Result<Self, ProxyError> {
        let endpoints =
            ApiEndpoints::new(base).map_err(|_| ProxyError::InvalidUrl(base.to_string()))?;
        if endpoints.is_same_origin() {
            return Err(ProxyError::InvalidUrl(base.to_string()));
        }
        let client = Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self {
            client,
            base: endpoints.base().to_string(),
            timeout,
        })
    }

    /// The backend origin, without trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issue `GET {base}{path_and_query}`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::InvalidUrl`] if the joined URL does not parse, or
    /// [`ProxyError::Upstream`] if the request fails before a response arrives.
    pub async fn get(&self, path_and_query: &str, streaming: bool) -> Result<Response, ProxyError> {
        let target = format!("{}{path_and_query}", self.base);
        let url = Url::parse(&target).map_err(|_| ProxyError::InvalidUrl(target.clone()))?;

        let mut request = self.client.get(url);
        if !streaming {
            request = request.timeout(self.timeout);
        }
        let response = request.send().await?;
        tracing::debug!(%target, status = %response.status(), "backend responded");
        Ok(response)
    }
}
