//! HTTP transport for ESPN API requests.

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use tracing::debug;

use crate::{core::http::RequestConfig, espn::route::build_route, Result};


const USER_AGENT: &str = concat!("espn-ffl-client/", env!("CARGO_PKG_VERSION"));

/// Issues GET requests and decodes JSON bodies.
///
/// Implementations must return an error for non-2xx responses and network
/// failures. No retries, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, route: &str, config: Option<&RequestConfig>) -> Result<Value>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Full URL for a route: the config's base URL, if any, followed by the route.
pub fn resolve_url(route: &str, config: Option<&RequestConfig>) -> String {
    match config.and_then(|c| c.base_url.as_deref()) {
        Some(base) => build_route(base, route),
        None => route.to_string(),
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, route: &str, config: Option<&RequestConfig>) -> Result<Value> {
        let url = resolve_url(route, config);

        // The cookie header is already in `headers`; reqwest has no separate
        // credentials mode, so `with_credentials` only shows up in the log.
        let mut builder = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(config) = config {
            builder = builder.headers(config.headers.clone());
        }

        debug!(
            %url,
            with_credentials = config.is_some_and(|c| c.with_credentials),
            "GET"
        );

        let res = builder
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}
