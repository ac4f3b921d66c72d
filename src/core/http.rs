//! Credential handling and per-request configuration for ESPN API calls

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use std::fmt;

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";

/// The `espn_s2` / `SWID` cookie pair required for private leagues.
///
/// Both values are always present; a partial pair is never constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    espn_s2: String,
    swid: String,
}

impl Credentials {
    /// Returns `None` unless both values are non-empty.
    pub fn new(espn_s2: impl Into<String>, swid: impl Into<String>) -> Option<Self> {
        let (espn_s2, swid) = (espn_s2.into(), swid.into());
        if espn_s2.is_empty() || swid.is_empty() {
            return None;
        }
        Some(Self { espn_s2, swid })
    }

    /// Read `ESPN_S2` and `ESPN_SWID`.
    ///
    /// Returns `None` when either env var is missing (public leagues).
    pub fn from_env() -> Option<Self> {
        let s2 = std::env::var(ESPN_S2_ENV_VAR).ok()?;
        let swid = std::env::var(SWID_ENV_VAR).ok()?;
        Self::new(s2, swid)
    }

    pub fn espn_s2(&self) -> &str {
        &self.espn_s2
    }

    pub fn swid(&self) -> &str {
        &self.swid
    }

    /// Both values as a single cookie string.
    pub fn cookie(&self) -> String {
        format!("SWID={}; espn_s2={}", self.swid, self.espn_s2)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("espn_s2", &"<redacted>")
            .field("swid", &self.swid)
            .finish()
    }
}

/// Options for a single upstream request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestConfig {
    /// Host + path prefix the route is appended to.
    pub base_url: Option<String>,
    pub headers: HeaderMap,
    /// Ask the transport to send credentials along with the request.
    pub with_credentials: bool,
}

impl RequestConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Produce the final config for one request.
///
/// With credentials, returns a copy of `overrides` (or a default config) with the
/// cookie header added next to any override headers and `with_credentials` set.
/// Without credentials, returns `overrides` as given. `overrides` itself is
/// never modified.
pub fn build_request_config(
    credentials: Option<&Credentials>,
    overrides: Option<&RequestConfig>,
) -> Result<Option<RequestConfig>> {
    let Some(credentials) = credentials else {
        return Ok(overrides.cloned());
    };

    let mut config = overrides.cloned().unwrap_or_default();
    config
        .headers
        .insert(COOKIE, HeaderValue::from_str(&credentials.cookie())?);
    config.with_credentials = true;
    Ok(Some(config))
}
