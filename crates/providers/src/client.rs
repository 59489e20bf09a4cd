use std::{env, sync::Arc, time::Duration};

use serde::de::DeserializeOwned;

use crate::ApiError;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";
pub const HUGGINGFACE_URL: &str = "https://api-inference.huggingface.co/models/gpt2";

/// Nominatim rejects requests without an identifying user agent.
pub const USER_AGENT: &str = concat!("route-story/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub nominatim_url: String,
    pub directions_url: String,
    pub overpass_url: String,
    pub huggingface_url: String,
    pub directions_api_key: Option<String>,
    pub huggingface_api_key: Option<String>,
    pub proxy: Option<String>,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            nominatim_url: NOMINATIM_URL.to_owned(),
            directions_url: DIRECTIONS_URL.to_owned(),
            overpass_url: OVERPASS_URL.to_owned(),
            huggingface_url: HUGGINGFACE_URL.to_owned(),
            directions_api_key: None,
            huggingface_api_key: None,
            proxy: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ProviderConfig {
    /// Reads provider settings from the environment. Unset urls fall back to
    /// the public endpoints; missing api keys only fail the requests needing
    /// them.
    pub fn env() -> Self {
        let defaults = Self::default();
        Self {
            nominatim_url: env::var("NOMINATIM_URL").unwrap_or(defaults.nominatim_url),
            directions_url: env::var("DIRECTIONS_URL").unwrap_or(defaults.directions_url),
            overpass_url: env::var("OVERPASS_URL").unwrap_or(defaults.overpass_url),
            huggingface_url: env::var("HUGGINGFACE_URL")
                .unwrap_or(defaults.huggingface_url),
            directions_api_key: env::var("GOOGLE_DIRECTIONS_API_KEY").ok(),
            huggingface_api_key: env::var("HUGGINGFACE_API_KEY").ok(),
            proxy: env::var("HTTP_PROXY_URL").ok(),
            timeout: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|secs| secs.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    pub(crate) fn directions_api_key(&self) -> Result<&str, ApiError> {
        self.directions_api_key.as_deref().ok_or_else(|| {
            ApiError::Configuration("GOOGLE_DIRECTIONS_API_KEY is not set".to_owned())
        })
    }

    pub(crate) fn huggingface_api_key(&self) -> Result<&str, ApiError> {
        self.huggingface_api_key.as_deref().ok_or_else(|| {
            ApiError::Configuration("HUGGINGFACE_API_KEY is not set".to_owned())
        })
    }
}

/// Shared http client for all providers. Cheap to clone.
#[derive(Clone)]
pub struct ProviderClient {
    config: Arc<ProviderConfig>,
    http: reqwest::Client,
}

impl ProviderClient {
    pub fn new(config: ProviderConfig) -> Result<Self, ApiError> {
        /* build a new http client with optional proxy */
        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout);
        if let Some(proxy_url) = &config.proxy {
            log::info!("Using proxy '{proxy_url}' for provider requests.");
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            config: Arc::new(config),
            http: builder.build()?,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Sends a prepared request and parses a JSON body from a 200 response.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        log::debug!("Requesting endpoint '{url}'.");
        let response = request.send().await?;

        /* parse response */
        match response.status() {
            reqwest::StatusCode::OK => Ok(serde_json::from_str(&response.text().await?)?),
            other => match response.text().await {
                Ok(val) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url: url.to_owned(),
                    response: Some(val),
                }),
                Err(_) => Err(ApiError::InvalidResponse {
                    status_code: other,
                    url: url.to_owned(),
                    response: None,
                }),
            },
        }
    }
}
