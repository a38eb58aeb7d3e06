use http::Uri;
use volcsign_core::Context;

use crate::constants::*;

/// Config carries the endpoint configuration of the openapi gateway.
///
/// Credentials are not part of the config, they are resolved per call by a
/// credential provider.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// `host` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`VOLCENGINE_ENDPOINT`]
    /// - default value: [`DEFAULT_HOST`]
    pub host: Option<String>,
    /// `region` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`VOLCENGINE_REGION`]
    /// - default value: [`DEFAULT_REGION`]
    pub region: Option<String>,
    /// `service` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - default value: [`DEFAULT_SERVICE`]
    pub service: Option<String>,
    /// `version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - default value: [`DEFAULT_VERSION`]
    pub version: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set host, a full endpoint like `https://example.com/` is accepted too.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set service
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Set version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(VOLCENGINE_ENDPOINT) {
            self.host.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(VOLCENGINE_REGION) {
            self.region.get_or_insert(v);
        }

        self
    }

    /// Host of the gateway, without scheme or path.
    pub fn host(&self) -> String {
        match self.host.as_deref() {
            Some(v) => endpoint_host(v),
            None => DEFAULT_HOST.to_string(),
        }
    }

    /// Default region of requests.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Default service of requests.
    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or(DEFAULT_SERVICE)
    }

    /// Default API version of requests.
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(DEFAULT_VERSION)
    }
}

/// Extract the host part of an endpoint.
///
/// Values that don't parse as uri are used as-is.
fn endpoint_host(endpoint: &str) -> String {
    endpoint
        .parse::<Uri>()
        .ok()
        .and_then(|uri| uri.authority().map(|v| v.to_string()))
        .unwrap_or_else(|| endpoint.to_string())
}
