//! Per-action exceptions of the openapi gateway.
//!
//! Most actions are served by the default service and API version. The
//! actions listed here are routed elsewhere by the gateway, and a request
//! signed for the default scope would be rejected.

use std::collections::HashMap;

use http::Method;
use once_cell::sync::Lazy;

use crate::constants::JSON_CONTENT_TYPE;

/// Service serving the function dependency and code upload actions.
pub const VEFAAS_SERVICE: &str = "vefaas";
/// API version of the route actions.
pub const ROUTE_VERSION: &str = "2022-11-12";

/// Overrides applied to the signing scope of a single action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionOverride {
    /// Service to sign for instead of the default one.
    pub service: Option<&'static str>,
    /// API version to send instead of the default one.
    pub version: Option<&'static str>,
}

impl ActionOverride {
    const fn service(service: &'static str) -> Self {
        Self {
            service: Some(service),
            version: None,
        }
    }

    const fn version(version: &'static str) -> Self {
        Self {
            service: None,
            version: Some(version),
        }
    }
}

static ACTION_OVERRIDES: Lazy<HashMap<&'static str, ActionOverride>> = Lazy::new(|| {
    HashMap::from([
        ("CodeUploadCallback", ActionOverride::service(VEFAAS_SERVICE)),
        (
            "CreateDependencyInstallTask",
            ActionOverride::service(VEFAAS_SERVICE),
        ),
        (
            "GetDependencyInstallTaskStatus",
            ActionOverride::service(VEFAAS_SERVICE),
        ),
        (
            "GetDependencyInstallTaskLogDownloadURI",
            ActionOverride::service(VEFAAS_SERVICE),
        ),
        ("CreateRoute", ActionOverride::version(ROUTE_VERSION)),
        ("ListRoutes", ActionOverride::version(ROUTE_VERSION)),
    ])
});

/// Look up the overrides of given action.
///
/// Actions without special handling get an empty override.
pub fn action_override(action: &str) -> ActionOverride {
    ACTION_OVERRIDES.get(action).copied().unwrap_or_default()
}

/// Pick the content type of a request.
///
/// `POST` bodies are always json, whatever the caller configured.
pub fn content_type_for<'a>(method: &Method, default: &'a str) -> &'a str {
    if method == Method::POST {
        JSON_CONTENT_TYPE
    } else {
        default
    }
}
