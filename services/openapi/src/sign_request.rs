// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
use http::HeaderValue;
use log::debug;
use volcsign_core::time::{now, DateTime};
use volcsign_core::{Context, Result, SignRequest};

use crate::action::{action_override, content_type_for};
use crate::canonical::{self, SignResult, SigningParams};
use crate::constants::*;
use crate::query::{Query, QueryValue};
use crate::request::{merge_headers, ApiRequest, SignedRequest};
use crate::{Config, Credential, CredentialScope};

/// RequestSigner that implements volcengine openapi signing.
///
/// - [Volcengine OpenAPI signature](https://www.volcengine.com/docs/6369/67269)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    host: String,
    path: String,
    region: String,
    service: String,
    version: String,
    content_type: String,

    time: Option<DateTime>,
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestSigner {
    /// Create a new signer with the gateway defaults.
    pub fn new() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            path: DEFAULT_PATH.to_string(),
            region: DEFAULT_REGION.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            content_type: FORM_CONTENT_TYPE.to_string(),

            time: None,
        }
    }

    /// Create a new signer from config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            host: config.host(),
            region: config.region().to_string(),
            service: config.service().to_string(),
            version: config.version().to_string(),
            ..Self::new()
        }
    }

    /// Set the host requests are sent to.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the request path.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the region used by requests without one.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the default service.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    /// Set the default API version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the content type of non-`POST` requests.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign an openapi request with given credential.
    pub fn sign(&self, req: ApiRequest, cred: &Credential) -> Result<SignedRequest> {
        let now = self.time.unwrap_or_else(now);

        let ApiRequest {
            method,
            action,
            region,
            query: caller_query,
            headers,
            body,
        } = req;

        let overrides = action_override(&action);
        let service = overrides.service.unwrap_or(self.service.as_str());
        let version = overrides.version.unwrap_or(self.version.as_str());
        let content_type = content_type_for(&method, &self.content_type);
        let scope = CredentialScope::new(region.unwrap_or_else(|| self.region.clone()), service);
        debug!(
            "signing action {action} for {}/{} with version {version}",
            scope.region, scope.service
        );

        // Caller supplied `Action` and `Version` replace the injected ones.
        let mut query = Query::new();
        query.insert(QUERY_ACTION.to_string(), QueryValue::from(action));
        query.insert(QUERY_VERSION.to_string(), QueryValue::from(version));
        query.extend(caller_query);

        let body = body.unwrap_or_default();
        let params = SigningParams {
            method: &method,
            host: &self.host,
            path: &self.path,
            query: &query,
            content_type,
            body: &body,
            date: now,
        };
        let SignResult {
            headers: mut computed,
            query,
        } = canonical::sign(&params, cred, &scope)?;

        if let Some(token) = cred.session_token() {
            let mut value = HeaderValue::from_str(token)?;
            value.set_sensitive(true);
            computed.insert(X_SECURITY_TOKEN, value);
        }

        Ok(SignedRequest {
            method,
            host: self.host.clone(),
            path: self.path.clone(),
            query,
            headers: merge_headers(headers, computed),
            body,
        })
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;
    type Request = ApiRequest;
    type Output = SignedRequest;

    fn sign_request(
        &self,
        _: &Context,
        req: Self::Request,
        credential: &Self::Credential,
    ) -> Result<Self::Output> {
        self.sign(req, credential)
    }
}
