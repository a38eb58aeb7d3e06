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
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};
use log::debug;
use serde::Deserialize;
use serde_json::{Map, Value};
use volcsign_core::hash::base64_decode;
use volcsign_core::{Context, Error, ProvideCredential, Result};

use crate::{constants::AUTHORIZATION_ENV, Credential};

/// AuthorizationCredentialProvider loads credentials that the caller of a
/// service forwarded in its `authorization` value.
///
/// The value looks like `[<scheme> ]<base64(json)>` where the json payload is:
///
/// ```json
/// {"AccessKeyId": "...", "SecretAccessKey": "...", "SessionToken": "..."}
/// ```
///
/// The value is taken from
///
/// - the inbound header set via [`Self::with_authorization`] or [`Self::with_inbound_headers`]
/// - env value: `authorization`
///
/// A value that is present but can't be decoded is an error of kind
/// [`CredentialMalformed`](volcsign_core::ErrorKind::CredentialMalformed).
#[derive(Debug, Clone, Default)]
pub struct AuthorizationCredentialProvider {
    authorization: Option<HeaderValue>,
}

impl AuthorizationCredentialProvider {
    /// Create a new AuthorizationCredentialProvider that only reads env.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the `authorization` value of an inbound request.
    pub fn with_authorization(mut self, mut value: HeaderValue) -> Self {
        value.set_sensitive(true);
        self.authorization = Some(value);
        self
    }

    /// Use the `authorization` header of an inbound request if it has one.
    pub fn with_inbound_headers(self, headers: &HeaderMap) -> Self {
        match headers.get(AUTHORIZATION) {
            Some(value) => self.with_authorization(value.clone()),
            None => self,
        }
    }
}

#[async_trait]
impl ProvideCredential for AuthorizationCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let value = match &self.authorization {
            Some(v) => v
                .to_str()
                .map_err(|e| {
                    Error::credential_malformed("authorization header is not valid ascii")
                        .with_source(e)
                })?
                .to_string(),
            None => match ctx.env_var(AUTHORIZATION_ENV) {
                Some(v) => v,
                None => return Ok(None),
            },
        };

        let cred = parse_authorization(&value)?;
        debug!("loaded credential from authorization value");
        Ok(Some(cred))
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct AuthorizationPayload {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    session_token: Option<String>,
}

/// Decode an authorization value into credential.
///
/// Everything before the first space is the scheme and gets discarded.
/// ASCII whitespace inside the base64 text is skipped, so line wrapped values
/// are accepted. The payload must be a json object, missing fields of it
/// become empty values.
fn parse_authorization(value: &str) -> Result<Credential> {
    let encoded = match value.split_once(' ') {
        Some((_, v)) => v,
        None => value,
    };
    let encoded: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let decoded = base64_decode(&encoded).map_err(|e| {
        Error::credential_malformed("authorization value is not valid base64").with_source(e)
    })?;
    let decoded = String::from_utf8(decoded).map_err(|e| {
        Error::credential_malformed("authorization value is not valid utf-8").with_source(e)
    })?;
    let payload: Map<String, Value> = serde_json::from_str(&decoded).map_err(|e| {
        Error::credential_malformed("authorization payload is not a valid json object")
            .with_source(e)
    })?;
    let payload: AuthorizationPayload =
        serde_json::from_value(Value::Object(payload)).map_err(|e| {
            Error::credential_malformed("authorization payload has invalid fields").with_source(e)
        })?;

    Ok(Credential::new(
        payload.access_key_id.unwrap_or_default(),
        payload.secret_access_key.unwrap_or_default(),
        payload.session_token,
    ))
}
