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

use std::fmt::{Debug, Formatter};

use volcsign_core::utils::Redact;
use volcsign_core::SigningCredential;

/// Credential that holds the access_key and secret_key.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Access key id for volcengine services.
    pub access_key_id: String,
    /// Secret access key for volcengine services.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    pub session_token: Option<String>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    /// Session token that should be sent along with the request.
    ///
    /// An empty token is treated as no token at all.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref().filter(|v| !v.is_empty())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

/// CredentialScope binds a signature to a region and a service.
///
/// A new scope is built for every signature, so per-action overrides never
/// leak into other calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    /// Region the request is sent to, like `cn-beijing`.
    pub region: String,
    /// Service the request is sent to, like `apig`.
    pub service: String,
}

impl CredentialScope {
    /// Create a new credential scope.
    pub fn new(region: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service: service.into(),
        }
    }
}
