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
use log::debug;
use volcsign_core::{Context, ProvideCredential, Result};

use crate::{constants::*, Credential};

/// EnvCredentialProvider loads volcengine credentials from a pair of
/// environment variables.
///
/// - [`EnvCredentialProvider::new`] reads `VOLCENGINE_ACCESS_KEY` and `VOLCENGINE_SECRET_KEY`
/// - [`EnvCredentialProvider::alternate`] reads `VOLC_ACCESSKEY` and `VOLC_SECRETKEY`
///
/// Both variables of the pair must be set. Credentials loaded from env never
/// carry a session token.
#[derive(Debug, Clone)]
pub struct EnvCredentialProvider {
    access_key_env: &'static str,
    secret_key_env: &'static str,
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider reading the primary pair.
    pub fn new() -> Self {
        Self {
            access_key_env: VOLCENGINE_ACCESS_KEY,
            secret_key_env: VOLCENGINE_SECRET_KEY,
        }
    }

    /// Create a new EnvCredentialProvider reading the alternate pair.
    pub fn alternate() -> Self {
        Self {
            access_key_env: VOLC_ACCESSKEY,
            secret_key_env: VOLC_SECRETKEY,
        }
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let access_key_id = ctx.env_var(self.access_key_env);
        let secret_access_key = ctx.env_var(self.secret_key_env);

        match (access_key_id, secret_access_key) {
            (Some(ak), Some(sk)) => {
                debug!("loaded credential from env {}", self.access_key_env);
                Ok(Some(Credential::new(ak, sk, None)))
            }
            _ => Ok(None),
        }
    }
}
