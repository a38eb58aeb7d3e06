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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used in volcengine openapi.
pub const X_CONTENT_SHA256: &str = "x-content-sha256";
pub const X_DATE: &str = "x-date";
pub const X_SECURITY_TOKEN: &str = "x-security-token";

// Env values used in volcengine openapi.
pub const VOLCENGINE_ACCESS_KEY: &str = "VOLCENGINE_ACCESS_KEY";
pub const VOLCENGINE_SECRET_KEY: &str = "VOLCENGINE_SECRET_KEY";
pub const VOLC_ACCESSKEY: &str = "VOLC_ACCESSKEY";
pub const VOLC_SECRETKEY: &str = "VOLC_SECRETKEY";
pub const VOLCENGINE_ENDPOINT: &str = "VOLCENGINE_ENDPOINT";
pub const VOLCENGINE_REGION: &str = "VOLCENGINE_REGION";
/// Same name as the inbound header so a proxy can forward it through the env.
pub const AUTHORIZATION_ENV: &str = "authorization";

// Signing protocol.
pub const SIGNING_ALGORITHM: &str = "HMAC-SHA256";
pub const SIGNING_TERMINATOR: &str = "request";
/// `x-security-token` is never part of the signed headers.
pub const SIGNED_HEADERS: &str = "content-type;host;x-content-sha256;x-date";

// Defaults of the openapi gateway.
pub const DEFAULT_HOST: &str = "iam.volcengineapi.com";
pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_REGION: &str = "cn-beijing";
pub const DEFAULT_SERVICE: &str = "apig";
pub const DEFAULT_VERSION: &str = "2021-03-03";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Query keys injected by the signer.
pub const QUERY_ACTION: &str = "Action";
pub const QUERY_VERSION: &str = "Version";

/// AsciiSet for volcengine query encoding.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
