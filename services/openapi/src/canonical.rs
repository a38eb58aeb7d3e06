//! Canonical request and signature computation.
//!
//! - [Volcengine OpenAPI signature](https://www.volcengine.com/docs/6369/67269)

use std::fmt::Write;

use http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use http::{HeaderMap, HeaderValue, Method};
use log::debug;
use volcsign_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use volcsign_core::time::{format_date, format_iso8601, DateTime};
use volcsign_core::Result;

use crate::constants::{
    SIGNED_HEADERS, SIGNING_ALGORITHM, SIGNING_TERMINATOR, X_CONTENT_SHA256, X_DATE,
};
use crate::query::{normalize_query, Query};
use crate::{Credential, CredentialScope};

/// Everything about a request that goes into its signature.
#[derive(Debug, Clone, Copy)]
pub struct SigningParams<'a> {
    /// HTTP method, uppercased in the canonical request.
    pub method: &'a Method,
    /// Host the request is sent to.
    pub host: &'a str,
    /// Request path, like `/`.
    pub path: &'a str,
    /// Query parameters, including `Action` and `Version`.
    pub query: &'a Query,
    /// Content type of the body.
    pub content_type: &'a str,
    /// The exact body that will be sent.
    pub body: &'a str,
    /// Signing time, captured once per signature.
    pub date: DateTime,
}

/// Output of a signature computation.
#[derive(Debug, Clone)]
pub struct SignResult {
    /// `Host`, `X-Content-Sha256`, `X-Date`, `Content-Type` and `Authorization`.
    pub headers: HeaderMap,
    /// The normalized query that has been signed.
    pub query: String,
}

/// Sign the request described by `params`.
pub fn sign(
    params: &SigningParams<'_>,
    cred: &Credential,
    scope: &CredentialScope,
) -> Result<SignResult> {
    let x_date = format_iso8601(params.date);
    let short_date = format_date(params.date);
    let content_sha256 = hex_sha256(params.body.as_bytes());
    let query = normalize_query(params.query);

    let creq = canonical_request_string(params, &query, &x_date, &content_sha256)?;
    debug!("calculated canonical request: {creq}");

    // Scope: "20240102/<region>/<service>/request"
    let credential_scope = format!(
        "{short_date}/{}/{}/{SIGNING_TERMINATOR}",
        scope.region, scope.service
    );
    debug!("calculated scope: {credential_scope}");

    let string_to_sign = string_to_sign(&x_date, &credential_scope, &creq)?;
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_access_key, &short_date, scope);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    let mut headers = HeaderMap::with_capacity(5);
    headers.insert(HOST, HeaderValue::from_str(params.host)?);
    headers.insert(X_CONTENT_SHA256, HeaderValue::from_str(&content_sha256)?);
    headers.insert(X_DATE, HeaderValue::from_str(&x_date)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_str(params.content_type)?);

    let mut authorization = HeaderValue::from_str(&format!(
        "{SIGNING_ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
        cred.access_key_id,
    ))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);

    Ok(SignResult { headers, query })
}

/// Build the canonical request of `params`.
///
/// ```shell
/// GET
/// /
/// Action=ListUsers&Version=2021-03-03
/// content-type:application/x-www-form-urlencoded
/// host:iam.volcengineapi.com
/// x-content-sha256:<hashed_body>
/// x-date:20240102T030405Z
///
/// content-type;host;x-content-sha256;x-date
/// <hashed_body>
/// ```
pub fn canonical_request(params: &SigningParams<'_>) -> Result<String> {
    canonical_request_string(
        params,
        &normalize_query(params.query),
        &format_iso8601(params.date),
        &hex_sha256(params.body.as_bytes()),
    )
}

fn canonical_request_string(
    params: &SigningParams<'_>,
    query: &str,
    x_date: &str,
    content_sha256: &str,
) -> Result<String> {
    // 512 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(512);

    writeln!(f, "{}", params.method.as_str().to_uppercase())?;
    writeln!(f, "{}", params.path)?;
    writeln!(f, "{query}")?;
    writeln!(f, "content-type:{}", params.content_type)?;
    writeln!(f, "host:{}", params.host)?;
    writeln!(f, "{X_CONTENT_SHA256}:{content_sha256}")?;
    writeln!(f, "{X_DATE}:{x_date}")?;
    writeln!(f)?;
    writeln!(f, "{SIGNED_HEADERS}")?;
    write!(f, "{content_sha256}")?;

    Ok(f)
}

/// StringToSign:
///
/// ```shell
/// HMAC-SHA256
/// 20240102T030405Z
/// 20240102/<region>/<service>/request
/// <hashed_canonical_request>
/// ```
fn string_to_sign(x_date: &str, credential_scope: &str, creq: &str) -> Result<String> {
    let mut f = String::with_capacity(160);
    writeln!(f, "{SIGNING_ALGORITHM}")?;
    writeln!(f, "{x_date}")?;
    writeln!(f, "{credential_scope}")?;
    write!(f, "{}", hex_sha256(creq.as_bytes()))?;
    Ok(f)
}

fn generate_signing_key(secret: &str, short_date: &str, scope: &CredentialScope) -> Vec<u8> {
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), short_date.as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), scope.region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), scope.service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), SIGNING_TERMINATOR.as_bytes())
}
