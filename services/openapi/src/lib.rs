//! Signer for volcengine openapi gateway.
//!
//! Requests are signed with `HMAC-SHA256` over a canonical form of the
//! request, scoped to a date, a region and a service. The credential is
//! resolved for every call, in this order:
//!
//! 1. `VOLCENGINE_ACCESS_KEY` / `VOLCENGINE_SECRET_KEY`
//! 2. `VOLC_ACCESSKEY` / `VOLC_SECRETKEY`
//! 3. The `authorization` header of the inbound request, then the
//!    `authorization` env. Its value is `[<scheme> ]<base64(json)>`.
//!
//! ## Example
//!
//! ```no_run
//! use http::Method;
//! use volcsign_core::{Context, OsEnv, Signer};
//! use volcsign_openapi::{ApiRequest, Config, DefaultCredentialProvider, RequestSigner};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let config = Config::new().from_env(&ctx);
//!     let signer = Signer::new(
//!         ctx,
//!         DefaultCredentialProvider::new(),
//!         RequestSigner::from_config(&config),
//!     );
//!
//!     let req = ApiRequest::new(Method::GET, "ListUsers").with_query("Limit", "10");
//!     let req = signer.sign(req).await?.into_http_request()?;
//!     println!("send {} {}", req.method(), req.uri());
//!     Ok(())
//! }
//! ```
//!
//! A service that forwards its caller's identity builds a provider per
//! inbound request:
//!
//! ```no_run
//! # use http::{HeaderMap, Method};
//! # use volcsign_core::{Context, Signer};
//! # use volcsign_openapi::{ApiRequest, DefaultCredentialProvider, RequestSigner, SignedRequest};
//! # async fn handle(
//! #     signer: &Signer<volcsign_openapi::Credential, ApiRequest, SignedRequest>,
//! #     inbound: &HeaderMap,
//! # ) -> volcsign_core::Result<SignedRequest> {
//! let signer = signer.with_credential_provider(DefaultCredentialProvider::with_inbound_headers(inbound));
//! signer.sign(ApiRequest::new(Method::POST, "CreateRoute").with_body("{}")).await
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::{Credential, CredentialScope};

mod query;
pub use query::{normalize_query, Query, QueryValue};

mod action;
pub use action::{action_override, content_type_for, ActionOverride};

pub mod canonical;

mod request;
pub use request::{merge_headers, ApiRequest, SignedRequest};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
