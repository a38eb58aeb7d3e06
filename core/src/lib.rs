//! Core components for signing Volcengine API requests.
//!
//! This crate provides the foundational types and traits for the volcsign ecosystem.
//! It defines the abstractions that keep credential loading and request signing apart.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment implementation used while loading credentials
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that resolves a credential for every call and hands it to the request signer
//!
//! ## Example
//!
//! ```no_run
//! use volcsign_core::{Context, Result, Signer, ProvideCredential, SignRequest, SigningCredential};
//! use async_trait::async_trait;
//!
//! // Define your credential type
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement credential loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! // Implement request signer
//! #[derive(Debug)]
//! struct MyRequestSigner;
//!
//! impl SignRequest for MyRequestSigner {
//!     type Credential = MyCredential;
//!     type Request = String;
//!     type Output = String;
//!
//!     fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: String,
//!         cred: &Self::Credential,
//!     ) -> Result<String> {
//!         Ok(format!("{req} signed by {}", cred.key))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyRequestSigner);
//! let signed = signer.sign("hello".to_string()).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`Env`]: For environment variable access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SignRequest`]: For building service-specific signed requests
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
