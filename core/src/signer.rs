use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Every call to [`Signer::sign`] resolves a fresh credential and uses it for
/// exactly one signature. Nothing is cached between calls.
pub struct Signer<K: SigningCredential, R: 'static, O: 'static> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K, Request = R, Output = O>>,
}

impl<K: SigningCredential, R: 'static, O: 'static> Clone for Signer<K, R, O> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            loader: self.loader.clone(),
            builder: self.builder.clone(),
        }
    }
}

impl<K: SigningCredential, R: 'static, O: 'static> Debug for Signer<K, R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signer")
            .field("ctx", &self.ctx)
            .field("loader", &self.loader)
            .field("builder", &self.builder)
            .finish()
    }
}

impl<K: SigningCredential, R: 'static, O: 'static> Signer<K, R, O> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K, Request = R, Output = O>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Replace the credential loader, sharing the context and request signer.
    ///
    /// This is the way to bind a signer to a per-call credential source, for
    /// example one built from an inbound request's headers.
    pub fn with_credential_provider(&self, loader: impl ProvideCredential<Credential = K>) -> Self {
        Self {
            ctx: self.ctx.clone(),
            loader: Arc::new(loader),
            builder: self.builder.clone(),
        }
    }

    /// Signing request.
    ///
    /// Returns [`ErrorKind::CredentialMissing`](crate::ErrorKind::CredentialMissing)
    /// if the loader can't find any credential.
    pub async fn sign(&self, req: R) -> Result<O> {
        let Some(cred) = self.loader.provide_credential(&self.ctx).await? else {
            return Err(Error::credential_missing(
                "no credential found in any configured source",
            ));
        };

        self.builder.sign_request(&self.ctx, req, &cred)
    }
}
