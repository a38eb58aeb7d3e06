use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Returning `Ok(None)` means this source has nothing to offer and the next
/// source may be tried. Returning `Err` means the source exists but is broken.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to build the signed request.
///
/// Signing is a pure computation over its inputs: it never suspends and
/// never touches the environment.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;
    /// Request accepted by this signer.
    type Request;
    /// Signed output returned by this signer.
    type Output;

    /// Sign the request with the given credential.
    fn sign_request(
        &self,
        ctx: &Context,
        req: Self::Request,
        credential: &Self::Credential,
    ) -> Result<Self::Output>;
}
