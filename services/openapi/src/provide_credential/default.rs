use async_trait::async_trait;
use http::HeaderMap;
use volcsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::provide_credential::{AuthorizationCredentialProvider, EnvCredentialProvider};
use crate::Credential;

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. `VOLCENGINE_ACCESS_KEY` / `VOLCENGINE_SECRET_KEY`
/// 2. `VOLC_ACCESSKEY` / `VOLC_SECRETKEY`
/// 3. The inbound `authorization` header, then the `authorization` env
///
/// Build a new provider for every inbound request with
/// [`DefaultCredentialProvider::with_inbound_headers`].
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` without inbound request.
    pub fn new() -> Self {
        Self::with_authorization(AuthorizationCredentialProvider::new())
    }

    /// Create a new `DefaultCredentialProvider` for an inbound request.
    pub fn with_inbound_headers(headers: &HeaderMap) -> Self {
        Self::with_authorization(
            AuthorizationCredentialProvider::new().with_inbound_headers(headers),
        )
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    fn with_authorization(authorization: AuthorizationCredentialProvider) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(EnvCredentialProvider::alternate())
            .push(authorization);

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::provide_credential::StaticCredentialProvider;
    use http::header::AUTHORIZATION;
    use http::HeaderValue;
    use volcsign_core::hash::base64_encode;
    use volcsign_core::{ErrorKind, StaticEnv};

    fn authorization(ak: &str, sk: &str, token: &str) -> String {
        let payload = serde_json::json!({
            "AccessKeyId": ak,
            "SecretAccessKey": sk,
            "SessionToken": token,
        });
        format!("Bearer {}", base64_encode(payload.to_string().as_bytes()))
    }

    #[tokio::test]
    async fn test_credential_env_loader_without_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv::default());

        let l = DefaultCredentialProvider::new();
        let x = l.provide_credential(&ctx).await.expect("load must succeed");
        assert!(x.is_none());
    }

    #[tokio::test]
    async fn test_primary_env_comes_first() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (VOLCENGINE_ACCESS_KEY, "A"),
            (VOLCENGINE_SECRET_KEY, "B"),
            (VOLC_ACCESSKEY, "C"),
            (VOLC_SECRETKEY, "D"),
        ]));
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&authorization("AK1", "SK1", "TK1"))?,
        );

        let cred = DefaultCredentialProvider::with_inbound_headers(&headers)
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred, Credential::new("A", "B", None));
        Ok(())
    }

    #[tokio::test]
    async fn test_alternate_env_before_authorization() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([
            (VOLC_ACCESSKEY.to_string(), "C".to_string()),
            (VOLC_SECRETKEY.to_string(), "D".to_string()),
            (AUTHORIZATION_ENV.to_string(), authorization("AK1", "SK1", "TK1")),
        ]));

        let cred = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred, Credential::new("C", "D", None));
        Ok(())
    }

    #[tokio::test]
    async fn test_authorization_header() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv::default());
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&authorization("AK1", "SK1", "TK1"))?,
        );

        let cred = DefaultCredentialProvider::with_inbound_headers(&headers)
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred, Credential::new("AK1", "SK1", Some("TK1".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_authorization_is_error() {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([(
            AUTHORIZATION_ENV,
            "Bearer not-base64!!",
        )]));

        let err = DefaultCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialMalformed);
    }

    #[tokio::test]
    async fn test_custom_chain() -> anyhow::Result<()> {
        let chain = ProvideCredentialChain::new()
            .push(StaticCredentialProvider::new("static_ak", "static_sk"));

        let cred = DefaultCredentialProvider::with_chain(chain)
            .provide_credential(&Context::new().with_env(StaticEnv::default()))
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.access_key_id, "static_ak");
        Ok(())
    }
}
