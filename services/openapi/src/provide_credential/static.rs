use async_trait::async_trait;
use volcsign_core::{Context, ProvideCredential, Result};

use crate::Credential;

/// StaticCredentialProvider provides static volcengine credentials.
///
/// This provider is used when you have the access key and secret key
/// directly and want to use them without any dynamic loading.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key and secret key.
    pub fn new(access_key_id: &str, secret_access_key: &str) -> Self {
        Self {
            credential: Credential::new(access_key_id, secret_access_key, None),
        }
    }

    /// Set the session token.
    pub fn with_session_token(mut self, token: &str) -> Self {
        self.credential.session_token = Some(token.to_string());
        self
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> anyhow::Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_access_key, "test_secret_key");
        assert!(cred.session_token.is_none());

        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key")
            .with_session_token("test_session_token");
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.session_token(), Some("test_session_token"));

        Ok(())
    }
}
