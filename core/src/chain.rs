use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// The first provider returning `Some` wins and the rest are never called.
/// Errors are returned to the caller as-is: a broken credential source is
/// never silently skipped.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C> ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }
}

impl<C> Default for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

#[async_trait]
impl<C> ProvideCredential for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("Trying credential provider: {:?}", provider);

            if let Some(cred) = provider.provide_credential(ctx).await? {
                log::debug!("Successfully loaded credential from provider: {:?}", provider);
                return Ok(Some(cred));
            }

            log::debug!("No credential found in provider: {:?}", provider);
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct MockProvider {
        name: &'static str,
        result: Option<Option<&'static str>>,
        calls: Arc<AtomicUsize>,
    }

    impl MockProvider {
        fn new(name: &'static str, result: Option<Option<&'static str>>) -> Self {
            Self {
                name,
                result,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl ProvideCredential for MockProvider {
        type Credential = String;

        async fn provide_credential(&self, _: &Context) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.result {
                None => Err(Error::credential_malformed(format!("{} is broken", self.name))),
                Some(v) => Ok(v.map(|v| v.to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_success() {
        let _ = env_logger::builder().is_test(true).try_init();

        let last = MockProvider::new("last", Some(Some("should_not_be_used")));
        let last_calls = last.calls.clone();

        let chain = ProvideCredentialChain::new()
            .push(MockProvider::new("empty", Some(None)))
            .push(MockProvider::new("first", Some(Some("first_credential"))))
            .push(last);

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert_eq!(cred.as_deref(), Some("first_credential"));
        assert_eq!(last_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_chain_propagates_errors() {
        let _ = env_logger::builder().is_test(true).try_init();

        let after = MockProvider::new("after", Some(Some("never")));
        let after_calls = after.calls.clone();

        let chain = ProvideCredentialChain::new()
            .push(MockProvider::new("empty", Some(None)))
            .push(MockProvider::new("broken", None))
            .push(after);

        let err = chain.provide_credential(&Context::new()).await.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::CredentialMalformed);
        assert_eq!(after_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain: ProvideCredentialChain<String> = ProvideCredentialChain::default();

        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert!(cred.is_none());
    }
}
