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

use crate::{Context, Result};
use std::fmt::{self, Debug};

/// SigningCredential is the trait used by credentials to report whether they can still be used.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by credential providers to load credentials.
///
/// Providers return `Ok(None)` when their source is absent and `Err` when the source
/// exists but cannot be turned into a credential.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from current env.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// A chain of credential providers that will be tried in order.
///
/// The first provider returning `Some` wins. An error stops the chain and is returned
/// as-is: a source that is present but broken must not be papered over by a later one.
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
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C> + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers in this chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether this chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
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

#[async_trait::async_trait]
impl<C> ProvideCredential for ProvideCredentialChain<C>
where
    C: Send + Sync + Unpin + 'static,
{
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            log::debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    log::debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => {
                    log::debug!("no credential found in provider: {provider:?}");
                }
                Err(err) => {
                    log::warn!("credential provider {provider:?} failed: {err}");
                    return Err(err);
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug)]
    struct MockSuccessProvider(&'static str);

    #[async_trait::async_trait]
    impl ProvideCredential for MockSuccessProvider {
        type Credential = String;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(Some(self.0.to_string()))
        }
    }

    #[derive(Debug)]
    struct MockEmptyProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for MockEmptyProvider {
        type Credential = String;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct MockFailProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for MockFailProvider {
        type Credential = String;

        async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::credential_invalid("mock provider failed"))
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_credential() {
        let ctx = Context::new();
        let chain = ProvideCredentialChain::new()
            .push(MockEmptyProvider)
            .push(MockSuccessProvider("first"))
            .push(MockSuccessProvider("second"));
        assert_eq!(chain.len(), 3);

        let cred = chain.provide_credential(&ctx).await.unwrap();
        assert_eq!(cred.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn test_chain_all_empty() {
        let ctx = Context::new();
        let chain = ProvideCredentialChain::new()
            .push(MockEmptyProvider)
            .push(MockEmptyProvider);

        assert!(chain.provide_credential(&ctx).await.unwrap().is_none());
        assert!(ProvideCredentialChain::<String>::new().is_empty());
    }

    #[tokio::test]
    async fn test_chain_stops_on_error() {
        let ctx = Context::new();
        let chain = ProvideCredentialChain::new()
            .push(MockFailProvider)
            .push(MockSuccessProvider("never"));

        let err = chain.provide_credential(&ctx).await.unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_option_credential_validity() {
        #[derive(Clone, Debug)]
        struct Flag(bool);

        impl SigningCredential for Flag {
            fn is_valid(&self) -> bool {
                self.0
            }
        }

        assert!(!None::<Flag>.is_valid());
        assert!(!Some(Flag(false)).is_valid());
        assert!(Some(Flag(true)).is_valid());
    }
}
