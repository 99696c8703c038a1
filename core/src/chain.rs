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

use crate::{Context, ProvideCredential, Result};
use async_trait::async_trait;
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// The first provider returning `Some` wins. An error from any provider ends
/// resolution immediately and is returned unchanged.
pub struct ProvideCredentialChain<C> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a credential provider to the front of the chain.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.insert(0, Box::new(provider));
        self
    }

    /// Number of providers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if the chain has no providers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
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
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(
        &self,
        ctx: &Context,
        scope: Option<&str>,
    ) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            if let Some(cred) = provider.provide_credential(ctx, scope).await? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, ErrorKind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug)]
    struct Fixed(Option<&'static str>, Arc<AtomicUsize>);

    #[async_trait]
    impl ProvideCredential for Fixed {
        type Credential = String;

        async fn provide_credential(
            &self,
            _: &Context,
            _: Option<&str>,
        ) -> Result<Option<Self::Credential>> {
            self.1.fetch_add(1, Ordering::SeqCst);
            Ok(self.0.map(|v| v.to_string()))
        }
    }

    #[derive(Debug)]
    struct Failing;

    #[async_trait]
    impl ProvideCredential for Failing {
        type Credential = String;

        async fn provide_credential(
            &self,
            _: &Context,
            scope: Option<&str>,
        ) -> Result<Option<Self::Credential>> {
            Err(Error::not_found(format!(
                "credential file is missing a config for {}",
                scope.unwrap_or_default()
            )))
        }
    }

    #[tokio::test]
    async fn test_chain_stops_at_first_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ProvideCredentialChain::new()
            .push(Fixed(None, calls.clone()))
            .push(Fixed(Some("second"), calls.clone()))
            .push(Fixed(Some("third"), calls.clone()));

        let cred = chain
            .provide_credential(&Context::new(), None)
            .await
            .unwrap();
        assert_eq!(cred.as_deref(), Some("second"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_chain_propagates_error_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ProvideCredentialChain::new()
            .push(Fixed(None, calls.clone()))
            .push(Failing)
            .push(Fixed(Some("never"), calls.clone()));

        let err = chain
            .provide_credential(&Context::new(), Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "credential file is missing a config for banana"
        );
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_push_front() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = ProvideCredentialChain::new()
            .push(Failing)
            .push_front(Fixed(Some("front"), calls.clone()));
        assert_eq!(chain.len(), 2);

        let cred = chain
            .provide_credential(&Context::new(), None)
            .await
            .unwrap();
        assert_eq!(cred.as_deref(), Some("front"));
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain = ProvideCredentialChain::<String>::new();
        assert!(chain.is_empty());

        let cred = chain
            .provide_credential(&Context::new(), None)
            .await
            .unwrap();
        assert!(cred.is_none());
    }
}
