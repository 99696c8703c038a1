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

use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SigningCredential, SigningRequest,
};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// Credentials are resolved again for every request: nothing is cached
/// between calls, so an updated credential file takes effect immediately.
#[derive(Debug)]
pub struct Signer<K: SigningCredential, R: SigningRequest> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K, Request = R>>,
}

impl<K: SigningCredential, R: SigningRequest> Clone for Signer<K, R> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            provider: self.provider.clone(),
            builder: self.builder.clone(),
        }
    }
}

impl<K: SigningCredential, R: SigningRequest> Signer<K, R> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K, Request = R>,
    ) -> Self {
        Self {
            ctx,

            provider: Arc::new(provider),
            builder: Arc::new(builder),
        }
    }

    /// Get the context used by this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Replace the credential provider used by this signer.
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = K>,
    ) -> Self {
        self.provider = Arc::new(provider);
        self
    }

    /// Sign the request and return the authorization header value.
    ///
    /// Errors from the credential provider are returned unchanged.
    pub async fn sign(&self, req: &R) -> Result<String> {
        let credential = self
            .provider
            .provide_credential(&self.ctx, req.credential_scope())
            .await?;

        if !credential.is_valid() {
            return Err(Error::not_found(match req.credential_scope() {
                Some(scope) => format!("no credential found for {scope}"),
                None => "no credential found".to_string(),
            }));
        }

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
            .await
    }
}
