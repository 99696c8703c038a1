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
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
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

/// SigningRequest is the request-side input of a signer.
///
/// It must carry everything the signature covers, so that signing the same
/// request twice yields the same result.
pub trait SigningRequest: Debug + Send + Sync + 'static {
    /// The scope used to look up credentials for this request.
    ///
    /// For dragonchain this is the endpoint (dragonchain) id.
    fn credential_scope(&self) -> Option<&str>;
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// `scope` names the remote the credential is for. Providers that do not need
/// it (environment variables, static credentials) ignore it.
///
/// Returning `Ok(None)` means "not configured here, try the next source";
/// returning an error stops resolution.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    async fn provide_credential(
        &self,
        ctx: &Context,
        scope: Option<&str>,
    ) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to compute the request signature.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Request shape accepted by this signer.
    type Request: SigningRequest;

    /// Sign the request and return the authorization header value.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &Self::Request,
        credential: Option<&Self::Credential>,
    ) -> Result<String>;
}
