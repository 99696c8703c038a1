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

use async_trait::async_trait;
use dragonchain_core::{Context, ProvideCredential, Result};

use crate::credential::Credential;

/// StaticCredentialProvider returns a fixed credential.
///
/// Use it to override the lookup, e.g. through `Client::with_credential_provider`.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    auth_key: String,
    auth_key_id: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with auth key and auth key id.
    pub fn new(auth_key: &str, auth_key_id: &str) -> Self {
        Self {
            auth_key: auth_key.to_string(),
            auth_key_id: auth_key_id.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        _: &Context,
        _: Option<&str>,
    ) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(
            self.auth_key.clone(),
            self.auth_key_id.clone(),
        )))
    }
}
