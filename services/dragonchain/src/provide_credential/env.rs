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

use crate::constants::{DRAGONCHAIN_AUTH_KEY, DRAGONCHAIN_AUTH_KEY_ID};
use crate::credential::Credential;

/// EnvCredentialProvider loads credential from environment variables.
///
/// Both `DRAGONCHAIN_AUTH_KEY` and `DRAGONCHAIN_AUTH_KEY_ID` must be set and
/// non-empty. The endpoint id is ignored: the same pair is used for every
/// dragonchain.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        ctx: &Context,
        _: Option<&str>,
    ) -> Result<Option<Self::Credential>> {
        let auth_key = ctx.env_var(DRAGONCHAIN_AUTH_KEY);
        let auth_key_id = ctx.env_var(DRAGONCHAIN_AUTH_KEY_ID);

        match (auth_key, auth_key_id) {
            (Some(key), Some(id)) if !key.is_empty() && !id.is_empty() => {
                Ok(Some(Credential::new(key, id)))
            }
            _ => Ok(None),
        }
    }
}
