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
use dragonchain_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::credential::Credential;
use crate::provide_credential::{EnvCredentialProvider, FileCredentialProvider};

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Environment variables (`DRAGONCHAIN_AUTH_KEY`, `DRAGONCHAIN_AUTH_KEY_ID`)
/// 2. The credentials file (`~/.dragonchain/credentials`), keyed by endpoint id
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
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(FileCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dragonchain_sdk::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("auth_key", "auth_key_id"));
    /// ```
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        ctx: &Context,
        endpoint_id: Option<&str>,
    ) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx, endpoint_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::provide_credential::StaticCredentialProvider;
    use dragonchain_core::{ErrorKind, StaticEnv};
    use dragonchain_file_read_tokio::TokioFileRead;
    use std::collections::HashMap;
    use std::fs;

    #[tokio::test]
    async fn test_default_loader_with_env_and_no_file() {
        let home = tempfile::tempdir().unwrap();
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: Some(home.path().to_path_buf()),
                envs: HashMap::from_iter([
                    (DRAGONCHAIN_AUTH_KEY.to_string(), "auth_key".to_string()),
                    (DRAGONCHAIN_AUTH_KEY_ID.to_string(), "auth_key_id".to_string()),
                ]),
            });

        let loader = DefaultCredentialProvider::new();
        let credential = loader
            .provide_credential(&ctx, Some("banana"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!("auth_key", credential.auth_key);
        assert_eq!("auth_key_id", credential.auth_key_id);
    }

    #[tokio::test]
    async fn test_default_loader_env_wins_over_file() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(home.path().join(".dragonchain")).unwrap();
        fs::write(
            home.path().join(".dragonchain/credentials"),
            "[banana]\nauthKeyId = file_id\nauthKey = file_key\n",
        )
        .unwrap();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: Some(home.path().to_path_buf()),
                envs: HashMap::from_iter([
                    (DRAGONCHAIN_AUTH_KEY.to_string(), "env_key".to_string()),
                    (DRAGONCHAIN_AUTH_KEY_ID.to_string(), "env_id".to_string()),
                ]),
            });

        let credential = DefaultCredentialProvider::new()
            .provide_credential(&ctx, Some("banana"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!("env_key", credential.auth_key);
    }

    #[tokio::test]
    async fn test_default_loader_falls_back_to_file() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir_all(home.path().join(".dragonchain")).unwrap();
        fs::write(
            home.path().join(".dragonchain/credentials"),
            "[banana]\nauthKeyId = file_id\nauthKey = file_key\n",
        )
        .unwrap();

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: Some(home.path().to_path_buf()),
                envs: HashMap::new(),
            });

        let credential = DefaultCredentialProvider::new()
            .provide_credential(&ctx, Some("banana"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!("file_key", credential.auth_key);
        assert_eq!("file_id", credential.auth_key_id);
    }

    #[tokio::test]
    async fn test_default_loader_without_env_or_endpoint_id() {
        let ctx = Context::new().with_env(StaticEnv::default());

        let err = DefaultCredentialProvider::new()
            .provide_credential(&ctx, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_push_front() {
        let ctx = Context::new().with_env(StaticEnv::default());

        let credential = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("static_key", "static_id"))
            .provide_credential(&ctx, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!("static_key", credential.auth_key);
    }
}
