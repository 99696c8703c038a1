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
use dragonchain_core::{Context, Error, ErrorKind, ProvideCredential, Result};
use ini::{Ini, ParseOption};

use crate::constants::{AUTH_KEY, AUTH_KEY_ID, DRAGONCHAIN_CREDENTIALS_FILE};
use crate::credential::Credential;

/// FileCredentialProvider loads credential from the dragonchain credentials file.
///
/// The file lives at `~/.dragonchain/credentials` and holds one INI section
/// per endpoint id:
///
/// ```ini
/// [my-dragonchain-id]
/// authKeyId = ABCDEFGHIJKL
/// authKey = 0123456789abcdef
/// ```
///
/// Unlike the env provider this one never yields `None`: a missing file or
/// section is reported as [`ErrorKind::NotFound`].
#[derive(Debug, Default, Clone)]
pub struct FileCredentialProvider {
    credentials_file: Option<String>,
}

impl FileCredentialProvider {
    /// Create a new FileCredentialProvider reading the default file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path to the credentials file.
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    async fn load(&self, ctx: &Context, path: &str, endpoint_id: &str) -> Result<Credential> {
        let content = ctx.file_read_as_string(path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                Error::not_found(format!("credential file not found at \"{path}\"")).with_source(err)
            } else {
                unexpected(path).with_source(err)
            }
        })?;

        // Keys are opaque secrets, backslashes are kept as written.
        let opt = ParseOption {
            enabled_escape: false,
            ..Default::default()
        };
        let conf =
            Ini::load_from_str_opt(&content, opt).map_err(|e| unexpected(path).with_source(e))?;

        let missing =
            || Error::not_found(format!("credential file is missing a config for {endpoint_id}"));
        let props = conf.section(Some(endpoint_id)).ok_or_else(missing)?;

        match (props.get(AUTH_KEY), props.get(AUTH_KEY_ID)) {
            (Some(key), Some(id)) if !key.is_empty() && !id.is_empty() => {
                Ok(Credential::new(key, id))
            }
            _ => Err(missing()),
        }
    }
}

fn unexpected(path: &str) -> Error {
    Error::unexpected(format!(
        "something unexpected happened while looking for credentials at \"{path}\""
    ))
}

#[async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(
        &self,
        ctx: &Context,
        endpoint_id: Option<&str>,
    ) -> Result<Option<Self::Credential>> {
        let endpoint_id = match endpoint_id {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(Error::validation(
                    "\"endpoint_id\" can not be empty when checking dragonchain credential file",
                ))
            }
        };

        let path = self
            .credentials_file
            .as_deref()
            .unwrap_or(DRAGONCHAIN_CREDENTIALS_FILE);
        let path = ctx.expand_home_dir(path).ok_or_else(|| unexpected(path))?;

        self.load(ctx, &path, endpoint_id).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragonchain_core::StaticEnv;
    use dragonchain_file_read_tokio::TokioFileRead;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;

    fn ctx_with_home(home: &Path) -> Context {
        Context::new().with_file_read(TokioFileRead).with_env(StaticEnv {
            home_dir: Some(home.to_path_buf()),
            envs: Default::default(),
        })
    }

    fn write_credentials(home: &Path, content: &str) {
        let dir = home.join(".dragonchain");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("credentials"), content).unwrap();
    }

    #[tokio::test]
    async fn test_load_from_credentials_file() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        write_credentials(
            home.path(),
            "[banana]\nauthKeyId = fake-api-key-id\nauthKey = fake-api-key\n\n[apple]\nauthKeyId = other-id\nauthKey = other-key\n",
        );

        let cred = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await?;
        assert_eq!(
            cred,
            Some(Credential::new("fake-api-key", "fake-api-key-id"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_endpoint_id_is_validation_error() {
        // No file reader configured: touching the filesystem would be Unexpected.
        let ctx = Context::new().with_env(StaticEnv::default());

        for endpoint_id in [None, Some("")] {
            let err = FileCredentialProvider::new()
                .provide_credential(&ctx, endpoint_id)
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
            assert_eq!(
                err.to_string(),
                "\"endpoint_id\" can not be empty when checking dragonchain credential file"
            );
        }
    }

    #[tokio::test]
    async fn test_missing_file_names_the_path() {
        let home = tempfile::tempdir().unwrap();
        let path = home.path().join(".dragonchain").join("credentials");

        let err = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            format!("credential file not found at \"{}\"", path.to_string_lossy())
        );
    }

    #[tokio::test]
    async fn test_missing_section_names_the_endpoint_id() {
        let home = tempfile::tempdir().unwrap();
        write_credentials(home.path(), "[apple]\nauthKeyId = id\nauthKey = key\n");

        let err = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            err.to_string(),
            "credential file is missing a config for banana"
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_not_found() {
        let home = tempfile::tempdir().unwrap();
        write_credentials(home.path(), "[banana]\nauthKeyId = id\n");

        let err = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_unreadable_file_is_unexpected() {
        let home = tempfile::tempdir().unwrap();
        // A directory where the file should be.
        fs::create_dir_all(home.path().join(".dragonchain").join("credentials")).unwrap();
        let path = home.path().join(".dragonchain").join("credentials");

        let err = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(
            err.to_string(),
            format!(
                "something unexpected happened while looking for credentials at \"{}\"",
                path.to_string_lossy()
            )
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[tokio::test]
    async fn test_backslash_in_key_is_kept() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        write_credentials(
            home.path(),
            "[banana]\nauthKeyId = fake-api-key-id\nauthKey = ab\\cd;ef\n",
        );

        let cred = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await?;
        assert_eq!(cred, Some(Credential::new(r"ab\cd;ef", "fake-api-key-id")));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_unexpected() {
        let home = tempfile::tempdir().unwrap();
        let dir = home.path().join(".dragonchain");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("credentials"), [0xff, 0xfe, 0x00]).unwrap();

        let err = FileCredentialProvider::new()
            .provide_credential(&ctx_with_home(home.path()), Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[tokio::test]
    async fn test_with_credentials_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("creds.ini");
        fs::write(&path, "[banana]\nauthKeyId = id\nauthKey = key\n")?;

        let ctx = Context::new().with_file_read(TokioFileRead);
        let cred = FileCredentialProvider::new()
            .with_credentials_file(path.to_string_lossy())
            .provide_credential(&ctx, Some("banana"))
            .await?;
        assert_eq!(cred, Some(Credential::new("key", "id")));

        Ok(())
    }

    #[tokio::test]
    async fn test_without_home_dir_is_unexpected() {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv::default());

        let err = FileCredentialProvider::new()
            .provide_credential(&ctx, Some("banana"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }
}
