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
use dragonchain_core::{Context, Error, Result, SignRequest, Signer};

use crate::credential::Credential;
use crate::provide_credential::DefaultCredentialProvider;
use crate::request::RequestDescriptor;

/// RequestSigner that implements dragonchain HMAC authorization.
///
/// The produced header looks like:
///
/// ```text
/// DC1-HMAC-sha256 {auth_key_id}:{signature}
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;
    type Request = RequestDescriptor;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &Self::Request,
        credential: Option<&Self::Credential>,
    ) -> Result<String> {
        let cred = credential.ok_or_else(|| Error::not_found("missing credential"))?;

        Ok(authorization_header(req, cred))
    }
}

/// Construct the message to sign.
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// URL + "\n" +
/// ENDPOINT_ID + "\n" +
/// TIMESTAMP + "\n" +
/// CONTENT_TYPE + "\n" +
/// BASE64(HASH(BODY))
/// ```
pub fn canonical_message(req: &RequestDescriptor) -> String {
    let digest = req.hmac_algorithm().base64_digest(req.body());

    [
        req.method().as_str().to_uppercase().as_str(),
        req.url(),
        req.endpoint_id(),
        req.timestamp(),
        req.content_type(),
        digest.as_str(),
    ]
    .join("\n")
}

/// Sign `req` with `cred` and format the authorization header value.
pub fn authorization_header(req: &RequestDescriptor, cred: &Credential) -> String {
    let algorithm = req.hmac_algorithm();
    let signature = algorithm.base64_hmac(
        cred.auth_key.as_bytes(),
        canonical_message(req).as_bytes(),
    );

    format!(
        "DC{}-HMAC-{} {}:{}",
        req.version(),
        algorithm,
        cred.auth_key_id,
        signature
    )
}

/// Resolve credentials through the default chain and sign `req`.
pub async fn sign_request(ctx: &Context, req: &RequestDescriptor) -> Result<String> {
    Signer::new(
        ctx.clone(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    )
    .sign(req)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragonchain_core::{ErrorKind, StaticEnv};
    use dragonchain_file_read_tokio::TokioFileRead;
    use http::Method;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use test_case::test_case;

    use crate::constants::{DRAGONCHAIN_AUTH_KEY, DRAGONCHAIN_AUTH_KEY_ID};

    fn descriptor(
        method: Method,
        url: &str,
        endpoint_id: &str,
        timestamp: &str,
        content_type: &str,
        body: &'static str,
    ) -> RequestDescriptor {
        RequestDescriptor::new(method, "/", endpoint_id, body)
            .with_url(url)
            .with_timestamp(timestamp)
            .with_content_type(content_type)
    }

    fn fake_descriptor() -> RequestDescriptor {
        descriptor(
            Method::GET,
            "http.fake.org",
            "fake-dcid",
            "fake-imestamp",
            "fakeContentType",
            "hi!",
        )
    }

    #[test]
    fn test_canonical_message() {
        assert_eq!(
            canonical_message(&fake_descriptor()),
            "GET\nhttp.fake.org\nfake-dcid\nfake-imestamp\nfakeContentType\nwN3WLHcXGA5/+4oVu5Z00+ySWS4LesfR1SiYNrRVO+I="
        );
    }

    #[test]
    fn test_canonical_message_uppercases_method() {
        let req = descriptor(
            Method::from_bytes(b"get").unwrap(),
            "http.fake.org",
            "fake-dcid",
            "fake-imestamp",
            "fakeContentType",
            "hi!",
        );

        assert_eq!(canonical_message(&req), canonical_message(&fake_descriptor()));
    }

    #[test_case("fake-api-key", "fake-api-key-id", "DC1-HMAC-sha256 fake-api-key-id:dKRbNGk1QxbSHLL4J3kbIBcsE/7Al8BdDyb8o3Mxt9s=" ; "fake api key")]
    #[test_case("api-key", "api-key-id", "DC1-HMAC-sha256 api-key-id:KUOpLFDyk+AhFmEg6n2e8RMC8yNlDaMMtkC5rC8hXLI=" ; "api key")]
    fn test_authorization_header(auth_key: &str, auth_key_id: &str, expected: &str) {
        let cred = Credential::new(auth_key, auth_key_id);

        assert_eq!(authorization_header(&fake_descriptor(), &cred), expected);
    }

    #[test]
    fn test_authorization_header_is_deterministic() {
        let cred = Credential::new("fake-api-key", "fake-api-key-id");
        let req = fake_descriptor();

        assert_eq!(
            authorization_header(&req, &cred),
            authorization_header(&req.clone(), &cred)
        );
    }

    #[test_case(Method::POST, "http.fake.org", "fake-dcid", "fake-imestamp", "fakeContentType", "hi!" ; "method")]
    #[test_case(Method::GET, "http.other.org", "fake-dcid", "fake-imestamp", "fakeContentType", "hi!" ; "url")]
    #[test_case(Method::GET, "http.fake.org", "other-dcid", "fake-imestamp", "fakeContentType", "hi!" ; "endpoint id")]
    #[test_case(Method::GET, "http.fake.org", "fake-dcid", "other-timestamp", "fakeContentType", "hi!" ; "timestamp")]
    #[test_case(Method::GET, "http.fake.org", "fake-dcid", "fake-imestamp", "application/json", "hi!" ; "content type")]
    #[test_case(Method::GET, "http.fake.org", "fake-dcid", "fake-imestamp", "fakeContentType", "bye!" ; "body")]
    #[test_case(Method::GET, "http.fake.org", "fake-dcid", "fake-imestamp", "fakeContentType", "" ; "empty body")]
    fn test_every_field_is_signed(
        method: Method,
        url: &str,
        endpoint_id: &str,
        timestamp: &str,
        content_type: &str,
        body: &'static str,
    ) {
        let cred = Credential::new("fake-api-key", "fake-api-key-id");
        let changed = descriptor(method, url, endpoint_id, timestamp, content_type, body);

        assert_ne!(
            authorization_header(&changed, &cred),
            authorization_header(&fake_descriptor(), &cred)
        );
    }

    #[tokio::test]
    async fn test_sign_request_with_env_credential() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: HashMap::from([
                (DRAGONCHAIN_AUTH_KEY.to_string(), "fake-api-key".to_string()),
                (
                    DRAGONCHAIN_AUTH_KEY_ID.to_string(),
                    "fake-api-key-id".to_string(),
                ),
            ]),
        });

        let header = sign_request(&ctx, &fake_descriptor()).await?;
        assert_eq!(
            header,
            "DC1-HMAC-sha256 fake-api-key-id:dKRbNGk1QxbSHLL4J3kbIBcsE/7Al8BdDyb8o3Mxt9s="
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_credential_file_is_read_on_every_sign() -> anyhow::Result<()> {
        let home = tempfile::tempdir()?;
        let dir = home.path().join(".dragonchain");
        std::fs::create_dir_all(&dir)?;
        std::fs::write(
            dir.join("credentials"),
            "[fake-dcid]\nauthKeyId = fake-api-key-id\nauthKey = fake-api-key\n",
        )?;

        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_env(StaticEnv {
                home_dir: Some(home.path().to_path_buf()),
                envs: HashMap::new(),
            });
        let signer = Signer::new(ctx.clone(), DefaultCredentialProvider::new(), RequestSigner);
        let req = fake_descriptor();

        let first = sign_request(&ctx, &req).await?;
        assert_eq!(first, signer.sign(&req).await?);
        assert_eq!(
            first,
            "DC1-HMAC-sha256 fake-api-key-id:dKRbNGk1QxbSHLL4J3kbIBcsE/7Al8BdDyb8o3Mxt9s="
        );

        std::fs::write(
            dir.join("credentials"),
            "[fake-dcid]\nauthKeyId = api-key-id\nauthKey = api-key\n",
        )?;

        let expected = "DC1-HMAC-sha256 api-key-id:KUOpLFDyk+AhFmEg6n2e8RMC8yNlDaMMtkC5rC8hXLI=";
        assert_eq!(sign_request(&ctx, &req).await?, expected);
        assert_eq!(signer.sign(&req).await?, expected);

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_without_endpoint_id() {
        let ctx = Context::new().with_env(StaticEnv::default());
        let req = descriptor(
            Method::GET,
            "http.fake.org",
            "",
            "fake-imestamp",
            "fakeContentType",
            "hi!",
        );

        let err = sign_request(&ctx, &req).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_sign_request_without_credential() {
        let err = RequestSigner
            .sign_request(&Context::new(), &fake_descriptor(), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
