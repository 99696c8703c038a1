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

//! Reqwest-based HTTP sending implementation for the dragonchain SDK.

use async_trait::async_trait;
use bytes::Bytes;
use dragonchain_core::{Error, HttpSend, Result};
use http_body_util::BodyExt;
use reqwest::{Client, Request};

/// Reqwest-based implementation of the `HttpSend` trait.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend that verifies TLS certificates only when
    /// `verify` is true.
    pub fn with_verify(verify: bool) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(!verify)
            .build()
            .map_err(|e| Error::unexpected("failed to build http client").with_source(e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::validation("invalid http request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                Error::request(format!("error while communicating with the dragonchain: {e}"))
                    .with_source(e)
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::request("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_verify() {
        assert!(ReqwestHttpSend::with_verify(true).is_ok());
        assert!(ReqwestHttpSend::with_verify(false).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_request_is_validation_error() {
        // reqwest refuses urls without a scheme.
        let req = http::Request::builder()
            .uri("/transaction/banana")
            .body(Bytes::new())
            .unwrap();

        let err = ReqwestHttpSend::default().http_send(req).await.unwrap_err();
        assert_eq!(err.kind(), dragonchain_core::ErrorKind::Validation);
    }
}
