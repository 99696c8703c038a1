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

use bytes::Bytes;
use dragonchain_core::{Context, Error, OsEnv, ProvideCredential, Result, Signer};
use dragonchain_file_read_tokio::TokioFileRead;
use dragonchain_http_send_reqwest::ReqwestHttpSend;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method, StatusCode};
use log::debug;
use percent_encoding::utf8_percent_encode;
use serde_json::Value;

use crate::constants::*;
use crate::credential::Credential;
use crate::provide_credential::DefaultCredentialProvider;
use crate::request::RequestDescriptor;
use crate::sign_request::RequestSigner;
use crate::types::TransactionCreatePayload;

/// HTTP client for the dragonchain REST api.
///
/// Every call builds a fresh [`RequestDescriptor`], resolves credentials for
/// the current endpoint id and signs it before sending.
#[derive(Debug, Clone)]
pub struct Client {
    endpoint_id: String,
    verify: bool,
    signer: Signer<Credential, RequestDescriptor>,
}

impl Client {
    /// Create a client backed by the OS environment, tokio file reads and
    /// reqwest.
    ///
    /// TLS certificates are only verified when `verify` is true.
    pub fn new(endpoint_id: impl Into<String>, verify: bool) -> Result<Self> {
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_http_send(ReqwestHttpSend::with_verify(verify)?)
            .with_env(OsEnv);

        let mut client = Self::from_context(endpoint_id, ctx);
        client.verify = verify;
        Ok(client)
    }

    /// Create a client on top of an existing context.
    ///
    /// Certificate verification is whatever the context's `HttpSend` does.
    pub fn from_context(endpoint_id: impl Into<String>, ctx: Context) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            verify: true,
            signer: Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new()),
        }
    }

    /// Replace the credential provider, e.g. with a
    /// [`StaticCredentialProvider`](crate::StaticCredentialProvider).
    pub fn with_credential_provider(
        mut self,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        self.signer = self.signer.with_credential_provider(provider);
        self
    }

    /// Dragonchain id requests are sent to.
    pub fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    /// Point the client at another dragonchain.
    pub fn set_endpoint_id(&mut self, endpoint_id: impl Into<String>) {
        self.endpoint_id = endpoint_id.into();
    }

    /// Whether TLS certificates are verified.
    pub fn verify(&self) -> bool {
        self.verify
    }

    /// `GET /transaction/{id}`
    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Value> {
        self.get(&format!("/transaction/{}", encode_segment(transaction_id)))
            .await
    }

    /// `GET /block/{id}`
    pub async fn get_block(&self, block_id: &str) -> Result<Value> {
        self.get(&format!("/block/{}", encode_segment(block_id))).await
    }

    /// `GET /smartcontract/{name}`
    pub async fn get_smart_contract(&self, contract_name: &str) -> Result<Value> {
        self.get(&format!("/smartcontract/{}", encode_segment(contract_name)))
            .await
    }

    /// `POST /transaction`
    pub async fn post_transaction(&self, transaction: &TransactionCreatePayload) -> Result<Value> {
        let body = serde_json::to_vec(transaction)?;
        self.send(Method::POST, "/transaction", body.into()).await
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.send(Method::GET, path, Bytes::new()).await
    }

    async fn send(&self, method: Method, path: &str, body: Bytes) -> Result<Value> {
        let descriptor =
            RequestDescriptor::new(method.clone(), path, self.endpoint_id.as_str(), body.clone());
        let authorization = self.signer.sign(&descriptor).await?;

        let mut authorization = HeaderValue::from_str(&authorization)?;
        authorization.set_sensitive(true);

        let req = http::Request::builder()
            .method(method.clone())
            .uri(descriptor.url())
            .header(CONTENT_TYPE, descriptor.content_type())
            .header(AUTHORIZATION, authorization)
            .header(X_DRAGONCHAIN, descriptor.endpoint_id())
            .header(X_TIMESTAMP, descriptor.timestamp())
            .body(body)?;

        debug!("[{method}] => {}", descriptor.url());
        let resp = self.signer.context().http_send(req).await?;
        debug!("[{method}] <= {} {}", descriptor.url(), resp.status());

        parse_response(resp.status(), resp.body())
    }
}

fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, &PATH_SEGMENT_ENCODE_SET).to_string()
}

fn parse_response(status: StatusCode, body: &[u8]) -> Result<Value> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(Value::Null);
        }
        return serde_json::from_slice(body).map_err(|e| {
            Error::unexpected("failed to parse dragonchain response").with_source(e)
        });
    }

    let message = String::from_utf8_lossy(body).to_string();
    Err(match status {
        StatusCode::UNAUTHORIZED => Error::unauthorized(message),
        StatusCode::FORBIDDEN => Error::token_invalid(message),
        StatusCode::NOT_FOUND => Error::not_found(message),
        StatusCode::CONFLICT => Error::already_claimed(message),
        StatusCode::INTERNAL_SERVER_ERROR => Error::generic(message),
        _ => Error::request(format!(
            "error while communicating with the dragonchain: status={status}, body={message}"
        )),
    })
}

/// Check if `runtime` is a smart contract runtime dragonchain accepts.
pub fn is_valid_runtime(runtime: &str) -> bool {
    VALID_RUNTIMES.contains(&runtime)
}

/// Check if `smart_contract_type` is `transaction` or `cron`.
pub fn is_valid_smart_contract_type(smart_contract_type: &str) -> bool {
    VALID_SMART_CONTRACT_TYPES.contains(&smart_contract_type)
}
