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
use dragonchain_core::time::{format_iso8601, now};
use dragonchain_core::SigningRequest;
use http::Method;

use crate::algorithm::HmacAlgorithm;
use crate::constants::{API_DOMAIN, DEFAULT_CONTENT_TYPE, DEFAULT_SIGNATURE_VERSION};

/// Everything a dragonchain signature covers.
///
/// The timestamp is captured when the descriptor is built, so signing the
/// same descriptor twice always yields the same header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    url: String,
    endpoint_id: String,
    timestamp: String,
    content_type: String,
    body: Bytes,
    hmac_algorithm: HmacAlgorithm,
    version: String,
}

impl RequestDescriptor {
    /// Build a descriptor for `path` on the dragonchain named by `endpoint_id`.
    ///
    /// The url becomes `https://{endpoint_id}.api.dragonchain.com{path}` and
    /// the timestamp is the current time in ISO-8601 with milliseconds.
    pub fn new(
        method: Method,
        path: &str,
        endpoint_id: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Self {
        let endpoint_id = endpoint_id.into();

        Self {
            method,
            url: format!("https://{endpoint_id}.{API_DOMAIN}{path}"),
            endpoint_id,
            timestamp: format_iso8601(now()),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            body: body.into(),
            hmac_algorithm: HmacAlgorithm::default(),
            version: DEFAULT_SIGNATURE_VERSION.to_string(),
        }
    }

    /// Override the url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the timestamp.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Override the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Override the hmac algorithm.
    pub fn with_hmac_algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.hmac_algorithm = algorithm;
        self
    }

    /// Override the signature version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// HTTP method, upper-cased when signed.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Full request url.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Dragonchain id, also the credential lookup key.
    pub fn endpoint_id(&self) -> &str {
        &self.endpoint_id
    }

    /// Signing timestamp.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Content type.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw request body.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// HMAC algorithm.
    pub fn hmac_algorithm(&self) -> HmacAlgorithm {
        self.hmac_algorithm
    }

    /// Signature version, the `1` in `DC1-HMAC-sha256`.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl SigningRequest for RequestDescriptor {
    fn credential_scope(&self) -> Option<&str> {
        if self.endpoint_id.is_empty() {
            None
        } else {
            Some(&self.endpoint_id)
        }
    }
}
