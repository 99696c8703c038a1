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

use std::fmt;
use std::str::FromStr;

use dragonchain_core::hash::{base64_hmac_sha256, base64_sha256};
use dragonchain_core::Error;

/// HMAC algorithm used to sign requests.
///
/// The same algorithm family hashes the request body, so adding a variant
/// means providing both its digest and its HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum HmacAlgorithm {
    /// HMAC-SHA256, the only algorithm dragonchain accepts today.
    #[default]
    Sha256,
}

impl HmacAlgorithm {
    /// Name used on the wire, e.g. `DC1-HMAC-sha256`.
    pub fn as_str(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha256 => "sha256",
        }
    }

    /// Base64 encoded digest of `content`.
    pub fn base64_digest(&self, content: &[u8]) -> String {
        match self {
            HmacAlgorithm::Sha256 => base64_sha256(content),
        }
    }

    /// Base64 encoded HMAC of `content` keyed by `key`.
    pub fn base64_hmac(&self, key: &[u8], content: &[u8]) -> String {
        match self {
            HmacAlgorithm::Sha256 => base64_hmac_sha256(key, content),
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("sha256") {
            Ok(HmacAlgorithm::Sha256)
        } else {
            Err(Error::validation(format!("unsupported hmac algorithm: {s}")))
        }
    }
}
