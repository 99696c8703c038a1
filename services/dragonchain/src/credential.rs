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

use std::fmt::{Debug, Formatter};

use dragonchain_core::{utils::Redact, SigningCredential};

/// Credential for dragonchain.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Auth key, the shared HMAC secret.
    pub auth_key: String,
    /// Auth key id, the public identifier of `auth_key`.
    pub auth_key_id: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(auth_key: impl Into<String>, auth_key_id: impl Into<String>) -> Self {
        Self {
            auth_key: auth_key.into(),
            auth_key_id: auth_key_id.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("auth_key", &Redact::from(&self.auth_key))
            .field("auth_key_id", &Redact::from(&self.auth_key_id))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.auth_key.is_empty() && !self.auth_key_id.is_empty()
    }
}
