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

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /transaction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionCreatePayload {
    /// Transaction format version, `"1"` today.
    pub version: String,
    /// Registered transaction type this transaction belongs to.
    pub txn_type: String,
    /// Arbitrary JSON (or string) payload stored on chain.
    pub payload: Value,
    /// Optional searchable tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl TransactionCreatePayload {
    /// Create a version 1 payload without a tag.
    pub fn new(txn_type: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            version: "1".to_string(),
            txn_type: txn_type.into(),
            payload: payload.into(),
            tag: None,
        }
    }

    /// Set the tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}
