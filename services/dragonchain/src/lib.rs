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

//! Dragonchain API client and request signing.
//!
//! ## Example
//!
//! ```no_run
//! use dragonchain_sdk::{Client, TransactionCreatePayload};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> dragonchain_core::Result<()> {
//!     // Credentials come from DRAGONCHAIN_AUTH_KEY / DRAGONCHAIN_AUTH_KEY_ID,
//!     // or from the [my-dragonchain-id] section of ~/.dragonchain/credentials.
//!     let client = Client::new("my-dragonchain-id", true)?;
//!
//!     let created = client
//!         .post_transaction(&TransactionCreatePayload::new("banana", json!({"hello": "world"})))
//!         .await?;
//!     let txn = client
//!         .get_transaction(created["transaction_id"].as_str().unwrap_or_default())
//!         .await?;
//!     println!("{txn}");
//!
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::{DRAGONCHAIN_AUTH_KEY, DRAGONCHAIN_AUTH_KEY_ID};

mod algorithm;
pub use algorithm::HmacAlgorithm;

mod credential;
pub use credential::Credential;

mod request;
pub use request::RequestDescriptor;

mod sign_request;
pub use sign_request::{authorization_header, canonical_message, sign_request, RequestSigner};

mod provide_credential;
pub use provide_credential::*;

mod types;
pub use types::TransactionCreatePayload;

mod client;
pub use client::{is_valid_runtime, is_valid_smart_contract_type, Client};
