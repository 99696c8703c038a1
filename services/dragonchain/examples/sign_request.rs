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

//! Sign a request for a dragonchain and print the headers it would carry.
//!
//! ```shell
//! DRAGONCHAIN_AUTH_KEY=... DRAGONCHAIN_AUTH_KEY_ID=... \
//!     cargo run --example sign_request -- my-dragonchain-id
//! ```

use dragonchain_core::{Context, OsEnv, Result};
use dragonchain_file_read_tokio::TokioFileRead;
use dragonchain_sdk::{canonical_message, sign_request, RequestDescriptor};
use http::Method;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let endpoint_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "my-dragonchain-id".to_string());

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let req = RequestDescriptor::new(Method::GET, "/transaction/banana", endpoint_id, "");

    let authorization = sign_request(&ctx, &req).await?;

    println!("{} {}", req.method(), req.url());
    println!("message:\n{}\n", canonical_message(&req));
    println!("Authorization: {authorization}");
    println!("timestamp: {}", req.timestamp());

    Ok(())
}
