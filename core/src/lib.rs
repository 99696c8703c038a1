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

//! Core components for signing dragonchain API requests.
//!
//! This crate provides the foundational types and traits of the SDK.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for file reading, HTTP sending, and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that resolves a credential for a request and signs it
//!
//! ## Example
//!
//! ```no_run
//! use dragonchain_core::{Context, ProvideCredential, Result, SignRequest, Signer};
//! use dragonchain_core::{SigningCredential, SigningRequest};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     secret: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyRequest {
//!     scope: String,
//! }
//!
//! impl SigningRequest for MyRequest {
//!     fn credential_scope(&self) -> Option<&str> {
//!         Some(&self.scope)
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(
//!         &self,
//!         _: &Context,
//!         _: Option<&str>,
//!     ) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             secret: "my-secret".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!     type Request = MyRequest;
//!
//!     async fn sign_request(
//!         &self,
//!         _: &Context,
//!         req: &Self::Request,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<String> {
//!         let cred = cred.expect("signer only calls with a valid credential");
//!         Ok(format!("{}:{}", req.scope, cred.secret.len()))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MyBuilder);
//! let header = signer
//!     .sign(&MyRequest {
//!         scope: "my-dragonchain".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable and home directory access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SignRequest`]: For computing service-specific signatures
//! - [`SigningCredential`]: For validating credentials
//! - [`SigningRequest`]: For requests that know which credential they need

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileRead;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopFileRead;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential, SigningRequest};
mod chain;
pub use chain::ProvideCredentialChain;
mod signer;
pub use signer::Signer;
