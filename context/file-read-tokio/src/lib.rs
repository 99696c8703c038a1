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

//! Tokio-based file reading implementation for the dragonchain SDK.
//!
//! This crate provides `TokioFileRead`, an async file reader that implements
//! the `FileRead` trait from `dragonchain_core` using Tokio's file system operations.
//!
//! ## Example
//!
//! ```no_run
//! use dragonchain_core::{Context, OsEnv};
//! use dragonchain_file_read_tokio::TokioFileRead;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     match ctx.file_read("/home/sally/.dragonchain/credentials").await {
//!         Ok(content) => println!("Read {} bytes", content.len()),
//!         Err(e) => eprintln!("Failed to read file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use dragonchain_core::{Error, FileRead, Result};
use std::io::ErrorKind;

/// Tokio-based implementation of the `FileRead` trait.
///
/// A missing file is reported as [`dragonchain_core::ErrorKind::NotFound`],
/// every other failure as [`dragonchain_core::ErrorKind::Unexpected`].
/// The file handle is closed before the call returns on every path.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::not_found(format!("file not found at \"{path}\"")).with_source(e)
            } else {
                Error::unexpected(format!("failed to read file \"{path}\"")).with_source(e)
            }
        })
    }
}
