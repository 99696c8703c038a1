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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used by dragonchain.
pub const DRAGONCHAIN_AUTH_KEY: &str = "DRAGONCHAIN_AUTH_KEY";
pub const DRAGONCHAIN_AUTH_KEY_ID: &str = "DRAGONCHAIN_AUTH_KEY_ID";

// Credential file and its fields.
pub const DRAGONCHAIN_CREDENTIALS_FILE: &str = "~/.dragonchain/credentials";
pub const AUTH_KEY: &str = "authKey";
pub const AUTH_KEY_ID: &str = "authKeyId";

// Request defaults.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_SIGNATURE_VERSION: &str = "1";
pub const API_DOMAIN: &str = "api.dragonchain.com";

// Headers sent alongside the authorization header.
pub const X_DRAGONCHAIN: &str = "dragonchain";
pub const X_TIMESTAMP: &str = "timestamp";

pub const VALID_RUNTIMES: &[&str] = &[
    "nodejs6.10",
    "nodejs8.10",
    "java8",
    "python2.7",
    "python3.6",
    "dotnetcore1.0",
    "dotnetcore2.0",
    "dotnetcore2.1",
    "go1.x",
];

pub const VALID_SMART_CONTRACT_TYPES: &[&str] = &["transaction", "cron"];

/// AsciiSet for a single path segment such as a transaction or block id.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static PATH_SEGMENT_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
