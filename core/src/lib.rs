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

//! Core components for loading spreadsheet service credentials.
//!
//! This crate provides the foundational types and traits shared by the sheetclock crates.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **Traits**: [`ProvideCredential`] loads a credential, [`SigningCredential`] validates it
//! - **Chain**: [`ProvideCredentialChain`] tries several providers in order
//!
//! ## Example
//!
//! ```no_run
//! use sheetclock_core::{Context, ProvideCredential, Result, SigningCredential, StaticEnv};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     email: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.email.is_empty()
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
//!     async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(ctx.env_var("MY_EMAIL").map(|email| MyCredential { email }))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_env(StaticEnv::default());
//! let cred = MyProvider.provide_credential(&ctx).await?;
//! assert!(cred.is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: base64 and digest helpers
//! - [`time`]: time helpers built on chrono
//! - [`utils`]: data redaction for logs

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, FileRead, NoopEnv, NoopFileRead, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SigningCredential};
