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

//! Time-clock and leave tracking on top of a spreadsheet shared with a Google
//! service account.
//!
//! - [`google`] loads and repairs service account credentials.
//! - [`connect`] resolves the secrets file and credential into a [`Connection`].
//! - [`attendance`], [`leave`] and [`hangul`] hold the per-request domain logic.
//!
//! ```no_run
//! use sheetclock::google::Config;
//!
//! # async fn example() {
//! let ctx = sheetclock::default_context();
//! match sheetclock::connect(&ctx, &Config::from_env(&ctx)).await {
//!     Ok(conn) => println!("writing to {}", conn.sheets.spreadsheet.id()),
//!     Err(e) => eprintln!("{}", e.to_user_message()),
//! }
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use sheetclock_core::*;

pub mod google {
    pub use sheetclock_google::*;
}

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

mod connection;
pub use connection::{connect, connect_at, Connection};

pub mod attendance;
pub mod hangul;
pub mod leave;
