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

//! Everything needed before the first spreadsheet call.

use log::debug;
use sheetclock_core::time::{self, DateTime};
use sheetclock_core::{Context, Error, ProvideCredential, Result};
use sheetclock_google::{Config, Credential, DefaultCredentialProvider, SheetsConfig, TokenRequest};

/// A resolved spreadsheet connection: where to write, as whom, and the signed
/// token request to exchange for an access token.
#[derive(Debug)]
pub struct Connection {
    /// Spreadsheet, worksheet tabs and timesheet offset from the secrets file.
    pub sheets: SheetsConfig,
    /// The credential the connection signs as.
    pub credential: Credential,
    /// Signed JWT bearer grant, ready to post to the token endpoint.
    pub token_request: TokenRequest,
}

/// Load the secrets file and credential described by `config`.
///
/// The credential is resolved through [`DefaultCredentialProvider`], so an
/// environment override wins over the key inlined in the secrets file, and a
/// secrets file naming only the spreadsheet can rely on the environment or
/// `GOOGLE_APPLICATION_CREDENTIALS`. Having no credential anywhere is a
/// configuration error.
pub async fn connect(ctx: &Context, config: &Config) -> Result<Connection> {
    connect_at(ctx, config, time::now()).await
}

/// [`connect`] with the assertion issued at `now`.
pub async fn connect_at(ctx: &Context, config: &Config, now: DateTime) -> Result<Connection> {
    let sheets = SheetsConfig::load(ctx, config).await?;
    let credential = DefaultCredentialProvider::new(config.clone())
        .provide_credential(ctx)
        .await?
        .ok_or_else(|| Error::config_invalid("no service account credential configured"))?;
    let token_request = TokenRequest::build(&credential, &config.scopes, now)?;

    debug!(
        "connected to spreadsheet {} as {}",
        sheets.spreadsheet.id(),
        credential.client_email()
    );
    Ok(Connection {
        sheets,
        credential,
        token_request,
    })
}
