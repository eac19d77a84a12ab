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

use async_trait::async_trait;
use log::debug;
use sheetclock_core::{Context, ProvideCredential, Result};

use crate::config::{read_secrets_file, Config, SheetsConfig};
use crate::credential::Credential;

/// SecretsFileCredentialProvider loads the service account from the `[connections.gsheets]`
/// section of a secrets TOML file.
///
/// The file is looked up at `Config::secrets_path`, then `SHEETCLOCK_SECRETS_FILE`, then
/// `.streamlit/secrets.toml` and `~/.streamlit/secrets.toml`. A section without
/// service account fields provides nothing.
#[derive(Debug, Clone, Default)]
pub struct SecretsFileCredentialProvider {
    config: Config,
}

impl SecretsFileCredentialProvider {
    /// Create a new SecretsFileCredentialProvider.
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for SecretsFileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some((path, content)) = read_secrets_file(ctx, &self.config).await? else {
            debug!("no secrets file found");
            return Ok(None);
        };

        debug!("loading credential from secrets file {path}");
        let sheets = SheetsConfig::from_toml(&content)?;
        let Some(sa) = sheets.service_account else {
            debug!("secrets file {path} carries no service account");
            return Ok(None);
        };
        Credential::from_service_account(sa).map(Some)
    }
}
