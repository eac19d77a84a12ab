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

use crate::constants::*;
use crate::credential::{Credential, ServiceAccount};

/// EnvCredentialProvider loads a service account from environment variables.
///
/// `SHEETCLOCK_CREDENTIALS` holding the JSON key file (plain or base64) wins. Otherwise
/// the service account is assembled from:
/// - `SHEETCLOCK_CLIENT_EMAIL`
/// - `SHEETCLOCK_PRIVATE_KEY`
/// - `SHEETCLOCK_PROJECT_ID`
/// - `SHEETCLOCK_TOKEN_URI` (optional)
/// - `SHEETCLOCK_PRIVATE_KEY_ID` (optional)
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider {}

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        if let Some(content) = envs.get(SHEETCLOCK_CREDENTIALS) {
            debug!("loading credential from {SHEETCLOCK_CREDENTIALS}");
            let sa = ServiceAccount::from_content(content)?;
            return Credential::from_service_account(sa).map(Some);
        }

        let client_email = envs.get(SHEETCLOCK_CLIENT_EMAIL);
        let private_key = envs.get(SHEETCLOCK_PRIVATE_KEY);
        let project_id = envs.get(SHEETCLOCK_PROJECT_ID);

        match (client_email, private_key, project_id) {
            (Some(client_email), Some(private_key), Some(project_id)) => {
                debug!("loading credential from {SHEETCLOCK_CLIENT_EMAIL} and friends");
                let sa = ServiceAccount {
                    account_type: SERVICE_ACCOUNT_TYPE.to_string(),
                    project_id: project_id.clone(),
                    private_key: private_key.clone(),
                    client_email: client_email.clone(),
                    token_uri: envs
                        .get(SHEETCLOCK_TOKEN_URI)
                        .cloned()
                        .unwrap_or_else(|| DEFAULT_TOKEN_URI.to_string()),
                    private_key_id: envs.get(SHEETCLOCK_PRIVATE_KEY_ID).cloned(),
                    client_id: None,
                    auth_uri: None,
                    auth_provider_x509_cert_url: None,
                    client_x509_cert_url: None,
                };
                Credential::from_service_account(sa).map(Some)
            }
            _ => Ok(None),
        }
    }
}
