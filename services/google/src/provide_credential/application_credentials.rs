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
use sheetclock_core::{Context, Error, ProvideCredential, Result};

use crate::constants::GOOGLE_APPLICATION_CREDENTIALS;
use crate::credential::{Credential, ServiceAccount};

/// ApplicationCredentialsProvider loads the JSON key file named by `GOOGLE_APPLICATION_CREDENTIALS`.
#[derive(Debug, Clone, Default)]
pub struct ApplicationCredentialsProvider {}

impl ApplicationCredentialsProvider {
    /// Create a new ApplicationCredentialsProvider.
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl ProvideCredential for ApplicationCredentialsProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(path) = ctx.env_var(GOOGLE_APPLICATION_CREDENTIALS) else {
            return Ok(None);
        };
        let path = ctx.expand_home_dir(&path).unwrap_or(path);

        debug!("loading credential from {GOOGLE_APPLICATION_CREDENTIALS}: {path}");
        let content = ctx.file_read(&path).await.map_err(|e| {
            Error::config_invalid(format!("failed to read credential file {path}")).with_source(e)
        })?;
        let sa = ServiceAccount::from_json(&content)?;
        Credential::from_service_account(sa).map(Some)
    }
}
