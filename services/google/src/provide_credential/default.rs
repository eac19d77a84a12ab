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
use sheetclock_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use super::{
    ApplicationCredentialsProvider, EnvCredentialProvider, SecretsFileCredentialProvider,
    StaticCredentialProvider,
};
use crate::config::Config;
use crate::credential::Credential;

/// DefaultCredentialProvider tries every supported credential source in order.
///
/// 1. Content set via [`Config::with_credential_content`].
/// 2. `SHEETCLOCK_*` environment variables.
/// 3. The secrets file.
/// 4. `GOOGLE_APPLICATION_CREDENTIALS`.
///
/// Sources reading the environment are skipped when `disable_env` is set.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: Config) -> Self {
        let mut chain = ProvideCredentialChain::new();

        if let Some(content) = &config.credential_content {
            chain = chain.push(StaticCredentialProvider::new(content.clone()));
        }
        if !config.disable_env {
            chain = chain.push(EnvCredentialProvider::new());
        }
        chain = chain.push(SecretsFileCredentialProvider::new(config.clone()));
        if !config.disable_env {
            chain = chain.push(ApplicationCredentialsProvider::new());
        }

        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
