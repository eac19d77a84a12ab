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

use log::debug;

use sheetclock_core::{Context, ProvideCredential, Result};

use crate::credential::{Credential, ServiceAccount};

/// StaticCredentialProvider loads a service account from content provided at construction time.
///
/// The content may be the JSON key file or the JSON key file encoded in base64.
#[derive(Clone)]
pub struct StaticCredentialProvider {
    content: String,
}

impl std::fmt::Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("content", &sheetclock_core::utils::Redact::from(&self.content))
            .finish()
    }
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider from JSON or base64 encoded JSON content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait::async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        debug!("loading credential from static content");

        let sa = ServiceAccount::from_content(&self.content)?;
        Credential::from_service_account(sa).map(Some)
    }
}
