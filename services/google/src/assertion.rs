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

use jsonwebtoken::{Algorithm, Header};
use log::debug;
use serde::Serialize;
use sheetclock_core::time::DateTime;
use sheetclock_core::{Error, Result, SigningCredential};

use crate::constants::ASSERTION_LIFETIME_SECS;
use crate::credential::Credential;

/// Claims is used to build JWT for Google OAuth2.
#[derive(Debug, Serialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    exp: u64,
    iat: u64,
}

impl Claims {
    fn new(cred: &Credential, scopes: &[String], now: DateTime) -> Self {
        let current = now.timestamp().max(0) as u64;

        Claims {
            iss: cred.service_account.client_email.clone(),
            scope: scopes.join(" "),
            aud: cred.service_account.token_uri.clone(),
            exp: current + ASSERTION_LIFETIME_SECS,
            iat: current,
        }
    }
}

/// TokenRequest is a signed assertion ready to be exchanged for an access token.
#[derive(Clone)]
pub struct TokenRequest {
    token_uri: String,
    assertion: String,
}

impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("token_uri", &self.token_uri)
            .field(
                "assertion",
                &sheetclock_core::utils::Redact::from(&self.assertion),
            )
            .finish()
    }
}

impl TokenRequest {
    /// Sign an RS256 assertion for `scopes` with the credential's private key.
    pub fn build(cred: &Credential, scopes: &[String], now: DateTime) -> Result<Self> {
        if scopes.is_empty() {
            return Err(Error::config_invalid("at least one scope is required"));
        }
        if !cred.is_valid() {
            return Err(Error::credential_invalid(
                "credential has no client email or private key",
            ));
        }
        debug!(
            "signing assertion for {} with scopes: {}",
            cred.client_email(),
            scopes.join(" ")
        );

        let mut header = Header::new(Algorithm::RS256);
        header.kid = cred.service_account.private_key_id.clone();

        let assertion = jsonwebtoken::encode(
            &header,
            &Claims::new(cred, scopes, now),
            &cred.private_key.encoding_key()?,
        )
        .map_err(|e| Error::credential_invalid("failed to sign assertion").with_source(e))?;

        Ok(Self {
            token_uri: cred.service_account.token_uri.clone(),
            assertion,
        })
    }

    /// Endpoint the assertion is posted to.
    pub fn token_uri(&self) -> &str {
        &self.token_uri
    }

    /// The signed JWT.
    pub fn assertion(&self) -> &str {
        &self.assertion
    }

    /// Content type of [`TokenRequest::form_body`].
    pub fn content_type(&self) -> &'static str {
        "application/x-www-form-urlencoded"
    }

    /// Form body of the token request.
    ///
    /// JWTs only contain url-safe characters, so the assertion is sent as is.
    pub fn form_body(&self) -> String {
        format!(
            "grant_type=urn:ietf:params:oauth:grant-type:jwt-bearer&assertion={}",
            self.assertion
        )
    }
}
