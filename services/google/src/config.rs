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

use std::fmt::{self, Debug};

use chrono::FixedOffset;
use log::debug;
use serde::Deserialize;
use sheetclock_core::time::offset_from_minutes;
use sheetclock_core::utils::Redact;
use sheetclock_core::{Context, Error, Result};

use crate::constants::*;
use crate::credential::ServiceAccount;

/// Config decides where credentials are looked up and which scopes they are used for.
#[derive(Clone)]
pub struct Config {
    /// Secrets file path.
    pub secrets_path: Option<String>,
    /// Service account content, JSON or base64 encoded JSON.
    pub credential_content: Option<String>,
    /// OAuth2 scopes requested by assertions.
    pub scopes: Vec<String>,
    /// Disable reading from environment variables.
    pub disable_env: bool,
    /// Disable reading from well-known locations.
    pub disable_well_known_location: bool,
}

impl Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("secrets_path", &self.secrets_path)
            .field("credential_content", &Redact::from(&self.credential_content))
            .field("scopes", &self.scopes)
            .field("disable_env", &self.disable_env)
            .field("disable_well_known_location", &self.disable_well_known_location)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            secrets_path: None,
            credential_content: None,
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            disable_env: false,
            disable_well_known_location: false,
        }
    }
}

impl Config {
    /// Create a new config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set secrets file path.
    pub fn with_secrets_path(mut self, path: impl Into<String>) -> Self {
        self.secrets_path = Some(path.into());
        self
    }

    /// Set credential content.
    pub fn with_credential_content(mut self, content: impl Into<String>) -> Self {
        self.credential_content = Some(content.into());
        self
    }

    /// Replace the OAuth2 scopes.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Disable reading from environment variables.
    pub fn with_disable_env(mut self) -> Self {
        self.disable_env = true;
        self
    }

    /// Disable reading from well-known locations.
    pub fn with_disable_well_known_location(mut self) -> Self {
        self.disable_well_known_location = true;
        self
    }

    /// Load config from environment variables.
    ///
    /// `SHEETCLOCK_SCOPES` accepts scopes separated by commas or whitespace.
    pub fn from_env(ctx: &Context) -> Self {
        let mut cfg = Self::default();

        if let Some(v) = ctx.env_var(SHEETCLOCK_SECRETS_FILE) {
            cfg.secrets_path = Some(v);
        }

        if let Some(v) = ctx.env_var(SHEETCLOCK_SCOPES) {
            let scopes: Vec<String> = v
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !scopes.is_empty() {
                cfg.scopes = scopes;
            }
        }

        cfg
    }
}

/// Reference to the spreadsheet that backs the timesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpreadsheetRef {
    /// A bare spreadsheet id.
    Id(String),
    /// A spreadsheet URL and the id extracted from it.
    Url {
        /// The URL as configured.
        url: String,
        /// The id found in the URL.
        id: String,
    },
}

impl SpreadsheetRef {
    /// Parse a spreadsheet URL or id.
    ///
    /// URLs must contain a `/spreadsheets/d/<id>` segment.
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::config_invalid("spreadsheet must not be empty"));
        }

        if value.starts_with("https://") || value.starts_with("http://") {
            let id = value
                .split_once("/spreadsheets/d/")
                .map(|(_, rest)| {
                    rest.split(['/', '?', '#'])
                        .next()
                        .unwrap_or_default()
                })
                .filter(|id| is_valid_id(id))
                .ok_or_else(|| {
                    Error::config_invalid(format!("spreadsheet url '{value}' has no document id"))
                })?;
            return Ok(Self::Url {
                url: value.to_string(),
                id: id.to_string(),
            });
        }

        if !is_valid_id(value) {
            return Err(Error::config_invalid(format!(
                "spreadsheet id '{value}' contains invalid characters"
            )));
        }
        Ok(Self::Id(value.to_string()))
    }

    /// The spreadsheet id.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Url { id, .. } => id,
        }
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Names of the worksheet tabs the timesheet reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorksheetNames {
    /// Tab listing employees and their leave allowance.
    pub employees: String,
    /// Tab receiving clock-in/clock-out rows.
    pub attendance: String,
    /// Tab receiving leave requests.
    pub leave: String,
}

impl Default for WorksheetNames {
    fn default() -> Self {
        Self {
            employees: "employees".to_string(),
            attendance: "attendance".to_string(),
            leave: "leave".to_string(),
        }
    }
}

/// Inline keys that mark the section as carrying a service account.
const SERVICE_ACCOUNT_FIELDS: &[&str] = &[
    "type",
    "project_id",
    "private_key_id",
    "private_key",
    "client_email",
    "client_id",
    "token_uri",
];

#[derive(Deserialize)]
struct SecretsFile {
    connections: Connections,
}

#[derive(Deserialize)]
struct Connections {
    gsheets: GsheetsSection,
}

#[derive(Deserialize)]
struct GsheetsSection {
    spreadsheet: Option<String>,
    spreadsheet_id: Option<String>,
    #[serde(default)]
    worksheets: WorksheetNames,
    utc_offset_minutes: Option<i32>,
    service_account_json: Option<String>,
    service_account_base64: Option<String>,
    #[serde(flatten)]
    fields: toml::Table,
}

/// SheetsConfig is the validated content of the `[connections.gsheets]` secrets section.
#[derive(Clone, Debug)]
pub struct SheetsConfig {
    /// The backing spreadsheet.
    pub spreadsheet: SpreadsheetRef,
    /// Worksheet tab names.
    pub worksheets: WorksheetNames,
    /// Offset of the wall clock timesheets are kept in.
    pub utc_offset: FixedOffset,
    /// The service account inlined in the secrets, private key not yet normalized.
    ///
    /// `None` when the section carries no credential; one must then come from
    /// the environment or application default credentials.
    pub service_account: Option<ServiceAccount>,
}

impl SheetsConfig {
    /// Parse and validate a secrets TOML document.
    ///
    /// The service account is taken from `service_account_json`, then
    /// `service_account_base64`, then from the fields inlined in the section.
    /// A section without any of them has no service account; a partial set of
    /// inline fields is rejected.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: SecretsFile = toml::from_str(content).map_err(|e| {
            Error::config_invalid("failed to parse [connections.gsheets] secrets").with_source(e)
        })?;
        let section = file.connections.gsheets;

        let spreadsheet = section
            .spreadsheet
            .or(section.spreadsheet_id)
            .ok_or_else(|| Error::config_invalid("spreadsheet is required"))?;
        let spreadsheet = SpreadsheetRef::parse(&spreadsheet)?;

        let utc_offset = offset_from_minutes(
            section
                .utc_offset_minutes
                .unwrap_or(DEFAULT_UTC_OFFSET_MINUTES),
        )?;

        let service_account = if let Some(json) = section.service_account_json {
            debug!("service account given as json blob");
            Some(ServiceAccount::from_json(json.as_bytes())?)
        } else if let Some(encoded) = section.service_account_base64 {
            debug!("service account given as base64 json");
            Some(ServiceAccount::from_base64_json(&encoded)?)
        } else if SERVICE_ACCOUNT_FIELDS
            .iter()
            .any(|k| section.fields.contains_key(*k))
        {
            debug!("service account given as inline fields");
            let sa = toml::Value::Table(section.fields)
                .try_into::<ServiceAccount>()
                .map_err(|e| {
                    Error::config_invalid("incomplete service account fields").with_source(e)
                })?;
            Some(sa)
        } else {
            debug!("no service account in secrets, leaving it to other providers");
            None
        };
        if let Some(sa) = &service_account {
            sa.validate()?;
        }

        Ok(Self {
            spreadsheet,
            worksheets: section.worksheets,
            utc_offset,
            service_account,
        })
    }

    /// Locate, read and parse the secrets file described by `config`.
    pub async fn load(ctx: &Context, config: &Config) -> Result<Self> {
        match read_secrets_file(ctx, config).await? {
            Some((path, content)) => {
                debug!("loading sheets config from {path}");
                Self::from_toml(&content)
            }
            None => Err(Error::config_invalid("no secrets file found")),
        }
    }
}

/// Read the secrets file: the configured path, `SHEETCLOCK_SECRETS_FILE`, then the
/// well-known locations.
///
/// An explicitly configured file that cannot be read is an error; missing
/// well-known files are skipped.
pub(crate) async fn read_secrets_file(
    ctx: &Context,
    config: &Config,
) -> Result<Option<(String, String)>> {
    let explicit = config.secrets_path.clone().or_else(|| {
        if config.disable_env {
            None
        } else {
            ctx.env_var(SHEETCLOCK_SECRETS_FILE)
        }
    });

    if let Some(path) = explicit {
        let expanded = ctx.expand_home_dir(&path).ok_or_else(|| {
            Error::config_invalid(format!("cannot expand home directory in {path}"))
        })?;
        let content = ctx.file_read_as_string(&expanded).await.map_err(|e| {
            Error::config_invalid(format!("failed to read secrets file {expanded}")).with_source(e)
        })?;
        return Ok(Some((expanded, content)));
    }

    if config.disable_well_known_location {
        return Ok(None);
    }

    for path in WELL_KNOWN_SECRETS_FILES {
        let Some(expanded) = ctx.expand_home_dir(path) else {
            continue;
        };
        match ctx.file_read_as_string(&expanded).await {
            Ok(content) => return Ok(Some((expanded, content))),
            Err(err) => debug!("secrets file {expanded} not usable: {err}"),
        }
    }

    Ok(None)
}
