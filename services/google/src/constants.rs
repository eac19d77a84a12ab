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

// Env values used to locate service account credentials.
pub const SHEETCLOCK_CREDENTIALS: &str = "SHEETCLOCK_CREDENTIALS";
pub const SHEETCLOCK_CLIENT_EMAIL: &str = "SHEETCLOCK_CLIENT_EMAIL";
pub const SHEETCLOCK_PRIVATE_KEY: &str = "SHEETCLOCK_PRIVATE_KEY";
pub const SHEETCLOCK_PRIVATE_KEY_ID: &str = "SHEETCLOCK_PRIVATE_KEY_ID";
pub const SHEETCLOCK_PROJECT_ID: &str = "SHEETCLOCK_PROJECT_ID";
pub const SHEETCLOCK_TOKEN_URI: &str = "SHEETCLOCK_TOKEN_URI";
pub const SHEETCLOCK_SECRETS_FILE: &str = "SHEETCLOCK_SECRETS_FILE";
pub const SHEETCLOCK_SCOPES: &str = "SHEETCLOCK_SCOPES";
pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";

// Secrets file locations checked when none is configured, in order.
pub const WELL_KNOWN_SECRETS_FILES: &[&str] =
    &[".streamlit/secrets.toml", "~/.streamlit/secrets.toml"];

pub const SERVICE_ACCOUNT_TYPE: &str = "service_account";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive";
pub const DEFAULT_SCOPES: &[&str] = &[SPREADSHEETS_SCOPE, DRIVE_SCOPE];

// Assertions are valid for one hour, the maximum Google accepts.
pub const ASSERTION_LIFETIME_SECS: u64 = 3600;

pub const PEM_LINE_WIDTH: usize = 64;
pub const DEFAULT_PEM_LABEL: &str = "PRIVATE KEY";
pub const PKCS1_PEM_LABEL: &str = "RSA PRIVATE KEY";

// Asia/Seoul, the zone timesheets are kept in unless configured otherwise.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 9 * 60;
