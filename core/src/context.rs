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

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Context is the only door from credential providers to files and environment variables.
///
/// A fresh context can read nothing: file reads fail and every variable is unset.
/// Plug in [`OsEnv`] and a [`FileRead`] implementation for production, or a
/// [`StaticEnv`] in tests.
///
/// ## Example
///
/// ```
/// use sheetclock_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    fs: Arc<dyn FileRead>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("fs", &self.fs)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context that sees no files and no variables.
    pub fn new() -> Self {
        Self {
            fs: Arc::new(NoopFileRead),
            env: Arc::new(NoopEnv),
        }
    }

    /// Use `fs` for file reads.
    pub fn with_file_read(mut self, fs: impl FileRead) -> Self {
        self.fs = Arc::new(fs);
        self
    }

    /// Use `env` for variable and home directory lookups.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Read a whole file.
    #[inline]
    pub async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        self.fs.file_read(path).await
    }

    /// Read a whole file as UTF-8 text.
    ///
    /// Invalid UTF-8 is a [`crate::ErrorKind::ConfigInvalid`] error, never replaced.
    pub async fn file_read_as_string(&self, path: &str) -> Result<String> {
        let bytes = self.file_read(path).await?;
        String::from_utf8(bytes).map_err(|e| {
            Error::config_invalid(format!("file {path} is not valid utf-8")).with_source(e)
        })
    }

    /// Home directory of the current user, if known.
    #[inline]
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.env.home_dir()
    }

    /// Replace a leading `~/` with the home directory.
    ///
    /// Paths without a leading `~` are returned as-is. Returns `None` when the path
    /// needs a home directory and none is known.
    pub fn expand_home_dir(&self, path: &str) -> Option<String> {
        if !path.starts_with("~/") && !path.starts_with("~\\") {
            Some(path.to_string())
        } else {
            self.home_dir()
                .map(|home| path.replacen('~', &home.to_string_lossy(), 1))
        }
    }

    /// Value of an environment variable; `None` when unset or not UTF-8.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Snapshot of all environment variables.
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }
}

/// FileRead loads secrets files and key files for credential providers.
#[async_trait::async_trait]
pub trait FileRead: Debug + Send + Sync + 'static {
    /// Read the whole file at `path`.
    async fn file_read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Env answers environment variable and home directory lookups.
pub trait Env: Debug + Send + Sync + 'static {
    /// Value of `key`; `None` when unset or not UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// All variables.
    fn vars(&self) -> HashMap<String, String>;

    /// Home directory of the current user.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Env of the running process. Home is `HOME`, or `USERPROFILE` on Windows.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars().collect()
    }

    #[cfg(not(windows))]
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    #[cfg(windows)]
    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("USERPROFILE")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

/// StaticEnv is a fixed set of variables, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// Home directory reported to providers.
    pub home_dir: Option<PathBuf>,
    /// Variables reported to providers.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}

/// NoopFileRead fails every read.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFileRead;

#[async_trait::async_trait]
impl FileRead for NoopFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        Err(Error::unexpected(format!(
            "cannot read {path}: no file reader configured"
        )))
    }
}

/// NoopEnv reports an empty environment and no home directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        None
    }
}
