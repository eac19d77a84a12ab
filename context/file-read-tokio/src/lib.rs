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

//! Tokio based [`FileRead`] for sheetclock.

use async_trait::async_trait;
use sheetclock_core::{Error, FileRead, Result};

/// TokioFileRead reads files with `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileRead;

#[async_trait]
impl FileRead for TokioFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        log::debug!("reading file: {path}");
        tokio::fs::read(path)
            .await
            .map_err(|e| Error::unexpected(format!("failed to read file {path}")).with_source(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetclock_core::Context;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_existing_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "[connections.gsheets]")?;
        let path = file.path().to_string_lossy().to_string();

        let ctx = Context::new().with_file_read(TokioFileRead);
        let content = ctx.file_read_as_string(&path).await?;
        assert_eq!(content, "[connections.gsheets]\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let ctx = Context::new().with_file_read(TokioFileRead);
        let err = ctx
            .file_read(&path.to_string_lossy())
            .await
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("missing.toml"));
    }
}
