//! Google service account credentials for spreadsheet access.
//!
//! Service account keys are accepted in every shape operators tend to paste them:
//! JSON key files, base64 encoded key files, inline `[connections.gsheets]` secrets
//! fields and loose environment variables. The private key is normalized into
//! canonical PEM before it is parsed.
//!
//! ```no_run
//! use sheetclock_core::{Context, OsEnv, ProvideCredential};
//! use sheetclock_file_read_tokio::TokioFileRead;
//! use sheetclock_google::{Config, DefaultCredentialProvider};
//!
//! # async fn example() -> sheetclock_core::Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//! let provider = DefaultCredentialProvider::new(Config::from_env(&ctx));
//! if let Some(cred) = provider.provide_credential(&ctx).await? {
//!     println!("loaded {}", cred.client_email());
//! }
//! # Ok(())
//! # }
//! ```

pub mod constants;

mod key;
pub use key::{normalize_pem, strip_to_base64, wrap_base64, PrivateKey};

mod credential;
pub use credential::{Credential, ServiceAccount};

mod config;
pub use config::{Config, SheetsConfig, SpreadsheetRef, WorksheetNames};

mod assertion;
pub use assertion::TokenRequest;

mod provide_credential;
pub use provide_credential::{
    ApplicationCredentialsProvider, DefaultCredentialProvider, EnvCredentialProvider,
    SecretsFileCredentialProvider, StaticCredentialProvider,
};
