//! Walk the credential sources one by one and log which of them resolves.
//!
//! ```shell
//! RUST_LOG=info SHEETCLOCK_SECRETS_FILE=./secrets.toml cargo run --example chain_logging
//! ```

use async_trait::async_trait;
use log::{debug, info};
use sheetclock_core::{Context, OsEnv, ProvideCredential, ProvideCredentialChain, Result};
use sheetclock_file_read_tokio::TokioFileRead;
use sheetclock_google::{
    ApplicationCredentialsProvider, Config, Credential, EnvCredentialProvider,
    SecretsFileCredentialProvider,
};

/// Wrapper that logs when credentials are loaded
#[derive(Debug)]
struct LoggingProvider<P> {
    name: String,
    inner: P,
}

impl<P> LoggingProvider<P> {
    fn new(name: impl Into<String>, provider: P) -> Self {
        Self {
            name: name.into(),
            inner: provider,
        }
    }
}

#[async_trait]
impl<P> ProvideCredential for LoggingProvider<P>
where
    P: ProvideCredential<Credential = Credential> + Send + Sync,
{
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        info!("trying credential source: {}", self.name);

        match self.inner.provide_credential(ctx).await {
            Ok(Some(cred)) => {
                info!("loaded credential from: {}", self.name);
                debug!("private key label: {}", cred.private_key.label());
                Ok(Some(cred))
            }
            Ok(None) => {
                info!("nothing found in: {}", self.name);
                Ok(None)
            }
            Err(e) => {
                info!("{} is present but unusable: {e}", self.name);
                Err(e)
            }
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
    let config = Config::from_env(&ctx);

    let chain = ProvideCredentialChain::new()
        .push(LoggingProvider::new("environment", EnvCredentialProvider::new()))
        .push(LoggingProvider::new(
            "secrets file",
            SecretsFileCredentialProvider::new(config),
        ))
        .push(LoggingProvider::new(
            "GOOGLE_APPLICATION_CREDENTIALS",
            ApplicationCredentialsProvider::new(),
        ));

    match chain.provide_credential(&ctx).await {
        Ok(Some(cred)) => println!(
            "{} (key {})",
            cred.client_email(),
            cred.private_key.fingerprint()
        ),
        Ok(None) => println!("no credentials configured"),
        Err(e) => {
            eprintln!("{}", e.to_user_message());
            std::process::exit(1);
        }
    }
}
