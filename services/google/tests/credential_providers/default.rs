use super::{create_test_context, create_test_context_with_env, testdata, CLIENT_EMAIL};
use sheetclock_core::{ProvideCredential, Result};
use sheetclock_google::constants::*;
use sheetclock_google::{Config, DefaultCredentialProvider};
use std::collections::HashMap;

#[tokio::test]
async fn test_default_credential_provider_secrets_env() -> Result<()> {
    let ctx = create_test_context_with_env(HashMap::from_iter([(
        SHEETCLOCK_SECRETS_FILE.to_string(),
        testdata("secrets_mangled.toml"),
    )]));

    let credential = DefaultCredentialProvider::new(Config::from_env(&ctx))
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");
    assert_eq!(credential.client_email(), CLIENT_EMAIL);
    Ok(())
}

#[tokio::test]
async fn test_default_credential_provider_application_credentials() -> Result<()> {
    let ctx = create_test_context_with_env(HashMap::from_iter([(
        GOOGLE_APPLICATION_CREDENTIALS.to_string(),
        testdata("test_credential.json"),
    )]));

    let credential =
        DefaultCredentialProvider::new(Config::new().with_disable_well_known_location())
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
    assert_eq!(credential.client_email(), CLIENT_EMAIL);
    Ok(())
}

#[tokio::test]
async fn test_default_credential_provider_disable_env() -> Result<()> {
    let ctx = create_test_context_with_env(HashMap::from_iter([(
        GOOGLE_APPLICATION_CREDENTIALS.to_string(),
        testdata("test_credential.json"),
    )]));

    let credential = DefaultCredentialProvider::new(
        Config::new()
            .with_disable_env()
            .with_disable_well_known_location(),
    )
    .provide_credential(&ctx)
    .await?;
    assert!(credential.is_none());
    Ok(())
}

#[tokio::test]
async fn test_default_credential_provider_empty() -> Result<()> {
    let ctx = create_test_context();

    let credential =
        DefaultCredentialProvider::new(Config::new().with_disable_well_known_location())
            .provide_credential(&ctx)
            .await?;
    assert!(credential.is_none());
    Ok(())
}
