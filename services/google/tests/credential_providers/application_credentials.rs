use super::{create_test_context_with_env, testdata, CLIENT_EMAIL};
use sheetclock_core::{ErrorKind, ProvideCredential, Result};
use sheetclock_google::constants::GOOGLE_APPLICATION_CREDENTIALS;
use sheetclock_google::ApplicationCredentialsProvider;
use std::collections::HashMap;

#[tokio::test]
async fn test_application_credentials_provider() -> Result<()> {
    let ctx = create_test_context_with_env(HashMap::from_iter([(
        GOOGLE_APPLICATION_CREDENTIALS.to_string(),
        testdata("test_credential.json"),
    )]));

    let credential = ApplicationCredentialsProvider::new()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");
    assert_eq!(credential.client_email(), CLIENT_EMAIL);
    Ok(())
}

#[tokio::test]
async fn test_application_credentials_missing_file() {
    let ctx = create_test_context_with_env(HashMap::from_iter([(
        GOOGLE_APPLICATION_CREDENTIALS.to_string(),
        testdata("no_such_credential.json"),
    )]));

    let err = ApplicationCredentialsProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}
