use super::{create_test_context, testdata, CLIENT_EMAIL, PKCS8_PEM};
use pretty_assertions::assert_eq;
use sheetclock_core::hash::base64_encode;
use sheetclock_core::{ErrorKind, ProvideCredential, Result};
use sheetclock_google::StaticCredentialProvider;

#[tokio::test]
async fn test_static_credential_provider() -> Result<()> {
    let content = std::fs::read_to_string(testdata("test_credential.json"))?;
    let ctx = create_test_context();

    let credential = StaticCredentialProvider::new(content)
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");

    assert_eq!(credential.client_email(), CLIENT_EMAIL);
    assert_eq!(credential.service_account.private_key, PKCS8_PEM);
    assert_eq!(
        credential.service_account.private_key_id.as_deref(),
        Some("7f3c2a9e1b")
    );
    Ok(())
}

#[tokio::test]
async fn test_static_credential_provider_base64() -> Result<()> {
    let content = std::fs::read(testdata("test_credential.json"))?;
    let ctx = create_test_context();

    let credential = StaticCredentialProvider::new(base64_encode(&content))
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");

    assert_eq!(credential.client_email(), CLIENT_EMAIL);
    Ok(())
}

#[tokio::test]
async fn test_static_credential_provider_garbage() {
    let ctx = create_test_context();

    let err = StaticCredentialProvider::new("definitely not a key file!")
        .provide_credential(&ctx)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(err.to_user_message().starts_with("connection failed: "));
}
