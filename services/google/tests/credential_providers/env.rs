use super::{create_test_context_with_env, CLIENT_EMAIL, PKCS1_PEM, PKCS8_PEM};
use pretty_assertions::assert_eq;
use sheetclock_core::hash::base64_encode;
use sheetclock_core::{ErrorKind, ProvideCredential, Result};
use sheetclock_google::constants::*;
use sheetclock_google::EnvCredentialProvider;
use std::collections::HashMap;
use test_case::test_case;

fn field_envs(private_key: &str) -> HashMap<String, String> {
    HashMap::from_iter([
        (SHEETCLOCK_CLIENT_EMAIL.to_string(), CLIENT_EMAIL.to_string()),
        (SHEETCLOCK_PROJECT_ID.to_string(), "attendance-board".to_string()),
        (SHEETCLOCK_PRIVATE_KEY.to_string(), private_key.to_string()),
    ])
}

#[test_case(PKCS8_PEM.to_string(), PKCS8_PEM ; "canonical")]
#[test_case(PKCS8_PEM.replace('\n', "\\n"), PKCS8_PEM ; "escaped newlines")]
#[test_case(PKCS8_PEM.replace('\n', "\r\n"), PKCS8_PEM ; "crlf")]
#[test_case(base64_encode(PKCS8_PEM.as_bytes()), PKCS8_PEM ; "base64 encoded pem")]
#[test_case(PKCS1_PEM.replace('\n', " "), PKCS1_PEM ; "pkcs1 on one line")]
#[tokio::test]
async fn test_env_private_key_shapes(private_key: String, expected: &str) -> Result<()> {
    let ctx = create_test_context_with_env(field_envs(&private_key));

    let credential = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");

    assert_eq!(credential.private_key.pem(), expected);
    Ok(())
}

#[tokio::test]
async fn test_env_incomplete_fields() -> Result<()> {
    let mut envs = field_envs(PKCS8_PEM);
    envs.remove(SHEETCLOCK_PROJECT_ID);
    let ctx = create_test_context_with_env(envs);

    let credential = EnvCredentialProvider::new().provide_credential(&ctx).await?;
    assert!(credential.is_none());
    Ok(())
}

#[tokio::test]
async fn test_env_truncated_key_is_rejected() {
    let truncated = &PKCS8_PEM[..PKCS8_PEM.len() / 2];
    let ctx = create_test_context_with_env(field_envs(truncated));

    let err = EnvCredentialProvider::new()
        .provide_credential(&ctx)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert!(err.is_fatal());
}
