use super::{create_test_context, testdata, CLIENT_EMAIL, PKCS8_PEM};
use pretty_assertions::assert_eq;
use sheetclock_core::{ProvideCredential, Result};
use sheetclock_google::{Config, SecretsFileCredentialProvider, SheetsConfig};
use test_case::test_case;

#[test_case("secrets.toml" ; "inline fields with escaped key")]
#[test_case("secrets_mangled.toml" ; "indented key without markers")]
#[test_case("secrets_base64.toml" ; "base64 encoded key file")]
#[tokio::test]
async fn test_secrets_file_shapes(name: &str) -> Result<()> {
    let ctx = create_test_context();
    let provider =
        SecretsFileCredentialProvider::new(Config::new().with_secrets_path(testdata(name)));

    let credential = provider
        .provide_credential(&ctx)
        .await?
        .expect("credential must be provided");

    assert_eq!(credential.client_email(), CLIENT_EMAIL);
    assert_eq!(credential.private_key.pem(), PKCS8_PEM);
    Ok(())
}

#[tokio::test]
async fn test_sheets_config_load() -> Result<()> {
    let ctx = create_test_context();
    let config = Config::new().with_secrets_path(testdata("secrets.toml"));

    let sheets = SheetsConfig::load(&ctx, &config).await?;
    assert_eq!(
        sheets.spreadsheet.id(),
        "1qZ8vXkT3mW9pLr2Yc5NfH0aBdEeGg7Ji4KlMnOpQrSt"
    );
    assert_eq!(sheets.worksheets.attendance, "근무기록");
    assert_eq!(sheets.worksheets.leave, "휴가");
    assert_eq!(sheets.utc_offset.local_minus_utc(), 9 * 3600);
    Ok(())
}

#[tokio::test]
async fn test_sheets_config_defaults() -> Result<()> {
    let ctx = create_test_context();
    let config = Config::new().with_secrets_path(testdata("secrets_mangled.toml"));

    let sheets = SheetsConfig::load(&ctx, &config).await?;
    assert_eq!(sheets.worksheets.employees, "employees");
    assert_eq!(sheets.worksheets.attendance, "attendance");
    Ok(())
}
