mod application_credentials;
mod default;
mod env;
mod secrets_file;
mod static_provider;

use sheetclock_core::{Context, StaticEnv};
use sheetclock_file_read_tokio::TokioFileRead;
use std::collections::HashMap;
use std::path::PathBuf;

pub const PKCS8_PEM: &str = include_str!("../../testdata/service_account_key.pem");
pub const PKCS1_PEM: &str = include_str!("../../testdata/service_account_key_pkcs1.pem");
pub const CLIENT_EMAIL: &str = "clock@attendance-board.iam.gserviceaccount.com";

pub fn testdata(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}

pub fn create_test_context() -> Context {
    create_test_context_with_env(HashMap::new())
}

pub fn create_test_context_with_env(envs: HashMap<String, String>) -> Context {
    let _ = env_logger::builder().is_test(true).try_init();

    Context::new()
        .with_file_read(TokioFileRead)
        .with_env(StaticEnv {
            home_dir: None,
            envs,
        })
}
