//! Integration tests for ProvideCredentialChain with service account credentials

use async_trait::async_trait;
use once_cell::sync::Lazy;
use sheetclock_core::{Context, Error, ProvideCredential, ProvideCredentialChain, Result};
use sheetclock_file_read_tokio::TokioFileRead;
use sheetclock_google::{Credential, ServiceAccount};
use std::sync::Arc;

const TEST_CREDENTIAL: &str = include_str!("../testdata/test_credential.json");

static SERVICE_ACCOUNT: Lazy<ServiceAccount> = Lazy::new(|| {
    ServiceAccount::from_json(TEST_CREDENTIAL.as_bytes()).expect("fixture must parse")
});

fn credential_for(name: &str) -> Credential {
    let mut sa = SERVICE_ACCOUNT.clone();
    sa.client_email = format!("{name}@attendance-board.iam.gserviceaccount.com");
    Credential::from_service_account(sa).expect("fixture must load")
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Found,
    Absent,
    Broken,
}

/// Mock provider that tracks how many times it was called
#[derive(Debug)]
struct CountingProvider {
    name: String,
    outcome: Outcome,
    call_count: Arc<std::sync::Mutex<usize>>,
}

impl CountingProvider {
    fn new(name: &str, outcome: Outcome) -> (Self, Arc<std::sync::Mutex<usize>>) {
        let count = Arc::new(std::sync::Mutex::new(0));
        let provider = Self {
            name: name.to_string(),
            outcome,
            call_count: count.clone(),
        };
        (provider, count)
    }
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        *self.call_count.lock().unwrap() += 1;

        match self.outcome {
            Outcome::Found => Ok(Some(credential_for(&self.name))),
            Outcome::Absent => Ok(None),
            Outcome::Broken => Err(Error::credential_invalid(format!(
                "{} has a broken key",
                self.name
            ))),
        }
    }
}

fn test_context() -> Context {
    let _ = env_logger::builder().is_test(true).try_init();
    Context::new().with_file_read(TokioFileRead)
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let ctx = test_context();

    let (p1, count1) = CountingProvider::new("provider1", Outcome::Absent);
    let (p2, count2) = CountingProvider::new("provider2", Outcome::Found);
    let (p3, count3) = CountingProvider::new("provider3", Outcome::Found);
    let chain = ProvideCredentialChain::new().push(p1).push(p2).push(p3);

    let cred = chain
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("credential must be provided");
    assert_eq!(
        cred.client_email(),
        "provider2@attendance-board.iam.gserviceaccount.com"
    );

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_chain_stops_at_first_error() {
    let ctx = test_context();

    let (p1, count1) = CountingProvider::new("provider1", Outcome::Broken);
    let (p2, count2) = CountingProvider::new("provider2", Outcome::Found);
    let chain = ProvideCredentialChain::new().push(p1).push(p2);

    let err = chain.provide_credential(&ctx).await.unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("provider1 has a broken key"));

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_empty_chain_returns_none() {
    let ctx = test_context();
    let chain: ProvideCredentialChain<Credential> = ProvideCredentialChain::new();

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_chain_all_providers_return_none() {
    let ctx = test_context();

    let (p1, count1) = CountingProvider::new("provider1", Outcome::Absent);
    let (p2, count2) = CountingProvider::new("provider2", Outcome::Absent);
    let chain = ProvideCredentialChain::new().push(p1).push(p2);

    let result = chain.provide_credential(&ctx).await.unwrap();
    assert!(result.is_none());

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
}
