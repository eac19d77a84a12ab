//! Repair a private key pasted into a secrets store and print the canonical PEM.
//!
//! ```shell
//! cargo run --example normalize_key -- ./broken_key.txt
//! ```

use std::io::Read;

use anyhow::Result;
use sheetclock::google::PrivateKey;

fn main() -> Result<()> {
    env_logger::init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    match PrivateKey::from_pem(&raw) {
        Ok(key) => {
            eprintln!("{} key, fingerprint {}", key.label(), key.fingerprint());
            print!("{}", key.pem());
        }
        Err(e) => {
            eprintln!("{}", e.to_user_message());
            std::process::exit(1);
        }
    }
    Ok(())
}
