// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Normalization of operator-supplied private keys into well-formed PEM.
//!
//! Keys reach us through secrets stores that mangle them in many ways: newlines
//! escaped as `\n`, stray indentation, quotes, missing BEGIN/END markers, or the
//! whole PEM base64-encoded once more. [`normalize_pem`] repairs the formatting;
//! [`PrivateKey::from_pem`] then parses the key material and rejects keys that are
//! broken beyond formatting.

use std::fmt::{self, Debug};

use jsonwebtoken::EncodingKey;
use log::debug;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use sheetclock_core::hash::{base64_decode, base64_decode_lenient, hex_sha256};
use sheetclock_core::utils::Redact;
use sheetclock_core::{Error, Result};

use crate::constants::{DEFAULT_PEM_LABEL, PEM_LINE_WIDTH, PKCS1_PEM_LABEL};

const BEGIN_PREFIX: &str = "-----BEGIN ";
const MARKER_SUFFIX: &str = "-----";

/// Whether `c` belongs to the standard base64 alphabet, padding included.
pub fn is_base64_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

/// Remove every character outside the base64 alphabet.
pub fn strip_to_base64(s: &str) -> String {
    s.chars().filter(|c| is_base64_char(*c)).collect()
}

/// Wrap `body` into lines of at most `width` characters joined by `\n`.
pub fn wrap_base64(body: &str, width: usize) -> String {
    let chars: Vec<char> = body.chars().collect();
    chars
        .chunks(width.max(1))
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn literal escape sequences into the characters they stand for.
fn unescape_newlines(s: &str) -> String {
    s.replace("\\r\\n", "\n")
        .replace("\\n", "\n")
        .replace("\r\n", "\n")
        .trim()
        .to_string()
}

/// A PEM-ish text split into its parts. Markers may be missing.
struct PemParts<'a> {
    label: &'a str,
    body: &'a str,
    has_begin: bool,
}

fn split_pem(text: &str) -> PemParts<'_> {
    let Some(begin) = text.find(BEGIN_PREFIX) else {
        // Only an END marker, or none at all: everything before it is body.
        let body = match text.find("-----END ") {
            Some(end) => &text[..end],
            None => text,
        };
        return PemParts {
            label: DEFAULT_PEM_LABEL,
            body,
            has_begin: false,
        };
    };

    let after_prefix = &text[begin + BEGIN_PREFIX.len()..];
    let (label, rest) = match after_prefix.find(MARKER_SUFFIX) {
        Some(idx) => (
            after_prefix[..idx].trim(),
            &after_prefix[idx + MARKER_SUFFIX.len()..],
        ),
        // A BEGIN marker that never closes carries no usable label.
        None => (DEFAULT_PEM_LABEL, ""),
    };
    let label = if label.is_empty() {
        DEFAULT_PEM_LABEL
    } else {
        label
    };

    let body = match rest.find("-----END ") {
        Some(end) => &rest[..end],
        None => rest,
    };

    PemParts {
        label,
        body,
        has_begin: true,
    }
}

/// Normalize an operator-supplied private key into well-formed PEM.
///
/// The result has a `-----BEGIN <label>-----` line, the base64 body wrapped at 64
/// columns, an `-----END <label>-----` line and a trailing newline. The label found
/// in the input is kept; `PRIVATE KEY` is used when the input has no markers.
///
/// Normalizing an already normalized key returns it unchanged.
///
/// Returns [`sheetclock_core::ErrorKind::CredentialInvalid`] when no key body is left
/// after cleanup or the body is not valid base64.
pub fn normalize_pem(raw: &str) -> Result<String> {
    normalize_pem_inner(raw, true)
}

fn normalize_pem_inner(raw: &str, allow_nested: bool) -> Result<String> {
    let text = unescape_newlines(raw);
    let parts = split_pem(&text);

    if !parts.has_begin && allow_nested {
        if let Some(decoded) = decode_wrapped_pem(parts.body) {
            debug!("private key is a base64 encoded pem, decoding it first");
            return normalize_pem_inner(&decoded, false);
        }
    }

    let body = strip_to_base64(parts.body);
    if body.is_empty() {
        return Err(Error::credential_invalid("private key is empty"));
    }
    base64_decode(&body)
        .map_err(|e| Error::credential_invalid("private key body is not valid base64").with_source(e))?;

    Ok(format!(
        "{BEGIN_PREFIX}{label}{MARKER_SUFFIX}\n{body}\n-----END {label}{MARKER_SUFFIX}\n",
        label = parts.label,
        body = wrap_base64(&body, PEM_LINE_WIDTH),
    ))
}

/// Detect a whole PEM document that has been base64 encoded once more.
fn decode_wrapped_pem(body: &str) -> Option<String> {
    let decoded = base64_decode_lenient(&strip_to_base64(body)).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    decoded.contains(BEGIN_PREFIX).then_some(decoded)
}

/// PrivateKey is a parsed RSA private key together with its normalized PEM form.
#[derive(Clone)]
pub struct PrivateKey {
    pem: String,
    label: String,
    der: Vec<u8>,
    key: RsaPrivateKey,
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("label", &self.label)
            .field("fingerprint", &self.fingerprint())
            .field("pem", &Redact::from(&self.pem))
            .finish()
    }
}

/// Decode a PEM body to DER. Undecodable key material is never retryable.
fn decode_body(body: &str) -> Result<Vec<u8>> {
    base64_decode(&strip_to_base64(body)).map_err(|e| {
        Error::credential_invalid("private key body is not valid base64").with_source(e)
    })
}

impl PrivateKey {
    /// Normalize `raw` and parse the key material.
    ///
    /// `PRIVATE KEY` blocks are parsed as PKCS#8 and `RSA PRIVATE KEY` blocks as PKCS#1.
    /// Any parse failure is a [`sheetclock_core::ErrorKind::CredentialInvalid`] error: the
    /// key material itself is broken and retrying cannot help.
    pub fn from_pem(raw: &str) -> Result<Self> {
        let pem = normalize_pem(raw)?;
        let parts = split_pem(&pem);
        let label = parts.label.to_string();
        let der = decode_body(parts.body)?;

        let key = match label.as_str() {
            DEFAULT_PEM_LABEL => RsaPrivateKey::from_pkcs8_der(&der).map_err(|e| {
                Error::credential_invalid("failed to parse PKCS#8 private key")
                    .with_source(e)
            })?,
            PKCS1_PEM_LABEL => RsaPrivateKey::from_pkcs1_der(&der).map_err(|e| {
                Error::credential_invalid("failed to parse PKCS#1 private key")
                    .with_source(e)
            })?,
            other => {
                return Err(Error::credential_invalid(format!(
                    "unsupported private key type: {other}"
                )))
            }
        };
        key.validate().map_err(|e| {
            Error::credential_invalid("private key failed validation").with_source(e)
        })?;

        let key = Self {
            pem,
            label,
            der,
            key,
        };
        debug!("parsed private key with fingerprint {}", key.fingerprint());
        Ok(key)
    }

    /// The normalized PEM text.
    pub fn pem(&self) -> &str {
        &self.pem
    }

    /// The PEM label, `PRIVATE KEY` or `RSA PRIVATE KEY`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Short SHA-256 fingerprint of the DER body, safe to log.
    pub fn fingerprint(&self) -> String {
        hex_sha256(&self.der)[..16].to_string()
    }

    /// The parsed RSA key.
    pub fn rsa(&self) -> &RsaPrivateKey {
        &self.key
    }

    /// Build the RS256 signing key used for JWT assertions.
    pub fn encoding_key(&self) -> Result<EncodingKey> {
        EncodingKey::from_rsa_pem(self.pem.as_bytes()).map_err(|e| {
            Error::credential_invalid("failed to load private key for signing")
                .with_source(e)
        })
    }
}
