//! URL signing
//!
//! Provides:
//! - The [`UrlSigner`] trait for pluggable signature schemes
//! - [`HmacSigner`], the default HMAC-SHA256 scheme over salt + path

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

/// Produces the raw signature bytes for a URL path.
///
/// The builder base64url-encodes whatever this returns, so custom
/// implementations only deal in bytes.
pub trait UrlSigner: Send + Sync {
    fn sign(&self, path: &[u8]) -> Vec<u8>;
}

/// HMAC-SHA256 signer keyed with a hex-encoded key and salt.
///
/// The signature is computed as:
/// ```text
/// signature = HMAC-SHA256(key, salt + path)
/// ```
#[derive(Debug, Clone)]
pub struct HmacSigner {
    key: Vec<u8>,
    salt: Vec<u8>,
}

impl HmacSigner {
    pub fn new(key: &str, salt: &str) -> Result<Self> {
        let key = hex::decode(key)
            .map_err(|err| Error::validation("key", format!("invalid hex: {err}")))?;
        let salt = hex::decode(salt)
            .map_err(|err| Error::validation("salt", format!("invalid hex: {err}")))?;
        Ok(Self { key, salt })
    }
}

impl UrlSigner for HmacSigner {
    fn sign(&self, path: &[u8]) -> Vec<u8> {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(&self.salt);
        mac.update(path);
        mac.finalize().into_bytes().to_vec()
    }
}
