//! Source URL encryption
//!
//! Encrypts source URLs with AES-CBC so the proxy can hide origins from
//! clients. The IV is derived from the key and the plaintext, so the same
//! URL always encrypts to the same token and stays cacheable.

use aes::{Aes128, Aes192, Aes256};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use cbc::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::trace;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

const IV_SIZE: usize = 16;

/// AES-CBC source URL encrypter.
///
/// The key is hex-encoded; its decoded length selects the cipher:
/// 16 bytes for AES-128, 24 for AES-192, 32 for AES-256.
#[derive(Debug, Clone)]
pub struct UrlEncrypter {
    key: Vec<u8>,
}

impl UrlEncrypter {
    pub fn new(key: &str) -> Result<Self> {
        let key = hex::decode(key)
            .map_err(|err| Error::validation("key", format!("invalid hex: {err}")))?;
        match key.len() {
            16 | 24 | 32 => Ok(Self { key }),
            _ => Err(Error::validation(
                "key",
                "invalid key length, the key should be either 32, 48, or 64 characters long in hex representation",
            )),
        }
    }

    /// Encrypt a source URL into a URL-safe token.
    ///
    /// The output is `base64url(IV || AES-CBC(key, IV, pkcs7(url)))`
    /// without padding.
    pub fn encrypt(&self, url: &str) -> Result<String> {
        let iv = self.derive_iv(url.as_bytes());

        let ciphertext = match self.key.len() {
            16 => cbc::Encryptor::<Aes128>::new_from_slices(&self.key, &iv)
                .map_err(|err| Error::Crypto(err.to_string()))?
                .encrypt_padded_vec_mut::<Pkcs7>(url.as_bytes()),
            24 => cbc::Encryptor::<Aes192>::new_from_slices(&self.key, &iv)
                .map_err(|err| Error::Crypto(err.to_string()))?
                .encrypt_padded_vec_mut::<Pkcs7>(url.as_bytes()),
            32 => cbc::Encryptor::<Aes256>::new_from_slices(&self.key, &iv)
                .map_err(|err| Error::Crypto(err.to_string()))?
                .encrypt_padded_vec_mut::<Pkcs7>(url.as_bytes()),
            _ => return Err(Error::Crypto("unexpected key length".to_string())),
        };

        let mut payload = Vec::with_capacity(IV_SIZE + ciphertext.len());
        payload.extend_from_slice(&iv);
        payload.extend_from_slice(&ciphertext);

        trace!(bytes = payload.len(), "encrypted source url");

        Ok(URL_SAFE_NO_PAD.encode(payload))
    }

    // IV = first 16 bytes of HMAC-SHA256(key, plaintext)
    fn derive_iv(&self, plaintext: &[u8]) -> [u8; IV_SIZE] {
        let mut mac =
            HmacSha256::new_from_slice(&self.key).expect("HMAC can take key of any size");
        mac.update(plaintext);
        let digest = mac.finalize().into_bytes();

        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&digest[..IV_SIZE]);
        iv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const KEY_128: &str = "00112233445566778899aabbccddeeff";
    const KEY_192: &str = "00112233445566778899aabbccddeeff0011223344556677";
    const KEY_256: &str =
        "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";

    #[rstest]
    #[case(KEY_128)]
    #[case(KEY_192)]
    #[case(KEY_256)]
    fn test_accepts_valid_key_lengths(#[case] key: &str) {
        assert!(UrlEncrypter::new(key).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("001122")]
    #[case("00112233445566778899aabbccddee")]
    #[case("not hex at all")]
    fn test_rejects_invalid_keys(#[case] key: &str) {
        assert!(UrlEncrypter::new(key).is_err());
    }

    #[test]
    fn test_encryption_is_deterministic() {
        let encrypter = UrlEncrypter::new(KEY_256).unwrap();
        let a = encrypter.encrypt("http://example.com/image.jpg").unwrap();
        let b = encrypter.encrypt("http://example.com/image.jpg").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_urls_produce_different_tokens() {
        let encrypter = UrlEncrypter::new(KEY_256).unwrap();
        let a = encrypter.encrypt("http://example.com/a.jpg").unwrap();
        let b = encrypter.encrypt("http://example.com/b.jpg").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_is_url_safe() {
        let encrypter = UrlEncrypter::new(KEY_128).unwrap();
        let token = encrypter.encrypt("http://example.com/image.jpg").unwrap();
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_token_layout() {
        let encrypter = UrlEncrypter::new(KEY_128).unwrap();
        let token = encrypter.encrypt("http://example.com/image.jpg").unwrap();
        let payload = URL_SAFE_NO_PAD.decode(token).unwrap();
        // IV plus whole ciphertext blocks
        assert!(payload.len() > IV_SIZE);
        assert_eq!((payload.len() - IV_SIZE) % 16, 0);
    }
}
