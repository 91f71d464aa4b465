//! Encrypted source URL tests

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use imgwire::{UrlBuilder, UrlEncrypter};

const KEY_256: &str = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
const SRC: &str = "http://example.com/image.jpg";

#[test]
fn encrypted_source_has_enc_prefix() {
    let url = UrlBuilder::new()
        .encrypted(KEY_256)
        .unwrap()
        .url(SRC, None)
        .unwrap();
    assert!(url.contains("/enc/"));
}

#[test]
fn encrypted_token_is_chunked() {
    let url = UrlBuilder::new()
        .encrypted(KEY_256)
        .unwrap()
        .url(SRC, None)
        .unwrap();

    let token = url.split("/enc/").nth(1).unwrap();
    for part in token.split('/') {
        assert!(part.len() <= 16);
        assert!(part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}

#[test]
fn encrypted_urls_are_deterministic() {
    let builder = UrlBuilder::new().encrypted(KEY_256).unwrap();
    assert_eq!(builder.url(SRC, None).unwrap(), builder.url(SRC, None).unwrap());
}

#[test]
fn encrypted_extension_appended() {
    let url = UrlBuilder::new()
        .encrypted(KEY_256)
        .unwrap()
        .url(SRC, Some("webp"))
        .unwrap();
    assert!(url.ends_with(".webp"));
}

#[test]
fn token_round_trips_through_base64() {
    let builder = UrlBuilder::new().encrypted(KEY_256).unwrap().split(0);
    let url = builder.url(SRC, None).unwrap();

    let token = url.split("/enc/").nth(1).unwrap();
    let payload = URL_SAFE_NO_PAD.decode(token).unwrap();
    assert!(payload.len() > 16);
    assert_eq!((payload.len() - 16) % 16, 0);
}

#[test]
fn builder_token_matches_encrypter() {
    let url = UrlBuilder::new()
        .encrypted(KEY_256)
        .unwrap()
        .split(0)
        .url(SRC, None)
        .unwrap();

    let token = UrlEncrypter::new(KEY_256).unwrap().encrypt(SRC).unwrap();
    assert!(url.ends_with(&format!("/enc/{token}")));
}

#[test]
fn invalid_key_rejected() {
    assert!(UrlBuilder::new().encrypted("deadbeef").is_err());
}
