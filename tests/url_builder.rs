//! End-to-end URL building tests

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rstest::rstest;

use imgwire::options::{
    Adjust, Autoquality, BlurDetections, Blur, Dpr, DrawDetections, Format, FormatQuality,
    Gradient, GradientDirection, Gravity, Height, InfoOptions, Monochrome, ProcessingOption,
    Quality, Resize, ResizingType, Watermark, WatermarkText, WatermarkUrl, Width,
};
use imgwire::support::ImageFormat;
use imgwire::{HmacSigner, UrlBuilder, UrlSigner};

const KEY: &str = "736563726574";
const SALT: &str = "68656C6C6F";
const SRC: &str = "http://example.com/image.jpg";

fn signed() -> UrlBuilder {
    UrlBuilder::signed(KEY, SALT).unwrap()
}

#[test]
fn basic_url_carries_all_options() {
    let url = signed()
        .with(Width::new(300))
        .with(Height::new(400))
        .with(Quality::new(90).unwrap())
        .with(Dpr::new(2).unwrap())
        .url(SRC, None)
        .unwrap();

    assert!(url.contains("w:300"));
    assert!(url.contains("h:400"));
    assert!(url.contains("q:90"));
    assert!(url.contains("dpr:2"));
}

#[test]
fn signed_url_has_base64url_signature() {
    let url = signed().with(Width::new(300)).url(SRC, None).unwrap();

    let signature = url.split('/').nth(1).unwrap();
    // 32 HMAC-SHA256 bytes encode to 43 characters without padding
    assert_eq!(signature.len(), 43);
    assert!(URL_SAFE_NO_PAD.decode(signature).is_ok());
}

#[test]
fn signature_matches_hmac_over_path() {
    let url = signed().plain().with(Width::new(100)).url(SRC, None).unwrap();

    let path = "/w:100/plain/http://example.com/image.jpg";
    let signer = HmacSigner::new(KEY, SALT).unwrap();
    let expected = URL_SAFE_NO_PAD.encode(signer.sign(path.as_bytes()));

    assert_eq!(url, format!("/{expected}{path}"));
}

#[test]
fn unsigned_url_is_insecure() {
    let url = UrlBuilder::new().with(Width::new(300)).url(SRC, None).unwrap();
    assert!(url.starts_with("/insecure/"));
}

#[test]
fn plain_source_format() {
    let url = signed().plain().url(SRC, None).unwrap();
    assert!(url.contains("plain/"));
    assert!(url.contains("http://example.com"));
}

#[test]
fn plain_source_escapes_at_sign() {
    let url = UrlBuilder::new()
        .plain()
        .url("http://example.com/hi@2x.jpg", None)
        .unwrap();
    assert!(url.ends_with("/plain/http://example.com/hi%402x.jpg"));
}

#[test]
fn plain_extension_appended_only_when_format_changes() {
    let builder = UrlBuilder::new().plain();

    let converted = builder.url(SRC, Some("webp")).unwrap();
    assert!(converted.ends_with("@webp"));

    let unchanged = builder.url(SRC, Some("jpg")).unwrap();
    assert!(unchanged.ends_with("/plain/http://example.com/image.jpg"));
}

#[test]
fn base64_source_is_chunked() {
    let url = UrlBuilder::new().url(SRC, None).unwrap();

    let encoded = url.strip_prefix("/insecure//").unwrap();
    for part in encoded.split('/') {
        assert!(part.len() <= 16);
    }
    assert_eq!(
        encoded.replace('/', ""),
        URL_SAFE_NO_PAD.encode(SRC)
    );
}

#[rstest]
#[case(8)]
#[case(32)]
fn base64_split_size_is_configurable(#[case] size: usize) {
    let url = UrlBuilder::new().split(size).url(SRC, None).unwrap();
    let encoded = url.strip_prefix("/insecure//").unwrap();
    for part in encoded.split('/') {
        assert!(part.len() <= size);
    }
}

#[test]
fn base64_split_zero_disables_chunking() {
    let url = UrlBuilder::new().split(0).url(SRC, None).unwrap();
    assert_eq!(
        url,
        format!("/insecure//{}", URL_SAFE_NO_PAD.encode(SRC))
    );
}

#[test]
fn base64_extension_always_appended() {
    let url = UrlBuilder::new().split(0).url(SRC, Some("webp")).unwrap();
    assert!(url.ends_with(".webp"));
}

#[test]
fn encoded_toggles_source_format() {
    let plain = UrlBuilder::new().encoded(false).url(SRC, None).unwrap();
    assert!(plain.contains("plain/"));

    let base64 = UrlBuilder::new().encoded(false).encoded(true).url(SRC, None).unwrap();
    assert!(!base64.contains("plain/"));
}

#[test]
fn smart_gravity() {
    let url = signed().with(Gravity::smart()).url(SRC, None).unwrap();
    assert!(url.contains("g:sm"));
}

#[test]
fn object_detection_gravity() {
    let url = signed()
        .with(Gravity::object(vec!["face".to_string(), "cat".to_string()]))
        .url(SRC, None)
        .unwrap();
    assert!(url.contains("g:obj:face:cat"));
}

#[test]
fn weighted_object_gravity() {
    let url = signed()
        .with(Gravity::object_weighted(vec![
            ("face".to_string(), 2.0),
            ("cat".to_string(), 1.0),
        ]))
        .url(SRC, None)
        .unwrap();
    assert!(url.contains("g:objw:face:2:cat:1"));
}

#[test]
fn watermark_position() {
    let url = signed()
        .with(Watermark::south_east(0.7, None, None, None).unwrap())
        .url(SRC, None)
        .unwrap();
    assert!(url.contains("wm:0.7:soea"));
}

#[test]
fn watermark_payloads_are_encoded() {
    let url = signed()
        .with(WatermarkText::new("Hello World"))
        .with(WatermarkUrl::new("http://example.com/logo.png"))
        .url(SRC, None)
        .unwrap();

    let text = URL_SAFE_NO_PAD.encode("Hello World");
    let logo = URL_SAFE_NO_PAD.encode("http://example.com/logo.png");
    assert!(url.contains(&format!("/wmt:{text}/")));
    assert!(url.contains(&format!("/wmu:{logo}/")));
}

#[test]
fn chained_pipelines() {
    let url = signed()
        .with(Resize::new(ResizingType::Fit, Some(300), Some(300)))
        .pipeline(vec![
            Box::new(Blur::new(10.0).unwrap()) as Box<dyn ProcessingOption>,
            Box::new(Watermark::south_east(0.7, None, None, None).unwrap()),
        ])
        .url(SRC, None)
        .unwrap();

    assert!(url.contains("rs:fit:300:300"));
    assert!(url.contains("/-/"));
    assert!(url.contains("bl:10"));
    assert!(url.contains("wm:0.7:soea"));
}

#[test]
fn info_endpoint_inserted_after_signature() {
    let url = signed().info().with(InfoOptions::new()).url(SRC, None).unwrap();

    assert!(url.contains("/info/"));
    assert!(url.contains("/size:1/format:1/dimensions:1/exif:1/iptc:1/xmp:1/video_meta:1/"));
}

#[test]
fn info_endpoint_signs_path_without_prefix() {
    let with_info = signed().info().plain().url(SRC, None).unwrap();
    let without = signed().plain().url(SRC, None).unwrap();

    // Same signature, the info segment rides behind it
    assert_eq!(
        with_info.split('/').nth(1).unwrap(),
        without.split('/').nth(1).unwrap()
    );
    assert!(with_info.contains("/info/"));
}

#[test]
fn info_endpoint_with_custom_directives() {
    let info = InfoOptions::new()
        .exif(false)
        .iptc(false)
        .xmp(false)
        .video_meta(false)
        .detect_objects(true)
        .pages_number(true);
    let url = signed().info().with(info).url(SRC, None).unwrap();

    assert!(url.contains("/size:1/format:1/dimensions:1/detect_objects:1/pages_number:1/"));
}

#[test]
fn color_effects() {
    let url = signed()
        .with(Blur::new(5.0).unwrap())
        .with(Monochrome::new(0.8, Some("b3b3b3")).unwrap())
        .url(SRC, None)
        .unwrap();

    assert!(url.contains("bl:5"));
    assert!(url.contains("mc:0.8:b3b3b3"));
}

#[test]
fn image_adjustments() {
    let url = signed()
        .with(Adjust::new(Some(10.0), Some(1.1), Some(0.9)))
        .url(SRC, None)
        .unwrap();
    assert!(url.contains("a:10:1.1:0.9"));
}

#[test]
fn object_detection_options() {
    let url = signed()
        .with(BlurDetections::new(5.0, vec!["face".to_string()]).unwrap())
        .with(DrawDetections::new(true, vec!["face".to_string(), "cat".to_string()]))
        .url(SRC, None)
        .unwrap();

    assert!(url.contains("/bd:5:face/"));
    assert!(url.contains("/dd:1:face:cat/"));
}

#[test]
fn advanced_quality_settings() {
    let url = signed()
        .with(Format::new(ImageFormat::Webp))
        .with(
            FormatQuality::new(vec![
                ("jpeg".to_string(), 85),
                ("webp".to_string(), 80),
                ("avif".to_string(), 60),
            ])
            .unwrap(),
        )
        .with(Autoquality::dssim(0.02, Some(70), Some(85), Some(0.001)).unwrap())
        .url(SRC, None)
        .unwrap();

    assert!(url.contains("f:webp"));
    assert!(url.contains("fq:jpeg:85:webp:80:avif:60"));
    assert!(url.contains("aq:dssim:0.02:70:85:0.001"));
}

#[test]
fn gradient_effect() {
    let url = signed()
        .with(
            Gradient::new(
                0.7,
                Some("ff0000"),
                Some(GradientDirection::Angle(45)),
                Some(0.2),
                Some(0.8),
            )
            .unwrap(),
        )
        .url(SRC, None)
        .unwrap();
    assert!(url.contains("gr:0.7:ff0000:45:0.2:0.8"));
}

#[test]
fn empty_options_leave_double_slash() {
    let url = UrlBuilder::new().plain().url(SRC, None).unwrap();
    assert_eq!(url, "/insecure//plain/http://example.com/image.jpg");
}

#[test]
fn custom_signer_is_used() {
    struct StaticSigner;

    impl UrlSigner for StaticSigner {
        fn sign(&self, _path: &[u8]) -> Vec<u8> {
            vec![0xAB; 8]
        }
    }

    let url = UrlBuilder::new()
        .with_signer(std::sync::Arc::new(StaticSigner))
        .plain()
        .url(SRC, None)
        .unwrap();
    assert!(url.starts_with(&format!("/{}/", URL_SAFE_NO_PAD.encode([0xAB; 8]))));
}
