//! Miscellaneous processing options

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};

/// Rotation angle (`rot`), a non-negative multiple of 90
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotate(u32);

impl Rotate {
    pub fn new(angle: u32) -> Result<Self> {
        if angle % 90 != 0 {
            return Err(Error::validation("rotate", format!("invalid angle: {angle}")));
        }
        Ok(Self(angle))
    }
}

impl ProcessingOption for Rotate {
    fn name(&self) -> &str {
        "rot"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Auto-rotation based on EXIF orientation (`ar`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoRotate(bool);

impl AutoRotate {
    pub fn new(rotate: bool) -> Self {
        Self(rotate)
    }
}

impl ProcessingOption for AutoRotate {
    fn name(&self) -> &str {
        "ar"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Page of a multi-page document to render (`pg`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    pub fn new(page: u32) -> Self {
        Self(page)
    }
}

impl ProcessingOption for Page {
    fn name(&self) -> &str {
        "pg"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Number of pages to render (`pgs`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pages(u32);

impl Pages {
    pub fn new(pages: u32) -> Result<Self> {
        if pages == 0 {
            return Err(Error::validation("pages", "should be greater than 0"));
        }
        Ok(Self(pages))
    }
}

impl ProcessingOption for Pages {
    fn name(&self) -> &str {
        "pgs"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Cache buster token (`cb`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheBuster(String);

impl CacheBuster {
    pub fn new(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::validation("cache_buster", "cannot be empty"));
        }
        Ok(Self(value.to_string()))
    }
}

impl ProcessingOption for CacheBuster {
    fn name(&self) -> &str {
        "cb"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.as_str().into()]
    }
}

/// URL expiration timestamp (`exp`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expires(i64);

impl Expires {
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }
}

impl ProcessingOption for Expires {
    fn name(&self) -> &str {
        "exp"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Download filename (`fn`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filename(String);

impl Filename {
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::validation("filename", "cannot be empty"));
        }
        Ok(Self(name.to_string()))
    }
}

impl ProcessingOption for Filename {
    fn name(&self) -> &str {
        "fn"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.as_str().into()]
    }
}

/// Fallback image URL (`fiu`), carried base64url-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImageUrl(String);

impl FallbackImageUrl {
    pub fn new(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl ProcessingOption for FallbackImageUrl {
    fn name(&self) -> &str {
        "fiu"
    }

    fn data(&self) -> Vec<Arg> {
        vec![URL_SAFE_NO_PAD.encode(self.0.as_bytes()).into()]
    }
}

/// CSS style injected into SVG sources (`st`), carried base64url-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style(String);

impl Style {
    pub fn new(style: &str) -> Self {
        Self(style.to_string())
    }
}

impl ProcessingOption for Style {
    fn name(&self) -> &str {
        "st"
    }

    fn data(&self) -> Vec<Arg> {
        vec![URL_SAFE_NO_PAD.encode(self.0.as_bytes()).into()]
    }
}

/// Pass the source through unprocessed (`raw`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Raw(bool);

impl Raw {
    pub fn new(raw: bool) -> Self {
        Self(raw)
    }
}

impl ProcessingOption for Raw {
    fn name(&self) -> &str {
        "raw"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Serve with a Content-Disposition attachment header (`att`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnAttachment(bool);

impl ReturnAttachment {
    pub fn new(attachment: bool) -> Self {
        Self(attachment)
    }
}

impl ProcessingOption for ReturnAttachment {
    fn name(&self) -> &str {
        "att"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Preserve copyright metadata (`kcr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepCopyright(bool);

impl KeepCopyright {
    pub fn new(keep: bool) -> Self {
        Self(keep)
    }
}

impl ProcessingOption for KeepCopyright {
    fn name(&self) -> &str {
        "kcr"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Strip the embedded color profile (`scp`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripColorProfile(bool);

impl StripColorProfile {
    pub fn new(strip: bool) -> Self {
        Self(strip)
    }
}

impl ProcessingOption for StripColorProfile {
    fn name(&self) -> &str {
        "scp"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Render only the first frame of animated sources (`da`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisableAnimation(bool);

impl DisableAnimation {
    pub fn new(disable: bool) -> Self {
        Self(disable)
    }
}

impl ProcessingOption for DisableAnimation {
    fn name(&self) -> &str {
        "da"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Blur detected objects (`bd`): sigma plus optional class filters
#[derive(Debug, Clone, PartialEq)]
pub struct BlurDetections {
    sigma: f64,
    classes: Vec<String>,
}

impl BlurDetections {
    pub fn new(sigma: f64, classes: Vec<String>) -> Result<Self> {
        if sigma <= 0.0 {
            return Err(Error::validation(
                "blur_detections",
                format!("invalid blur sigma: {sigma}"),
            ));
        }
        Ok(Self { sigma, classes })
    }
}

impl ProcessingOption for BlurDetections {
    fn name(&self) -> &str {
        "bd"
    }

    fn data(&self) -> Vec<Arg> {
        let mut data: Vec<Arg> = vec![self.sigma.into()];
        data.extend(self.classes.iter().map(|class| class.as_str().into()));
        data
    }
}

/// Draw boxes around detected objects (`dd`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawDetections {
    draw: bool,
    classes: Vec<String>,
}

impl DrawDetections {
    pub fn new(draw: bool, classes: Vec<String>) -> Self {
        Self { draw, classes }
    }
}

impl ProcessingOption for DrawDetections {
    fn name(&self) -> &str {
        "dd"
    }

    fn data(&self) -> Vec<Arg> {
        let mut data: Vec<Arg> = vec![self.draw.into()];
        data.extend(self.classes.iter().map(|class| class.as_str().into()));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate() {
        assert_eq!(Rotate::new(270).unwrap().value(), "rot:270");
        assert!(Rotate::new(45).is_err());
    }

    #[test]
    fn test_boolean_flags() {
        assert_eq!(AutoRotate::new(true).value(), "ar:1");
        assert_eq!(Raw::new(false).value(), "raw:0");
        assert_eq!(ReturnAttachment::new(true).value(), "att:1");
        assert_eq!(KeepCopyright::new(true).value(), "kcr:1");
        assert_eq!(StripColorProfile::new(true).value(), "scp:1");
        assert_eq!(DisableAnimation::new(true).value(), "da:1");
    }

    #[test]
    fn test_pages() {
        assert_eq!(Page::new(0).value(), "pg:0");
        assert_eq!(Pages::new(3).unwrap().value(), "pgs:3");
        assert!(Pages::new(0).is_err());
    }

    #[test]
    fn test_cache_buster_and_filename() {
        assert_eq!(CacheBuster::new("v2").unwrap().value(), "cb:v2");
        assert_eq!(Filename::new("photo.jpg").unwrap().value(), "fn:photo.jpg");
        assert!(CacheBuster::new("").is_err());
        assert!(Filename::new("").is_err());
    }

    #[test]
    fn test_expires() {
        assert_eq!(Expires::new(1695219600).value(), "exp:1695219600");
    }

    #[test]
    fn test_base64_carried_options() {
        let fiu = FallbackImageUrl::new("https://example.com/fallback.png");
        assert_eq!(
            fiu.value(),
            format!(
                "fiu:{}",
                URL_SAFE_NO_PAD.encode("https://example.com/fallback.png")
            )
        );

        let st = Style::new("fill:red");
        assert_eq!(st.value(), format!("st:{}", URL_SAFE_NO_PAD.encode("fill:red")));
    }

    #[test]
    fn test_detections() {
        let bd = BlurDetections::new(5.0, vec!["face".to_string()]).unwrap();
        assert_eq!(bd.value(), "bd:5:face");
        assert!(BlurDetections::new(0.0, vec![]).is_err());

        let dd = DrawDetections::new(true, vec!["face".to_string(), "cat".to_string()]);
        assert_eq!(dd.value(), "dd:1:face:cat");
    }
}
