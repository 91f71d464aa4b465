//! Metadata endpoint options

use std::fmt;
use std::str::FromStr;

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};

/// Digest algorithm for source hashsum checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashDigest {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl HashDigest {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashDigest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5" => Ok(Self::Md5),
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Error::validation(
                "hashsum",
                format!("invalid hashsum type: {s}"),
            )),
        }
    }
}

/// Source hashsum verification (`hs`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hashsum {
    digest: Option<HashDigest>,
    hashsum: Option<String>,
}

impl Hashsum {
    pub fn new(digest: HashDigest, hashsum: &str) -> Result<Self> {
        if hashsum.is_empty() {
            return Err(Error::validation(
                "hashsum",
                format!("hashsum value is required for type: {digest}"),
            ));
        }
        Ok(Self {
            digest: Some(digest),
            hashsum: Some(hashsum.to_string()),
        })
    }

    /// Disable hashsum checking.
    pub fn none() -> Self {
        Self {
            digest: None,
            hashsum: None,
        }
    }
}

impl ProcessingOption for Hashsum {
    fn name(&self) -> &str {
        "hs"
    }

    fn data(&self) -> Vec<Arg> {
        match &self.digest {
            Some(digest) => vec![digest.as_str().into(), self.hashsum.as_deref().into()],
            None => vec!["none".into()],
        }
    }
}

/// Directive set for the info endpoint.
///
/// Unlike regular options this serializes to a `/`-joined list of
/// `directive:args` segments with no leading option name.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoOptions {
    size: bool,
    format: bool,
    dimensions: bool,
    exif: bool,
    iptc: bool,
    xmp: bool,
    video_meta: bool,
    detect_objects: bool,
    colorspace: bool,
    bands: bool,
    sample_format: bool,
    pages_number: bool,
    alpha: bool,
    check_transparency: bool,
    palette_colors: u16,
    average: bool,
    ignore_transparent: bool,
    dominant_colors: bool,
    build_missed: bool,
    blurhash_x: u8,
    blurhash_y: u8,
    hashsums: Vec<HashDigest>,
}

impl Default for InfoOptions {
    fn default() -> Self {
        Self {
            size: true,
            format: true,
            dimensions: true,
            exif: true,
            iptc: true,
            xmp: true,
            video_meta: true,
            detect_objects: false,
            colorspace: false,
            bands: false,
            sample_format: false,
            pages_number: false,
            alpha: false,
            check_transparency: false,
            palette_colors: 0,
            average: false,
            ignore_transparent: true,
            dominant_colors: false,
            build_missed: false,
            blurhash_x: 0,
            blurhash_y: 0,
            hashsums: Vec::new(),
        }
    }
}

impl InfoOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything enabled: all metadata, an 8-color palette, average and
    /// dominant colors, 4x4 blurhash, md5 and sha256 hashsums.
    pub fn complete() -> Self {
        Self {
            detect_objects: true,
            colorspace: true,
            bands: true,
            sample_format: true,
            pages_number: true,
            alpha: true,
            check_transparency: true,
            palette_colors: 8,
            average: true,
            dominant_colors: true,
            build_missed: true,
            blurhash_x: 4,
            blurhash_y: 4,
            hashsums: vec![HashDigest::Md5, HashDigest::Sha256],
            ..Self::default()
        }
    }

    pub fn size(mut self, size: bool) -> Self {
        self.size = size;
        self
    }

    pub fn format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn dimensions(mut self, dimensions: bool) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn exif(mut self, exif: bool) -> Self {
        self.exif = exif;
        self
    }

    pub fn iptc(mut self, iptc: bool) -> Self {
        self.iptc = iptc;
        self
    }

    pub fn xmp(mut self, xmp: bool) -> Self {
        self.xmp = xmp;
        self
    }

    pub fn video_meta(mut self, video_meta: bool) -> Self {
        self.video_meta = video_meta;
        self
    }

    pub fn detect_objects(mut self, detect_objects: bool) -> Self {
        self.detect_objects = detect_objects;
        self
    }

    pub fn colorspace(mut self, colorspace: bool) -> Self {
        self.colorspace = colorspace;
        self
    }

    pub fn bands(mut self, bands: bool) -> Self {
        self.bands = bands;
        self
    }

    pub fn sample_format(mut self, sample_format: bool) -> Self {
        self.sample_format = sample_format;
        self
    }

    pub fn pages_number(mut self, pages_number: bool) -> Self {
        self.pages_number = pages_number;
        self
    }

    pub fn alpha(mut self, alpha: bool, check_transparency: bool) -> Self {
        self.alpha = alpha;
        self.check_transparency = check_transparency;
        self
    }

    /// Enable palette extraction with the given color count, 2 to 256.
    /// Zero disables the palette.
    pub fn palette(mut self, colors: u16) -> Result<Self> {
        if colors != 0 && !(2..=256).contains(&colors) {
            return Err(Error::validation(
                "info_options",
                "palette colors must be 0 (disabled) or between 2 and 256",
            ));
        }
        self.palette_colors = colors;
        Ok(self)
    }

    pub fn average(mut self, average: bool, ignore_transparent: bool) -> Self {
        self.average = average;
        self.ignore_transparent = ignore_transparent;
        self
    }

    pub fn dominant_colors(mut self, dominant_colors: bool, build_missed: bool) -> Self {
        self.dominant_colors = dominant_colors;
        self.build_missed = build_missed;
        self
    }

    /// Enable blurhash calculation. Both component counts must be between
    /// 0 and 9; the directive is emitted only when both are positive.
    pub fn blurhash(mut self, x_components: u8, y_components: u8) -> Result<Self> {
        if x_components > 9 || y_components > 9 {
            return Err(Error::validation(
                "info_options",
                "blurhash components must be between 0 and 9",
            ));
        }
        self.blurhash_x = x_components;
        self.blurhash_y = y_components;
        Ok(self)
    }

    pub fn calc_hashsums(mut self, hashsums: Vec<HashDigest>) -> Self {
        self.hashsums = hashsums;
        self
    }
}

impl ProcessingOption for InfoOptions {
    fn name(&self) -> &str {
        ""
    }

    fn data(&self) -> Vec<Arg> {
        Vec::new()
    }

    fn value(&self) -> String {
        let mut directives: Vec<String> = Vec::new();

        let flags = [
            (self.size, "size"),
            (self.format, "format"),
            (self.dimensions, "dimensions"),
            (self.exif, "exif"),
            (self.iptc, "iptc"),
            (self.xmp, "xmp"),
            (self.video_meta, "video_meta"),
            (self.detect_objects, "detect_objects"),
            (self.colorspace, "colorspace"),
            (self.bands, "bands"),
            (self.sample_format, "sample_format"),
            (self.pages_number, "pages_number"),
        ];
        for (enabled, directive) in flags {
            if enabled {
                directives.push(format!("{directive}:1"));
            }
        }

        if self.alpha {
            let check = if self.check_transparency { "1" } else { "0" };
            directives.push(format!("alpha:1:{check}"));
        }
        if self.palette_colors > 0 {
            directives.push(format!("palette:{}", self.palette_colors));
        }
        if self.average {
            let ignore = if self.ignore_transparent { "1" } else { "0" };
            directives.push(format!("average:1:{ignore}"));
        }
        if self.dominant_colors {
            let missed = if self.build_missed { "1" } else { "0" };
            directives.push(format!("dominant_colors:1:{missed}"));
        }
        if self.blurhash_x > 0 && self.blurhash_y > 0 {
            directives.push(format!("blurhash:{}:{}", self.blurhash_x, self.blurhash_y));
        }
        if !self.hashsums.is_empty() {
            let types: Vec<&str> = self.hashsums.iter().map(|h| h.as_str()).collect();
            directives.push(format!("calc_hashsums:{}", types.join(":")));
        }

        directives.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashsum() {
        let hs = Hashsum::new(HashDigest::Sha256, "abc123").unwrap();
        assert_eq!(hs.value(), "hs:sha256:abc123");

        assert_eq!(Hashsum::none().value(), "hs:none");
        assert!(Hashsum::new(HashDigest::Md5, "").is_err());
    }

    #[test]
    fn test_info_defaults() {
        assert_eq!(
            InfoOptions::new().value(),
            "size:1/format:1/dimensions:1/exif:1/iptc:1/xmp:1/video_meta:1"
        );
    }

    #[test]
    fn test_info_disable_and_enable_directives() {
        let info = InfoOptions::new()
            .exif(false)
            .iptc(false)
            .xmp(false)
            .video_meta(false)
            .alpha(true, true)
            .average(true, false);
        assert_eq!(
            info.value(),
            "size:1/format:1/dimensions:1/alpha:1:1/average:1:0"
        );
    }

    #[test]
    fn test_info_palette_and_blurhash() {
        let info = InfoOptions::new()
            .palette(16)
            .unwrap()
            .blurhash(4, 3)
            .unwrap();
        assert!(info.value().ends_with("palette:16/blurhash:4:3"));

        assert!(InfoOptions::new().palette(1).is_err());
        assert!(InfoOptions::new().blurhash(10, 4).is_err());
    }

    #[test]
    fn test_info_blurhash_requires_both_components() {
        let info = InfoOptions::new().blurhash(4, 0).unwrap();
        assert!(!info.value().contains("blurhash"));
    }

    #[test]
    fn test_info_hashsums() {
        let info = InfoOptions::new().calc_hashsums(vec![HashDigest::Md5, HashDigest::Sha256]);
        assert!(info.value().ends_with("calc_hashsums:md5:sha256"));
    }

    #[test]
    fn test_info_complete() {
        let value = InfoOptions::complete().value();
        assert!(value.starts_with("size:1/format:1/dimensions:1"));
        assert!(value.contains("detect_objects:1"));
        assert!(value.contains("palette:8"));
        assert!(value.contains("blurhash:4:4"));
        assert!(value.ends_with("calc_hashsums:md5:sha256"));
    }
}
