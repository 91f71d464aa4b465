//! Target format tokens for the `.ext` / `@ext` path suffix

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Output format supported by the receiving server
///
/// `jpg` and `jpeg` are distinct wire tokens and compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpg,
    Jpeg,
    Webp,
    Avif,
    Gif,
    Ico,
    Svg,
    Heic,
    Bmp,
    Tiff,
    Pdf,
    Mp4,
    /// JPEG XL
    Jxl,
    /// Let the server pick the best format
    Best,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
            Self::Avif => "avif",
            Self::Gif => "gif",
            Self::Ico => "ico",
            Self::Svg => "svg",
            Self::Heic => "heic",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Pdf => "pdf",
            Self::Mp4 => "mp4",
            Self::Jxl => "jxl",
            Self::Best => "best",
        }
    }

    /// Compare against a raw extension token; unparseable tokens never match
    pub fn matches(&self, extension: &str) -> bool {
        extension
            .parse::<ImageFormat>()
            .map(|format| format == *self)
            .unwrap_or(false)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" => Ok(Self::Jpg),
            "jpeg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            "avif" => Ok(Self::Avif),
            "gif" => Ok(Self::Gif),
            "ico" => Ok(Self::Ico),
            "svg" => Ok(Self::Svg),
            "heic" => Ok(Self::Heic),
            "bmp" => Ok(Self::Bmp),
            "tiff" => Ok(Self::Tiff),
            "pdf" => Ok(Self::Pdf),
            "mp4" => Ok(Self::Mp4),
            "jxl" => Ok(Self::Jxl),
            "best" => Ok(Self::Best),
            _ => Err(Error::validation(
                "format",
                format!("unsupported image format: {s}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes() {
        assert_eq!(" WEBP ".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
        assert_eq!("jpg".parse::<ImageFormat>().unwrap(), ImageFormat::Jpg);
        assert!("tga".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_jpg_and_jpeg_are_distinct() {
        assert_ne!(
            "jpg".parse::<ImageFormat>().unwrap(),
            "jpeg".parse::<ImageFormat>().unwrap()
        );
    }

    #[test]
    fn test_matches() {
        assert!(ImageFormat::Webp.matches("webp"));
        assert!(ImageFormat::Webp.matches(" WebP"));
        assert!(!ImageFormat::Webp.matches("jpg"));
        assert!(!ImageFormat::Webp.matches(""));
        assert!(!ImageFormat::Webp.matches("not-a-format"));
    }
}
