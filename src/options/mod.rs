//! Transformation option protocol and catalog
//!
//! Every option is one named, ordered-argument directive serialized as a
//! single path segment of the form `name:value1:value2:...`. The trait
//! derives the segment from `name()` and `data()`; options validate their
//! parameters at construction and never fail during serialization.

mod adjust;
mod format;
mod gravity;
mod info;
mod misc;
mod size;
mod trim;
mod video;
mod watermark;

pub use adjust::{
    Adjust, Background, BackgroundAlpha, Blur, Brightness, Colorize, Contrast, Duotone, Gradient,
    GradientDirection, Monochrome, Pixelate, Saturation, SharpenMode, UnsharpMasking,
};
pub use format::{
    AutoqualityMethod, Autoquality, Dpi, Format, FormatQuality, JpegOptions, PngOptions, Quality,
    WebpCompression, WebpOptions,
};
pub use gravity::{Gravity, ObjectsPosition};
pub use info::{HashDigest, Hashsum, InfoOptions};
pub use misc::{
    AutoRotate, BlurDetections, CacheBuster, DisableAnimation, DrawDetections, Expires,
    FallbackImageUrl, Filename, KeepCopyright, Page, Pages, Raw, ReturnAttachment, Rotate,
    StripColorProfile, Style,
};
pub use size::{Dpr, Height, Padding, Resize, ResizingType, Width, Zoom};
pub use trim::Trim;
pub use video::{
    VideoThumbnailAnimation, VideoThumbnailKeyframes, VideoThumbnailSecond, VideoThumbnailTile,
};
pub use watermark::{
    Watermark, WatermarkPosition, WatermarkRotate, WatermarkShadow, WatermarkSize, WatermarkText,
    WatermarkUrl,
};

use crate::support::format_float;

/// One positional argument of an option
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Omitted value: dropped from the tail, kept as an empty segment
    /// in the interior so later arguments keep their index
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Arg {
    fn format(&self) -> Option<String> {
        match self {
            Arg::Absent => None,
            Arg::Bool(true) => Some("1".to_string()),
            Arg::Bool(false) => Some("0".to_string()),
            Arg::Int(value) => Some(value.to_string()),
            Arg::Float(value) => Some(format_float(*value)),
            Arg::Str(value) => Some(value.clone()),
        }
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<u32> for Arg {
    fn from(value: u32) -> Self {
        Arg::Int(value as i64)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Arg::Absent)
    }
}

/// The option contract: a short wire token plus an ordered argument list
///
/// `value()` is derived and always begins with `name()`.
pub trait ProcessingOption: Send + Sync {
    /// Short wire token (e.g. `w` for width)
    fn name(&self) -> &str;

    /// Ordered positional arguments
    fn data(&self) -> Vec<Arg>;

    /// Path segment: name and formatted arguments joined with `:`.
    ///
    /// Trailing absent arguments are dropped entirely; interior absent
    /// arguments are rendered as empty segments so that positional
    /// arguments after them keep their index. Removing interior absents
    /// would silently shift later arguments and corrupt multi-argument
    /// options such as `Trim` or `Watermark`.
    fn value(&self) -> String {
        let mut values: Vec<Option<String>> = vec![Some(self.name().to_string())];
        values.extend(self.data().iter().map(Arg::format));

        while values.len() > 1 && values.last() == Some(&None) {
            values.pop();
        }

        values
            .into_iter()
            .map(|value| value.unwrap_or_default())
            .collect::<Vec<_>>()
            .join(":")
    }
}
