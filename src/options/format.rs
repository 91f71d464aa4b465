//! Output format and quality options

use std::fmt;
use std::str::FromStr;

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};
use crate::support::ImageFormat;

/// Output format (`f`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format(ImageFormat);

impl Format {
    pub fn new(format: ImageFormat) -> Self {
        Self(format)
    }
}

impl ProcessingOption for Format {
    fn name(&self) -> &str {
        "f"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.as_str().into()]
    }
}

/// Output quality (`q`), in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u8);

impl Quality {
    pub fn new(quality: u8) -> Result<Self> {
        if quality > 100 {
            return Err(Error::validation(
                "quality",
                format!("{quality} should be between 0 and 100"),
            ));
        }
        Ok(Self(quality))
    }
}

impl ProcessingOption for Quality {
    fn name(&self) -> &str {
        "q"
    }

    fn data(&self) -> Vec<Arg> {
        vec![(self.0 as i64).into()]
    }
}

/// Per-format quality overrides (`fq`), serialized as interleaved
/// `format:quality` pairs in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatQuality {
    options: Vec<(String, u8)>,
}

impl FormatQuality {
    pub fn new(options: Vec<(String, u8)>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::validation(
                "format_quality",
                "at least one format quality must be set",
            ));
        }
        for (format, quality) in &options {
            if *quality > 100 {
                return Err(Error::validation(
                    "format_quality",
                    format!("invalid quality for {format}: {quality} (should be between 0 and 100)"),
                ));
            }
        }
        Ok(Self { options })
    }
}

impl ProcessingOption for FormatQuality {
    fn name(&self) -> &str {
        "fq"
    }

    fn data(&self) -> Vec<Arg> {
        let mut data = Vec::with_capacity(self.options.len() * 2);
        for (format, quality) in &self.options {
            data.push(format.as_str().into());
            data.push((*quality as i64).into());
        }
        data
    }
}

/// Autoquality method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoqualityMethod {
    None,
    Size,
    Dssim,
    Ml,
}

impl AutoqualityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Size => "size",
            Self::Dssim => "dssim",
            Self::Ml => "ml",
        }
    }
}

impl fmt::Display for AutoqualityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AutoqualityMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "size" => Ok(Self::Size),
            "dssim" => Ok(Self::Dssim),
            "ml" => Ok(Self::Ml),
            _ => Err(Error::validation(
                "autoquality",
                format!("invalid method: {s}"),
            )),
        }
    }
}

/// Automatic quality tuning (`aq`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoquality {
    method: Option<AutoqualityMethod>,
    target: Option<f64>,
    min_quality: Option<u8>,
    max_quality: Option<u8>,
    allowed_error: Option<f64>,
}

impl Autoquality {
    pub fn new(
        method: Option<AutoqualityMethod>,
        target: Option<f64>,
        min_quality: Option<u8>,
        max_quality: Option<u8>,
        allowed_error: Option<f64>,
    ) -> Result<Self> {
        if let Some(min) = min_quality {
            check_quality_bound("min quality", min)?;
        }
        if let Some(max) = max_quality {
            check_quality_bound("max quality", max)?;
        }
        if let (Some(min), Some(max)) = (min_quality, max_quality) {
            if min > max {
                return Err(Error::validation(
                    "autoquality",
                    format!("min quality ({min}) cannot be greater than max quality ({max})"),
                ));
            }
        }
        if let Some(error) = allowed_error {
            if error < 0.0 {
                return Err(Error::validation(
                    "autoquality",
                    format!("invalid allowed error: {error}"),
                ));
            }
        }
        Ok(Self {
            method,
            target,
            min_quality,
            max_quality,
            allowed_error,
        })
    }

    /// Tune quality towards a target file size in bytes.
    pub fn size(target: f64, min_quality: Option<u8>, max_quality: Option<u8>) -> Result<Self> {
        Self::new(
            Some(AutoqualityMethod::Size),
            Some(target),
            min_quality,
            max_quality,
            None,
        )
    }

    /// Tune quality towards a target DSSIM value.
    pub fn dssim(
        target: f64,
        min_quality: Option<u8>,
        max_quality: Option<u8>,
        allowed_error: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            Some(AutoqualityMethod::Dssim),
            Some(target),
            min_quality,
            max_quality,
            allowed_error,
        )
    }

    /// Tune quality with the ML model towards a target DSSIM value.
    pub fn ml(
        target: f64,
        min_quality: Option<u8>,
        max_quality: Option<u8>,
        allowed_error: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            Some(AutoqualityMethod::Ml),
            Some(target),
            min_quality,
            max_quality,
            allowed_error,
        )
    }

    /// Disable autoquality.
    pub fn none() -> Self {
        Self {
            method: Some(AutoqualityMethod::None),
            target: None,
            min_quality: None,
            max_quality: None,
            allowed_error: None,
        }
    }
}

impl ProcessingOption for Autoquality {
    fn name(&self) -> &str {
        "aq"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.method.map(|method| method.as_str()).into(),
            self.target.into(),
            self.min_quality.map(|q| q as i64).into(),
            self.max_quality.map(|q| q as i64).into(),
            self.allowed_error.into(),
        ]
    }
}

/// DPI of the resulting image (`dpi`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dpi(u32);

impl Dpi {
    pub fn new(dpi: u32) -> Result<Self> {
        if dpi == 0 {
            return Err(Error::validation("dpi", "should be greater than 0"));
        }
        Ok(Self(dpi))
    }
}

impl ProcessingOption for Dpi {
    fn name(&self) -> &str {
        "dpi"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// JPEG encoder tuning (`jpgo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JpegOptions {
    progressive: Option<bool>,
    no_subsample: Option<bool>,
    trellis_quant: Option<bool>,
    overshoot_deringing: Option<bool>,
    optimize_scans: Option<bool>,
    quant_table: Option<u8>,
}

impl JpegOptions {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        progressive: Option<bool>,
        no_subsample: Option<bool>,
        trellis_quant: Option<bool>,
        overshoot_deringing: Option<bool>,
        optimize_scans: Option<bool>,
        quant_table: Option<u8>,
    ) -> Result<Self> {
        if let Some(table) = quant_table {
            if table > 8 {
                return Err(Error::validation(
                    "jpeg_options",
                    format!("invalid quantization table: {table} (should be between 0 and 8)"),
                ));
            }
        }
        Ok(Self {
            progressive,
            no_subsample,
            trellis_quant,
            overshoot_deringing,
            optimize_scans,
            quant_table,
        })
    }
}

impl ProcessingOption for JpegOptions {
    fn name(&self) -> &str {
        "jpgo"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.progressive.into(),
            self.no_subsample.into(),
            self.trellis_quant.into(),
            self.overshoot_deringing.into(),
            self.optimize_scans.into(),
            self.quant_table.map(|t| t as i64).into(),
        ]
    }
}

/// PNG encoder tuning (`pngo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngOptions {
    interlaced: Option<bool>,
    quantize: Option<bool>,
    quantization_colors: Option<u16>,
}

impl PngOptions {
    pub fn new(
        interlaced: Option<bool>,
        quantize: Option<bool>,
        quantization_colors: Option<u16>,
    ) -> Result<Self> {
        if let Some(colors) = quantization_colors {
            if !(2..=256).contains(&colors) {
                return Err(Error::validation(
                    "png_options",
                    format!("invalid quantization colors: {colors} (should be between 2 and 256)"),
                ));
            }
        }
        Ok(Self {
            interlaced,
            quantize,
            quantization_colors,
        })
    }
}

impl ProcessingOption for PngOptions {
    fn name(&self) -> &str {
        "pngo"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.interlaced.into(),
            self.quantize.into(),
            self.quantization_colors.map(|c| c as i64).into(),
        ]
    }
}

/// WebP compression method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebpCompression {
    Lossy,
    NearLossless,
    Lossless,
}

impl WebpCompression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lossy => "lossy",
            Self::NearLossless => "near_lossless",
            Self::Lossless => "lossless",
        }
    }
}

impl fmt::Display for WebpCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebpCompression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lossy" => Ok(Self::Lossy),
            "near_lossless" => Ok(Self::NearLossless),
            "lossless" => Ok(Self::Lossless),
            _ => Err(Error::validation(
                "webp_options",
                format!("invalid compression: {s} (should be lossy, near_lossless, or lossless)"),
            )),
        }
    }
}

/// WebP encoder tuning (`webpo`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WebpOptions {
    compression: Option<WebpCompression>,
    smart_subsample: Option<bool>,
}

impl WebpOptions {
    pub fn new(compression: Option<WebpCompression>, smart_subsample: Option<bool>) -> Self {
        Self {
            compression,
            smart_subsample,
        }
    }
}

impl ProcessingOption for WebpOptions {
    fn name(&self) -> &str {
        "webpo"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.compression.map(|c| c.as_str()).into(),
            self.smart_subsample.into(),
        ]
    }
}

fn check_quality_bound(field: &str, quality: u8) -> Result<()> {
    if quality < 1 || quality > 100 {
        return Err(Error::validation(
            "autoquality",
            format!("invalid {field}: {quality} (should be between 1 and 100)"),
        ));
    }
    Ok(())
}
