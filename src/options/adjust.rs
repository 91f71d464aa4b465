//! Color and tone adjustment options

use std::fmt;
use std::str::FromStr;

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};
use crate::support::Color;

/// Brightness shift (`br`), in `[-255, 255]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f64);

impl Brightness {
    pub fn new(brightness: f64) -> Result<Self> {
        if !(-255.0..=255.0).contains(&brightness) {
            return Err(Error::validation(
                "brightness",
                format!("{brightness} is not between -255 and 255"),
            ));
        }
        Ok(Self(brightness))
    }
}

impl ProcessingOption for Brightness {
    fn name(&self) -> &str {
        "br"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Contrast multiplier (`co`), must be positive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast(f64);

impl Contrast {
    pub fn new(contrast: f64) -> Result<Self> {
        if contrast <= 0.0 {
            return Err(Error::validation(
                "contrast",
                format!("{contrast} should be greater than 0"),
            ));
        }
        Ok(Self(contrast))
    }
}

impl ProcessingOption for Contrast {
    fn name(&self) -> &str {
        "co"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Saturation multiplier (`sa`), non-negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saturation(f64);

impl Saturation {
    pub fn new(saturation: f64) -> Result<Self> {
        if saturation < 0.0 {
            return Err(Error::validation(
                "saturation",
                format!("{saturation} should be greater than or equal to 0"),
            ));
        }
        Ok(Self(saturation))
    }
}

impl ProcessingOption for Saturation {
    fn name(&self) -> &str {
        "sa"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Combined brightness/contrast/saturation adjustment (`a`)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Adjust {
    brightness: Option<f64>,
    contrast: Option<f64>,
    saturation: Option<f64>,
}

impl Adjust {
    pub fn new(
        brightness: Option<f64>,
        contrast: Option<f64>,
        saturation: Option<f64>,
    ) -> Self {
        Self {
            brightness,
            contrast,
            saturation,
        }
    }
}

impl ProcessingOption for Adjust {
    fn name(&self) -> &str {
        "a"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.brightness.into(),
            self.contrast.into(),
            self.saturation.into(),
        ]
    }
}

/// Gaussian blur sigma (`bl`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blur(f64);

impl Blur {
    pub fn new(sigma: f64) -> Result<Self> {
        if sigma < 0.0 {
            return Err(Error::validation("blur", format!("invalid sigma: {sigma}")));
        }
        Ok(Self(sigma))
    }
}

impl ProcessingOption for Blur {
    fn name(&self) -> &str {
        "bl"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Pixelation block size (`pix`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixelate(u32);

impl Pixelate {
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::validation("pixelate", "size should be greater than 0"));
        }
        Ok(Self(size))
    }
}

impl ProcessingOption for Pixelate {
    fn name(&self) -> &str {
        "pix"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// When unsharp masking is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharpenMode {
    Auto,
    None,
    Always,
}

impl SharpenMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
            Self::Always => "always",
        }
    }
}

impl fmt::Display for SharpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SharpenMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Self::Auto),
            "none" => Ok(Self::None),
            "always" => Ok(Self::Always),
            _ => Err(Error::validation(
                "sharpen_mode",
                format!("should be auto, none, or always, got: {s}"),
            )),
        }
    }
}

/// Unsharp masking (`ush`): mode, weight, divider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMasking {
    mode: Option<SharpenMode>,
    weight: Option<f64>,
    divider: Option<f64>,
}

impl UnsharpMasking {
    pub fn new(
        mode: Option<SharpenMode>,
        weight: Option<f64>,
        divider: Option<f64>,
    ) -> Result<Self> {
        if let Some(weight) = weight {
            if weight <= 0.0 {
                return Err(Error::validation(
                    "unsharp_masking",
                    format!("invalid weight: {weight}"),
                ));
            }
        }
        if let Some(divider) = divider {
            if divider <= 0.0 {
                return Err(Error::validation(
                    "unsharp_masking",
                    format!("invalid divider: {divider}"),
                ));
            }
        }
        Ok(Self {
            mode,
            weight,
            divider,
        })
    }
}

impl ProcessingOption for UnsharpMasking {
    fn name(&self) -> &str {
        "ush"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.mode.map(|mode| mode.as_str()).into(),
            self.weight.into(),
            self.divider.into(),
        ]
    }
}

/// Monochrome effect (`mc`): intensity and an optional tint color
#[derive(Debug, Clone, PartialEq)]
pub struct Monochrome {
    intensity: f64,
    color: Option<String>,
}

impl Monochrome {
    pub fn new(intensity: f64, color: Option<&str>) -> Result<Self> {
        check_unit_interval("monochrome", "intensity", intensity)?;
        let color = validate_hex(color)?;
        Ok(Self { intensity, color })
    }
}

impl ProcessingOption for Monochrome {
    fn name(&self) -> &str {
        "mc"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.intensity.into(), self.color.as_deref().into()]
    }
}

/// Duotone effect (`dt`): intensity plus shadow/highlight colors
#[derive(Debug, Clone, PartialEq)]
pub struct Duotone {
    intensity: f64,
    color1: Option<String>,
    color2: Option<String>,
}

impl Duotone {
    pub fn new(intensity: f64, color1: Option<&str>, color2: Option<&str>) -> Result<Self> {
        check_unit_interval("duotone", "intensity", intensity)?;
        Ok(Self {
            intensity,
            color1: validate_hex(color1)?,
            color2: validate_hex(color2)?,
        })
    }
}

impl ProcessingOption for Duotone {
    fn name(&self) -> &str {
        "dt"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.intensity.into(),
            self.color1.as_deref().into(),
            self.color2.as_deref().into(),
        ]
    }
}

/// Colorize effect (`col`)
#[derive(Debug, Clone, PartialEq)]
pub struct Colorize {
    opacity: f64,
    color: Option<String>,
    keep_alpha: Option<bool>,
}

impl Colorize {
    pub fn new(opacity: f64, color: Option<&str>, keep_alpha: Option<bool>) -> Result<Self> {
        check_unit_interval("colorize", "opacity", opacity)?;
        Ok(Self {
            opacity,
            color: validate_hex(color)?,
            keep_alpha,
        })
    }
}

impl ProcessingOption for Colorize {
    fn name(&self) -> &str {
        "col"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.opacity.into(),
            self.color.as_deref().into(),
            self.keep_alpha.into(),
        ]
    }
}

/// Gradient direction: a named direction or an angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    Down,
    Up,
    Right,
    Left,
    Angle(u16),
}

impl GradientDirection {
    fn wire(&self) -> String {
        match self {
            Self::Down => "down".to_string(),
            Self::Up => "up".to_string(),
            Self::Right => "right".to_string(),
            Self::Left => "left".to_string(),
            Self::Angle(angle) => angle.to_string(),
        }
    }
}

/// Gradient overlay (`gr`)
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    opacity: f64,
    color: Option<String>,
    direction: Option<GradientDirection>,
    start: Option<f64>,
    stop: Option<f64>,
}

impl Gradient {
    pub fn new(
        opacity: f64,
        color: Option<&str>,
        direction: Option<GradientDirection>,
        start: Option<f64>,
        stop: Option<f64>,
    ) -> Result<Self> {
        check_unit_interval("gradient", "opacity", opacity)?;
        if let Some(GradientDirection::Angle(angle)) = direction {
            if angle > 359 {
                return Err(Error::validation(
                    "gradient",
                    format!("angle should be between 0 and 359, got: {angle}"),
                ));
            }
        }
        if let Some(start) = start {
            check_unit_interval("gradient", "start", start)?;
        }
        if let Some(stop) = stop {
            check_unit_interval("gradient", "stop", stop)?;
        }
        Ok(Self {
            opacity,
            color: validate_hex(color)?,
            direction,
            start,
            stop,
        })
    }
}

impl ProcessingOption for Gradient {
    fn name(&self) -> &str {
        "gr"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.opacity.into(),
            self.color.as_deref().into(),
            self.direction.map(|direction| direction.wire()).into(),
            self.start.into(),
            self.stop.into(),
        ]
    }
}

/// Background fill color (`bg`)
#[derive(Debug, Clone, PartialEq)]
pub struct Background(Color);

impl Background {
    pub fn new(color: Color) -> Self {
        Self(color)
    }
}

impl ProcessingOption for Background {
    fn name(&self) -> &str {
        "bg"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.value().into()]
    }
}

/// Background alpha (`bga`), in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundAlpha(f64);

impl BackgroundAlpha {
    pub fn new(alpha: f64) -> Result<Self> {
        check_unit_interval("background_alpha", "alpha", alpha)?;
        Ok(Self(alpha))
    }
}

impl ProcessingOption for BackgroundAlpha {
    fn name(&self) -> &str {
        "bga"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

fn check_unit_interval(param: &str, field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::validation(
            param,
            format!("{field} should be between 0 and 1, got: {value}"),
        ));
    }
    Ok(())
}

fn validate_hex(color: Option<&str>) -> Result<Option<String>> {
    match color {
        Some(color) => {
            Color::from_hex(color)?;
            Ok(Some(color.to_string()))
        }
        None => Ok(None),
    }
}
