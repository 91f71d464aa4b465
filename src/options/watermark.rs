//! Watermark options

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};
use crate::support::GravityKind;

/// Where the watermark is placed. Gravity anchors plus the
/// watermark-only replicate and chessboard tilings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkPosition {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Center,
    Smart,
    FocusPoint,
    Replicate,
    Chessboard,
}

impl WatermarkPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => GravityKind::North.as_str(),
            Self::South => GravityKind::South.as_str(),
            Self::East => GravityKind::East.as_str(),
            Self::West => GravityKind::West.as_str(),
            Self::NorthEast => GravityKind::NorthEast.as_str(),
            Self::NorthWest => GravityKind::NorthWest.as_str(),
            Self::SouthEast => GravityKind::SouthEast.as_str(),
            Self::SouthWest => GravityKind::SouthWest.as_str(),
            Self::Center => GravityKind::Center.as_str(),
            Self::Smart => GravityKind::Smart.as_str(),
            Self::FocusPoint => GravityKind::FocusPoint.as_str(),
            Self::Replicate => "re",
            Self::Chessboard => "ch",
        }
    }
}

impl fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatermarkPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "no" => Ok(Self::North),
            "so" => Ok(Self::South),
            "ea" => Ok(Self::East),
            "we" => Ok(Self::West),
            "noea" => Ok(Self::NorthEast),
            "nowe" => Ok(Self::NorthWest),
            "soea" => Ok(Self::SouthEast),
            "sowe" => Ok(Self::SouthWest),
            "ce" => Ok(Self::Center),
            "sm" => Ok(Self::Smart),
            "fp" => Ok(Self::FocusPoint),
            "re" => Ok(Self::Replicate),
            "ch" => Ok(Self::Chessboard),
            _ => Err(Error::validation(
                "watermark",
                format!("invalid watermark position: {s}"),
            )),
        }
    }
}

/// Watermark overlay (`wm`): opacity, position, offsets, scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Watermark {
    opacity: f64,
    position: Option<WatermarkPosition>,
    x: Option<f64>,
    y: Option<f64>,
    scale: Option<f64>,
}

impl Watermark {
    pub fn new(
        opacity: f64,
        position: Option<WatermarkPosition>,
        x: Option<f64>,
        y: Option<f64>,
        scale: Option<f64>,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(Error::validation(
                "watermark",
                format!("invalid watermark opacity: {opacity}"),
            ));
        }
        if let Some(scale) = scale {
            if scale < 0.0 {
                return Err(Error::validation(
                    "watermark",
                    format!("invalid watermark scale: {scale}"),
                ));
            }
        }
        Ok(Self {
            opacity,
            position,
            x,
            y,
            scale,
        })
    }

    pub fn center(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::Center), x, y, scale)
    }

    pub fn north(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::North), x, y, scale)
    }

    pub fn south(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::South), x, y, scale)
    }

    pub fn east(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::East), x, y, scale)
    }

    pub fn west(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::West), x, y, scale)
    }

    pub fn north_east(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::NorthEast), x, y, scale)
    }

    pub fn north_west(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::NorthWest), x, y, scale)
    }

    pub fn south_east(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::SouthEast), x, y, scale)
    }

    pub fn south_west(opacity: f64, x: Option<f64>, y: Option<f64>, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::SouthWest), x, y, scale)
    }

    pub fn smart(opacity: f64, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::Smart), None, None, scale)
    }

    pub fn focus_point(opacity: f64, x: f64, y: f64, scale: Option<f64>) -> Result<Self> {
        Self::new(
            opacity,
            Some(WatermarkPosition::FocusPoint),
            Some(x),
            Some(y),
            scale,
        )
    }

    pub fn replicate(opacity: f64, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::Replicate), None, None, scale)
    }

    pub fn chessboard(opacity: f64, scale: Option<f64>) -> Result<Self> {
        Self::new(opacity, Some(WatermarkPosition::Chessboard), None, None, scale)
    }
}

impl ProcessingOption for Watermark {
    fn name(&self) -> &str {
        "wm"
    }

    fn data(&self) -> Vec<Arg> {
        let mut data: Vec<Arg> = vec![self.opacity.into()];

        // Offsets only make sense under a position, and y only under x.
        if let Some(position) = self.position {
            data.push(position.as_str().into());
            if let Some(x) = self.x {
                data.push(x.into());
                if let Some(y) = self.y {
                    data.push(y.into());
                }
            }
        }

        // Scale sits at the fifth slot; pad the skipped ones.
        if let Some(scale) = self.scale {
            while data.len() < 4 {
                data.push(Arg::Absent);
            }
            data.push(scale.into());
        }

        data
    }
}

/// Custom watermark image URL (`wmu`), carried base64url-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkUrl(String);

impl WatermarkUrl {
    pub fn new(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl ProcessingOption for WatermarkUrl {
    fn name(&self) -> &str {
        "wmu"
    }

    fn data(&self) -> Vec<Arg> {
        vec![URL_SAFE_NO_PAD.encode(self.0.as_bytes()).into()]
    }
}

/// Text watermark (`wmt`), carried base64url-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatermarkText(String);

impl WatermarkText {
    pub fn new(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl ProcessingOption for WatermarkText {
    fn name(&self) -> &str {
        "wmt"
    }

    fn data(&self) -> Vec<Arg> {
        vec![URL_SAFE_NO_PAD.encode(self.0.as_bytes()).into()]
    }
}

/// Watermark dimensions (`wms`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WatermarkSize {
    width: Option<u32>,
    height: Option<u32>,
}

impl WatermarkSize {
    pub fn new(width: Option<u32>, height: Option<u32>) -> Self {
        Self { width, height }
    }
}

impl ProcessingOption for WatermarkSize {
    fn name(&self) -> &str {
        "wms"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.width.into(), self.height.into()]
    }
}

/// Watermark drop shadow sigma (`wmsh`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkShadow(f64);

impl WatermarkShadow {
    pub fn new(sigma: f64) -> Result<Self> {
        if sigma <= 0.0 {
            return Err(Error::validation(
                "watermark_shadow",
                format!("invalid watermark shadow sigma: {sigma}"),
            ));
        }
        Ok(Self(sigma))
    }
}

impl ProcessingOption for WatermarkShadow {
    fn name(&self) -> &str {
        "wmsh"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Watermark rotation (`wmr`); the angle is normalized into `[0, 359]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatermarkRotate(i32);

impl WatermarkRotate {
    pub fn new(angle: i32) -> Self {
        Self(angle.rem_euclid(360))
    }
}

impl ProcessingOption for WatermarkRotate {
    fn name(&self) -> &str {
        "wmr"
    }

    fn data(&self) -> Vec<Arg> {
        vec![(self.0 as i64).into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_opacity_only() {
        let wm = Watermark::new(0.5, None, None, None, None).unwrap();
        assert_eq!(wm.value(), "wm:0.5");
    }

    #[test]
    fn test_position_with_offsets() {
        let wm = Watermark::south_east(0.7, Some(10.0), Some(20.0), None).unwrap();
        assert_eq!(wm.value(), "wm:0.7:soea:10:20");
    }

    #[test]
    fn test_scale_pads_skipped_slots() {
        let wm = Watermark::new(0.5, None, None, None, Some(0.3)).unwrap();
        assert_eq!(wm.value(), "wm:0.5::::0.3");

        let wm = Watermark::smart(0.8, Some(0.25)).unwrap();
        assert_eq!(wm.value(), "wm:0.8:sm:::0.25");
    }

    #[test]
    fn test_offsets_dropped_without_position() {
        // x and y only ride along behind a position token
        let wm = Watermark::new(0.5, None, Some(10.0), Some(20.0), None).unwrap();
        assert_eq!(wm.value(), "wm:0.5");
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    fn test_invalid_opacity(#[case] opacity: f64) {
        assert!(Watermark::new(opacity, None, None, None, None).is_err());
    }

    #[test]
    fn test_invalid_scale() {
        assert!(Watermark::new(0.5, None, None, None, Some(-1.0)).is_err());
    }

    #[test]
    fn test_tiling_positions() {
        assert_eq!(Watermark::replicate(0.4, None).unwrap().value(), "wm:0.4:re");
        assert_eq!(Watermark::chessboard(0.4, None).unwrap().value(), "wm:0.4:ch");
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(
            "soea".parse::<WatermarkPosition>().unwrap(),
            WatermarkPosition::SouthEast
        );
        assert!("diag".parse::<WatermarkPosition>().is_err());
    }

    #[test]
    fn test_encoded_payloads() {
        let wmu = WatermarkUrl::new("https://example.com/logo.png");
        assert_eq!(
            wmu.value(),
            format!("wmu:{}", URL_SAFE_NO_PAD.encode("https://example.com/logo.png"))
        );

        let wmt = WatermarkText::new("© Example");
        assert_eq!(wmt.value(), format!("wmt:{}", URL_SAFE_NO_PAD.encode("© Example")));
    }

    #[test]
    fn test_size_shadow_rotate() {
        assert_eq!(WatermarkSize::new(Some(200), None).value(), "wms:200");
        assert_eq!(WatermarkSize::new(None, Some(100)).value(), "wms::100");
        assert_eq!(WatermarkShadow::new(3.0).unwrap().value(), "wmsh:3");
        assert!(WatermarkShadow::new(0.0).is_err());
        assert_eq!(WatermarkRotate::new(-90).value(), "wmr:270");
        assert_eq!(WatermarkRotate::new(450).value(), "wmr:90");
    }
}
