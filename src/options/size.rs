//! Resize and dimension options

use std::fmt;
use std::str::FromStr;

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};

/// Target width in pixels (`w`); 0 keeps the source width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Width(u32);

impl Width {
    pub fn new(width: u32) -> Self {
        Self(width)
    }
}

impl ProcessingOption for Width {
    fn name(&self) -> &str {
        "w"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Target height in pixels (`h`); 0 keeps the source height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height(u32);

impl Height {
    pub fn new(height: u32) -> Self {
        Self(height)
    }
}

impl ProcessingOption for Height {
    fn name(&self) -> &str {
        "h"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Device pixel ratio multiplier (`dpr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dpr(u32);

impl Dpr {
    pub fn new(dpr: u32) -> Result<Self> {
        if dpr == 0 {
            return Err(Error::validation("dpr", "must be greater than 0"));
        }
        Ok(Self(dpr))
    }
}

impl ProcessingOption for Dpr {
    fn name(&self) -> &str {
        "dpr"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Zoom factor (`z`), one shared factor or separate X/Y
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    x: f64,
    y: Option<f64>,
}

impl Zoom {
    pub fn new(factor: f64) -> Result<Self> {
        Self::check(factor)?;
        Ok(Self { x: factor, y: None })
    }

    pub fn xy(x: f64, y: f64) -> Result<Self> {
        Self::check(x)?;
        Self::check(y)?;
        Ok(Self { x, y: Some(y) })
    }

    fn check(factor: f64) -> Result<()> {
        if factor <= 0.0 {
            return Err(Error::validation("zoom", format!("invalid factor: {factor}")));
        }
        Ok(())
    }
}

impl ProcessingOption for Zoom {
    fn name(&self) -> &str {
        "z"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.x.into(), self.y.into()]
    }
}

/// Padding in pixels (`pd`): top, right, bottom, left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    top: Option<u32>,
    right: Option<u32>,
    bottom: Option<u32>,
    left: Option<u32>,
}

impl Padding {
    pub fn new(
        top: Option<u32>,
        right: Option<u32>,
        bottom: Option<u32>,
        left: Option<u32>,
    ) -> Result<Self> {
        if top.is_none() && right.is_none() && bottom.is_none() && left.is_none() {
            return Err(Error::validation("padding", "at least one side must be set"));
        }
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}

impl ProcessingOption for Padding {
    fn name(&self) -> &str {
        "pd"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.top.into(),
            self.right.into(),
            self.bottom.into(),
            self.left.into(),
        ]
    }
}

/// How the image is fitted into the target dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizingType {
    Fit,
    Fill,
    FillDown,
    Force,
    Auto,
}

impl ResizingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::FillDown => "fill-down",
            Self::Force => "force",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ResizingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResizingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fit" => Ok(Self::Fit),
            "fill" => Ok(Self::Fill),
            "fill-down" => Ok(Self::FillDown),
            "force" => Ok(Self::Force),
            "auto" => Ok(Self::Auto),
            _ => Err(Error::validation(
                "resizing_type",
                format!("unknown resizing type: {s}"),
            )),
        }
    }
}

impl ProcessingOption for ResizingType {
    fn name(&self) -> &str {
        "rt"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.as_str().into()]
    }
}

/// Combined resize directive (`rs`): type, dimensions and extension flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    resizing_type: ResizingType,
    width: Option<u32>,
    height: Option<u32>,
    enlarge: Option<bool>,
    extend: Option<bool>,
}

impl Resize {
    pub fn new(resizing_type: ResizingType, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            resizing_type,
            width,
            height,
            enlarge: None,
            extend: None,
        }
    }

    /// Allow upscaling beyond the source size
    pub fn enlarge(mut self, enlarge: bool) -> Self {
        self.enlarge = Some(enlarge);
        self
    }

    /// Extend the canvas when the resized image is smaller than the target
    pub fn extend(mut self, extend: bool) -> Self {
        self.extend = Some(extend);
        self
    }
}

impl ProcessingOption for Resize {
    fn name(&self) -> &str {
        "rs"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.resizing_type.as_str().into(),
            self.width.into(),
            self.height.into(),
            self.enlarge.into(),
            self.extend.into(),
        ]
    }
}
