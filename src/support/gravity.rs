//! Gravity anchor types for crop focal-region selection

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::support::format_float;

/// The fixed set of gravity anchor tokens understood by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityKind {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    Center,
    /// Content-aware smart crop
    Smart,
    /// Explicit focal point, coordinates in `[0, 1]` or absolute pixels
    FocusPoint,
    /// Object-detection based anchor
    Object,
    /// Object-detection anchor with per-class weights
    ObjectWeighted,
}

impl GravityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "no",
            Self::South => "so",
            Self::East => "ea",
            Self::West => "we",
            Self::NorthEast => "noea",
            Self::NorthWest => "nowe",
            Self::SouthEast => "soea",
            Self::SouthWest => "sowe",
            Self::Center => "ce",
            Self::Smart => "sm",
            Self::FocusPoint => "fp",
            Self::Object => "obj",
            Self::ObjectWeighted => "objw",
        }
    }

    /// Whether this kind carries object class lists instead of offsets
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object | Self::ObjectWeighted)
    }
}

impl fmt::Display for GravityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GravityKind {
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
            "obj" => Ok(Self::Object),
            "objw" => Ok(Self::ObjectWeighted),
            _ => Err(Error::validation(
                "gravity",
                format!("unknown gravity type: {s}"),
            )),
        }
    }
}

/// A fully specified gravity anchor: kind plus offsets or object classes
#[derive(Debug, Clone, PartialEq)]
pub struct GravityType {
    kind: GravityKind,
    x: f64,
    y: f64,
    classes: Vec<String>,
    weights: Vec<(String, f64)>,
}

impl GravityType {
    /// Gravity with optional offsets. Offsets default to 0 and must be
    /// non-negative; object kinds take their class lists via [`object`]
    /// and [`object_weighted`] instead.
    ///
    /// [`object`]: Self::object
    /// [`object_weighted`]: Self::object_weighted
    pub fn new(kind: GravityKind, x: Option<f64>, y: Option<f64>) -> Result<Self> {
        let x = x.unwrap_or(0.0);
        let y = y.unwrap_or(0.0);

        if !kind.is_object() {
            if x < 0.0 {
                return Err(Error::validation("gravity", format!("invalid X offset: {x}")));
            }
            if y < 0.0 {
                return Err(Error::validation("gravity", format!("invalid Y offset: {y}")));
            }
        }

        Ok(Self {
            kind,
            x,
            y,
            classes: Vec::new(),
            weights: Vec::new(),
        })
    }

    pub fn smart() -> Self {
        Self {
            kind: GravityKind::Smart,
            x: 0.0,
            y: 0.0,
            classes: Vec::new(),
            weights: Vec::new(),
        }
    }

    pub fn focus_point(x: f64, y: f64) -> Result<Self> {
        Self::new(GravityKind::FocusPoint, Some(x), Some(y))
    }

    pub fn object(classes: Vec<String>) -> Self {
        Self {
            kind: GravityKind::Object,
            x: 0.0,
            y: 0.0,
            classes,
            weights: Vec::new(),
        }
    }

    /// Weighted object gravity; pairs keep their insertion order on the wire
    pub fn object_weighted(weights: Vec<(String, f64)>) -> Self {
        Self {
            kind: GravityKind::ObjectWeighted,
            x: 0.0,
            y: 0.0,
            classes: Vec::new(),
            weights,
        }
    }

    pub fn kind(&self) -> GravityKind {
        self.kind
    }

    /// Wire representation of the gravity
    pub fn value(&self) -> String {
        match self.kind {
            GravityKind::Smart => self.kind.as_str().to_string(),
            GravityKind::FocusPoint => format!(
                "{}:{}:{}",
                self.kind,
                format_float(self.x),
                format_float(self.y)
            ),
            GravityKind::Object => {
                let mut parts = vec![self.kind.as_str().to_string()];
                parts.extend(self.classes.iter().cloned());
                parts.join(":")
            }
            GravityKind::ObjectWeighted => {
                let mut parts = vec![self.kind.as_str().to_string()];
                if !self.weights.is_empty() {
                    for (class, weight) in &self.weights {
                        parts.push(class.clone());
                        parts.push(format_float(*weight));
                    }
                } else {
                    // Classes without explicit weights default to weight 1
                    for class in &self.classes {
                        parts.push(class.clone());
                        parts.push("1".to_string());
                    }
                }
                parts.join(":")
            }
            _ => {
                if self.x == 0.0 && self.y == 0.0 {
                    self.kind.as_str().to_string()
                } else {
                    format!(
                        "{}:{}:{}",
                        self.kind,
                        format_float(self.x),
                        format_float(self.y)
                    )
                }
            }
        }
    }
}
