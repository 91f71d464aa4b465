//! Gravity-based options: crop anchor (`g`) and objects position (`op`)

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};
use crate::support::{format_float, GravityKind, GravityType};

#[derive(Debug, Clone, PartialEq)]
enum GravityData {
    /// Compass / smart / focus-point gravity with optional offsets
    Offsets {
        kind: GravityKind,
        x: Option<f64>,
        y: Option<f64>,
    },
    Object(Vec<String>),
    Weighted(Vec<(String, f64)>),
    /// Pre-serialized [`GravityType`], emitted verbatim after the name
    Resolved(String),
}

/// Crop anchor option (`g`)
///
/// Constructed from structured fields, from a pre-built [`GravityType`],
/// or parsed from a colon-delimited string such as `ce:10:20`,
/// `obj:face:cat` or `objw:face:2:cat:1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gravity(GravityData);

impl Gravity {
    pub fn new(kind: GravityKind, x: Option<f64>, y: Option<f64>) -> Result<Self> {
        match kind {
            GravityKind::Object => Ok(Self(GravityData::Object(Vec::new()))),
            GravityKind::ObjectWeighted => Ok(Self(GravityData::Weighted(Vec::new()))),
            _ => {
                if let Some(x) = x {
                    if x < 0.0 {
                        return Err(Error::validation("gravity", format!("invalid X: {x}")));
                    }
                }
                if let Some(y) = y {
                    if y < 0.0 {
                        return Err(Error::validation("gravity", format!("invalid Y: {y}")));
                    }
                }
                Ok(Self(GravityData::Offsets { kind, x, y }))
            }
        }
    }

    /// Wrap a fully resolved gravity value
    pub fn of(gravity: &GravityType) -> Self {
        Self(GravityData::Resolved(gravity.value()))
    }

    pub fn smart() -> Self {
        Self(GravityData::Offsets {
            kind: GravityKind::Smart,
            x: None,
            y: None,
        })
    }

    pub fn focus_point(x: f64, y: f64) -> Result<Self> {
        Self::new(GravityKind::FocusPoint, Some(x), Some(y))
    }

    pub fn object(classes: Vec<String>) -> Self {
        Self(GravityData::Object(classes))
    }

    /// Weighted object gravity; pairs keep their insertion order on the wire
    pub fn object_weighted(weights: Vec<(String, f64)>) -> Self {
        Self(GravityData::Weighted(weights))
    }

    /// Parse a colon-delimited gravity string: `type[:x[:y]]`,
    /// `obj:class1:class2...` or `objw:class1:weight1:class2:weight2...`
    pub fn parse(gravity: &str) -> Result<Self> {
        let mut params = gravity.split(':');
        let kind: GravityKind = params.next().unwrap_or_default().parse()?;
        let params: Vec<&str> = params.collect();

        match kind {
            GravityKind::Object => Ok(Self(GravityData::Object(
                params.into_iter().map(String::from).collect(),
            ))),
            GravityKind::ObjectWeighted => {
                if params.len() % 2 != 0 {
                    return Err(Error::validation(
                        "gravity",
                        "weighted object list must be class:weight pairs",
                    ));
                }
                let mut weights = Vec::with_capacity(params.len() / 2);
                for pair in params.chunks(2) {
                    let weight: f64 = pair[1].parse().map_err(|_| {
                        Error::validation(
                            "gravity",
                            format!("object weight should be numeric: {}", pair[1]),
                        )
                    })?;
                    weights.push((pair[0].to_string(), weight));
                }
                Ok(Self(GravityData::Weighted(weights)))
            }
            _ => {
                let mut offsets = [None, None];
                for (offset, param) in offsets.iter_mut().zip(&params) {
                    let parsed: f64 = param.parse().map_err(|_| {
                        Error::validation("gravity", format!("offset should be numeric: {param}"))
                    })?;
                    *offset = Some(parsed);
                }
                Self::new(kind, offsets[0], offsets[1])
            }
        }
    }
}

impl ProcessingOption for Gravity {
    fn name(&self) -> &str {
        "g"
    }

    fn data(&self) -> Vec<Arg> {
        match &self.0 {
            GravityData::Offsets { kind, x, y } => {
                vec![kind.as_str().into(), (*x).into(), (*y).into()]
            }
            GravityData::Object(classes) => {
                let mut data = vec![Arg::from(GravityKind::Object.as_str())];
                data.extend(classes.iter().map(|class| Arg::from(class.as_str())));
                data
            }
            GravityData::Weighted(weights) => {
                let mut data = vec![Arg::from(GravityKind::ObjectWeighted.as_str())];
                for (class, weight) in weights {
                    data.push(class.as_str().into());
                    data.push(format_float(*weight).into());
                }
                data
            }
            GravityData::Resolved(value) => vec![value.as_str().into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum PositionData {
    Anchor {
        kind: GravityKind,
        x: Option<f64>,
        y: Option<f64>,
    },
    FocusPoint {
        x: f64,
        y: f64,
    },
    Proportional,
}

/// Objects position option (`op`), controlling how detected objects are
/// laid out in the crop area
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectsPosition(PositionData);

impl ObjectsPosition {
    const PROPORTIONAL: &'static str = "prop";

    pub fn new(kind: GravityKind, x: Option<f64>, y: Option<f64>) -> Result<Self> {
        if let Some(x) = x {
            if x < 0.0 {
                return Err(Error::validation("position", format!("invalid X: {x}")));
            }
        }
        if let Some(y) = y {
            if y < 0.0 {
                return Err(Error::validation("position", format!("invalid Y: {y}")));
            }
        }
        Ok(Self(PositionData::Anchor { kind, x, y }))
    }

    /// Focus-point position; both coordinates are required and relative
    pub fn focus_point(x: f64, y: f64) -> Result<Self> {
        for coordinate in [x, y] {
            if !(0.0..=1.0).contains(&coordinate) {
                return Err(Error::validation(
                    "position",
                    "focus point coordinates must be between 0 and 1",
                ));
            }
        }
        Ok(Self(PositionData::FocusPoint { x, y }))
    }

    pub fn proportional() -> Self {
        Self(PositionData::Proportional)
    }

    /// Parse a colon-delimited position string: `prop`, `fp:x:y`
    /// or `type[:x[:y]]`
    pub fn parse(position: &str) -> Result<Self> {
        let mut params = position.split(':');
        let kind = params.next().unwrap_or_default();
        let params: Vec<&str> = params.collect();

        if kind == Self::PROPORTIONAL {
            return Ok(Self::proportional());
        }

        let mut offsets = [None, None];
        for (offset, param) in offsets.iter_mut().zip(&params) {
            let parsed: f64 = param.parse().map_err(|_| {
                Error::validation("position", format!("offset should be numeric: {param}"))
            })?;
            *offset = Some(parsed);
        }

        let kind: GravityKind = kind.parse()?;
        if kind == GravityKind::FocusPoint {
            match (offsets[0], offsets[1]) {
                (Some(x), Some(y)) => return Self::focus_point(x, y),
                _ => {
                    return Err(Error::validation(
                        "position",
                        "focus point requires both X and Y coordinates",
                    ))
                }
            }
        }

        Self::new(kind, offsets[0], offsets[1])
    }
}

impl ProcessingOption for ObjectsPosition {
    fn name(&self) -> &str {
        "op"
    }

    fn data(&self) -> Vec<Arg> {
        match &self.0 {
            PositionData::Anchor { kind, x, y } => {
                vec![kind.as_str().into(), (*x).into(), (*y).into()]
            }
            PositionData::FocusPoint { x, y } => {
                vec![GravityKind::FocusPoint.as_str().into(), (*x).into(), (*y).into()]
            }
            PositionData::Proportional => vec![Self::PROPORTIONAL.into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_smart() {
        assert_eq!(Gravity::smart().value(), "g:sm");
    }

    #[test]
    fn test_compass_trims_missing_offsets() {
        let gravity = Gravity::new(GravityKind::Center, None, None).unwrap();
        assert_eq!(gravity.value(), "g:ce");

        let gravity = Gravity::new(GravityKind::Center, Some(200.0), None).unwrap();
        assert_eq!(gravity.value(), "g:ce:200");

        let gravity = Gravity::new(GravityKind::NorthEast, Some(10.0), Some(20.0)).unwrap();
        assert_eq!(gravity.value(), "g:noea:10:20");
    }

    #[test]
    fn test_object_classes() {
        let gravity = Gravity::object(vec!["face".to_string(), "cat".to_string()]);
        assert_eq!(gravity.value(), "g:obj:face:cat");
    }

    #[test]
    fn test_object_weighted() {
        let gravity =
            Gravity::object_weighted(vec![("face".to_string(), 2.0), ("cat".to_string(), 1.0)]);
        assert_eq!(gravity.value(), "g:objw:face:2:cat:1");
    }

    #[test]
    fn test_from_gravity_type() {
        let gravity = Gravity::of(&GravityType::focus_point(0.5, 0.75).unwrap());
        assert_eq!(gravity.value(), "g:fp:0.5:0.75");
    }

    #[rstest]
    #[case("sm", "g:sm")]
    #[case("ce:200:250", "g:ce:200:250")]
    #[case("no:10", "g:no:10")]
    #[case("obj:face:cat", "g:obj:face:cat")]
    #[case("objw:face:2:cat:1", "g:objw:face:2:cat:1")]
    fn test_parse(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Gravity::parse(input).unwrap().value(), expected);
    }

    #[rstest]
    #[case("unknown")]
    #[case("ce:abc")]
    #[case("ce:-5")]
    #[case("objw:face")]
    #[case("objw:face:heavy")]
    fn test_parse_failures(#[case] input: &str) {
        assert!(Gravity::parse(input).is_err());
    }

    #[test]
    fn test_position_proportional() {
        assert_eq!(ObjectsPosition::proportional().value(), "op:prop");
        assert_eq!(ObjectsPosition::parse("prop").unwrap().value(), "op:prop");
    }

    #[test]
    fn test_position_focus_point() {
        let position = ObjectsPosition::focus_point(0.5, 0.5).unwrap();
        assert_eq!(position.value(), "op:fp:0.5:0.5");

        assert!(ObjectsPosition::focus_point(1.5, 0.5).is_err());
        assert!(ObjectsPosition::parse("fp:0.5").is_err());
    }

    #[test]
    fn test_position_anchor() {
        let position = ObjectsPosition::new(GravityKind::North, Some(10.0), None).unwrap();
        assert_eq!(position.value(), "op:no:10");
    }
}
