//! Border trimming option

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};
use crate::support::Color;

/// Trim solid borders (`t`): threshold, optional border color,
/// optional equal-trimming flags
#[derive(Debug, Clone, PartialEq)]
pub struct Trim {
    threshold: f64,
    color: Option<Color>,
    equal_hor: Option<bool>,
    equal_ver: Option<bool>,
}

impl Trim {
    pub fn new(
        threshold: f64,
        color: Option<Color>,
        equal_hor: Option<bool>,
        equal_ver: Option<bool>,
    ) -> Result<Self> {
        if threshold < 0.0 {
            return Err(Error::validation(
                "trim",
                format!("invalid threshold: {threshold}"),
            ));
        }
        Ok(Self {
            threshold,
            color,
            equal_hor,
            equal_ver,
        })
    }
}

impl ProcessingOption for Trim {
    fn name(&self) -> &str {
        "t"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.threshold.into(),
            self.color.as_ref().map(|color| color.value()).into(),
            self.equal_hor.into(),
            self.equal_ver.into(),
        ]
    }
}
