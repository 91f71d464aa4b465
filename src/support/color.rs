//! RGB color value with format-preserving serialization
//!
//! A color parsed from a hex string serializes back to hex; one parsed from
//! an `R:G:B` triplet serializes back to a triplet. Callers who construct a
//! color from a triplet expect a triplet back on the wire.

use crate::error::{Error, Result};
use crate::support::format_float;

/// The notation a color was constructed from, reproduced by `value()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorFormat {
    Hex,
    Rgb,
}

/// Immutable RGB color with optional alpha
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: Option<f64>,
    format: ColorFormat,
}

impl Color {
    /// Parse a 3- or 6-digit hex color, optionally prefixed with `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim_start_matches('#');

        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return Err(Error::validation("color", format!("invalid hex color: {hex}"))),
        };

        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| Error::validation("color", format!("invalid hex color: {hex}")))
        };

        Ok(Self {
            red: parse(0..2)?,
            green: parse(2..4)?,
            blue: parse(4..6)?,
            alpha: None,
            format: ColorFormat::Hex,
        })
    }

    /// Parse a colon-separated `R:G:B` decimal triplet
    pub fn from_rgb_str(rgb: &str) -> Result<Self> {
        let parts: Vec<&str> = rgb.split(':').collect();
        if parts.len() != 3 {
            return Err(Error::validation("color", format!("invalid RGB color: {rgb}")));
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            *channel = part
                .parse()
                .map_err(|_| Error::validation("color", format!("invalid RGB color: {rgb}")))?;
        }

        Ok(Self {
            red: channels[0],
            green: channels[1],
            blue: channels[2],
            alpha: None,
            format: ColorFormat::Rgb,
        })
    }

    /// Construct from components; serializes as hex
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: None,
            format: ColorFormat::Hex,
        }
    }

    /// Attach an alpha component in `[0, 1]`, appended as an extra
    /// colon-separated segment on the wire
    pub fn with_alpha(mut self, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(Error::validation(
                "alpha",
                format!("{alpha} is not between 0 and 1"),
            ));
        }
        self.alpha = Some(alpha);
        Ok(self)
    }

    /// Color as `R:G:B` decimal triplet, without alpha
    pub fn as_rgb(&self) -> String {
        format!("{}:{}:{}", self.red, self.green, self.blue)
    }

    /// Color as lowercase hex without a leading hash, without alpha
    pub fn as_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Wire representation: the format the color was constructed from,
    /// with `:alpha` appended when alpha is set
    pub fn value(&self) -> String {
        let base = match self.format {
            ColorFormat::Hex => self.as_hex(),
            ColorFormat::Rgb => self.as_rgb(),
        };
        match self.alpha {
            Some(alpha) => format!("{}:{}", base, format_float(alpha)),
            None => base,
        }
    }
}
