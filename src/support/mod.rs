//! Validated domain values with a canonical wire representation

mod color;
mod gravity;
mod image_format;

pub use color::Color;
pub use gravity::{GravityKind, GravityType};
pub use image_format::ImageFormat;

/// Formats a float the way the wire protocol expects: fixed-point with
/// trailing zeros and a trailing decimal point stripped, so `0.7` stays
/// `"0.7"` and `300.0` becomes `"300"`.
pub(crate) fn format_float(value: f64) -> String {
    let mut s = format!("{:.6}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
