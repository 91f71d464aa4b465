//! Video thumbnail options

use super::{Arg, ProcessingOption};
use crate::error::{Error, Result};

/// Timestamp of the frame to use as a thumbnail (`vts`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoThumbnailSecond(f64);

impl VideoThumbnailSecond {
    pub fn new(second: f64) -> Result<Self> {
        if second < 0.0 {
            return Err(Error::validation(
                "video_thumbnail_second",
                format!("invalid second: {second}"),
            ));
        }
        Ok(Self(second))
    }
}

impl ProcessingOption for VideoThumbnailSecond {
    fn name(&self) -> &str {
        "vts"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Pick the nearest keyframe instead of decoding to the exact
/// timestamp (`vtk`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoThumbnailKeyframes(bool);

impl VideoThumbnailKeyframes {
    pub fn new(keyframes: bool) -> Self {
        Self(keyframes)
    }
}

impl ProcessingOption for VideoThumbnailKeyframes {
    fn name(&self) -> &str {
        "vtk"
    }

    fn data(&self) -> Vec<Arg> {
        vec![self.0.into()]
    }
}

/// Sprite sheet of video frames (`vtt`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoThumbnailTile {
    step: f64,
    columns: u32,
    rows: u32,
    tile_width: u32,
    tile_height: u32,
    extend_tile: Option<bool>,
    trim: Option<bool>,
    fill: Option<bool>,
    focus_x: Option<f64>,
    focus_y: Option<f64>,
}

impl VideoThumbnailTile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        step: f64,
        columns: u32,
        rows: u32,
        tile_width: u32,
        tile_height: u32,
        extend_tile: Option<bool>,
        trim: Option<bool>,
        fill: Option<bool>,
        focus_x: Option<f64>,
        focus_y: Option<f64>,
    ) -> Result<Self> {
        check_focus("video_thumbnail_tile", "focus X", focus_x)?;
        check_focus("video_thumbnail_tile", "focus Y", focus_y)?;
        Ok(Self {
            step,
            columns,
            rows,
            tile_width,
            tile_height,
            extend_tile,
            trim,
            fill,
            focus_x,
            focus_y,
        })
    }
}

impl ProcessingOption for VideoThumbnailTile {
    fn name(&self) -> &str {
        "vtt"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.step.into(),
            self.columns.into(),
            self.rows.into(),
            self.tile_width.into(),
            self.tile_height.into(),
            self.extend_tile.into(),
            self.trim.into(),
            self.fill.into(),
            self.focus_x.into(),
            self.focus_y.into(),
        ]
    }
}

/// Animated thumbnail assembled from video frames (`vta`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoThumbnailAnimation {
    step: f64,
    delay: u32,
    frames: u32,
    frame_width: u32,
    frame_height: u32,
    extend_frame: Option<bool>,
    trim: Option<bool>,
    fill: Option<bool>,
    focus_x: Option<f64>,
    focus_y: Option<f64>,
}

impl VideoThumbnailAnimation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        step: f64,
        delay: u32,
        frames: u32,
        frame_width: u32,
        frame_height: u32,
        extend_frame: Option<bool>,
        trim: Option<bool>,
        fill: Option<bool>,
        focus_x: Option<f64>,
        focus_y: Option<f64>,
    ) -> Result<Self> {
        check_focus("video_thumbnail_animation", "focus X", focus_x)?;
        check_focus("video_thumbnail_animation", "focus Y", focus_y)?;
        Ok(Self {
            step,
            delay,
            frames,
            frame_width,
            frame_height,
            extend_frame,
            trim,
            fill,
            focus_x,
            focus_y,
        })
    }
}

impl ProcessingOption for VideoThumbnailAnimation {
    fn name(&self) -> &str {
        "vta"
    }

    fn data(&self) -> Vec<Arg> {
        vec![
            self.step.into(),
            self.delay.into(),
            self.frames.into(),
            self.frame_width.into(),
            self.frame_height.into(),
            self.extend_frame.into(),
            self.trim.into(),
            self.fill.into(),
            self.focus_x.into(),
            self.focus_y.into(),
        ]
    }
}

fn check_focus(param: &str, field: &str, value: Option<f64>) -> Result<()> {
    if let Some(value) = value {
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::validation(
                param,
                format!("invalid {field}: {value} (should be between 0 and 1)"),
            ));
        }
    }
    Ok(())
}
