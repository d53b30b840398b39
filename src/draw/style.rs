//! Fill and line styles.

use super::color::{BLACK, Color};
use super::gradient::Gradient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the inside of a shape is painted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum FillStyle {
    /// Single flat color
    Solid(Color),
    /// Image tiled across the shape, referenced by file path
    Texture(String),
    /// Color ramp
    Gradient(Gradient),
}

/// Shape of the ends of a stroked line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum LineCap {
    Flat,
    Round,
    Padded,
}

/// Shape of the corners where stroked segments meet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum LineJoin {
    Smooth,
    /// Mitered corner, cut off beyond the given miter limit
    Sharp(f64),
    Clipped,
}

/// Stroke settings for traced paths and outlined shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Alternating on/off lengths; empty means a solid line
    pub dashing: Vec<f64>,
    /// Phase into the dash pattern
    pub dash_offset: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        default_line()
    }
}

/// Baseline line style: black, width 1, flat caps, sharp joins (limit 10), no dashing.
pub fn default_line() -> LineStyle {
    LineStyle {
        color: BLACK,
        width: 1.0,
        cap: LineCap::Flat,
        join: LineJoin::Sharp(10.0),
        dashing: Vec::new(),
        dash_offset: 0.0,
    }
}

pub fn solid(color: Color) -> LineStyle {
    LineStyle {
        color,
        ..default_line()
    }
}

pub fn dashed(color: Color) -> LineStyle {
    LineStyle {
        color,
        dashing: vec![8.0, 4.0],
        ..default_line()
    }
}

pub fn dotted(color: Color) -> LineStyle {
    LineStyle {
        color,
        dashing: vec![3.0, 3.0],
        ..default_line()
    }
}
