//! Gradient values used by gradient fills.
//!
//! The model stores gradients as given; interpolation between stops is left to the
//! renderer.

use super::color::Color;
use super::path::Point;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A color stop at a relative `offset` along the gradient (0.0 to 1.0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub const fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// A linear or radial color ramp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Gradient {
    /// Colors vary along the line from `start` to `end`.
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// Colors vary between two circles.
    Radial {
        start: Point,
        start_radius: f64,
        end: Point,
        end_radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Gradient {
    /// Color stops in declaration order.
    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Gradient::Linear { stops, .. } | Gradient::Radial { stops, .. } => stops,
        }
    }
}

/// Creates a linear gradient from `(offset, color)` pairs.
pub fn linear(start: Point, end: Point, stops: Vec<(f64, Color)>) -> Gradient {
    Gradient::Linear {
        start,
        end,
        stops: into_stops(stops),
    }
}

/// Creates a radial gradient from `(offset, color)` pairs.
pub fn radial(
    start: Point,
    start_radius: f64,
    end: Point,
    end_radius: f64,
    stops: Vec<(f64, Color)>,
) -> Gradient {
    Gradient::Radial {
        start,
        start_radius,
        end,
        end_radius,
        stops: into_stops(stops),
    }
}

fn into_stops(stops: Vec<(f64, Color)>) -> Vec<GradientStop> {
    stops
        .into_iter()
        .map(|(offset, color)| GradientStop::new(offset, color))
        .collect()
}
