//! Point sequences traced as lines or used as polygon outlines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 2D point `(x, y)`.
pub type Point = (f64, f64);

/// An ordered sequence of points.
///
/// Order defines the edges when the path is traced or used as a polygon. Duplicate and
/// collinear points are kept as given.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Path(Vec<Point>);

impl Path {
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Wraps a point sequence into a [`Path`].
pub fn path(points: Vec<Point>) -> Path {
    Path(points)
}

/// A two-point path: the straight line from `p1` to `p2`.
pub fn segment(p1: Point, p2: Point) -> Path {
    Path(vec![p1, p2])
}
