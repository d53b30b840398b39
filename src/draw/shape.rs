//! Shape definitions: polygons, rectangles and arcs.

use super::path::{Path, Point};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A closed outline that can be filled or stroked.
///
/// Parameters are never validated: negative sizes, degenerate polygons and odd angles
/// are passed through to the renderer unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum Shape {
    /// Polygon through the path's points, closed back to the first one.
    Polygon(Path),
    /// Rectangle of the given size, centered on the form's origin.
    Rect {
        width: f64,
        height: f64,
    },
    /// Unit-style arc stretched by `scale` into a circle or ellipse.
    Arc {
        /// Arc center
        center: Point,
        /// Start angle in radians (0 = positive x axis, counter-clockwise positive)
        start: f64,
        /// End angle in radians
        end: f64,
        /// Arc radius before scaling
        radius: f64,
        /// Per-axis stretch applied to the arc
        scale: (f64, f64),
    },
}

/// A polygon through an arbitrary point sequence.
pub fn polygon(path: Path) -> Shape {
    Shape::Polygon(path)
}

pub fn rect(width: f64, height: f64) -> Shape {
    Shape::Rect { width, height }
}

pub fn square(n: f64) -> Shape {
    rect(n, n)
}

/// An ellipse `width` by `height`: a full unit arc scaled by half of each dimension.
pub fn oval(width: f64, height: f64) -> Shape {
    Shape::Arc {
        center: (0.0, 0.0),
        start: 0.0,
        end: TAU,
        radius: 1.0,
        scale: (width / 2.0, height / 2.0),
    }
}

pub fn circle(radius: f64) -> Shape {
    Shape::Arc {
        center: (0.0, 0.0),
        start: 0.0,
        end: TAU,
        radius,
        scale: (1.0, 1.0),
    }
}

/// Regular polygon with `n` vertices at distance `r`, counter-clockwise from `(r, 0)`.
///
/// `n < 3` yields a degenerate polygon; `n == 0` yields an empty one.
pub fn ngon(n: usize, r: f64) -> Shape {
    let step = TAU / n as f64;
    let points = (0..n)
        .map(|i| {
            let angle = i as f64 * step;
            (r * angle.cos(), r * angle.sin())
        })
        .collect();
    Shape::Polygon(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_equal_sided_rect() {
        assert_eq!(square(5.0), rect(5.0, 5.0));
    }

    #[test]
    fn oval_stretches_unit_arc() {
        assert_eq!(
            oval(40.0, 20.0),
            Shape::Arc {
                center: (0.0, 0.0),
                start: 0.0,
                end: TAU,
                radius: 1.0,
                scale: (20.0, 10.0),
            }
        );
    }

    #[test]
    fn circle_uses_radius_not_scale() {
        match circle(7.5) {
            Shape::Arc { radius, scale, .. } => {
                assert_eq!(radius, 7.5);
                assert_eq!(scale, (1.0, 1.0));
            }
            other => panic!("expected an arc, got {other:?}"),
        }
    }

    #[test]
    fn ngon_vertices_sit_on_circle() {
        let Shape::Polygon(path) = ngon(6, 10.0) else {
            panic!("ngon should be a polygon");
        };
        assert_eq!(path.len(), 6);
        assert_eq!(path.points()[0], (10.0, 0.0));
        for &(x, y) in path.iter() {
            assert!(((x * x + y * y).sqrt() - 10.0).abs() < 1e-9);
        }
        // Second vertex is 60 degrees counter-clockwise.
        let (x, y) = path.points()[1];
        assert!((x - 5.0).abs() < 1e-9);
        assert!(y > 0.0);
    }

    #[test]
    fn degenerate_ngon_is_accepted() {
        assert_eq!(ngon(0, 3.0), Shape::Polygon(Path::default()));
        let Shape::Polygon(path) = ngon(2, 3.0) else {
            panic!("ngon should be a polygon");
        };
        assert_eq!(path.len(), 2);
    }
}
