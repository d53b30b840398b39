//! Forms: placeable, transformable wrappers around style payloads.
//!
//! Every combinator here takes its input by reference and returns a new [`Form`], so a
//! base form can seed any number of independently transformed copies.
//!
//! Transform combinators are additive: `rotate`, `scale` and `move_by` add to the
//! current field instead of replacing it. Note that this includes `scale`, so
//! `scale(1.0, &f)` doubles the default scalar of `1.0` rather than leaving it alone.

use super::color::Color;
use super::element::{Element, cropped_image};
use super::gradient::Gradient;
use super::path::{Path, Point};
use super::shape::Shape;
use super::style::{FillStyle, LineStyle};
use super::transform::Matrix;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outline or fill selector for a [`FormStyle::Shape`]; exactly one applies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum ShapeStyle {
    Outline(LineStyle),
    Fill(FillStyle),
}

/// What a [`Form`] draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum FormStyle {
    /// Unfilled line traced through a path
    Path(LineStyle, Path),
    /// Filled or outlined shape
    Shape(ShapeStyle, Shape),
    /// A whole element placed as a form
    Element(Element),
    /// Child forms under an extra transform; children keep their own transforms
    Group(Matrix, Vec<Form>),
}

/// A style payload with rotation, scale and position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Form {
    /// Rotation in radians, counter-clockwise
    pub theta: f64,
    /// Uniform scale
    pub scalar: f64,
    pub x: f64,
    pub y: f64,
    pub style: FormStyle,
}

impl Form {
    /// Per-form transform: translate, then scale, then rotate (applied to points in
    /// reverse, so rotation happens first).
    pub fn local_matrix(&self) -> Matrix {
        Matrix::translation(self.x, self.y)
            .multiply(&Matrix::scaling(self.scalar, self.scalar))
            .multiply(&Matrix::rotation(self.theta))
    }

    pub fn rotated(&self, theta: f64) -> Form {
        Form {
            theta: self.theta + theta,
            ..self.clone()
        }
    }

    pub fn scaled(&self, n: f64) -> Form {
        Form {
            scalar: self.scalar + n,
            ..self.clone()
        }
    }

    pub fn moved(&self, (dx, dy): Point) -> Form {
        Form {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    pub fn moved_x(&self, dx: f64) -> Form {
        self.moved((dx, 0.0))
    }

    pub fn moved_y(&self, dy: f64) -> Form {
        self.moved((0.0, dy))
    }
}

/// Wraps a style with rotation 0, scale 1 and position (0, 0).
pub fn form(style: FormStyle) -> Form {
    Form {
        theta: 0.0,
        scalar: 1.0,
        x: 0.0,
        y: 0.0,
        style,
    }
}

pub fn fill(style: FillStyle, shape: Shape) -> Form {
    form(FormStyle::Shape(ShapeStyle::Fill(style), shape))
}

pub fn filled(color: Color, shape: Shape) -> Form {
    fill(FillStyle::Solid(color), shape)
}

pub fn textured(path: impl Into<String>, shape: Shape) -> Form {
    fill(FillStyle::Texture(path.into()), shape)
}

pub fn gradient(gradient: Gradient, shape: Shape) -> Form {
    fill(FillStyle::Gradient(gradient), shape)
}

pub fn outlined(style: LineStyle, shape: Shape) -> Form {
    form(FormStyle::Shape(ShapeStyle::Outline(style), shape))
}

pub fn traced(style: LineStyle, path: Path) -> Form {
    form(FormStyle::Path(style, path))
}

/// A `width` x `height` region of an image starting at `origin`, as a form.
pub fn sprite(width: i32, height: i32, origin: (i32, i32), path: impl Into<String>) -> Form {
    to_form(cropped_image(origin, width, height, path))
}

pub fn to_form(element: Element) -> Form {
    form(FormStyle::Element(element))
}

pub fn group(forms: Vec<Form>) -> Form {
    group_transform(Matrix::IDENTITY, forms)
}

pub fn group_transform(matrix: Matrix, forms: Vec<Form>) -> Form {
    form(FormStyle::Group(matrix, forms))
}

pub fn rotate(theta: f64, form: &Form) -> Form {
    form.rotated(theta)
}

pub fn scale(n: f64, form: &Form) -> Form {
    form.scaled(n)
}

pub fn move_by(offset: Point, form: &Form) -> Form {
    form.moved(offset)
}

pub fn move_x(dx: f64, form: &Form) -> Form {
    form.moved_x(dx)
}

pub fn move_y(dy: f64, form: &Form) -> Form {
    form.moved_y(dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{GREEN, RED};
    use crate::draw::element::image;
    use crate::draw::path::segment;
    use crate::draw::shape::{circle, rect};
    use crate::draw::style::solid;
    use std::f64::consts::FRAC_PI_2;

    fn base() -> Form {
        filled(RED, rect(10.0, 20.0))
    }

    fn assert_identity_fields(f: &Form) {
        assert_eq!((f.theta, f.scalar, f.x, f.y), (0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn every_constructor_starts_untransformed() {
        let forms = [
            base(),
            outlined(solid(GREEN), circle(3.0)),
            traced(solid(GREEN), segment((0.0, 0.0), (1.0, 1.0))),
            textured("tile.png", rect(4.0, 4.0)),
            sprite(16, 16, (32, 0), "sheet.png"),
            to_form(image(10, 10, "a.png")),
            group(vec![base()]),
            group_transform(Matrix::scaling(2.0, 2.0), Vec::new()),
        ];
        for f in &forms {
            assert_identity_fields(f);
        }
    }

    #[test]
    fn filled_and_outlined_pick_one_side() {
        match base().style {
            FormStyle::Shape(ShapeStyle::Fill(FillStyle::Solid(c)), _) => assert_eq!(c, RED),
            other => panic!("unexpected style {other:?}"),
        }
        match outlined(solid(GREEN), circle(1.0)).style {
            FormStyle::Shape(ShapeStyle::Outline(line), _) => assert_eq!(line.color, GREEN),
            other => panic!("unexpected style {other:?}"),
        }
    }

    #[test]
    fn sprite_wraps_cropped_image() {
        let f = sprite(16, 8, (32, 4), "sheet.png");
        assert_eq!(
            f.style,
            FormStyle::Element(cropped_image((32, 4), 16, 8, "sheet.png"))
        );
    }

    #[test]
    fn group_uses_identity_matrix() {
        match group(vec![base(), base()]).style {
            FormStyle::Group(matrix, children) => {
                assert!(matrix.is_identity());
                assert_eq!(children.len(), 2);
            }
            other => panic!("unexpected style {other:?}"),
        }
    }

    #[test]
    fn transforms_add_to_current_values() {
        let f = base();
        let r = rotate(0.5, &rotate(0.25, &f));
        assert!((r.theta - 0.75).abs() < 1e-12);

        let s = scale(2.0, &scale(0.5, &f));
        assert!((s.scalar - 3.5).abs() < 1e-12);

        let m = move_by((3.0, 4.0), &move_by((1.0, -1.0), &f));
        assert_eq!((m.x, m.y), (4.0, 3.0));
    }

    #[test]
    fn single_axis_moves_match_move_by() {
        let f = base();
        assert_eq!(move_by((0.0, 7.0), &move_x(5.0, &f)), move_by((5.0, 7.0), &f));
        assert_eq!(move_y(7.0, &move_x(5.0, &f)), move_by((5.0, 7.0), &f));
    }

    #[test]
    fn combinators_leave_input_untouched() {
        let f = base();
        let snapshot = f.clone();
        let _ = rotate(1.0, &f);
        let _ = scale(1.0, &f);
        let _ = move_by((1.0, 1.0), &f);
        assert_eq!(f, snapshot);
    }

    #[test]
    fn local_matrix_rotates_then_scales_then_translates() {
        let f = base().rotated(FRAC_PI_2).scaled(1.0).moved((10.0, 0.0));
        let (x, y) = f.local_matrix().apply((1.0, 0.0));
        assert!((x - 10.0).abs() < 1e-9);
        assert!((y - 2.0).abs() < 1e-9);
    }
}
