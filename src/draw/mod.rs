//! The composition model: value types and the pure builders that combine them.
//!
//! Layers, each depending only on the ones above it in this list:
//! - [`Path`] and [`Shape`]: point sequences, polygons, rectangles and arcs
//! - [`FillStyle`] and [`LineStyle`]: how shapes and paths are painted
//! - [`Form`] and [`Element`]: placeable content and root-level renderables
//!
//! [`Color`], [`Gradient`] and [`Matrix`] are plain values consumed by the styles and
//! group transforms. [`walk`] hands the finished tree to a renderer.

pub mod color;
pub mod element;
pub mod form;
pub mod gradient;
pub mod path;
pub mod shape;
pub mod style;
pub mod transform;
pub mod walk;

// Re-export commonly used types at module level
pub use color::Color;
pub use element::{Element, collage, cropped_image, fitted_image, image};
pub use form::{
    Form, FormStyle, ShapeStyle, fill, filled, form, gradient, group, group_transform, move_by,
    move_x, move_y, outlined, rotate, scale, sprite, textured, to_form, traced,
};
pub use gradient::{Gradient, GradientStop};
pub use path::{Path, Point, path, segment};
pub use shape::{Shape, circle, ngon, oval, polygon, rect, square};
pub use style::{FillStyle, LineCap, LineJoin, LineStyle, dashed, default_line, dotted, solid};
pub use transform::Matrix;
pub use walk::{Placement, SceneStats, Visitor, outline, walk};

pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, TRANSPARENT, WHITE, YELLOW};
