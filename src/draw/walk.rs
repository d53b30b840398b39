//! Paint-order traversal of an element tree with composed transforms.
//!
//! Renderers implement [`Visitor`] and call [`walk`]; each hook receives the node along
//! with the world matrix in effect for it. Two visitors ship with the crate:
//! [`SceneStats`] for summaries and the text tree produced by [`outline`].

use super::element::Element;
use super::form::{Form, FormStyle, ShapeStyle};
use super::shape::Shape;
use super::style::FillStyle;
use super::transform::Matrix;
use crate::util::color_to_name;
use log::trace;
use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Where a node sits in the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Maps the node's local coordinates to the root element's coordinates
    pub matrix: Matrix,
    /// Nesting depth; the root element is at depth 0
    pub depth: usize,
}

/// Callbacks invoked by [`walk`]. All hooks default to no-ops.
pub trait Visitor {
    /// Called for the root element and for every element wrapped in a form.
    fn visit_element(&mut self, _element: &Element, _placement: &Placement) {}

    /// Called for every form before its children, with the form's own transform applied.
    fn visit_form(&mut self, _form: &Form, _placement: &Placement) {}
}

/// Visits `element` and everything below it in paint order.
///
/// A form's matrix is `parent * form.local_matrix()`. Children of a group see
/// `form matrix * group matrix * child.local_matrix()`, so the group transform is
/// layered on top of each child's own transform.
pub fn walk<V: Visitor + ?Sized>(element: &Element, visitor: &mut V) {
    walk_element(element, Matrix::IDENTITY, 0, visitor);
}

fn walk_element<V: Visitor + ?Sized>(
    element: &Element,
    matrix: Matrix,
    depth: usize,
    visitor: &mut V,
) {
    visitor.visit_element(element, &Placement { matrix, depth });
    match element {
        Element::Collage { forms, .. } => {
            for form in forms {
                walk_form(form, &matrix, depth + 1, visitor);
            }
        }
        Element::Image { .. } => {}
    }
}

fn walk_form<V: Visitor + ?Sized>(form: &Form, parent: &Matrix, depth: usize, visitor: &mut V) {
    let matrix = parent.multiply(&form.local_matrix());
    visitor.visit_form(form, &Placement { matrix, depth });
    match &form.style {
        FormStyle::Path(..) | FormStyle::Shape(..) => {}
        FormStyle::Element(element) => walk_element(element, matrix, depth + 1, visitor),
        FormStyle::Group(group_matrix, children) => {
            trace!("group with {} children at depth {}", children.len(), depth);
            let inner = matrix.multiply(group_matrix);
            for child in children {
                walk_form(child, &inner, depth + 1, visitor);
            }
        }
    }
}

/// Node counts gathered over a whole tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneStats {
    pub collages: usize,
    pub images: usize,
    pub forms: usize,
    pub traced_paths: usize,
    pub filled_shapes: usize,
    pub outlined_shapes: usize,
    pub groups: usize,
    pub max_depth: usize,
    /// Every image file referenced by image elements or texture fills
    pub image_paths: BTreeSet<String>,
}

impl SceneStats {
    pub fn collect(element: &Element) -> Self {
        let mut stats = Self::default();
        walk(element, &mut stats);
        stats
    }
}

impl Visitor for SceneStats {
    fn visit_element(&mut self, element: &Element, placement: &Placement) {
        self.max_depth = self.max_depth.max(placement.depth);
        match element {
            Element::Collage { .. } => self.collages += 1,
            Element::Image { path, .. } => {
                self.images += 1;
                self.image_paths.insert(path.clone());
            }
        }
    }

    fn visit_form(&mut self, form: &Form, placement: &Placement) {
        self.forms += 1;
        self.max_depth = self.max_depth.max(placement.depth);
        match &form.style {
            FormStyle::Path(..) => self.traced_paths += 1,
            FormStyle::Shape(ShapeStyle::Outline(_), _) => self.outlined_shapes += 1,
            FormStyle::Shape(ShapeStyle::Fill(fill), _) => {
                self.filled_shapes += 1;
                if let FillStyle::Texture(path) = fill {
                    self.image_paths.insert(path.clone());
                }
            }
            FormStyle::Element(_) => {}
            FormStyle::Group(..) => self.groups += 1,
        }
    }
}

/// Renders the tree as indented text, one node per line.
///
/// Nodes deeper than `max_depth` are skipped. With `show_transforms`, each form line
/// ends with its world-space origin.
pub fn outline(element: &Element, max_depth: usize, show_transforms: bool) -> String {
    let mut printer = OutlinePrinter {
        out: String::new(),
        max_depth,
        show_transforms,
    };
    walk(element, &mut printer);
    printer.out
}

struct OutlinePrinter {
    out: String,
    max_depth: usize,
    show_transforms: bool,
}

impl OutlinePrinter {
    fn line(&mut self, depth: usize, text: &str) {
        let _ = writeln!(self.out, "{}{}", "  ".repeat(depth), text);
    }
}

impl Visitor for OutlinePrinter {
    fn visit_element(&mut self, element: &Element, placement: &Placement) {
        if placement.depth > self.max_depth {
            return;
        }
        let text = describe_element(element);
        self.line(placement.depth, &text);
    }

    fn visit_form(&mut self, form: &Form, placement: &Placement) {
        if placement.depth > self.max_depth {
            return;
        }
        let mut text = describe_form(form);
        if form.theta != 0.0 || form.scalar != 1.0 || form.x != 0.0 || form.y != 0.0 {
            let _ = write!(
                text,
                " [rotate {:.3} scale {:.3} move ({:.1}, {:.1})]",
                form.theta, form.scalar, form.x, form.y
            );
        }
        if self.show_transforms {
            let (x, y) = placement.matrix.apply((0.0, 0.0));
            let _ = write!(text, " @ ({x:.1}, {y:.1})");
        }
        self.line(placement.depth, &text);
    }
}

fn describe_element(element: &Element) -> String {
    match element {
        Element::Collage {
            width,
            height,
            forms,
        } => format!("collage {width}x{height} ({} forms)", forms.len()),
        Element::Image {
            origin,
            width,
            height,
            path,
            stretch,
        } => {
            let mode = if *stretch { "stretched" } else { "cropped" };
            format!(
                "image {path} {width}x{height} from ({}, {}) {mode}",
                origin.0, origin.1
            )
        }
    }
}

fn describe_form(form: &Form) -> String {
    match &form.style {
        FormStyle::Path(line, path) => {
            format!("traced path ({} points, width {})", path.len(), line.width)
        }
        FormStyle::Shape(ShapeStyle::Outline(line), shape) => {
            format!("outlined {} (width {})", describe_shape(shape), line.width)
        }
        FormStyle::Shape(ShapeStyle::Fill(fill), shape) => {
            let fill = match fill {
                FillStyle::Solid(color) => format!("solid {}", color_to_name(color)),
                FillStyle::Texture(path) => format!("texture {path}"),
                FillStyle::Gradient(g) => format!("gradient ({} stops)", g.stops().len()),
            };
            format!("filled {} ({fill})", describe_shape(shape))
        }
        FormStyle::Element(_) => "element".to_string(),
        FormStyle::Group(matrix, children) => {
            let kind = if matrix.is_identity() {
                "group"
            } else {
                "transformed group"
            };
            format!("{kind} ({} forms)", children.len())
        }
    }
}

fn describe_shape(shape: &Shape) -> String {
    match shape {
        Shape::Polygon(path) => format!("polygon of {} points", path.len()),
        Shape::Rect { width, height } => format!("rect {width}x{height}"),
        Shape::Arc { radius, scale, .. } => {
            format!("arc r={radius} scale ({}, {})", scale.0, scale.1)
        }
    }
}
