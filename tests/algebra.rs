use collage::draw::{
    BLACK, BLUE, Element, Form, FormStyle, LineCap, LineJoin, Matrix, RED, Shape, ShapeStyle,
    circle, collage, cropped_image, dashed, default_line, dotted, filled, form, group,
    group_transform, image, move_by, move_x, move_y, ngon, outlined, oval, path, rect, rotate,
    scale, segment, solid, sprite, square, to_form, traced,
};
use std::f64::consts::TAU;

fn sample_forms() -> Vec<Form> {
    vec![
        filled(RED, rect(4.0, 2.0)),
        outlined(dashed(BLUE), circle(3.0)).rotated(1.25).moved((2.0, -3.0)),
        traced(solid(BLACK), segment((0.0, 0.0), (1.0, 1.0))).scaled(0.5),
        sprite(8, 8, (16, 0), "sheet.png").moved_y(4.0),
        group(vec![filled(RED, square(1.0))]).rotated(-0.5),
    ]
}

#[test]
fn rotation_is_additive() {
    for f in sample_forms() {
        for (a, b) in [(0.5, 0.25), (-1.0, 3.0), (0.0, TAU)] {
            let r = rotate(a, &rotate(b, &f));
            assert!((r.theta - (f.theta + a + b)).abs() < 1e-12);
        }
    }
}

#[test]
fn scale_is_additive() {
    for f in sample_forms() {
        for (a, b) in [(1.0, 1.0), (-0.5, 2.0), (0.0, 0.0)] {
            let s = scale(a, &scale(b, &f));
            assert!((s.scalar - (f.scalar + a + b)).abs() < 1e-12);
        }
    }
}

#[test]
fn single_axis_moves_project_move_by() {
    for f in sample_forms() {
        let (dx, dy) = (3.5, -7.25);
        assert_eq!(move_by((0.0, dy), &move_x(dx, &f)), move_by((dx, dy), &f));
        assert_eq!(move_by((dx, 0.0), &move_y(dy, &f)), move_by((dx, dy), &f));
    }
}

#[test]
fn ngon_places_vertices_on_radius() {
    for n in [3usize, 4, 7, 12] {
        let r = 9.0;
        let Shape::Polygon(points) = ngon(n, r) else {
            panic!("ngon must be a polygon");
        };
        assert_eq!(points.len(), n);
        assert_eq!(points.points()[0], (r, 0.0));
        for (i, &(x, y)) in points.iter().enumerate() {
            assert!(((x * x + y * y).sqrt() - r).abs() < 1e-9);
            let expected = i as f64 * TAU / n as f64;
            let angle = y.atan2(x).rem_euclid(TAU);
            assert!((angle - expected).abs() < 1e-9 || (angle - expected).abs() > TAU - 1e-9);
        }
    }
}

#[test]
fn circles_and_ovals_are_full_arcs() {
    assert_eq!(
        circle(5.0),
        Shape::Arc {
            center: (0.0, 0.0),
            start: 0.0,
            end: TAU,
            radius: 5.0,
            scale: (1.0, 1.0),
        }
    );
    assert_eq!(
        oval(8.0, 3.0),
        Shape::Arc {
            center: (0.0, 0.0),
            start: 0.0,
            end: TAU,
            radius: 1.0,
            scale: (4.0, 1.5),
        }
    );
}

#[test]
fn derived_line_styles_inherit_default_line() {
    let base = default_line();
    assert_eq!(base.color, BLACK);
    for (style, dashing) in [
        (solid(RED), vec![]),
        (dashed(RED), vec![8.0, 4.0]),
        (dotted(RED), vec![3.0, 3.0]),
    ] {
        assert_eq!(style.dashing, dashing);
        assert_eq!(style.color, RED);
        assert_eq!(style.width, 1.0);
        assert_eq!(style.cap, LineCap::Flat);
        assert_eq!(style.join, LineJoin::Sharp(10.0));
        assert_eq!(style.dash_offset, base.dash_offset);
    }
}

#[test]
fn generic_form_starts_at_identity_for_every_style() {
    let styles = [
        FormStyle::Path(solid(RED), path(vec![(0.0, 0.0)])),
        FormStyle::Shape(ShapeStyle::Outline(default_line()), square(2.0)),
        FormStyle::Element(image(10, 10, "a.png")),
        FormStyle::Group(Matrix::rotation(1.0), sample_forms()),
    ];
    for style in styles {
        let f = form(style);
        assert_eq!((f.theta, f.scalar, f.x, f.y), (0.0, 1.0, 0.0, 0.0));
    }
}

#[test]
fn collage_keeps_forms_in_paint_order() {
    let forms = sample_forms();
    let scene = collage(800, 600, forms.clone());
    match &scene {
        Element::Collage {
            width,
            height,
            forms: stored,
        } => {
            assert_eq!((*width, *height), (800, 600));
            assert_eq!(stored, &forms);
        }
        Element::Image { .. } => panic!("collage must build a collage"),
    }
}

#[test]
fn image_constructors_set_origin_and_stretch() {
    assert_eq!(
        image(100, 50, "a.png"),
        Element::Image {
            origin: (0, 0),
            width: 100,
            height: 50,
            path: "a.png".into(),
            stretch: true,
        }
    );
    assert_eq!(
        cropped_image((10, 10), 100, 50, "a.png"),
        Element::Image {
            origin: (10, 10),
            width: 100,
            height: 50,
            path: "a.png".into(),
            stretch: false,
        }
    );
}

#[test]
fn group_children_keep_their_own_transforms() {
    let children = sample_forms();
    let grouped = group_transform(Matrix::scaling(2.0, 2.0), children.clone());
    let FormStyle::Group(matrix, stored) = &grouped.style else {
        panic!("group_transform must build a group");
    };
    assert_eq!(*matrix, Matrix::scaling(2.0, 2.0));
    assert_eq!(stored, &children);
}

#[test]
fn construction_is_deterministic() {
    let build = || {
        collage(
            320,
            200,
            vec![
                to_form(collage(10, 10, sample_forms())),
                group(sample_forms()).moved((1.0, 2.0)),
            ],
        )
    };
    assert_eq!(build(), build());
}

#[test]
fn model_values_can_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Element>();
    assert_send_sync::<Form>();

    let scene = collage(64, 64, sample_forms());
    let handle = std::thread::spawn(move || scene.forms().len());
    assert_eq!(handle.join().unwrap(), 5);
}
