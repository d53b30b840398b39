//! A sample scene built with every constructor in [`crate::draw`].

use crate::config::DemoConfig;
use crate::draw::gradient::{linear, radial};
use crate::draw::{
    BLUE, Color, Element, FillStyle, Form, LineCap, LineJoin, LineStyle, Matrix, WHITE, YELLOW,
    circle, collage, cropped_image, dashed, default_line, dotted, fill, filled, fitted_image,
    gradient, group, group_transform, image, move_by, move_x, move_y, ngon, outlined, oval, path,
    polygon, rect, rotate, scale, segment, solid, sprite, square, textured, to_form, traced,
};
use std::f64::consts::{FRAC_PI_4, TAU};

/// Builds the demo collage described by `config`.
pub fn demo_scene(config: &DemoConfig) -> Element {
    let accent = config.accent_color.to_color();
    let (w, h) = (config.width as f64, config.height as f64);

    let mut forms = vec![
        filled(Color::rgb(0.12, 0.12, 0.16), rect(w, h)),
        gradient(
            linear(
                (-w / 2.0, 0.0),
                (w / 2.0, 0.0),
                vec![(0.0, accent.with_alpha(0.2)), (1.0, BLUE.with_alpha(0.2))],
            ),
            rect(w, h / 3.0),
        )
        .moved_y(h / 3.0),
    ];

    forms.push(badge(accent).moved((w / 4.0, h / 4.0)));
    forms.extend(ring_of_stars(accent, 6, w.min(h) / 4.0));
    forms.push(lines(w, h));
    forms.push(sprites(&config.image_path).moved((-w / 3.0, -h / 3.0)));
    forms.push(to_form(thumbnail(&config.image_path)).moved((w / 3.0, -h / 3.0)));

    collage(config.width, config.height, forms)
}

fn badge(accent: Color) -> Form {
    let rim = LineStyle {
        width: 4.0,
        cap: LineCap::Round,
        join: LineJoin::Smooth,
        ..solid(WHITE)
    };
    group(vec![
        gradient(
            radial(
                (0.0, 0.0),
                0.0,
                (0.0, 0.0),
                40.0,
                vec![(0.0, YELLOW), (1.0, accent)],
            ),
            circle(40.0),
        ),
        outlined(rim, circle(40.0)),
        outlined(dashed(WHITE), oval(60.0, 30.0)),
    ])
}

fn ring_of_stars(accent: Color, count: usize, radius: f64) -> Vec<Form> {
    let star = outlined(
        LineStyle {
            join: LineJoin::Clipped,
            ..solid(accent)
        },
        ngon(5, 12.0),
    );
    (0..count)
        .map(|i| {
            let angle = i as f64 * TAU / count as f64;
            let placed = move_by((radius * angle.cos(), radius * angle.sin()), &star);
            scale(i as f64 * 0.1, &rotate(angle, &placed))
        })
        .collect()
}

fn lines(w: f64, h: f64) -> Form {
    let zigzag = path(
        (0..8)
            .map(|i| (i as f64 * 20.0, if i % 2 == 0 { 0.0 } else { 15.0 }))
            .collect(),
    );
    let offset_dash = LineStyle {
        dash_offset: 4.0,
        cap: LineCap::Padded,
        ..dashed(YELLOW)
    };
    group_transform(
        Matrix::translation(-w / 2.0 + 20.0, h / 2.0 - 40.0),
        vec![
            traced(default_line(), segment((0.0, 0.0), (w - 40.0, 0.0))),
            move_y(10.0, &traced(dotted(WHITE), zigzag.clone())),
            move_x(180.0, &traced(offset_dash, zigzag)),
            outlined(
                solid(WHITE),
                polygon(path(vec![(0.0, 0.0), (30.0, 0.0), (15.0, 25.0)])),
            )
            .moved((360.0, 0.0)),
        ],
    )
}

fn sprites(image_path: &str) -> Form {
    group_transform(
        Matrix::rotation(FRAC_PI_4).multiply(&Matrix::scaling(1.5, 1.5)),
        vec![
            sprite(32, 32, (0, 0), image_path),
            sprite(32, 32, (32, 0), image_path).moved_x(40.0),
            textured(image_path, square(32.0)).moved_x(80.0),
            fill(FillStyle::Solid(WHITE.with_alpha(0.5)), square(8.0)),
        ],
    )
}

fn thumbnail(image_path: &str) -> Element {
    collage(
        120,
        90,
        vec![
            to_form(image(120, 90, image_path)),
            to_form(fitted_image(60, 45, image_path)).moved((-30.0, -22.5)),
            to_form(cropped_image((16, 16), 32, 32, image_path)).moved((30.0, 22.5)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorSpec;
    use crate::draw::SceneStats;

    #[test]
    fn demo_uses_configured_canvas() {
        let config = DemoConfig {
            width: 320,
            height: 200,
            accent_color: ColorSpec::Name("green".into()),
            image_path: "tiles.png".into(),
        };
        let scene = demo_scene(&config);
        assert_eq!(scene.size(), (320, 200));

        let stats = SceneStats::collect(&scene);
        assert_eq!(
            stats.image_paths.into_iter().collect::<Vec<_>>(),
            vec!["tiles.png".to_string()]
        );
    }

    #[test]
    fn demo_covers_every_node_kind() {
        let stats = SceneStats::collect(&demo_scene(&DemoConfig::default()));
        assert_eq!(stats.collages, 2);
        assert!(stats.images >= 4);
        assert!(stats.traced_paths >= 3);
        assert!(stats.filled_shapes >= 4);
        assert!(stats.outlined_shapes >= 6);
        assert_eq!(stats.groups, 3);
    }

    #[test]
    fn demo_is_deterministic() {
        let config = DemoConfig::default();
        assert_eq!(demo_scene(&config), demo_scene(&config));
    }
}
