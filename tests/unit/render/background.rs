use super::*;
use crate::foundation::core::CANVAS;

fn colors() -> Vec<Color> {
    vec![
        Color::parse("#000").unwrap(),
        Color::parse("#0FF").unwrap(),
        Color::parse("#111").unwrap(),
    ]
}

#[test]
fn solid_fills_with_first_color() {
    let bg = render_background(BackgroundKind::Solid, &colors(), 17, CANVAS);
    assert_eq!(
        bg.fill,
        Paint::Solid {
            color: Color::parse("#000").unwrap()
        }
    );
    assert!(bg.shapes.is_empty());
}

#[test]
fn gradient_angle_wraps() {
    let angle = |f| match render_background(BackgroundKind::Gradient, &colors(), f, CANVAS).fill {
        Paint::LinearGradient { angle_deg, .. } => angle_deg,
        Paint::Solid { .. } => panic!("expected gradient"),
    };
    assert_eq!(angle(0), 0.0);
    assert_eq!(angle(90), 90.0);
    assert_eq!(angle(365), 5.0);

    let single = [Color::parse("#abc").unwrap()];
    let bg = render_background(BackgroundKind::Gradient, &single, 3, CANVAS);
    let Paint::LinearGradient { from, to, .. } = bg.fill else {
        panic!("expected gradient");
    };
    assert_eq!(from, to);
}

#[test]
fn grid_scrolls_periodically() {
    let offset = |f| {
        let bg = render_background(BackgroundKind::Grid, &colors(), f, CANVAS);
        match &bg.shapes[0].geometry {
            Geometry::Grid { offset, .. } => offset.y,
            other => panic!("unexpected {other:?}"),
        }
    };
    assert_eq!(offset(0), 0.0);
    assert_eq!(offset(20), 20.0);
    assert_eq!(offset(70), 20.0);
    assert_eq!(
        render_background(BackgroundKind::Grid, &colors(), 20, CANVAS),
        render_background(BackgroundKind::Grid, &colors(), 70, CANVAS)
    );
}

#[test]
fn particles_stay_on_canvas() {
    for f in [0u64, 1, 59, 1000, 123_456] {
        let bg = render_background(BackgroundKind::Particles, &colors(), f, CANVAS);
        assert_eq!(bg.shapes.len(), 30);
        for s in &bg.shapes {
            let Geometry::Circle { center, radius } = s.geometry else {
                panic!("expected circle");
            };
            assert!((0.0..CANVAS.width_f64()).contains(&center.x));
            assert!((0.0..CANVAS.height_f64()).contains(&center.y));
            assert!((1.0..=6.0).contains(&radius));
            assert_eq!(s.fill, Some(Color::parse("#0FF").unwrap()));
        }
    }
}

#[test]
fn shapes_rotate_in_alternating_directions() {
    let rot = |f: u64, i: usize| {
        let bg = render_background(BackgroundKind::Shapes, &colors(), f, CANVAS);
        let s = &bg.shapes[i];
        let Geometry::Rect { rect, .. } = s.geometry else {
            panic!("expected rect");
        };
        // Rotation about the square's center leaves the center fixed.
        let c = s.transform * rect.center();
        assert!((c - rect.center()).hypot() < 1e-6);
        let corner = s.transform * Point::new(rect.x1, rect.y0);
        (corner - rect.center()).atan2().to_degrees()
    };
    let before = rot(10, 0);
    let after = rot(11, 0);
    assert!(((after - before).rem_euclid(360.0) - 1.0).abs() < 1e-6);
    let before = rot(10, 1);
    let after = rot(11, 1);
    assert!(((before - after).rem_euclid(360.0) - 1.0).abs() < 1e-6);
}

#[test]
fn revisiting_a_frame_is_identical() {
    for kind in BackgroundKind::ALL {
        let a = render_background(*kind, &colors(), 42, CANVAS);
        let _ = render_background(*kind, &colors(), 43, CANVAS);
        let b = render_background(*kind, &colors(), 42, CANVAS);
        assert_eq!(a, b, "{kind}");
    }
}

#[test]
fn missing_colors_fall_back() {
    let bg = render_background(BackgroundKind::Particles, &[], 0, CANVAS);
    assert_eq!(bg.fill, Paint::Solid { color: Color::black() });
    assert_eq!(bg.shapes[0].fill, Some(Color::white()));
}
