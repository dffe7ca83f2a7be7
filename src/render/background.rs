//! Background layer.
//!
//! Every motif is a closed-form function of the local frame: there is no simulation state, so
//! any frame can be drawn first and a revisited frame draws identically.

use crate::{
    foundation::{
        core::{Canvas, Point, Rect, Transform2D, Vec2},
        math::random01,
    },
    render::drawable::{BackgroundDraw, Geometry, Paint, Shape},
    style::{color::Color, design::BackgroundKind},
};

const GRID_CELL_PX: f64 = 50.0;
const GRID_LINE_PX: f64 = 1.0;
const GRID_OPACITY: f64 = 0.3;

const PARTICLE_COUNT: u64 = 30;
const PARTICLE_SEED_STRIDE: u64 = 23;
const PARTICLE_SWAY_PX: f64 = 50.0;

const SHAPE_COUNT: u64 = 5;
const SHAPE_SIZE_PX: f64 = 300.0;
const SHAPE_BORDER_PX: f64 = 4.0;
const SHAPE_OPACITY: f64 = 0.2;

/// Draw the `kind` motif with `colors` (`[base, accent, ..]`) at `local_frame`.
pub fn render_background(
    kind: BackgroundKind,
    colors: &[Color],
    local_frame: u64,
    canvas: Canvas,
) -> BackgroundDraw {
    let base = colors.first().cloned().unwrap_or_else(Color::black);
    let accent = colors.get(1).cloned();
    let frame = local_frame as f64;

    let (fill, shapes) = match kind {
        BackgroundKind::Solid => (Paint::Solid { color: base }, Vec::new()),
        BackgroundKind::Gradient => {
            let to = accent.unwrap_or_else(|| base.clone());
            let paint = Paint::LinearGradient {
                angle_deg: (local_frame % 360) as f64,
                from: base,
                to,
            };
            (paint, Vec::new())
        }
        BackgroundKind::Grid => {
            let line = accent.unwrap_or_else(|| base.clone());
            let grid = Shape::new(Geometry::Grid {
                rect: canvas.bounds(),
                spacing_px: GRID_CELL_PX,
                line_px: GRID_LINE_PX,
                offset: Vec2::new(0.0, frame.rem_euclid(GRID_CELL_PX)),
                perspective_deg: 0.0,
            })
            .stroked(line, GRID_LINE_PX)
            .with_opacity(GRID_OPACITY);
            (Paint::Solid { color: base }, vec![grid])
        }
        BackgroundKind::Particles => {
            let dot = accent.unwrap_or_else(Color::white);
            let shapes = (0..PARTICLE_COUNT)
                .map(|i| particle(i, frame, canvas, dot.clone()))
                .collect();
            (Paint::Solid { color: base }, shapes)
        }
        BackgroundKind::Shapes => {
            let border = accent.unwrap_or_else(Color::white);
            let shapes = (0..SHAPE_COUNT)
                .map(|i| outlined_square(i, frame, canvas, border.clone()))
                .collect();
            (Paint::Solid { color: base }, shapes)
        }
    };

    BackgroundDraw { kind, fill, shapes }
}

/// Particle `i` drifts down at its own speed and sways sideways; both axes wrap so particles
/// never leave the canvas.
fn particle(i: u64, frame: f64, canvas: Canvas, color: Color) -> Shape {
    let seed = i * PARTICLE_SEED_STRIDE;
    let (w, h) = (canvas.width_f64(), canvas.height_f64());

    let sway = (frame / 50.0 + seed as f64).sin() * PARTICLE_SWAY_PX;
    let x = (random01(seed) * w + sway).rem_euclid(w);
    let fall_speed = random01(seed + 2) * 5.0 + 2.0;
    let y = (random01(seed + 1) * h + frame * fall_speed).rem_euclid(h);
    let diameter = random01(seed + 3) * 10.0 + 2.0;

    Shape::new(Geometry::Circle {
        center: Point::new(x, y),
        radius: diameter / 2.0,
    })
    .filled(color)
}

/// Square `i` sits at a seeded position and spins, even indices clockwise.
fn outlined_square(i: u64, frame: f64, canvas: Canvas, border: Color) -> Shape {
    let center = Point::new(
        random01(i) * canvas.width_f64(),
        random01(i + 1) * canvas.height_f64(),
    );
    let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
    let rotation_deg = (frame * direction + i as f64 * 45.0).rem_euclid(360.0);
    let half = SHAPE_SIZE_PX / 2.0;

    let transform = Transform2D {
        rotation_deg,
        anchor: center.to_vec2(),
        ..Transform2D::default()
    };
    Shape::new(Geometry::Rect {
        rect: Rect::new(center.x - half, center.y - half, center.x + half, center.y + half),
        corner_radius: 0.0,
    })
    .stroked(border, SHAPE_BORDER_PX)
    .with_opacity(SHAPE_OPACITY)
    .with_transform(transform.to_affine())
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
