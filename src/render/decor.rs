use crate::{
    animation::spring::{SpringConfig, spring},
    foundation::{
        core::{Canvas, Fps, Point, Rect, Transform2D, Vec2},
        math::random01,
    },
    render::drawable::{Geometry, Shape},
    style::{
        color::Color,
        registry::{Decoration, TextAlign},
    },
};

const BAUHAUS_CIRCLE_PX: f64 = 800.0;
const BAUHAUS_CIRCLE_OVERHANG_PX: f64 = 200.0;
const BAUHAUS_BAR: (f64, f64) = (150.0, 1200.0);
const BAUHAUS_BAR_TOP_PX: f64 = -100.0;
const BAUHAUS_BAR_MAX_TILT_DEG: f64 = 45.0;

/// Per-scene inputs shared by all decorations.
#[derive(Clone, Copy, Debug)]
pub struct DecorContext<'a> {
    pub palette: &'a [Color],
    pub font: &'a str,
    pub scene_index: usize,
    pub local_frame: u64,
    pub fps: Fps,
    pub canvas: Canvas,
}

/// Shapes for `decorations`, in catalog order.
pub fn render_decorations(decorations: &[Decoration], ctx: &DecorContext<'_>) -> Vec<Shape> {
    let mut out = Vec::new();
    for d in decorations {
        render_one(d, ctx, &mut out);
    }
    out
}

fn render_one(decoration: &Decoration, ctx: &DecorContext<'_>, out: &mut Vec<Shape>) {
    let palette = ctx.palette;
    match decoration {
        Decoration::FrameBorder {
            inset_px,
            width_px,
            color,
        } => {
            let rect = ctx.canvas.bounds().inset(-inset_px);
            out.push(
                Shape::new(Geometry::Rect {
                    rect,
                    corner_radius: 0.0,
                })
                .stroked(color.resolve(palette), *width_px),
            );
        }
        Decoration::SceneNumber {
            origin,
            size_px,
            color,
        } => out.push(
            Shape::new(Geometry::Label {
                text: format!("No. {}", ctx.scene_index + 1),
                font: ctx.font.to_owned(),
                size_px: *size_px,
                weight: 700,
                origin: *origin,
                align: TextAlign::End,
            })
            .filled(color.resolve(palette)),
        ),
        Decoration::Disc {
            center,
            radius,
            color,
        } => out.push(
            Shape::new(Geometry::Circle {
                center: *center,
                radius: *radius,
            })
            .filled(color.resolve(palette)),
        ),
        Decoration::Scanlines {
            period_px,
            line_px,
            color,
        } => out.push(
            Shape::new(Geometry::Stripes {
                rect: ctx.canvas.bounds(),
                period_px: *period_px,
                line_px: *line_px,
            })
            .filled(color.clone()),
        ),
        Decoration::SunGrid {
            rect,
            spacing_px,
            line_px,
            tilt_deg,
            opacity,
            color,
            even_scenes_only,
        } => {
            if *even_scenes_only && ctx.scene_index % 2 == 1 {
                return;
            }
            out.push(
                Shape::new(Geometry::Grid {
                    rect: *rect,
                    spacing_px: *spacing_px,
                    line_px: *line_px,
                    offset: Vec2::ZERO,
                    perspective_deg: *tilt_deg,
                })
                .stroked(color.resolve(palette), *line_px)
                .with_opacity(*opacity),
            );
        }
        Decoration::GlowBox {
            rect,
            width_px,
            corner_radius,
            glow_px,
            color,
        } => {
            let c = color.resolve(palette);
            out.push(
                Shape::new(Geometry::Rect {
                    rect: *rect,
                    corner_radius: *corner_radius,
                })
                .stroked(c.clone(), *width_px)
                .glowing(c, *glow_px),
            );
        }
        Decoration::Panel {
            rect,
            border_px,
            border,
            fill,
        } => out.push(
            Shape::new(Geometry::Rect {
                rect: *rect,
                corner_radius: 0.0,
            })
            .filled(fill.resolve(palette))
            .stroked(border.resolve(palette), *border_px),
        ),
        Decoration::Bar { rect, color } => out.push(
            Shape::new(Geometry::Rect {
                rect: *rect,
                corner_radius: 0.0,
            })
            .filled(color.resolve(palette)),
        ),
        Decoration::BauhausShapes { circle, bar } => {
            bauhaus_shapes(circle, bar, ctx, out);
        }
    }
}

/// A large circle and a tilted bar at positions seeded by the scene, both springing in from
/// zero scale.
fn bauhaus_shapes(circle: &Color, bar: &Color, ctx: &DecorContext<'_>, out: &mut Vec<Shape>) {
    let seed = ctx.scene_index as u64 + 1;
    let (w, h) = (ctx.canvas.width_f64(), ctx.canvas.height_f64());
    let scale = spring(ctx.local_frame as f64, ctx.fps, SpringConfig::default());

    let radius = BAUHAUS_CIRCLE_PX / 2.0;
    let top_left = Point::new(
        w * random01(seed * 4) - BAUHAUS_CIRCLE_OVERHANG_PX,
        h * random01(seed * 5) - BAUHAUS_CIRCLE_OVERHANG_PX,
    );
    let center = top_left + Vec2::new(radius, radius);
    out.push(
        Shape::new(Geometry::Circle { center, radius })
            .filled(circle.clone())
            .with_transform(
                Transform2D {
                    anchor: center.to_vec2(),
                    ..Transform2D::default()
                }
                .uniform_scale(scale)
                .to_affine(),
            ),
    );

    let (bw, bh) = BAUHAUS_BAR;
    let bar_rect = Rect::from_origin_size(
        Point::new(w * random01(seed * 6), BAUHAUS_BAR_TOP_PX),
        (bw, bh),
    );
    out.push(
        Shape::new(Geometry::Rect {
            rect: bar_rect,
            corner_radius: 0.0,
        })
        .filled(bar.clone())
        .with_transform(
            Transform2D {
                rotation_deg: random01(seed * 7) * BAUHAUS_BAR_MAX_TILT_DEG,
                anchor: bar_rect.center().to_vec2(),
                ..Transform2D::default()
            }
            .uniform_scale(scale)
            .to_affine(),
        ),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/decor.rs"]
mod tests;
