use crate::{
    animation::{
        interp::{Extrapolate, interpolate},
        spring::{SpringConfig, spring_over},
    },
    foundation::core::{Canvas, Fps, Vec2},
    render::drawable::{OverlayShape, TransitionOverlay},
    style::{color::Color, design::TransitionKind},
};

/// Length of the reveal at the start of every scene.
pub const TRANSITION_FRAMES: u64 = 15;

/// Overlay covering the scene at `local_frame`, or `None` once the reveal has finished.
///
/// Progress follows the transition spring stretched over exactly `duration_frames`, so an
/// overlay exists for every frame in `0..duration_frames` and never after.
pub fn render_transition(
    kind: TransitionKind,
    color: &Color,
    local_frame: u64,
    fps: Fps,
    duration_frames: u64,
    canvas: Canvas,
) -> Option<TransitionOverlay> {
    if kind == TransitionKind::None || local_frame >= duration_frames {
        return None;
    }
    let progress = spring_over(
        local_frame as f64,
        fps,
        SpringConfig::TRANSITION,
        duration_frames,
    );
    if progress >= 1.0 {
        return None;
    }
    let travel = |to: f64| interpolate(progress, (0.0, 1.0), (0.0, to), Extrapolate::Clamp);

    let (opacity, shape) = match kind {
        TransitionKind::None => return None,
        TransitionKind::Dissolve => (
            interpolate(progress, (0.0, 1.0), (1.0, 0.0), Extrapolate::Clamp),
            OverlayShape::Fill {
                translate: Vec2::ZERO,
            },
        ),
        TransitionKind::Wipe => (
            1.0,
            OverlayShape::Fill {
                translate: Vec2::new(travel(canvas.width_f64()), 0.0),
            },
        ),
        TransitionKind::Push => (
            1.0,
            OverlayShape::Fill {
                translate: Vec2::new(0.0, travel(canvas.height_f64())),
            },
        ),
        TransitionKind::Iris => {
            let max_radius = canvas.width_f64().max(canvas.height_f64()) * 1.5;
            (
                1.0,
                OverlayShape::IrisHole {
                    center: canvas.center(),
                    radius: travel(max_radius),
                },
            )
        }
    };

    Some(TransitionOverlay {
        kind,
        color: color.clone(),
        progress,
        opacity,
        shape,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/transition.rs"]
mod tests;
