use crate::{
    animation::{
        interp::{Extrapolate, interpolate},
        spring::{SpringConfig, spring},
    },
    foundation::{
        core::{Fps, Rect, Transform2D, Vec2},
        math::random01,
    },
    render::drawable::{TextDraw, TextShadow, WordDraw},
    style::{
        color::Color,
        design::{EntryAnimation, TextEffect},
        registry::{StaggerStyle, TextAlign},
    },
};

/// Typeset look of a text block with every color slot already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLook {
    pub size_px: f64,
    pub weight: u16,
    pub line_height: f64,
    pub letter_spacing_px: f64,
    pub align: TextAlign,
    pub region: Rect,
    pub color: Color,
    pub shadows: Vec<TextShadow>,
    pub backdrop: Option<Color>,
    pub rotation_deg: f64,
    pub stagger: StaggerStyle,
}

/// Everything needed to animate one scene's text.
#[derive(Clone, Debug)]
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub font: &'a str,
    pub effect: TextEffect,
    pub animation: EntryAnimation,
    pub look: &'a TextLook,
}

const BLUR_START_PX: f64 = 10.0;
const SLIDE_FROM_PX: f64 = 100.0;
const ROTATE_FROM_DEG: f64 = -10.0;
const GLITCH_SKEW_RANGE_DEG: f64 = 20.0;

struct BlockMotion {
    opacity: f64,
    transform: Transform2D,
}

/// Entry animation for the whole block, driven by the entry spring's progress `p`.
fn block_motion(animation: EntryAnimation, p: f64, frame: f64, fps: Fps) -> BlockMotion {
    let lerp = |from: f64, to: f64| interpolate(p, (0.0, 1.0), (from, to), Extrapolate::Extend);
    let mut transform = Transform2D::default();
    let opacity = match animation {
        EntryAnimation::Fade => p,
        EntryAnimation::Slide => {
            transform.translate = Vec2::new(0.0, lerp(SLIDE_FROM_PX, 0.0));
            p
        }
        EntryAnimation::Zoom => {
            transform = transform.uniform_scale(lerp(0.5, 1.0));
            p
        }
        EntryAnimation::Bounce => {
            let b = spring(frame, fps, SpringConfig::BOUNCE);
            transform = transform.uniform_scale(b);
            1.0
        }
        EntryAnimation::Rotate => {
            transform.rotation_deg = lerp(ROTATE_FROM_DEG, 0.0);
            transform = transform.uniform_scale(p);
            p
        }
    };
    BlockMotion { opacity, transform }
}

/// First `n` characters (not bytes) of `s`.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

/// Animated state of `block` at `local_frame`.
pub fn render_text(block: &TextBlock<'_>, local_frame: u64, fps: Fps) -> TextDraw {
    let frame = local_frame as f64;
    let look = block.look;
    let p = spring(frame, fps, SpringConfig::ENTRY);
    let BlockMotion {
        mut opacity,
        mut transform,
    } = block_motion(block.animation, p, frame, fps);
    transform.anchor = look.region.center().to_vec2();
    transform.rotation_deg += look.rotation_deg;

    let mut text = block.text.to_owned();
    let mut blur_px = 0.0;
    let mut words = None;

    match block.effect {
        TextEffect::None => {}
        TextEffect::Typewriter => {
            let chars = block.text.chars().count() as f64;
            let shown = interpolate(frame, (0.0, chars * 2.0), (0.0, chars), Extrapolate::Clamp);
            text = char_prefix(block.text, shown.floor() as usize).to_owned();
        }
        TextEffect::Stagger => {
            let s = look.stagger;
            words = Some(
                block
                    .text
                    .split_whitespace()
                    .enumerate()
                    .map(|(i, word)| {
                        let delay = (i as u64).saturating_mul(s.delay_frames) as f64;
                        let wp = spring(frame - delay, fps, s.spring);
                        WordDraw {
                            text: word.to_owned(),
                            opacity: wp.clamp(0.0, 1.0),
                            translate_y: interpolate(
                                wp,
                                (0.0, 1.0),
                                (s.rise_px, 0.0),
                                Extrapolate::Extend,
                            ),
                        }
                    })
                    .collect(),
            );
        }
        TextEffect::Blur => {
            blur_px = interpolate(p, (0.0, 1.0), (BLUR_START_PX, 0.0), Extrapolate::Clamp);
        }
        TextEffect::Glitch => {
            opacity = 0.9 + random01(local_frame) * 0.1;
            transform.skew_x_deg =
                (random01(local_frame.wrapping_add(1)) - 0.5) * GLITCH_SKEW_RANGE_DEG;
        }
    }

    TextDraw {
        text,
        font: block.font.to_owned(),
        size_px: look.size_px,
        weight: look.weight,
        line_height: look.line_height,
        letter_spacing_px: look.letter_spacing_px,
        align: look.align,
        region: look.region,
        color: look.color.clone(),
        shadows: look.shadows.clone(),
        backdrop: look.backdrop.clone(),
        opacity: opacity.clamp(0.0, 1.0),
        transform,
        blur_px,
        words,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
