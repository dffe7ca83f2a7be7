//! Reelcraft turns an ordered list of narrated scenes into a frame-accurate, layered description
//! of a styled vertical video.
//!
//! # Pipeline overview
//!
//! 1. **Design**: `style id + scene index -> DesignConfig` (font, palette, background, entry
//!    animation, text effect, transition), drawn from a seeded, stateless random source and then
//!    adjusted by the style variant's declarative overrides.
//! 2. **Schedule**: `scenes + total duration -> Timeline` (contiguous segments from frame 0).
//! 3. **Compose**: `Timeline + FrameIndex -> FrameOutput`, bottom to top: background,
//!    decorations, text, transition overlay.
//! 4. **Stream** (optional): evaluate a frame range, in parallel if asked, into a [`FrameSink`].
//!
//! Every step after session construction is a pure function of its inputs: frames can be
//! evaluated in any order, on any thread, and a revisited frame is identical. Rasterizing and
//! encoding the drawables is left to the caller.
#![forbid(unsafe_code)]

mod animation;
mod encode;
mod foundation;
mod render;
mod session;
mod style;
mod timeline;

pub use animation::interp::{Extrapolate, Lerp, interpolate};
pub use animation::spring::{SETTLE_THRESHOLD, SpringConfig, settle_frames, spring, spring_over};
pub use encode::sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
pub use foundation::core::{
    Affine, CANVAS, Canvas, FPS, Fps, FrameIndex, FrameRange, Point, Rect, Transform2D, Vec2,
};
pub use foundation::error::{ReelError, ReelResult};
pub use foundation::math::{random_index, random01};
pub use render::background::render_background;
pub use render::compositor::SceneCompositor;
pub use render::decor::{DecorContext, render_decorations};
pub use render::drawable::{
    BackgroundDraw, FrameOutput, Geometry, Glow, LayerStack, OverlayShape, Paint, Shape, Stroke,
    TextDraw, TextShadow, TransitionOverlay, WordDraw,
};
pub use render::fingerprint::FrameFingerprint;
pub use render::text::{TextBlock, TextLook, render_text};
pub use render::transition::{TRANSITION_FRAMES, render_transition};
pub use session::render_session::{RenderOpts, RenderRequest, RenderSession, RenderStats};
pub use style::color::Color;
pub use style::design::{
    BackgroundKind, DesignConfig, EntryAnimation, SeedCategory, TextEffect, TransitionKind,
    default_palette, generate,
};
pub use style::registry::{
    ColorSlot, Decoration, LayerOverrides, PaletteRule, Pick, ShadowStyle, StaggerStyle,
    StyleVariant, TextAlign, TextCase, TextStyle, VariantRegistry,
};
pub use timeline::scene::Scene;
pub use timeline::schedule::{DurationReport, Located, Segment, Timeline};
