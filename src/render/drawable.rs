//! Layered, backend-agnostic description of one output frame.
//!
//! Nothing here is rasterized. A frame is a stack of plain draw calls in canvas pixels that an
//! external renderer can paint bottom to top: background, decorations, text, transition.

use serde::Serialize;

use crate::{
    foundation::core::{Affine, Canvas, FrameIndex, Point, Rect, Transform2D, Vec2},
    render::fingerprint::{FrameFingerprint, fingerprint_frame},
    style::{
        color::Color,
        design::{BackgroundKind, DesignConfig, TransitionKind},
        registry::TextAlign,
    },
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width_px: f64,
}

/// Soft halo around a shape's outline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Glow {
    pub color: Color,
    pub blur_px: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Rect {
        rect: Rect,
        corner_radius: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    /// Square line lattice clipped to `rect`, shifted by `offset` (wrapping every `spacing_px`)
    /// and optionally tilted back by `perspective_deg`.
    Grid {
        rect: Rect,
        spacing_px: f64,
        line_px: f64,
        offset: Vec2,
        perspective_deg: f64,
    },
    /// Horizontal lines `line_px` thick every `period_px`.
    Stripes {
        rect: Rect,
        period_px: f64,
        line_px: f64,
    },
    Label {
        text: String,
        font: String,
        size_px: f64,
        weight: u16,
        origin: Point,
        align: TextAlign,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    pub geometry: Geometry,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub glow: Option<Glow>,
    pub opacity: f64,
    pub transform: Affine,
}

impl Shape {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            fill: None,
            stroke: None,
            glow: None,
            opacity: 1.0,
            transform: Affine::IDENTITY,
        }
    }

    pub fn filled(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroked(mut self, color: Color, width_px: f64) -> Self {
        self.stroke = Some(Stroke { color, width_px });
        self
    }

    pub fn glowing(mut self, color: Color, blur_px: f64) -> Self {
        self.glow = Some(Glow { color, blur_px });
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    /// CSS-style linear gradient; 0° points up, angles grow clockwise.
    LinearGradient {
        angle_deg: f64,
        from: Color,
        to: Color,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BackgroundDraw {
    pub kind: BackgroundKind,
    pub fill: Paint,
    pub shapes: Vec<Shape>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextShadow {
    pub offset: Vec2,
    pub blur_px: f64,
    pub color: Color,
}

/// One word of a staggered text block, offset from its resting position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WordDraw {
    pub text: String,
    pub opacity: f64,
    pub translate_y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextDraw {
    /// Characters to draw (a prefix of the display text while a typewriter is running).
    pub text: String,
    pub font: String,
    pub size_px: f64,
    pub weight: u16,
    pub line_height: f64,
    pub letter_spacing_px: f64,
    pub align: TextAlign,
    pub region: Rect,
    pub color: Color,
    pub shadows: Vec<TextShadow>,
    pub backdrop: Option<Color>,
    pub opacity: f64,
    pub transform: Transform2D,
    pub blur_px: f64,
    /// Present when words animate individually; `text` then holds the whole line.
    pub words: Option<Vec<WordDraw>>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayShape {
    /// Full-canvas fill, shifted by `translate`.
    Fill { translate: Vec2 },
    /// Full-canvas fill with a transparent circular hole.
    IrisHole { center: Point, radius: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransitionOverlay {
    pub kind: TransitionKind,
    pub color: Color,
    pub progress: f64,
    pub opacity: f64,
    pub shape: OverlayShape,
}

/// Layers in paint order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerStack {
    pub background: BackgroundDraw,
    pub decorations: Vec<Shape>,
    pub text: TextDraw,
    pub transition: Option<TransitionOverlay>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameOutput {
    pub frame: FrameIndex,
    pub scene_index: usize,
    pub local_frame: u64,
    /// Requested past the end of the timeline.
    pub held: bool,
    pub canvas: Canvas,
    pub design: DesignConfig,
    pub layers: LayerStack,
}

impl FrameOutput {
    /// Hash of everything drawn, ignoring where on the timeline the frame was requested.
    pub fn fingerprint(&self) -> FrameFingerprint {
        fingerprint_frame(self)
    }

    /// Same picture as `other`.
    pub fn same_drawing(&self, other: &FrameOutput) -> bool {
        self.canvas == other.canvas && self.design == other.design && self.layers == other.layers
    }
}
