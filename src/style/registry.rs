//! Style variant catalog.
//!
//! A [`StyleVariant`] is pure data: its font and palette tables, the text look, the static
//! decorations drawn between background and text, and a declarative list of layer overrides
//! that pin or alternate generated choices. The engine has no per-style branches; adding a
//! style means adding one catalog entry.

use std::{fs::File, io::BufReader, path::Path, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::{
    animation::spring::SpringConfig,
    foundation::{
        core::{CANVAS, Point, Rect, Vec2},
        error::{ReelError, ReelResult},
        math::random01,
    },
    style::{
        color::Color,
        design::{
            BackgroundKind, DEFAULT_FONT, DesignConfig, EntryAnimation, TextEffect,
            TransitionKind, default_palette,
        },
    },
    timeline::scene::Scene,
};

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Choice pinned by a style, as a function of the scene index only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pick<T> {
    /// Always use this value.
    Always(T),
    /// Even scene indices use `even`, odd ones use `odd`.
    Alternate { even: T, odd: T },
    /// Even scene indices use the value; odd ones keep the generated choice.
    EvenOnly(T),
}

impl<T: Clone> Pick<T> {
    pub fn select(&self, scene_index: usize, generated: T) -> T {
        let even = scene_index % 2 == 0;
        match self {
            Self::Always(v) => v.clone(),
            Self::Alternate { even: e, odd: o } => {
                if even {
                    e.clone()
                } else {
                    o.clone()
                }
            }
            Self::EvenOnly(v) => {
                if even {
                    v.clone()
                } else {
                    generated
                }
            }
        }
    }
}

/// Reference to a color: a palette slot (with a fallback when the palette is shorter) or a
/// fixed color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    Palette {
        index: usize,
        #[serde(default)]
        fallback: Option<Color>,
    },
    Fixed(Color),
}

impl ColorSlot {
    pub fn palette(index: usize) -> Self {
        Self::Palette {
            index,
            fallback: None,
        }
    }

    pub fn resolve(&self, palette: &[Color]) -> Color {
        match self {
            Self::Fixed(c) => c.clone(),
            Self::Palette { index, fallback } => palette
                .get(*index)
                .or(fallback.as_ref())
                .cloned()
                .unwrap_or_else(Color::white),
        }
    }
}

/// Palette adjustments applied after the generated pick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteRule {
    /// Palettes with fewer than `min` colors are replaced wholesale.
    AtLeast { min: usize, replacement: Vec<Color> },
    /// `random01(scene_index + seed_offset) > threshold` selects `heads`, otherwise `tails`.
    CoinFlip {
        seed_offset: u64,
        threshold: f64,
        heads: Vec<Color>,
        tails: Vec<Color>,
    },
}

impl PaletteRule {
    fn apply(&self, scene_index: usize, generated: Vec<Color>) -> Vec<Color> {
        match self {
            Self::AtLeast { min, replacement } => {
                if generated.len() < *min {
                    replacement.clone()
                } else {
                    generated
                }
            }
            Self::CoinFlip {
                seed_offset,
                threshold,
                heads,
                tails,
            } => {
                let seed = (scene_index as u64).wrapping_add(*seed_offset);
                if random01(seed) > *threshold {
                    heads.clone()
                } else {
                    tails.clone()
                }
            }
        }
    }

    fn palettes(&self) -> Vec<&Vec<Color>> {
        match self {
            Self::AtLeast { replacement, .. } => vec![replacement],
            Self::CoinFlip { heads, tails, .. } => vec![heads, tails],
        }
    }
}

/// Fixed or alternating choices that bypass the generator for specific layers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerOverrides {
    pub font: Option<Pick<String>>,
    pub entry_animation: Option<Pick<EntryAnimation>>,
    pub text_effect: Option<Pick<TextEffect>>,
    pub transition: Option<Pick<TransitionKind>>,
    pub background: Option<Pick<BackgroundKind>>,
    pub palette: Option<PaletteRule>,
}

impl LayerOverrides {
    pub fn apply(&self, scene_index: usize, mut design: DesignConfig) -> DesignConfig {
        if let Some(p) = &self.font {
            design.font = p.select(scene_index, design.font);
        }
        if let Some(p) = &self.entry_animation {
            design.entry_animation = p.select(scene_index, design.entry_animation);
        }
        if let Some(p) = &self.text_effect {
            design.text_effect = p.select(scene_index, design.text_effect);
        }
        if let Some(p) = &self.transition {
            design.transition = p.select(scene_index, design.transition);
        }
        if let Some(p) = &self.background {
            design.background = p.select(scene_index, design.background);
        }
        if let Some(rule) = &self.palette {
            design.palette = rule.apply(scene_index, design.palette);
        }
        design
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCase {
    #[default]
    AsIs,
    Upper,
    Lower,
}

impl TextCase {
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::AsIs => s.to_owned(),
            Self::Upper => s.to_uppercase(),
            Self::Lower => s.to_lowercase(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    #[default]
    Center,
    End,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowStyle {
    #[serde(default)]
    pub offset: Vec2,
    #[serde(default)]
    pub blur_px: f64,
    pub color: ColorSlot,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub size_px: f64,
    pub weight: u16,
    pub line_height: f64,
    pub letter_spacing_px: f64,
    pub case: TextCase,
    pub align: TextAlign,
    /// Layout box on the canvas.
    pub region: Rect,
    pub color: ColorSlot,
    pub shadows: Vec<ShadowStyle>,
    /// Solid fill behind the text block.
    pub backdrop: Option<ColorSlot>,
    /// Static rotation of the whole text block.
    pub rotation_deg: Option<Pick<f64>>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: 100.0,
            weight: 400,
            line_height: 1.0,
            letter_spacing_px: 0.0,
            case: TextCase::AsIs,
            align: TextAlign::Center,
            region: CANVAS.bounds(),
            color: ColorSlot::Palette {
                index: 1,
                fallback: Some(Color::white()),
            },
            shadows: Vec::new(),
            backdrop: None,
            rotation_deg: None,
        }
    }
}

/// Per-word cascade used by the `stagger` text effect.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaggerStyle {
    pub spring: SpringConfig,
    pub rise_px: f64,
    pub delay_frames: u64,
}

impl Default for StaggerStyle {
    fn default() -> Self {
        Self {
            spring: SpringConfig::default(),
            rise_px: 20.0,
            delay_frames: 5,
        }
    }
}

/// Static, style-specific elements drawn between the background and the text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Decoration {
    /// Stroked rectangle inset from the canvas edges.
    FrameBorder {
        inset_px: f64,
        width_px: f64,
        color: ColorSlot,
    },
    /// `No. <scene number>` label, right-aligned at `origin`, in the scene font.
    SceneNumber {
        origin: Point,
        size_px: f64,
        color: ColorSlot,
    },
    Disc {
        center: Point,
        radius: f64,
        color: ColorSlot,
    },
    /// Horizontal CRT lines over the whole canvas.
    Scanlines {
        period_px: f64,
        line_px: f64,
        color: Color,
    },
    /// Receding floor grid, tilted away from the viewer.
    SunGrid {
        rect: Rect,
        spacing_px: f64,
        line_px: f64,
        tilt_deg: f64,
        opacity: f64,
        color: ColorSlot,
        #[serde(default)]
        even_scenes_only: bool,
    },
    GlowBox {
        rect: Rect,
        width_px: f64,
        corner_radius: f64,
        glow_px: f64,
        color: ColorSlot,
    },
    Panel {
        rect: Rect,
        border_px: f64,
        border: ColorSlot,
        fill: ColorSlot,
    },
    Bar {
        rect: Rect,
        color: ColorSlot,
    },
    /// Seeded circle and bar that spring-scale in with the scene.
    BauhausShapes {
        circle: Color,
        bar: Color,
    },
}

/// One entry of the style catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleVariant {
    pub id: String,
    #[serde(default)]
    pub fonts: Vec<String>,
    #[serde(default)]
    pub palettes: Vec<Vec<Color>>,
    /// Text shown when a scene has neither visual text nor a visual prompt.
    pub placeholder: String,
    #[serde(default)]
    pub overrides: LayerOverrides,
    /// Colors handed to the background renderer; the design palette when absent.
    #[serde(default)]
    pub background_colors: Option<Vec<ColorSlot>>,
    #[serde(default)]
    pub text: TextStyle,
    #[serde(default)]
    pub stagger: StaggerStyle,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
    pub transition_color: ColorSlot,
}

impl StyleVariant {
    /// Variant used for unknown style ids: default tables, no overrides, no decorations.
    pub fn fallback() -> &'static StyleVariant {
        static FALLBACK: OnceLock<StyleVariant> = OnceLock::new();
        FALLBACK.get_or_init(|| StyleVariant {
            id: "default".to_owned(),
            fonts: FALLBACK_FONTS.iter().map(|s| (*s).to_owned()).collect(),
            palettes: vec![default_palette()],
            placeholder: "UNTITLED".to_owned(),
            overrides: LayerOverrides::default(),
            background_colors: None,
            text: TextStyle::default(),
            stagger: StaggerStyle::default(),
            decorations: Vec::new(),
            transition_color: ColorSlot::palette(1),
        })
    }

    /// Generated choices for `scene_index` with this variant's overrides applied.
    pub fn design(&self, scene_index: usize) -> DesignConfig {
        let generated =
            DesignConfig::generate_from_tables(&self.fonts, &self.palettes, scene_index);
        self.overrides.apply(scene_index, generated)
    }

    /// Text for `scene` after placeholder fallback and letter-case rules.
    pub fn display_text(&self, scene: &Scene) -> String {
        self.text.case.apply(scene.display_text(&self.placeholder))
    }

    pub fn background_colors(&self, design: &DesignConfig) -> Vec<Color> {
        match &self.background_colors {
            Some(slots) => slots.iter().map(|s| s.resolve(&design.palette)).collect(),
            None => design.palette.clone(),
        }
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.id.trim().is_empty() {
            return Err(ReelError::validation("style id must be non-empty"));
        }
        if self.placeholder.trim().is_empty() {
            return Err(ReelError::validation(format!(
                "style '{}' placeholder must be non-empty",
                self.id
            )));
        }
        if self.fonts.iter().any(|f| f.trim().is_empty()) {
            return Err(ReelError::validation(format!(
                "style '{}' has an empty font name",
                self.id
            )));
        }
        let rule_palettes = self
            .overrides
            .palette
            .as_ref()
            .map(PaletteRule::palettes)
            .unwrap_or_default();
        for palette in self.palettes.iter().chain(rule_palettes) {
            if !(2..=3).contains(&palette.len()) {
                return Err(ReelError::validation(format!(
                    "style '{}' palettes must have 2 or 3 colors (got {})",
                    self.id,
                    palette.len()
                )));
            }
        }
        if let Some(Pick::Always(font) | Pick::EvenOnly(font)) = &self.overrides.font
            && font.trim().is_empty()
        {
            return Err(ReelError::validation(format!(
                "style '{}' font override must be non-empty",
                self.id
            )));
        }
        let r = self.text.region;
        if !(r.width() > 0.0 && r.height() > 0.0) {
            return Err(ReelError::validation(format!(
                "style '{}' text region must have positive size",
                self.id
            )));
        }
        if !(self.text.size_px.is_finite() && self.text.size_px > 0.0) {
            return Err(ReelError::validation(format!(
                "style '{}' text size must be > 0",
                self.id
            )));
        }
        Ok(())
    }
}

const FALLBACK_FONTS: &[&str] = &[DEFAULT_FONT, "Impact", "Anton", "Bebas Neue", "Fjalla One"];

#[derive(Deserialize)]
struct CatalogDef {
    styles: Vec<StyleVariant>,
}

/// Read-only catalog of style variants, keyed by id (case-insensitive).
#[derive(Clone, Debug)]
pub struct VariantRegistry {
    variants: Vec<StyleVariant>,
}

impl VariantRegistry {
    pub fn new(variants: Vec<StyleVariant>) -> ReelResult<Self> {
        for (i, v) in variants.iter().enumerate() {
            v.validate()?;
            if variants[..i]
                .iter()
                .any(|other| other.id.eq_ignore_ascii_case(&v.id))
            {
                return Err(ReelError::validation(format!(
                    "duplicate style id '{}'",
                    v.id
                )));
            }
        }
        Ok(Self { variants })
    }

    /// The catalog compiled into the crate, parsed once per process.
    pub fn builtin() -> ReelResult<&'static VariantRegistry> {
        static BUILTIN: OnceLock<Result<VariantRegistry, String>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Self::from_json_str(BUILTIN_CATALOG).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| ReelError::validation(format!("built-in style catalog: {e}")))
    }

    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let def: CatalogDef = serde_json::from_str(s)
            .map_err(|e| ReelError::serde(format!("parse style catalog JSON: {e}")))?;
        Self::new(def.styles)
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let def: CatalogDef = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse style catalog JSON: {e}")))?;
        Self::new(def.styles)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open style catalog '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn get(&self, style_id: &str) -> Option<&StyleVariant> {
        let id = style_id.trim();
        self.variants.iter().find(|v| v.id.eq_ignore_ascii_case(id))
    }

    /// Strict lookup used at configuration time.
    pub fn resolve(&self, style_id: &str) -> ReelResult<&StyleVariant> {
        self.get(style_id).ok_or_else(|| {
            ReelError::configuration(format!(
                "unknown style id '{style_id}' (known: {})",
                self.ids().collect::<Vec<_>>().join(", ")
            ))
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleVariant> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/registry.rs"]
mod tests;
