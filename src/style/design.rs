use crate::{
    foundation::math::random_index,
    style::{
        color::Color,
        registry::{StyleVariant, VariantRegistry},
    },
};

/// Per-category seed offsets.
///
/// The base seed of a scene is its index; each kind of choice adds its own offset before
/// drawing so that, e.g., the font pick never shares a draw with the transition pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedCategory {
    Font,
    Animation,
    Effect,
    Transition,
    Palette,
    Background,
}

impl SeedCategory {
    pub const fn offset(self) -> u64 {
        match self {
            Self::Font => 100,
            Self::Animation => 200,
            Self::Effect => 300,
            Self::Transition => 400,
            Self::Palette => 500,
            Self::Background => 600,
        }
    }

    pub fn seed(self, scene_index: usize) -> u64 {
        (scene_index as u64).wrapping_add(self.offset())
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Uniform pick from [`Self::ALL`].
            pub fn pick(seed: u64) -> Self {
                Self::ALL[random_index(seed, Self::ALL.len())]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

choice_enum!(
    /// Block-level animation applied once when a scene enters.
    EntryAnimation {
        Fade => "fade",
        Slide => "slide",
        Zoom => "zoom",
        Bounce => "bounce",
        Rotate => "rotate",
    }
);

choice_enum!(
    /// Per-character or per-word effect layered over the entry animation.
    TextEffect {
        None => "none",
        Typewriter => "typewriter",
        Stagger => "stagger",
        Blur => "blur",
        Glitch => "glitch",
    }
);

choice_enum!(
    /// Overlay that reveals a scene during its first frames.
    TransitionKind {
        None => "none",
        Wipe => "wipe",
        Dissolve => "dissolve",
        Push => "push",
        Iris => "iris",
    }
);

choice_enum!(
    /// Background motif.
    BackgroundKind {
        Solid => "solid",
        Gradient => "gradient",
        Grid => "grid",
        Particles => "particles",
        Shapes => "shapes",
    }
);

/// Deterministic bundle of visual choices for one scene.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DesignConfig {
    pub font: String,
    pub entry_animation: EntryAnimation,
    pub text_effect: TextEffect,
    pub transition: TransitionKind,
    pub background: BackgroundKind,
    pub palette: Vec<Color>,
}

impl DesignConfig {
    /// Draw every layer choice for `scene_index` from the given tables, before any style
    /// overrides. Empty tables fall back to the default font and the black/white palette.
    pub fn generate_from_tables(
        fonts: &[String],
        palettes: &[Vec<Color>],
        scene_index: usize,
    ) -> Self {
        let font = if fonts.is_empty() {
            DEFAULT_FONT.to_owned()
        } else {
            fonts[random_index(SeedCategory::Font.seed(scene_index), fonts.len())].clone()
        };
        let palette = if palettes.is_empty() {
            default_palette()
        } else {
            palettes[random_index(SeedCategory::Palette.seed(scene_index), palettes.len())].clone()
        };

        Self {
            font,
            entry_animation: EntryAnimation::pick(SeedCategory::Animation.seed(scene_index)),
            text_effect: TextEffect::pick(SeedCategory::Effect.seed(scene_index)),
            transition: TransitionKind::pick(SeedCategory::Transition.seed(scene_index)),
            background: BackgroundKind::pick(SeedCategory::Background.seed(scene_index)),
            palette,
        }
    }
}

pub(crate) const DEFAULT_FONT: &str = "Oswald";

/// `{background, foreground}` used by styles without a palette table.
pub fn default_palette() -> Vec<Color> {
    vec![Color::black(), Color::white()]
}

/// Design for `scene_index` under `style_id`, using the built-in catalog.
///
/// Never fails: an unknown style (or an unusable catalog) degrades to the default font and
/// palette tables with no layer overrides.
pub fn generate(style_id: &str, scene_index: usize) -> DesignConfig {
    let variant = VariantRegistry::builtin()
        .ok()
        .and_then(|reg| reg.get(style_id));
    match variant {
        Some(v) => v.design(scene_index),
        None => {
            tracing::warn!(style_id, "unknown style id, using default design tables");
            StyleVariant::fallback().design(scene_index)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/design.rs"]
mod tests;
