use crate::{
    foundation::core::{CANVAS, Canvas, FPS, Fps},
    render::{
        background::render_background,
        decor::{DecorContext, render_decorations},
        drawable::{LayerStack, TextShadow},
        text::{TextBlock, TextLook, render_text},
        transition::{TRANSITION_FRAMES, render_transition},
    },
    style::{design::DesignConfig, registry::StyleVariant},
    timeline::scene::Scene,
};

/// Stacks the four layers of one scene under a style variant.
#[derive(Clone, Copy, Debug)]
pub struct SceneCompositor<'a> {
    variant: &'a StyleVariant,
    fps: Fps,
    canvas: Canvas,
}

impl<'a> SceneCompositor<'a> {
    pub fn new(variant: &'a StyleVariant) -> Self {
        Self {
            variant,
            fps: FPS,
            canvas: CANVAS,
        }
    }

    pub fn variant(&self) -> &'a StyleVariant {
        self.variant
    }

    /// The variant's text style with palette slots and per-scene picks resolved.
    pub fn text_look(&self, design: &DesignConfig, scene_index: usize) -> TextLook {
        let style = &self.variant.text;
        let palette = &design.palette;
        TextLook {
            size_px: style.size_px,
            weight: style.weight,
            line_height: style.line_height,
            letter_spacing_px: style.letter_spacing_px,
            align: style.align,
            region: style.region,
            color: style.color.resolve(palette),
            shadows: style
                .shadows
                .iter()
                .map(|s| TextShadow {
                    offset: s.offset,
                    blur_px: s.blur_px,
                    color: s.color.resolve(palette),
                })
                .collect(),
            backdrop: style.backdrop.as_ref().map(|b| b.resolve(palette)),
            rotation_deg: style
                .rotation_deg
                .as_ref()
                .map_or(0.0, |pick| pick.select(scene_index, 0.0)),
            stagger: self.variant.stagger,
        }
    }

    /// Bottom to top: background, decorations, text, transition overlay.
    pub fn compose(
        &self,
        scene_index: usize,
        scene: &Scene,
        design: &DesignConfig,
        local_frame: u64,
    ) -> LayerStack {
        let background = render_background(
            design.background,
            &self.variant.background_colors(design),
            local_frame,
            self.canvas,
        );

        let decorations = render_decorations(
            &self.variant.decorations,
            &DecorContext {
                palette: &design.palette,
                font: &design.font,
                scene_index,
                local_frame,
                fps: self.fps,
                canvas: self.canvas,
            },
        );

        let display = self.variant.display_text(scene);
        let look = self.text_look(design, scene_index);
        let text = render_text(
            &TextBlock {
                text: &display,
                font: &design.font,
                effect: design.text_effect,
                animation: design.entry_animation,
                look: &look,
            },
            local_frame,
            self.fps,
        );

        let transition = render_transition(
            design.transition,
            &self.variant.transition_color.resolve(&design.palette),
            local_frame,
            self.fps,
            TRANSITION_FRAMES,
            self.canvas,
        );

        LayerStack {
            background,
            decorations,
            text,
            transition,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
