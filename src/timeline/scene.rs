/// One narrated scene, as supplied by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub narration: String,
    #[serde(default, alias = "visualText", skip_serializing_if = "Option::is_none")]
    pub visual_text: Option<String>,
    #[serde(default, alias = "visualPrompt", skip_serializing_if = "Option::is_none")]
    pub visual_prompt: Option<String>,
    /// Explicit length on the timeline; the even share of the total when absent.
    #[serde(
        default,
        alias = "durationFrames",
        alias = "durationInFrames",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_frames: Option<u64>,
}

impl Scene {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            visual_text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn narration_only(narration: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            ..Self::default()
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.visual_prompt = Some(prompt.into());
        self
    }

    pub fn frames(mut self, duration_frames: u64) -> Self {
        self.duration_frames = Some(duration_frames);
        self
    }

    /// `visual_text`, then `visual_prompt`, then `placeholder`. Blank strings count as missing.
    pub fn display_text<'a>(&'a self, placeholder: &'a str) -> &'a str {
        [&self.visual_text, &self.visual_prompt]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.trim().is_empty())
            .unwrap_or(placeholder)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scene.rs"]
mod tests;
