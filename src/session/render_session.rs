use std::{fs::File, io::BufReader, path::Path};

use rayon::prelude::*;

use crate::{
    encode::sink::{FrameSink, InMemorySink, SinkConfig},
    foundation::{
        core::{CANVAS, FPS, FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    render::{compositor::SceneCompositor, drawable::FrameOutput},
    style::{
        design::DesignConfig,
        registry::{StyleVariant, VariantRegistry},
    },
    timeline::{
        scene::Scene,
        schedule::{DurationReport, Timeline},
    },
};

/// What the caller wants rendered.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    #[serde(alias = "styleId")]
    pub style_id: String,
    #[serde(default)]
    pub scenes: Vec<Scene>,
    /// Required; a request without it is rejected before scheduling.
    #[serde(
        default,
        alias = "durationInFrames",
        alias = "totalDurationFrames",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_in_frames: Option<u64>,
    #[serde(default, alias = "audioSrc", skip_serializing_if = "Option::is_none")]
    pub audio_src: Option<String>,
}

impl RenderRequest {
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::serde(format!("parse request JSON: {e}")))
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse request JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open request '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// Options controlling [`RenderSession::render_range`].
#[derive(Clone, Debug)]
pub struct RenderOpts {
    /// Evaluate frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames evaluated per batch before being handed to the sink.
    pub chunk_size: usize,
    /// Worker count override; rayon's default when `None`.
    pub threads: Option<usize>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Frames requested past the end of the timeline.
    pub frames_held: u64,
    pub chunks: u64,
}

/// A validated request, scheduled once and ready to render any frame.
///
/// Construction does all fallible configuration work: the style id is resolved against the
/// registry, the timeline is scheduled and every scene's design is computed. Rendering is then
/// read-only and frames can be produced in any order or in parallel.
#[derive(Clone, Debug)]
pub struct RenderSession {
    variant: StyleVariant,
    timeline: Timeline,
    designs: Vec<DesignConfig>,
    audio_src: Option<String>,
    opts: RenderOpts,
}

impl RenderSession {
    #[tracing::instrument(skip(request, registry, opts), fields(style_id = %request.style_id))]
    pub fn new(
        request: &RenderRequest,
        registry: &VariantRegistry,
        opts: RenderOpts,
    ) -> ReelResult<Self> {
        let variant = registry.resolve(&request.style_id)?.clone();
        let timeline = Timeline::schedule(&request.scenes, request.duration_in_frames)?;
        let designs = (0..timeline.segments().len())
            .map(|i| {
                let d = variant.design(i);
                tracing::debug!(
                    scene = i,
                    font = %d.font,
                    animation = %d.entry_animation,
                    effect = %d.text_effect,
                    transition = %d.transition,
                    background = %d.background,
                    "scene design"
                );
                d
            })
            .collect();
        Ok(Self {
            variant,
            timeline,
            designs,
            audio_src: request.audio_src.clone(),
            opts,
        })
    }

    /// [`RenderSession::new`] against the built-in catalog.
    pub fn with_builtin(request: &RenderRequest, opts: RenderOpts) -> ReelResult<Self> {
        Self::new(request, VariantRegistry::builtin()?, opts)
    }

    pub fn variant(&self) -> &StyleVariant {
        &self.variant
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn discrepancy(&self) -> DurationReport {
        self.timeline.discrepancy()
    }

    pub fn design(&self, scene_index: usize) -> Option<&DesignConfig> {
        self.designs.get(scene_index)
    }

    pub fn audio_src(&self) -> Option<&str> {
        self.audio_src.as_deref()
    }

    /// Every frame of the requested video length. A scheduling shortfall is covered by frames
    /// holding the last scene; see [`Timeline::discrepancy`].
    pub fn full_range(&self) -> FrameRange {
        FrameRange::with_len(FrameIndex(0), self.timeline.requested_frames())
    }

    pub fn sink_config(&self) -> SinkConfig {
        SinkConfig {
            style_id: self.variant.id.clone(),
            canvas: CANVAS,
            fps: FPS,
            duration_frames: self.timeline.requested_frames(),
            audio_src: self.audio_src.clone(),
        }
    }

    /// Layered drawing for `frame`. Frames past the end repeat the final frame.
    #[tracing::instrument(skip(self))]
    pub fn render_frame(&self, frame: FrameIndex) -> ReelResult<FrameOutput> {
        let at = self.timeline.locate(frame);
        if at.held {
            tracing::debug!(
                frame = frame.0,
                end = self.timeline.scheduled_frames(),
                "frame past the end of the timeline; holding the last frame"
            );
        }
        let segment = self
            .timeline
            .segment(at.segment_index)
            .ok_or_else(|| ReelError::evaluation("located segment is missing"))?;
        let design = self
            .designs
            .get(at.segment_index)
            .ok_or_else(|| ReelError::evaluation("scene design is missing"))?;

        let layers = SceneCompositor::new(&self.variant).compose(
            segment.scene_index,
            &segment.scene,
            design,
            at.local_frame,
        );
        Ok(FrameOutput {
            frame,
            scene_index: segment.scene_index,
            local_frame: at.local_frame,
            held: at.held,
            canvas: CANVAS,
            design: design.clone(),
            layers,
        })
    }

    /// Render `range` and stream the frames into `sink` in timeline order.
    #[tracing::instrument(skip(self, sink), fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> ReelResult<RenderStats> {
        if range.is_empty() {
            return Err(ReelError::validation("render_range range must be non-empty"));
        }

        let chunk_size = normalized_chunk_size(self.opts.chunk_size);
        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };

        sink.begin(self.sink_config())?;
        let mut stats = RenderStats::default();
        let mut chunk_start = range.start.0;
        while chunk_start < range.end.0 {
            let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end.0);
            let frames = match pool.as_ref() {
                Some(pool) => pool.install(|| {
                    (chunk_start..chunk_end)
                        .into_par_iter()
                        .map(|f| self.render_frame(FrameIndex(f)))
                        .collect::<ReelResult<Vec<_>>>()
                })?,
                None => (chunk_start..chunk_end)
                    .map(|f| self.render_frame(FrameIndex(f)))
                    .collect::<ReelResult<Vec<_>>>()?,
            };
            for frame in &frames {
                sink.push_frame(frame)?;
                stats.frames_total += 1;
                stats.frames_held += u64::from(frame.held);
            }
            stats.chunks += 1;
            chunk_start = chunk_end;
        }
        sink.end()?;

        if stats.frames_held > 0 {
            tracing::warn!(
                held = stats.frames_held,
                end = self.timeline.scheduled_frames(),
                "frames past the end of the timeline held the last frame"
            );
        }
        tracing::debug!(
            frames = stats.frames_total,
            held = stats.frames_held,
            "range rendered"
        );
        Ok(stats)
    }

    /// Convenience wrapper collecting `range` in memory.
    pub fn frames(&self, range: FrameRange) -> ReelResult<Vec<FrameOutput>> {
        let mut sink = InMemorySink::new();
        self.render_range(range, &mut sink)?;
        Ok(sink.into_frames())
    }
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    chunk_size.max(1) as u64
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
