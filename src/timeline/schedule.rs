use crate::{
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{ReelError, ReelResult},
    },
    timeline::scene::Scene,
};

/// A scene's contiguous slot on the shared timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Segment {
    pub scene_index: usize,
    pub scene: Scene,
    pub start: FrameIndex,
    pub duration_frames: u64, // >= 1
}

impl Segment {
    pub fn range(&self) -> FrameRange {
        FrameRange::with_len(self.start, self.duration_frames)
    }

    pub fn end(&self) -> FrameIndex {
        self.range().end
    }
}

/// Where a global frame lands on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Located {
    pub segment_index: usize,
    pub local_frame: u64,
    /// The frame lies past the end of the timeline and shows the last segment's final frame.
    pub held: bool,
}

/// Requested versus scheduled length of a timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct DurationReport {
    pub requested_frames: u64,
    pub scheduled_frames: u64,
    /// `scheduled - requested`; negative when scenes end before the requested total.
    pub delta_frames: i64,
}

impl DurationReport {
    pub fn is_exact(&self) -> bool {
        self.delta_frames == 0
    }
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct Timeline {
    segments: Vec<Segment>,
    requested_frames: u64,
}

impl Timeline {
    /// Place `scenes` back to back starting at frame 0.
    ///
    /// Scenes without an explicit duration get `floor(total / scenes.len())` frames (at least
    /// one). Scheduled and requested totals are not reconciled; a mismatch is logged and
    /// available through [`Timeline::discrepancy`].
    #[tracing::instrument(skip(scenes), fields(scenes = scenes.len()))]
    pub fn schedule(scenes: &[Scene], total_duration_frames: Option<u64>) -> ReelResult<Self> {
        let total = total_duration_frames.ok_or_else(|| {
            ReelError::configuration("total duration in frames is required")
        })?;
        if total == 0 {
            return Err(ReelError::validation("total duration must be >= 1 frame"));
        }
        if scenes.is_empty() {
            return Err(ReelError::validation("at least one scene is required"));
        }

        let fallback = (total / scenes.len() as u64).max(1);
        let mut cursor = 0u64;
        let mut segments = Vec::with_capacity(scenes.len());
        for (scene_index, scene) in scenes.iter().enumerate() {
            let duration_frames = match scene.duration_frames {
                Some(0) => {
                    return Err(ReelError::validation(format!(
                        "scene {scene_index} has an explicit duration of 0 frames"
                    )));
                }
                Some(d) => d,
                None => fallback,
            };
            segments.push(Segment {
                scene_index,
                scene: scene.clone(),
                start: FrameIndex(cursor),
                duration_frames,
            });
            cursor = cursor.saturating_add(duration_frames);
        }

        let timeline = Self {
            segments,
            requested_frames: total,
        };
        let report = timeline.discrepancy();
        if !report.is_exact() {
            tracing::warn!(
                requested = report.requested_frames,
                scheduled = report.scheduled_frames,
                delta = report.delta_frames,
                "scheduled duration differs from requested total"
            );
        }
        Ok(timeline)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn requested_frames(&self) -> u64 {
        self.requested_frames
    }

    pub fn scheduled_frames(&self) -> u64 {
        self.segments.last().map_or(0, |s| s.end().0)
    }

    pub fn discrepancy(&self) -> DurationReport {
        let scheduled = self.scheduled_frames();
        let requested = self.requested_frames;
        let delta = i64::try_from(scheduled)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(requested).unwrap_or(i64::MAX));
        DurationReport {
            requested_frames: requested,
            scheduled_frames: scheduled,
            delta_frames: delta,
        }
    }

    /// Segment containing `frame`; frames past the end hold the last segment's final frame.
    pub fn locate(&self, frame: FrameIndex) -> Located {
        let idx = self
            .segments
            .partition_point(|s| s.start.0 <= frame.0)
            .saturating_sub(1);
        let Some(seg) = self.segments.get(idx) else {
            return Located {
                segment_index: 0,
                local_frame: 0,
                held: true,
            };
        };
        if seg.range().contains(frame) {
            Located {
                segment_index: idx,
                local_frame: frame.0 - seg.start.0,
                held: false,
            }
        } else {
            Located {
                segment_index: idx,
                local_frame: seg.duration_frames - 1,
                held: true,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
