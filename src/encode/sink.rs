use std::io::Write;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::{Canvas, Fps, FrameIndex},
        error::{ReelError, ReelResult},
    },
    render::drawable::FrameOutput,
};

/// Configuration provided to a [`FrameSink`] at the start of a range render.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SinkConfig {
    pub style_id: String,
    pub canvas: Canvas,
    pub fps: Fps,
    /// Requested total length of the video in frames.
    pub duration_frames: u64,
    /// Opaque audio reference from the request, passed through untouched.
    pub audio_src: Option<String>,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing frame order within the
/// requested range, whether or not the frames were evaluated in parallel.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()>;
    fn push_frame(&mut self, frame: &FrameOutput) -> ReelResult<()>;
    fn end(&mut self) -> ReelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<FrameOutput>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Frames in timeline order.
    pub fn frames(&self) -> &[FrameOutput] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<FrameOutput> {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameOutput) -> ReelResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn end(&mut self) -> ReelResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "snake_case")]
enum Line<'a> {
    Header(&'a SinkConfig),
    Frame {
        fingerprint: String,
        #[serde(flatten)]
        frame: &'a FrameOutput,
    },
}

/// Newline-delimited JSON: one header line, then one line per frame.
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    last: Option<FrameIndex>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &Line<'_>) -> ReelResult<()> {
        serde_json::to_writer(&mut self.out, line)
            .map_err(|e| ReelError::serde(format!("encode frame JSON: {e}")))?;
        self.out.write_all(b"\n").context("write NDJSON line")?;
        Ok(())
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        self.last = None;
        self.write_line(&Line::Header(&cfg))
    }

    fn push_frame(&mut self, frame: &FrameOutput) -> ReelResult<()> {
        if let Some(last) = self.last
            && frame.frame <= last
        {
            return Err(ReelError::evaluation(format!(
                "frames must arrive in increasing order (got {} after {})",
                frame.frame.0, last.0
            )));
        }
        self.last = Some(frame.frame);
        self.write_line(&Line::Frame {
            fingerprint: frame.fingerprint().to_string(),
            frame,
        })
    }

    fn end(&mut self) -> ReelResult<()> {
        self.out.flush().context("flush NDJSON output")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
