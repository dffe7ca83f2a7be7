use xxhash_rust::xxh3::Xxh3;

use crate::render::drawable::FrameOutput;

const XXH3_SEED: u64 = 0x5ee1_c4af_7f2a_90d3;

/// Stable 128-bit fingerprint of a frame's drawing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Note: the frame position (global index, local index, hold flag) is not hashed, so a clamped
/// frame past the end fingerprints the same as the last frame it repeats.
pub(crate) fn fingerprint_frame(frame: &FrameOutput) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(frame.canvas.width);
    h.write_u32(frame.canvas.height);
    h.write_u64(frame.scene_index as u64);
    h.write_json(&frame.design);
    h.write_json(&frame.layers);
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    /// Serialized field order is declaration order, so the byte stream is canonical.
    fn write_json<T: serde::Serialize>(&mut self, v: &T) {
        match serde_json::to_vec(v) {
            Ok(bytes) => {
                self.write_u64(bytes.len() as u64);
                self.write_bytes(&bytes);
            }
            // Plain data never fails to serialize; keep the stream well-formed regardless.
            Err(_) => self.write_u64(u64::MAX),
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}
