//! Closed-form spring easing.
//!
//! A unit mass-spring-damper released from rest at 0 and pulled toward 1:
//! `m·x'' + c·x' + k·(x − 1) = 0`, `x(0) = 0`, `x'(0) = 0`.
//! The response is solved analytically for each regime, so any frame can be evaluated directly
//! without stepping through the frames before it.

use crate::foundation::core::Fps;

/// Distance from the target below which a spring counts as settled.
pub const SETTLE_THRESHOLD: f64 = 0.005;

const MAX_SETTLE_FRAMES: u64 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Never report values past the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Entry animation of text blocks (heavily over-damped, no overshoot).
    pub const ENTRY: Self = Self::damped(100.0);
    /// Scene transition overlays.
    pub const TRANSITION: Self = Self::damped(200.0);
    /// Lightly damped, half mass: overshoots past 1 before settling.
    pub const BOUNCE: Self = Self {
        mass: 0.5,
        stiffness: 100.0,
        damping: 10.0,
        overshoot_clamping: false,
    };

    pub const fn damped(damping: f64) -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping,
            overshoot_clamping: false,
        }
    }

    fn is_degenerate(self) -> bool {
        !(self.mass > 0.0 && self.stiffness > 0.0 && self.damping >= 0.0)
            || !self.mass.is_finite()
            || !self.stiffness.is_finite()
            || !self.damping.is_finite()
    }

    fn natural_frequency(self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Signed displacement from the target after `t` seconds (starts at -1).
    fn displacement(self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            -decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            -(1.0 + w0 * t) * (-w0 * t).exp()
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            // (zeta - root) rewritten to avoid cancellation for large zeta.
            let slow = -w0 / (zeta + root);
            let fast = -w0 * (zeta + root);
            let b = slow / (fast - slow);
            let a = -1.0 - b;
            a * (slow * t).exp() + b * (fast * t).exp()
        }
    }

    /// Upper bound of `|displacement|` from `t` seconds onward.
    fn envelope(self, t: f64) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            (-zeta * w0 * t).exp() * (1.0 + (zeta * w0 / wd).powi(2)).sqrt()
        } else {
            // Critically and over-damped responses approach the target monotonically.
            self.displacement(t).abs()
        }
    }
}

/// Spring progress at `frame` (may be fractional or negative; negative frames are at rest).
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    if frame <= 0.0 || frame.is_nan() {
        return 0.0;
    }
    if config.is_degenerate() {
        return 1.0;
    }
    let v = 1.0 + config.displacement(fps.frames_to_secs(frame));
    if config.overshoot_clamping {
        v.min(1.0)
    } else {
        v
    }
}

/// Spring progress with time stretched so the spring settles after exactly `duration_frames`.
pub fn spring_over(frame: f64, fps: Fps, config: SpringConfig, duration_frames: u64) -> f64 {
    if duration_frames == 0 {
        return if frame >= 0.0 { 1.0 } else { 0.0 };
    }
    let natural = settle_frames(config, fps) as f64;
    spring(frame * natural / duration_frames as f64, fps, config)
}

/// First frame from which the spring stays within [`SETTLE_THRESHOLD`] of its target.
pub fn settle_frames(config: SpringConfig, fps: Fps) -> u64 {
    if config.is_degenerate() {
        return 1;
    }
    (1..MAX_SETTLE_FRAMES)
        .find(|&f| config.envelope(fps.frames_to_secs(f as f64)) < SETTLE_THRESHOLD)
        .unwrap_or(MAX_SETTLE_FRAMES)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
