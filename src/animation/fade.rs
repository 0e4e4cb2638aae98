//! Opacity fade for checked/selected indicators

use std::time::Instant;

use super::{Spring, Timing, frame_delta};

/// Spring-driven opacity between 0.0 (hidden) and 1.0 (shown)
#[derive(Debug, Clone)]
pub struct FadeAnimation {
    opacity: Spring,
    reduce_motion: bool,
    last_tick: Option<Instant>,
}

impl FadeAnimation {
    /// Create a fade resting at the value for `visible`
    pub fn new(visible: bool, timing: Timing) -> Self {
        Self {
            opacity: Spring::from_params(target_for(visible), timing.fade),
            reduce_motion: timing.reduce_motion,
            last_tick: None,
        }
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.opacity.update_params(timing.fade);
        self.reduce_motion = timing.reduce_motion;
    }

    /// Fade toward shown or hidden; no-op if already heading there
    pub fn set_visible(&mut self, visible: bool) {
        let target = target_for(visible);
        if self.opacity.target() == target {
            return;
        }

        if self.reduce_motion {
            self.opacity.set_position(target);
        } else {
            self.opacity.set_target(target);
        }
        self.last_tick = None;
    }

    pub fn tick(&mut self, now: Instant) {
        self.opacity.update(frame_delta(self.last_tick, now));
        self.last_tick = self.is_animating().then_some(now);
    }

    /// Advance by `delta` seconds
    pub fn advance(&mut self, delta: f64) {
        self.opacity.update(delta);
    }

    /// Current opacity, clamped to [0, 1] since the spring may overshoot
    pub fn value(&self) -> f32 {
        (self.opacity.position() as f32).clamp(0.0, 1.0)
    }

    pub fn target(&self) -> f32 {
        self.opacity.target() as f32
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_animating()
    }
}

fn target_for(visible: bool) -> f64 {
    if visible { 1.0 } else { 0.0 }
}
