//! Press feedback for the animated button
//!
//! Pairs a scale spring with a color blend. Pressing drives the scale toward
//! the button's softness and the blend toward 1 (pressed colors); releasing
//! or cancelling drives them back to 1.0 and 0.

use std::time::Instant;

use iced_anim::Animated;

use super::prelude::presets;
use super::{Spring, Timing, frame_delta};

#[derive(Debug)]
pub struct PressAnimation {
    scale: Spring,
    color: Animated<f32>,
    timing: Timing,
    last_tick: Option<Instant>,
}

impl Default for PressAnimation {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl PressAnimation {
    pub fn new(timing: Timing) -> Self {
        Self {
            scale: Spring::from_params(1.0, timing.press),
            color: presets::color_blend(timing.color_duration),
            timing,
            last_tick: None,
        }
    }

    /// Apply new timing, keeping the current values
    pub fn set_timing(&mut self, timing: Timing) {
        if timing == self.timing {
            return;
        }

        self.scale.update_params(timing.press);
        if timing.color_duration != self.timing.color_duration {
            self.color = presets::color_blend_at(self.color_progress(), timing.color_duration);
        }
        self.timing = timing;
    }

    /// Start compressing toward `softness`
    pub fn press(&mut self, softness: f32) {
        self.retarget(f64::from(softness), 1.0);
    }

    /// Spring back to full size and base colors
    pub fn release(&mut self) {
        self.retarget(1.0, 0.0);
    }

    fn retarget(&mut self, scale: f64, color: f32) {
        if self.timing.reduce_motion {
            self.scale.set_position(scale);
            self.color = presets::color_blend_at(color, self.timing.color_duration);
        } else {
            self.scale.set_target(scale);
            self.color.update(color.into());
        }
        self.last_tick = None;
    }

    /// Advance both animations to the frame at `now`
    pub fn tick(&mut self, now: Instant) {
        self.scale.update(frame_delta(self.last_tick, now));
        self.color.tick(now);
        self.last_tick = self.is_animating().then_some(now);
    }

    /// Advance the scale spring by `delta` seconds
    pub fn advance(&mut self, delta: f64) {
        self.scale.update(delta);
    }

    pub fn scale(&self) -> f32 {
        self.scale.position() as f32
    }

    pub fn scale_target(&self) -> f32 {
        self.scale.target() as f32
    }

    /// Blend between base (0.0) and pressed (1.0) colors
    pub fn color_progress(&self) -> f32 {
        if self.color.is_animating() {
            self.color.value().clamp(0.0, 1.0)
        } else {
            *self.color.target()
        }
    }

    pub fn color_target(&self) -> f32 {
        *self.color.target()
    }

    pub fn is_animating(&self) -> bool {
        self.scale.is_animating() || self.color.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn settle(anim: &mut PressAnimation) {
        let start = Instant::now();
        anim.tick(start);
        anim.tick(start + Duration::from_secs(2));
        anim.tick(start + Duration::from_secs(10));
    }

    #[test]
    fn test_press_targets_softness() {
        let mut anim = PressAnimation::default();
        anim.press(0.9);

        assert_eq!(anim.scale_target(), 0.9);
        assert_eq!(anim.color_target(), 1.0);
        assert!(anim.is_animating());
    }

    #[test]
    fn test_press_release_returns_to_rest() {
        let mut anim = PressAnimation::default();
        anim.press(0.9);
        settle(&mut anim);
        assert_eq!(anim.scale(), 0.9);

        anim.release();
        settle(&mut anim);

        assert_eq!(anim.scale(), 1.0);
        assert_eq!(anim.color_progress(), 0.0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn test_release_interrupts_press() {
        let mut anim = PressAnimation::default();
        anim.press(0.5);
        anim.advance(0.02);
        let mid = anim.scale();
        assert!(mid < 1.0 && mid > 0.5);

        anim.release();
        assert_eq!(anim.scale(), mid, "Retarget keeps the current scale");
        assert_eq!(anim.scale_target(), 1.0);

        anim.advance(5.0);
        assert_eq!(anim.scale(), 1.0);
    }

    #[test]
    fn test_reduce_motion_snaps() {
        let mut anim = PressAnimation::new(Timing::instant());
        anim.press(0.8);

        assert_eq!(anim.scale(), 0.8);
        assert_eq!(anim.color_progress(), 1.0);

        anim.release();
        assert_eq!(anim.scale(), 1.0);
        assert_eq!(anim.color_progress(), 0.0);
    }
}
