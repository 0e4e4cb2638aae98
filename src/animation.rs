//! Animation drivers for the zephyr controls
//!
//! Every control owns at most two numeric animations: a spring for its
//! scale or opacity and, for the button, an `iced_anim` transition for the
//! color blend. Both are advanced from the host frame loop; a widget ticks
//! them on `window::Event::RedrawRequested` and asks for another frame while
//! anything is still moving.
//!
//! # Usage
//!
//! ```rust
//! use zephyr::animation::{PressAnimation, Timing};
//!
//! let mut press = PressAnimation::new(Timing::default());
//! press.press(0.95);
//! press.advance(1.0);
//! assert_eq!(press.scale(), 0.95);
//! ```

mod fade;
pub mod prelude;
mod press;
pub mod spring;

use std::time::Duration;

pub use fade::FadeAnimation;
pub use press::PressAnimation;
pub use spring::{Spring, SpringParams};

/// Default duration of the button color blend
pub const COLOR_DURATION: Duration = Duration::from_millis(150);

/// Animation parameters shared by all controls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Spring used for the press scale
    pub press: SpringParams,
    /// Spring used for checked/selected fades
    pub fade: SpringParams,
    /// Length of the pressed/base color blend
    pub color_duration: Duration,
    /// Jump straight to every target instead of animating
    pub reduce_motion: bool,
}

impl Timing {
    /// Timing with every animation disabled
    pub fn instant() -> Self {
        Self {
            reduce_motion: true,
            ..Self::default()
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            press: SpringParams::PRESS,
            fade: SpringParams::FADE,
            color_duration: COLOR_DURATION,
            reduce_motion: false,
        }
    }
}

/// Seconds elapsed between two frames, zero for the first frame
fn frame_delta(last: Option<std::time::Instant>, now: std::time::Instant) -> f64 {
    last.map(|last| now.saturating_duration_since(last).as_secs_f64())
        .unwrap_or(0.0)
}
