//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust
//! use zephyr::animation::prelude::*;
//! ```

pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;

pub use super::{FadeAnimation, PressAnimation, Spring, SpringParams, Timing};

/// Transition presets used by the controls
pub mod presets {
    use std::time::Duration;

    use super::*;

    /// Color blend between the base and pressed branches
    pub fn color_blend(duration: Duration) -> Animated<f32> {
        Animated::transition(0.0, Easing::EASE.with_duration(duration))
    }

    /// Color blend already resting at `progress`
    pub fn color_blend_at(progress: f32, duration: Duration) -> Animated<f32> {
        Animated::transition(progress, Easing::EASE.with_duration(duration))
    }
}
