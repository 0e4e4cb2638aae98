//! Damped spring driven by explicit frame deltas
//!
//! Uses the closed-form solution of a damped harmonic oscillator instead of
//! frame-by-frame integration, so a spring advanced in one large step lands
//! on the same value as one advanced in many small ones.
//!
//! ## Parameters
//!
//! | Preset | mass | damping | stiffness |
//! |--------|------|---------|-----------|
//! | `PRESS` | 1 | 22 | 400 |
//! | `FADE` | 1 | 20 | 200 |
//!
//! Overdamped when `damping / (2 * sqrt(stiffness * mass)) >= 1`.
//!
//! ### Overdamped
//! ```text
//! w = -sqrt(stiffness / mass)
//! leftover = -w * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * w)
//! ```
//!
//! ### Underdamped
//! ```text
//! wd = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / wd
//! position(t) = to - (cos(t * wd / 2m) * delta + sin(t * wd / 2m) * leftover) * e^(-t * damping / 2m)
//! ```

use serde::{Deserialize, Serialize};

pub type Num = f64;

/// Distance and speed below which the spring snaps onto its target
const REST_THRESHOLD: Num = 0.001;

/// Step used for the numerical velocity estimate
const H: Num = 0.0005;

/// Physical parameters of a spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Quick, barely bouncy spring used for press feedback
    pub const PRESS: Self = Self {
        mass: 1.0,
        damping: 22.0,
        stiffness: 400.0,
    };

    /// Softer spring used for checked/selected fades
    pub const FADE: Self = Self {
        mass: 1.0,
        damping: 20.0,
        stiffness: 200.0,
    };

    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Replace non-finite or non-positive values with the defaults
    pub fn sanitized(self) -> Self {
        let fallback = Self::default();
        let pick = |value: Num, default: Num| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                default
            }
        };

        Self {
            mass: pick(self.mass, fallback.mass),
            damping: pick(self.damping, fallback.damping),
            stiffness: pick(self.stiffness, fallback.stiffness),
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::PRESS
    }
}

/// Closed-form trajectory from one start state toward a target
#[derive(Debug, Clone, Copy, PartialEq)]
enum Solver {
    Rest(Num),
    Overdamped {
        to: Num,
        delta: Num,
        leftover: Num,
        angular_frequency: Num,
    },
    Underdamped {
        to: Num,
        delta: Num,
        leftover: Num,
        dfm: Num,
        dm: Num,
    },
}

impl Solver {
    fn new(from: Num, velocity: Num, to: Num, params: &SpringParams) -> Self {
        let SpringParams {
            mass,
            damping,
            stiffness,
        } = *params;
        let delta = to - from;

        if delta == 0.0 && velocity == 0.0 {
            return Self::Rest(to);
        }

        if params.is_overdamped() {
            let angular_frequency = -(stiffness / mass).sqrt();
            Self::Overdamped {
                to,
                delta,
                leftover: -angular_frequency * delta - velocity,
                angular_frequency,
            }
        } else {
            let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
            Self::Underdamped {
                to,
                delta,
                leftover: (damping * delta - 2.0 * mass * velocity) / damping_frequency,
                dfm: 0.5 * damping_frequency / mass,
                dm: -0.5 * damping / mass,
            }
        }
    }

    fn position(&self, t: Num) -> Num {
        match *self {
            Self::Rest(value) => value,
            Self::Overdamped {
                to,
                delta,
                leftover,
                angular_frequency,
            } => to - (delta + t * leftover) * (t * angular_frequency).exp(),
            Self::Underdamped {
                to,
                delta,
                leftover,
                dfm,
                dm,
            } => to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * (t * dm).exp(),
        }
    }

    fn velocity(&self, t: Num) -> Num {
        match self {
            Self::Rest(_) => 0.0,
            _ if t < H => (self.position(t + H) - self.position(t)) / H,
            _ => (self.position(t + H) - self.position(t - H)) / (2.0 * H),
        }
    }
}

/// Spring animation with analytical solution
///
/// Retargeting in flight keeps the current position and velocity, so an
/// interrupted transition continues smoothly toward the new target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    current_position: Num,
    target_position: Num,
    current_time: Num,
    params: SpringParams,
    solver: Solver,
}

impl Spring {
    /// Create a spring resting at `position`
    pub fn new(position: Num) -> Self {
        Self::from_params(position, SpringParams::default())
    }

    pub fn from_params(position: Num, params: SpringParams) -> Self {
        Self {
            current_position: position,
            target_position: position,
            current_time: 0.0,
            params: params.sanitized(),
            solver: Solver::Rest(position),
        }
    }

    fn reset_solver(&mut self) {
        let velocity = self.solver.velocity(self.current_time);
        self.current_time = 0.0;
        self.solver = Solver::new(
            self.current_position,
            velocity,
            self.target_position,
            &self.params,
        );
    }

    /// Whether the spring sits on its target with no residual motion
    pub fn arrived(&self) -> bool {
        matches!(self.solver, Solver::Rest(_)) && self.current_position == self.target_position
    }

    pub fn is_animating(&self) -> bool {
        !self.arrived()
    }

    /// Jump to `position` without animating
    pub fn set_position(&mut self, position: Num) {
        self.current_position = position;
        self.target_position = position;
        self.current_time = 0.0;
        self.solver = Solver::Rest(position);
    }

    /// Retarget the spring, keeping its current position and velocity
    pub fn set_target(&mut self, target: Num) {
        if target == self.target_position {
            return;
        }

        self.target_position = target;
        self.reset_solver();
    }

    /// Advance by `delta` seconds
    pub fn update(&mut self, delta: Num) {
        if self.arrived() || !(delta > 0.0) {
            return;
        }

        self.current_time += delta;
        self.current_position = self.solver.position(self.current_time);

        let distance = (self.target_position - self.current_position).abs();
        let speed = self.solver.velocity(self.current_time).abs();

        if distance < REST_THRESHOLD && speed < REST_THRESHOLD {
            self.set_position(self.target_position);
        }
    }

    pub fn update_params(&mut self, params: SpringParams) {
        let params = params.sanitized();
        if params == self.params {
            return;
        }

        self.params = params;
        self.reset_solver();
    }

    pub fn position(&self) -> Num {
        self.current_position
    }

    pub fn target(&self) -> Num {
        self.target_position
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(spring: &mut Spring) {
        for _ in 0..600 {
            spring.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring = Spring::new(1.0);
        spring.set_target(0.5);

        spring.update(0.01);
        let pos = spring.position();
        assert!(pos < 1.0, "Spring should move from 1.0");
        assert!(pos > 0.5, "Spring should not reach target after one step");
    }

    #[test]
    fn test_spring_settles_exactly() {
        let mut spring = Spring::new(1.0);
        spring.set_target(0.98);
        settle(&mut spring);

        assert_eq!(spring.position(), 0.98);
        assert!(spring.arrived());
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_retarget_keeps_continuity() {
        let mut spring = Spring::new(1.0);
        spring.set_target(0.0);
        for _ in 0..3 {
            spring.update(1.0 / 60.0);
        }
        let before = spring.position();

        spring.set_target(1.0);
        assert_eq!(spring.position(), before, "Retarget must not jump");

        spring.update(1e-4);
        assert!((spring.position() - before).abs() < 0.01);

        settle(&mut spring);
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn test_set_position_snaps() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.set_position(0.25);

        assert_eq!(spring.position(), 0.25);
        assert_eq!(spring.target(), 0.25);
        assert!(spring.arrived());
    }

    #[test]
    fn test_zero_and_negative_delta_are_ignored() {
        let mut spring = Spring::new(0.0);
        spring.set_target(1.0);
        spring.update(0.0);
        spring.update(-1.0);
        spring.update(f64::NAN);

        assert_eq!(spring.position(), 0.0);
    }

    #[test]
    fn test_overdamped() {
        let params = SpringParams {
            mass: 1.0,
            damping: 100.0,
            stiffness: 100.0,
        };
        assert!(params.is_overdamped());

        let params = SpringParams {
            mass: 1.0,
            damping: 5.0,
            stiffness: 100.0,
        };
        assert!(!params.is_overdamped());
    }

    #[test]
    fn test_overdamped_spring_settles() {
        let params = SpringParams {
            mass: 1.0,
            damping: 60.0,
            stiffness: 100.0,
        };
        let mut spring = Spring::from_params(0.0, params);
        spring.set_target(1.0);
        for _ in 0..2000 {
            spring.update(1.0 / 60.0);
        }

        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn test_sanitized_params() {
        let params = SpringParams {
            mass: 0.0,
            damping: f64::NAN,
            stiffness: -3.0,
        }
        .sanitized();

        assert_eq!(params, SpringParams::default());
    }
}
