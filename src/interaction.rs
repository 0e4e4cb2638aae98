//! Pointer interaction lifecycle shared by every control
//!
//! A control is either [`Interaction::Idle`] or [`Interaction::Pressed`].
//! Widgets translate iced mouse/touch events into [`Pointer`] events and
//! feed them through [`Interaction::handle`], which reports what changed.
//! Only a press that is released inside the bounds activates the control.

use tracing::debug;

/// Two-state lifecycle of a pointer-activated control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Pressed,
}

/// Pointer input as seen by a single control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// Button or finger went down; `inside` if over the control
    Down { inside: bool },
    /// Button or finger went up; `inside` if over the control
    Up { inside: bool },
    /// The gesture was abandoned (finger lost, cursor left, moved away)
    Cancel,
}

/// Outcome of feeding a [`Pointer`] event to an [`Interaction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    None,
    /// Idle -> Pressed
    Pressed,
    /// Pressed -> Idle; `activate` if the control should fire its message
    Released { activate: bool },
    /// Pressed -> Idle without activation
    Cancelled,
}

impl Interaction {
    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }

    /// Advance the state machine.
    ///
    /// A disabled control never leaves `Idle` and never activates; if it is
    /// disabled while pressed, the next pointer event cancels the press.
    pub fn handle(&mut self, pointer: Pointer, enabled: bool) -> Transition {
        let transition = match (*self, pointer) {
            (Self::Idle, Pointer::Down { inside: true }) if enabled => {
                *self = Self::Pressed;
                Transition::Pressed
            }
            (Self::Idle, Pointer::Down { inside: true }) => {
                debug!("press ignored on disabled control");
                Transition::None
            }
            (Self::Pressed, Pointer::Up { inside }) => {
                *self = Self::Idle;
                Transition::Released {
                    activate: inside && enabled,
                }
            }
            (Self::Pressed, Pointer::Cancel) => {
                *self = Self::Idle;
                Transition::Cancelled
            }
            (Self::Pressed, Pointer::Down { .. }) if !enabled => {
                *self = Self::Idle;
                Transition::Cancelled
            }
            _ => Transition::None,
        };

        if transition != Transition::None {
            debug!(?pointer, ?transition, "interaction changed");
        }

        transition
    }
}

/// Clamp a button softness into [0, 1]; NaN means no compression
pub fn clamp_softness(softness: f32) -> f32 {
    if softness.is_nan() {
        1.0
    } else {
        softness.clamp(0.0, 1.0)
    }
}

/// Clamp a length (size, radius, stroke) to be non-negative and finite
pub fn clamp_length(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Feed a sequence of events and count activations
    fn activations(events: &[Pointer], enabled: bool) -> usize {
        let mut interaction = Interaction::default();
        events
            .iter()
            .filter(|pointer| {
                matches!(
                    interaction.handle(**pointer, enabled),
                    Transition::Released { activate: true }
                )
            })
            .count()
    }

    #[test]
    fn test_press_alone_does_not_activate() {
        let mut interaction = Interaction::default();
        let transition = interaction.handle(Pointer::Down { inside: true }, true);

        assert_eq!(transition, Transition::Pressed);
        assert!(interaction.is_pressed());
        assert_eq!(activations(&[Pointer::Down { inside: true }], true), 0);
    }

    #[test]
    fn test_full_cycle_activates_once() {
        let events = [Pointer::Down { inside: true }, Pointer::Up { inside: true }];
        assert_eq!(activations(&events, true), 1);

        let twice = [
            Pointer::Down { inside: true },
            Pointer::Up { inside: true },
            Pointer::Up { inside: true },
        ];
        assert_eq!(activations(&twice, true), 1);
    }

    #[test]
    fn test_release_outside_does_not_activate() {
        let mut interaction = Interaction::default();
        interaction.handle(Pointer::Down { inside: true }, true);
        let transition = interaction.handle(Pointer::Up { inside: false }, true);

        assert_eq!(transition, Transition::Released { activate: false });
        assert_eq!(interaction, Interaction::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut interaction = Interaction::default();
        interaction.handle(Pointer::Down { inside: true }, true);

        assert_eq!(interaction.handle(Pointer::Cancel, true), Transition::Cancelled);
        assert_eq!(interaction, Interaction::Idle);
        assert_eq!(
            interaction.handle(Pointer::Up { inside: true }, true),
            Transition::None
        );
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let events = [Pointer::Down { inside: false }, Pointer::Up { inside: true }];
        assert_eq!(activations(&events, true), 0);
    }

    #[test]
    fn test_disabled_never_activates() {
        let events = [
            Pointer::Down { inside: true },
            Pointer::Up { inside: true },
            Pointer::Down { inside: true },
            Pointer::Cancel,
            Pointer::Down { inside: true },
            Pointer::Up { inside: true },
        ];
        assert_eq!(activations(&events, false), 0);

        let mut interaction = Interaction::default();
        interaction.handle(Pointer::Down { inside: true }, false);
        assert_eq!(interaction, Interaction::Idle);
    }

    #[test]
    fn test_disabled_while_pressed() {
        let mut interaction = Interaction::default();
        interaction.handle(Pointer::Down { inside: true }, true);

        let transition = interaction.handle(Pointer::Up { inside: true }, false);
        assert_eq!(transition, Transition::Released { activate: false });
    }

    #[test]
    fn test_clamp_softness() {
        assert_eq!(clamp_softness(-1.0), 0.0);
        assert_eq!(clamp_softness(2.0), 1.0);
        assert_eq!(clamp_softness(0.5), 0.5);
        assert_eq!(clamp_softness(f32::NAN), 1.0);
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(-4.0), 0.0);
        assert_eq!(clamp_length(24.0), 24.0);
        assert_eq!(clamp_length(f32::INFINITY), 0.0);
    }
}
