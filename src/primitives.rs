//! Primitive controls - iced `Widget` implementations
//!
//! Each primitive keeps its interaction state and animation in the widget
//! tree, so the caller only passes plain values (`checked`, `selected`,
//! `enabled`) and receives messages back.
//!
//! # Design Principles
//!
//! - **Caller owns the value**: toggles are echoed back through messages
//! - **Generic Message types**: no application types leak in
//! - **Frame driven**: animations advance on `RedrawRequested` and request
//!   the next frame only while something is moving
//!
//! # Contents
//!
//! - [`AnimatedButton`] - press-scale button with color blend
//! - [`AnimatedCheckbox`] - checkbox with fading fill and checkmark
//! - [`AnimatedRadio`] - radio button with fading dot

pub mod animated_button;
pub mod animated_checkbox;
pub mod animated_radio;

pub use animated_button::AnimatedButton;
pub use animated_checkbox::AnimatedCheckbox;
pub use animated_radio::AnimatedRadio;

use iced::{Event, Rectangle, mouse, touch};

use crate::interaction::Pointer;

/// Translate an iced event into a pointer event for a control at `bounds`.
///
/// Moving off the control while pressed cancels the press, as does losing
/// the finger or the cursor leaving the window.
fn pointer_event(
    event: &Event,
    cursor: mouse::Cursor,
    bounds: Rectangle,
    pressed: bool,
) -> Option<Pointer> {
    let inside = cursor.is_over(bounds);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => Some(Pointer::Down { inside }),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. }) => Some(Pointer::Up { inside }),
        Event::Touch(touch::Event::FingerLost { .. }) | Event::Mouse(mouse::Event::CursorLeft) => {
            pressed.then_some(Pointer::Cancel)
        }
        Event::Mouse(mouse::Event::CursorMoved { .. })
        | Event::Touch(touch::Event::FingerMoved { .. }) => {
            (pressed && !inside).then_some(Pointer::Cancel)
        }
        _ => None,
    }
}

/// Cursor shown over an interactive control
fn interaction_for(enabled: bool, cursor: mouse::Cursor, bounds: Rectangle) -> mouse::Interaction {
    if enabled && cursor.is_over(bounds) {
        mouse::Interaction::Pointer
    } else {
        mouse::Interaction::default()
    }
}


#[cfg(test)]
mod tests {
    use iced::{Point, Size};

    use super::*;

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 40.0,
    };

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    #[test]
    fn test_press_and_release_inside() {
        assert_eq!(
            pointer_event(&press(), at(10.0, 10.0), BOUNDS, false),
            Some(Pointer::Down { inside: true })
        );
        assert_eq!(
            pointer_event(&release(), at(10.0, 10.0), BOUNDS, true),
            Some(Pointer::Up { inside: true })
        );
    }

    #[test]
    fn test_release_outside() {
        assert_eq!(
            pointer_event(&release(), at(500.0, 10.0), BOUNDS, true),
            Some(Pointer::Up { inside: false })
        );
    }

    #[test]
    fn test_moving_out_cancels_only_while_pressed() {
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(500.0, 10.0),
        });

        assert_eq!(
            pointer_event(&moved, at(500.0, 10.0), BOUNDS, true),
            Some(Pointer::Cancel)
        );
        assert_eq!(pointer_event(&moved, at(500.0, 10.0), BOUNDS, false), None);
        assert_eq!(pointer_event(&moved, at(10.0, 10.0), BOUNDS, true), None);
    }

    #[test]
    fn test_cursor_left_cancels() {
        let left = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(
            pointer_event(&left, mouse::Cursor::Unavailable, BOUNDS, true),
            Some(Pointer::Cancel)
        );
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let right = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(pointer_event(&right, at(10.0, 10.0), BOUNDS, false), None);
    }

    #[test]
    fn test_interaction_for() {
        assert_eq!(
            interaction_for(true, at(10.0, 10.0), BOUNDS),
            mouse::Interaction::Pointer
        );
        assert_eq!(
            interaction_for(false, at(10.0, 10.0), BOUNDS),
            mouse::Interaction::default()
        );
        assert_eq!(
            interaction_for(true, at(10.0, 100.0), Rectangle::new(Point::ORIGIN, Size::new(1.0, 1.0))),
            mouse::Interaction::default()
        );
    }
}
