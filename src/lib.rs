//! Zephyr - animated controls for iced
//!
//! A pressable button that compresses and blends its color while held, a
//! checkbox whose fill and checkmark fade in, and a radio button whose dot
//! fades in. Every control is stateless from the caller's point of view:
//! pass the current value in, get a message back.
//!
//! ```rust,no_run
//! use iced::Element;
//! use zephyr::{AnimatedButton, AnimatedCheckbox};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Clicked,
//!     Toggled(bool),
//! }
//!
//! fn view(checked: bool) -> Element<'static, Message> {
//!     iced::widget::column![
//!         AnimatedButton::new(iced::widget::text("Animated button")).on_press(Message::Clicked),
//!         AnimatedCheckbox::new(checked, Message::Toggled),
//!     ]
//!     .into()
//! }
//! ```

pub mod animation;
pub mod interaction;
pub mod primitives;
pub mod settings;
pub mod style;
pub mod theme;
pub mod widgets;

pub use animation::Timing;
pub use primitives::{AnimatedButton, AnimatedCheckbox, AnimatedRadio};
pub use settings::{Settings, SettingsError};
pub use style::{ButtonColors, CheckboxColors, RadioColors};
pub use theme::Palette;
