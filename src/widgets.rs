//! Ready-made control configurations
//!
//! Thin helpers over the primitives for the common cases: a text button in
//! filled or outline style, a checkbox, and a radio group driven by an
//! external selected index.
//!
//! # Example
//!
//! ```rust,no_run
//! use zephyr::widgets::{button, radio_group};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Save,
//!     Pick(usize),
//! }
//!
//! let selected = Some(0);
//! let _save: iced::Element<'_, Message> = button("Save").on_press(Message::Save).into();
//! let _group = radio_group(["Low", "High"], selected, |radio| radio.size(20.0), Message::Pick);
//! ```

use iced::widget::{Row, row, text};
use iced::{Alignment, Element};

use crate::primitives::{AnimatedButton, AnimatedCheckbox, AnimatedRadio};

/// Spacing between a radio and its label
const LABEL_SPACING: f32 = 8.0;

/// Spacing between the options of a radio group
const GROUP_SPACING: f32 = 20.0;

/// Filled text button
pub fn button<'a, Message: Clone + 'a>(label: &'a str) -> AnimatedButton<'a, Message> {
    AnimatedButton::new(text(label))
}

/// Outline text button
pub fn outline_button<'a, Message: Clone + 'a>(label: &'a str) -> AnimatedButton<'a, Message> {
    button(label).outline(true)
}

/// Checkbox reporting the toggled value through `on_toggle`
pub fn checkbox<'a, Message>(
    checked: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> AnimatedCheckbox<'a, Message> {
    AnimatedCheckbox::new(checked, on_toggle)
}

/// Radio button reporting `on_click` when activated
pub fn radio<Message: Clone>(selected: bool, on_click: Message) -> AnimatedRadio<Message> {
    AnimatedRadio::new(selected, on_click)
}

/// Row of labelled radios sharing one selected index.
///
/// Each option reports its own index through `on_select`; storing it is up
/// to the caller, which keeps the options mutually exclusive. `configure`
/// is applied to every radio (palette, timing, size).
pub fn radio_group<'a, Message>(
    options: impl IntoIterator<Item = &'a str>,
    selected: Option<usize>,
    configure: impl Fn(AnimatedRadio<Message>) -> AnimatedRadio<Message>,
    on_select: impl Fn(usize) -> Message,
) -> Row<'a, Message>
where
    Message: Clone + 'a,
{
    row(options.into_iter().enumerate().map(|(index, label)| {
        let option = configure(radio(selected == Some(index), on_select(index)));
        row![option, text(label)]
            .spacing(LABEL_SPACING)
            .align_y(Alignment::Center)
            .into()
    }))
    .spacing(GROUP_SPACING)
    .align_y(Alignment::Center)
}

/// Radio options as bare circles, for layouts that place labels elsewhere
pub fn radio_options<'a, Message>(
    count: usize,
    selected: Option<usize>,
    configure: impl Fn(AnimatedRadio<Message>) -> AnimatedRadio<Message>,
    on_select: impl Fn(usize) -> Message,
) -> Vec<Element<'a, Message>>
where
    Message: Clone + 'a,
{
    (0..count)
        .map(|index| configure(radio(selected == Some(index), on_select(index))).into())
        .collect()
}
