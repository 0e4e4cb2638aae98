//! Gallery window showing every control and variant

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use tracing::{debug, warn};

use zephyr::settings::Settings;
use zephyr::theme::Palette;
use zephyr::widgets::{button, checkbox, outline_button, radio_group, radio_options};

/// Diameter used by the radio sample rows
const SAMPLE_RADIO_SIZE: f32 = 36.0;

const RADIO_LABELS: [&str; 3] = ["Small", "Medium", "Large"];

#[derive(Debug, Clone)]
pub enum Message {
    ButtonPressed,
    OutlinePressed,
    SimpleChecked(bool),
    OutlineChecked(bool),
    DisabledRadioSelected(usize),
    FilledRadioSelected(usize),
    SizeSelected(usize),
    DarkModeToggled(bool),
    ReduceMotionToggled(bool),
}

/// Gallery state; every control value lives here, the widgets only animate
pub struct Gallery {
    settings: Settings,
    presses: usize,
    outline_presses: usize,
    simple_checked: bool,
    outline_checked: bool,
    disabled_radio: usize,
    filled_radio: usize,
    size: Option<usize>,
}

impl Gallery {
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let gallery = Self {
            settings,
            presses: 0,
            outline_presses: 0,
            simple_checked: false,
            outline_checked: false,
            disabled_radio: 0,
            filled_radio: 0,
            size: None,
        };

        (gallery, Task::none())
    }

    pub fn title(&self) -> String {
        "Zephyr - Gallery".to_string()
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        debug!(?message, "gallery message");

        match message {
            Message::ButtonPressed => self.presses += 1,
            Message::OutlinePressed => self.outline_presses += 1,
            Message::SimpleChecked(checked) => self.simple_checked = checked,
            Message::OutlineChecked(checked) => self.outline_checked = checked,
            Message::DisabledRadioSelected(index) => self.disabled_radio = index,
            Message::FilledRadioSelected(index) => self.filled_radio = index,
            Message::SizeSelected(index) => self.size = Some(index),
            Message::DarkModeToggled(dark_mode) => {
                self.settings.dark_mode = dark_mode;
                self.save_settings();
            }
            Message::ReduceMotionToggled(reduce_motion) => {
                self.settings.motion.reduce_motion = reduce_motion;
                self.save_settings();
            }
        }

        Task::none()
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.settings.palette();

        let content = column![
            self.buttons(palette),
            self.checkboxes(palette),
            self.radios(palette),
            self.preferences(palette),
        ]
        .spacing(32)
        .padding(30)
        .width(Length::Fill);

        scrollable(content).into()
    }

    fn buttons(&self, palette: Palette) -> Element<'_, Message> {
        let timing = self.settings.timing();

        section(
            "Buttons",
            column![
                button("Animated button")
                    .palette(palette)
                    .timing(timing)
                    .width(Length::Fill)
                    .on_press(Message::ButtonPressed),
                outline_button("Animated button")
                    .palette(palette)
                    .timing(timing)
                    .width(Length::Fill)
                    .on_press(Message::OutlinePressed),
                button("Disabled button")
                    .palette(palette)
                    .timing(timing)
                    .width(Length::Fill)
                    .on_press(Message::ButtonPressed)
                    .enabled(false),
                text(format!(
                    "Pressed {} times, outline {} times",
                    self.presses, self.outline_presses
                ))
                .size(13),
            ]
            .spacing(12),
        )
    }

    fn checkboxes(&self, palette: Palette) -> Element<'_, Message> {
        let timing = self.settings.timing();

        section(
            "Checkboxes",
            row![
                checkbox(self.simple_checked, Message::SimpleChecked)
                    .palette(palette)
                    .timing(timing),
                checkbox(self.outline_checked, Message::OutlineChecked)
                    .outline(true)
                    .palette(palette)
                    .timing(timing),
                checkbox(true, Message::SimpleChecked)
                    .enabled(false)
                    .palette(palette)
                    .timing(timing),
            ]
            .spacing(20)
            .align_y(Alignment::Center),
        )
    }

    fn radios(&self, palette: Palette) -> Element<'_, Message> {
        let timing = self.settings.timing();

        let disabled = radio_options(
            2,
            Some(self.disabled_radio),
            |radio| {
                radio
                    .enabled(false)
                    .size(SAMPLE_RADIO_SIZE)
                    .palette(palette)
                    .timing(timing)
            },
            Message::DisabledRadioSelected,
        );

        let filled = radio_options(
            2,
            Some(self.filled_radio),
            |radio| {
                radio
                    .outline(false)
                    .size(SAMPLE_RADIO_SIZE)
                    .palette(palette)
                    .timing(timing)
            },
            Message::FilledRadioSelected,
        );

        section(
            "Radio buttons",
            column![
                iced::widget::Row::with_children(disabled).spacing(20),
                iced::widget::Row::with_children(filled).spacing(20),
                radio_group(
                    RADIO_LABELS,
                    self.size,
                    |radio| radio.palette(palette).timing(timing),
                    Message::SizeSelected
                ),
            ]
            .spacing(16),
        )
    }

    fn preferences(&self, palette: Palette) -> Element<'_, Message> {
        let timing = self.settings.timing();

        let toggle = |label: &'static str, checked: bool, on_toggle: fn(bool) -> Message| {
            row![
                checkbox(checked, on_toggle).palette(palette).timing(timing),
                text(label)
            ]
            .spacing(8)
            .align_y(Alignment::Center)
        };

        section(
            "Preferences",
            column![
                toggle(
                    "Dark mode",
                    self.settings.dark_mode,
                    Message::DarkModeToggled
                ),
                toggle(
                    "Reduce motion",
                    self.settings.motion.reduce_motion,
                    Message::ReduceMotionToggled
                ),
            ]
            .spacing(12),
        )
    }
}

fn section<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let content: Column<'a, Message> = column![text(title).size(18), body.into()].spacing(12);
    container(content).width(Length::Fill).into()
}
