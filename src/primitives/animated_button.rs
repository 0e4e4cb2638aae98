//! Animated button primitive
//!
//! A rounded button that shrinks toward its softness while pressed and blends
//! its colors toward the pressed branch. The outline variant swaps the solid
//! fill for a stroked border over a transparent (or faintly tinted) fill.
//!
//! Based on iced's button widget, with the press state and animations kept
//! in the widget tree.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::window;
use iced::{
    Background, Color, Element, Event, Length, Padding, Rectangle, Size, Theme, Transformation,
};
use tracing::debug;

use super::{interaction_for, pointer_event};
use crate::animation::{PressAnimation, Timing};
use crate::interaction::{Interaction, Transition, clamp_length, clamp_softness};
use crate::style::{BUTTON_BORDER_WIDTH, ButtonAppearance, ButtonColors};
use crate::theme::Palette;

/// Animated button widget
pub struct AnimatedButton<'a, Message, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_press: Option<Message>,
    enabled: bool,
    outline: bool,
    color: Option<Color>,
    pressed_color: Option<Color>,
    text_color: Option<Color>,
    palette: Option<Palette>,
    corner_radius: f32,
    softness: f32,
    padding: Padding,
    width: Length,
    height: Length,
    timing: Timing,
}

impl<'a, Message, Renderer> AnimatedButton<'a, Message, Renderer>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    pub const DEFAULT_CORNER_RADIUS: f32 = 8.0;
    pub const DEFAULT_SOFTNESS: f32 = 0.98;
    pub const DEFAULT_PADDING: Padding = Padding {
        top: 11.0,
        bottom: 11.0,
        left: 15.0,
        right: 15.0,
    };

    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_press: None,
            enabled: true,
            outline: false,
            color: None,
            pressed_color: None,
            text_color: None,
            palette: None,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            softness: Self::DEFAULT_SOFTNESS,
            padding: Self::DEFAULT_PADDING,
            width: Length::Shrink,
            height: Length::Shrink,
            timing: Timing::default(),
        }
    }

    /// Message published once per press released inside the button
    pub fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Render with a transparent fill and a stroked border
    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    /// Background when idle; defaults to the palette tertiary color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Background when pressed; defaults to the palette primary color
    pub fn pressed_color(mut self, color: Color) -> Self {
        self.pressed_color = Some(color);
        self
    }

    /// Text color of the filled variant, ignored when outlined
    pub fn text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Palette used for every color not set explicitly
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = clamp_length(radius);
        self
    }

    /// Scale reached while pressed, clamped to [0, 1]
    pub fn softness(mut self, softness: f32) -> Self {
        self.softness = clamp_softness(softness);
        self
    }

    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    fn is_enabled(&self) -> bool {
        self.enabled && self.on_press.is_some()
    }

    fn colors(&self, theme: &Theme) -> ButtonColors {
        let palette = self.palette.unwrap_or_else(|| Palette::for_theme(theme));
        let defaults = ButtonColors::from_palette(&palette);

        ButtonColors {
            color: self.color.unwrap_or(defaults.color),
            pressed: self.pressed_color.unwrap_or(defaults.pressed),
            text: self.text_color.unwrap_or(defaults.text),
            disabled: defaults.disabled,
        }
    }
}

#[derive(Debug, Default)]
struct State {
    interaction: Interaction,
    press: PressAnimation,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for AnimatedButton<'_, Message, Renderer>
where
    Message: Clone,
    Renderer: iced::advanced::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            interaction: Interaction::Idle,
            press: PressAnimation::new(self.timing),
        })
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::padded(limits, self.width, self.height, self.padding, |limits| {
            self.content
                .as_widget_mut()
                .layout(&mut tree.children[0], renderer, limits)
        })
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        if let Some(content_layout) = layout.children().next() {
            self.content.as_widget_mut().update(
                &mut tree.children[0],
                event,
                content_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }

        let enabled = self.is_enabled();
        let state = tree.state.downcast_mut::<State>();
        state.press.set_timing(self.timing);

        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            state.press.tick(*now);
            if state.press.is_animating() {
                shell.request_redraw();
            }
            return;
        }

        let Some(pointer) = pointer_event(
            event,
            cursor,
            layout.bounds(),
            state.interaction.is_pressed(),
        ) else {
            return;
        };

        match state.interaction.handle(pointer, enabled) {
            Transition::Pressed => {
                state.press.press(self.softness);
                shell.capture_event();
                shell.request_redraw();
            }
            Transition::Released { activate } => {
                state.press.release();
                if activate {
                    if let Some(on_press) = self.on_press.clone() {
                        debug!("animated button activated");
                        shell.publish(on_press);
                        shell.capture_event();
                    }
                }
                shell.request_redraw();
            }
            Transition::Cancelled => {
                state.press.release();
                shell.request_redraw();
            }
            Transition::None => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();

        let appearance = ButtonAppearance::blend(
            self.is_enabled(),
            self.outline,
            &self.colors(theme),
            state.press.color_progress(),
        );

        // Scale around the center of the button
        let center = bounds.center();
        let transformation = Transformation::translate(center.x, center.y)
            * Transformation::scale(state.press.scale())
            * Transformation::translate(-center.x, -center.y);

        renderer.with_transformation(transformation, |renderer| {
            renderer.fill_quad(
                renderer::Quad {
                    bounds,
                    border: Border {
                        radius: self.corner_radius.into(),
                        width: appearance.border.map_or(0.0, |_| BUTTON_BORDER_WIDTH),
                        color: appearance.border.unwrap_or(Color::TRANSPARENT),
                    },
                    ..renderer::Quad::default()
                },
                Background::Color(appearance.fill),
            );

            if let Some(content_layout) = layout.children().next() {
                self.content.as_widget().draw(
                    &tree.children[0],
                    renderer,
                    theme,
                    &renderer::Style {
                        text_color: appearance.text,
                    },
                    content_layout,
                    cursor,
                    viewport,
                );
            }
        });
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        interaction_for(self.is_enabled(), cursor, layout.bounds())
    }
}

impl<'a, Message, Renderer> From<AnimatedButton<'a, Message, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(button: AnimatedButton<'a, Message, Renderer>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(button)
    }
}
