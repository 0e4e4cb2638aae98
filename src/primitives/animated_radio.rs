//! Animated radio button primitive
//!
//! A circular indicator whose inner dot fades in when selected. The widget
//! only reports that it was activated; keeping one option selected per group
//! is up to the caller, usually through a shared selected index.

use iced::advanced::layout;
use iced::advanced::renderer;
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::window;
use iced::{Background, Element, Event, Length, Point, Rectangle, Size, Theme};
use tracing::debug;

use super::{interaction_for, pointer_event};
use crate::animation::{FadeAnimation, Timing};
use crate::interaction::{Interaction, Transition, clamp_length};
use crate::style::{MARK_RATIO, RadioAppearance, RadioColors, STROKE_RATIO};
use crate::theme::Palette;

/// Animated radio button widget
pub struct AnimatedRadio<Message> {
    selected: bool,
    on_click: Message,
    enabled: bool,
    outline: bool,
    size: f32,
    colors: Option<RadioColors>,
    palette: Option<Palette>,
    timing: Timing,
}

impl<Message: Clone> AnimatedRadio<Message> {
    pub const DEFAULT_SIZE: f32 = 24.0;

    pub fn new(selected: bool, on_click: Message) -> Self {
        Self {
            selected,
            on_click,
            enabled: true,
            outline: true,
            size: Self::DEFAULT_SIZE,
            colors: None,
            palette: None,
            timing: Timing::default(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Outline (ring and dot, default) or filled circle
    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    /// Diameter of the circle; negative sizes collapse to zero
    pub fn size(mut self, size: f32) -> Self {
        self.size = clamp_length(size);
        self
    }

    pub fn colors(mut self, colors: RadioColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    fn resolve_colors(&self, theme: &Theme) -> RadioColors {
        self.colors.unwrap_or_else(|| {
            let palette = self.palette.unwrap_or_else(|| Palette::for_theme(theme));
            RadioColors::from_palette(&palette)
        })
    }
}

#[derive(Debug)]
struct State {
    interaction: Interaction,
    fade: FadeAnimation,
}

impl<Message, Renderer> Widget<Message, Theme, Renderer> for AnimatedRadio<Message>
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
            fade: FadeAnimation::new(self.selected, self.timing),
        })
    }

    fn diff(&self, tree: &mut Tree) {
        let state = tree.state.downcast_mut::<State>();
        state.fade.set_timing(self.timing);
        state.fade.set_visible(self.selected);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.size), Length::Fixed(self.size))
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, self.size, self.size)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        state.fade.set_visible(self.selected);

        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            state.fade.tick(*now);
            if state.fade.is_animating() {
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

        match state.interaction.handle(pointer, self.enabled) {
            Transition::Pressed => shell.capture_event(),
            Transition::Released { activate: true } => {
                debug!(selected = self.selected, "animated radio activated");
                shell.publish(self.on_click.clone());
                shell.capture_event();
            }
            Transition::Released { activate: false } | Transition::Cancelled | Transition::None => {}
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let progress = state.fade.value();

        let appearance =
            RadioAppearance::resolve(self.enabled, self.outline, &self.resolve_colors(theme));
        let (fill, dot) = appearance.at(progress);

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: (self.size / 2.0).into(),
                    width: self.size * STROKE_RATIO,
                    color: appearance.ring,
                },
                ..renderer::Quad::default()
            },
            Background::Color(fill),
        );

        if progress > 0.0 {
            let diameter = self.size * MARK_RATIO;
            renderer.fill_quad(
                renderer::Quad {
                    bounds: dot_bounds(bounds, diameter),
                    border: Border {
                        radius: (diameter / 2.0).into(),
                        ..Border::default()
                    },
                    ..renderer::Quad::default()
                },
                Background::Color(dot),
            );
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        interaction_for(self.enabled, cursor, layout.bounds())
    }
}

impl<'a, Message, Renderer> From<AnimatedRadio<Message>> for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: iced::advanced::Renderer + 'a,
{
    fn from(radio: AnimatedRadio<Message>) -> Element<'a, Message, Theme, Renderer> {
        Element::new(radio)
    }
}

/// Square of `diameter` centered in `bounds`
fn dot_bounds(bounds: Rectangle, diameter: f32) -> Rectangle {
    let center = bounds.center();
    Rectangle::new(
        Point::new(center.x - diameter / 2.0, center.y - diameter / 2.0),
        Size::new(diameter, diameter),
    )
}
