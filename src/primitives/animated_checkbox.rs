//! Animated checkbox primitive
//!
//! A rounded box whose fill and checkmark fade in when checked. The box
//! border is always stroked; the outline variant never fills the box and
//! tints the checkmark with the box color instead.
//!
//! The checkmark is drawn as canvas geometry, so this primitive is tied to
//! `iced::Renderer`.

use iced::advanced::graphics::geometry::Renderer as _;
use iced::advanced::layout;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::tree::{self, Tree};
use iced::advanced::{Clipboard, Layout, Shell, Widget};
use iced::border::Border;
use iced::mouse;
use iced::widget::canvas::{Frame, LineCap, LineJoin, Path, Stroke};
use iced::window;
use iced::{Background, Element, Event, Length, Point, Rectangle, Size, Theme, Vector};
use tracing::debug;

use super::{interaction_for, pointer_event};
use crate::animation::{FadeAnimation, Timing};
use crate::interaction::{Interaction, Transition, clamp_length};
use crate::style::{CheckboxAppearance, CheckboxColors, MARK_RATIO, STROKE_RATIO};
use crate::theme::Palette;

/// Checkmark stroke relative to the control size
const CHECKMARK_STROKE_RATIO: f32 = 0.1;

/// Animated checkbox widget
pub struct AnimatedCheckbox<'a, Message> {
    checked: bool,
    on_toggle: Box<dyn Fn(bool) -> Message + 'a>,
    enabled: bool,
    outline: bool,
    size: f32,
    corner_radius: f32,
    colors: Option<CheckboxColors>,
    palette: Option<Palette>,
    timing: Timing,
}

impl<'a, Message> AnimatedCheckbox<'a, Message> {
    pub const DEFAULT_SIZE: f32 = 24.0;
    pub const DEFAULT_CORNER_RADIUS: f32 = 4.0;

    /// Create a checkbox; `on_toggle` receives the inverted `checked` value
    pub fn new<F>(checked: bool, on_toggle: F) -> Self
    where
        F: 'a + Fn(bool) -> Message,
    {
        Self {
            checked,
            on_toggle: Box::new(on_toggle),
            enabled: true,
            outline: false,
            size: Self::DEFAULT_SIZE,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            colors: None,
            palette: None,
            timing: Timing::default(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    /// Edge length of the box; negative sizes collapse to zero
    pub fn size(mut self, size: f32) -> Self {
        self.size = clamp_length(size);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = clamp_length(radius);
        self
    }

    pub fn colors(mut self, colors: CheckboxColors) -> Self {
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

    fn resolve_colors(&self, theme: &Theme) -> CheckboxColors {
        self.colors.unwrap_or_else(|| {
            let palette = self.palette.unwrap_or_else(|| Palette::for_theme(theme));
            CheckboxColors::from_palette(&palette)
        })
    }

    /// The fill fades out after unchecking, the mark goes at once
    fn shows_mark(&self, progress: f32) -> bool {
        self.checked && progress > 0.0
    }

    /// Renderer-independent half of `Widget::update`
    fn on_event(
        &self,
        state: &mut State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
        shell: &mut Shell<'_, Message>,
    ) {
        state.fade.set_visible(self.checked);

        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            state.fade.tick(*now);
            if state.fade.is_animating() {
                shell.request_redraw();
            }
            return;
        }

        let Some(pointer) = pointer_event(event, cursor, bounds, state.interaction.is_pressed())
        else {
            return;
        };

        match state.interaction.handle(pointer, self.enabled) {
            Transition::Pressed => shell.capture_event(),
            Transition::Released { activate: true } => {
                debug!(checked = !self.checked, "animated checkbox toggled");
                shell.publish((self.on_toggle)(!self.checked));
                shell.capture_event();
            }
            Transition::Released { activate: false } | Transition::Cancelled | Transition::None => {}
        }
    }
}

#[derive(Debug)]
struct State {
    interaction: Interaction,
    fade: FadeAnimation,
}

impl<Message> Widget<Message, Theme, iced::Renderer> for AnimatedCheckbox<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State {
            interaction: Interaction::Idle,
            fade: FadeAnimation::new(self.checked, self.timing),
        })
    }

    fn diff(&self, tree: &mut Tree) {
        let state = tree.state.downcast_mut::<State>();
        state.fade.set_timing(self.timing);
        state.fade.set_visible(self.checked);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.size), Length::Fixed(self.size))
    }

    fn layout(
        &mut self,
        _tree: &mut Tree,
        _renderer: &iced::Renderer,
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
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_mut::<State>();
        self.on_event(state, event, layout.bounds(), cursor, shell);
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
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
            CheckboxAppearance::resolve(self.enabled, self.outline, &self.resolve_colors(theme));
        let (fill, mark) = appearance.at(progress);

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: Border {
                    radius: self.corner_radius.into(),
                    width: self.size * STROKE_RATIO,
                    color: appearance.box_color,
                },
                ..renderer::Quad::default()
            },
            Background::Color(fill),
        );

        if self.shows_mark(progress) {
            let mut frame = Frame::new(renderer, bounds.size());
            frame.stroke(
                &checkmark(bounds.size(), self.size * MARK_RATIO),
                Stroke::default()
                    .with_color(mark)
                    .with_width(self.size * CHECKMARK_STROKE_RATIO)
                    .with_line_cap(LineCap::Round)
                    .with_line_join(LineJoin::Round),
            );

            renderer.with_translation(Vector::new(bounds.x, bounds.y), |renderer| {
                renderer.draw_geometry(frame.into_geometry());
            });
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        interaction_for(self.enabled, cursor, layout.bounds())
    }
}

impl<'a, Message: 'a> From<AnimatedCheckbox<'a, Message>> for Element<'a, Message> {
    fn from(checkbox: AnimatedCheckbox<'a, Message>) -> Self {
        Element::new(checkbox)
    }
}

/// Checkmark polyline of `mark` size centered in a box of `size`
fn checkmark(size: Size, mark: f32) -> Path {
    let [start, corner, end] = checkmark_points(size, mark);

    Path::new(|builder| {
        builder.move_to(start);
        builder.line_to(corner);
        builder.line_to(end);
    })
}

fn checkmark_points(size: Size, mark: f32) -> [Point; 3] {
    let origin = Point::new((size.width - mark) / 2.0, (size.height - mark) / 2.0);
    let at = |x: f32, y: f32| Point::new(origin.x + x * mark, origin.y + y * mark);

    [at(0.08, 0.52), at(0.38, 0.82), at(0.94, 0.2)]
}
