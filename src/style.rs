//! Pure appearance functions for the controls
//!
//! Each control's colors are derived from its current state on every draw.
//! Nothing here is cached and nothing depends on history; animation only
//! blends between two resolved appearances.

use iced::Color;

use crate::interaction::Interaction;
use crate::theme::{self, Palette};

/// Alpha of the outline button fill while pressed
pub const OUTLINE_PRESSED_ALPHA: f32 = 0.1;

/// Border width of the outline button
pub const BUTTON_BORDER_WIDTH: f32 = 2.0;

/// Checkbox/radio stroke width relative to the control size
pub const STROKE_RATIO: f32 = 0.08;

/// Checkmark/dot size relative to the control size
pub const MARK_RATIO: f32 = 0.5;

// ============================================================================
// Button
// ============================================================================

/// Color inputs of an animated button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    /// Background when idle
    pub color: Color,
    /// Background when pressed
    pub pressed: Color,
    /// Text color of the filled variant
    pub text: Color,
    /// Replaces the background of a disabled button
    pub disabled: Color,
}

impl ButtonColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            color: palette.tertiary,
            pressed: palette.primary,
            text: palette.on_primary,
            disabled: palette.disabled,
        }
    }
}

impl Default for ButtonColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

/// Resolved colors of a button in one interaction state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonAppearance {
    pub fill: Color,
    /// Stroke color, only for the outline variant
    pub border: Option<Color>,
    pub text: Color,
}

impl ButtonAppearance {
    /// Resolve the button colors; the first matching branch wins
    pub fn resolve(
        interaction: Interaction,
        enabled: bool,
        outline: bool,
        colors: &ButtonColors,
    ) -> Self {
        let pressed = interaction.is_pressed();

        let fill = if outline && pressed {
            theme::with_alpha(colors.pressed, OUTLINE_PRESSED_ALPHA)
        } else if outline {
            Color::TRANSPARENT
        } else if !enabled {
            colors.disabled
        } else if pressed {
            colors.pressed
        } else {
            colors.color
        };

        let border = outline.then(|| {
            if !enabled {
                colors.disabled
            } else if pressed {
                colors.pressed
            } else {
                colors.color
            }
        });

        let text = if !outline {
            colors.text
        } else if !enabled {
            colors.disabled
        } else if pressed {
            colors.pressed
        } else {
            colors.color
        };

        Self { fill, border, text }
    }

    /// Blend between the idle (`t = 0`) and pressed (`t = 1`) appearances
    pub fn blend(enabled: bool, outline: bool, colors: &ButtonColors, t: f32) -> Self {
        let idle = Self::resolve(Interaction::Idle, enabled, outline, colors);
        let pressed = Self::resolve(Interaction::Pressed, enabled, outline, colors);

        Self {
            fill: theme::mix(idle.fill, pressed.fill, t),
            border: match (idle.border, pressed.border) {
                (Some(from), Some(to)) => Some(theme::mix(from, to, t)),
                (border, _) => border,
            },
            text: theme::mix(idle.text, pressed.text, t),
        }
    }
}

// ============================================================================
// Checkbox
// ============================================================================

/// Color inputs of an animated checkbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckboxColors {
    pub checkmark: Color,
    pub box_color: Color,
    pub disabled: Color,
}

impl CheckboxColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            checkmark: palette.on_primary,
            box_color: palette.primary,
            disabled: palette.disabled,
        }
    }
}

impl Default for CheckboxColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

/// Resolved checkbox appearance
///
/// The fade value drives both the fill and the checkmark; [`Self::at`] is
/// what gets painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckboxAppearance {
    /// Box color used for both fill and stroke
    pub box_color: Color,
    pub mark: Color,
    /// Whether the box is filled as it fades in; outline boxes never are
    pub filled: bool,
}

impl CheckboxAppearance {
    pub fn resolve(enabled: bool, outline: bool, colors: &CheckboxColors) -> Self {
        // A disabled outline mark sits on a transparent box, so it takes the
        // disabled color; a disabled filled mark stays legible on the grey box
        let mark = if outline && !enabled {
            colors.disabled
        } else if outline {
            colors.box_color
        } else {
            colors.checkmark
        };

        Self {
            box_color: if enabled {
                colors.box_color
            } else {
                colors.disabled
            },
            mark,
            filled: !outline,
        }
    }

    /// Fill and mark colors for a fade `progress` in [0, 1]
    pub fn at(&self, progress: f32) -> (Color, Color) {
        let fill = if self.filled { progress } else { 0.0 };
        (
            theme::fade(self.box_color, fill),
            theme::fade(self.mark, progress),
        )
    }
}

// ============================================================================
// Radio
// ============================================================================

/// Color inputs of an animated radio button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioColors {
    /// Inner dot of the filled variant
    pub dot: Color,
    /// Ring, outline dot and filled background
    pub ring: Color,
    pub disabled: Color,
}

impl RadioColors {
    pub fn from_palette(palette: &Palette) -> Self {
        Self {
            dot: palette.on_primary,
            ring: palette.primary,
            disabled: palette.disabled,
        }
    }
}

impl Default for RadioColors {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

/// Resolved radio appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadioAppearance {
    pub ring: Color,
    pub dot: Color,
    /// Whether the circle is filled as it fades in
    pub filled: bool,
}

impl RadioAppearance {
    pub fn resolve(enabled: bool, outline: bool, colors: &RadioColors) -> Self {
        let ring = if enabled { colors.ring } else { colors.disabled };

        Self {
            ring,
            dot: if outline { ring } else { colors.dot },
            filled: !outline,
        }
    }

    /// Fill and dot colors for a fade `progress` in [0, 1]
    pub fn at(&self, progress: f32) -> (Color, Color) {
        let fill = if self.filled { progress } else { 0.0 };
        (
            theme::fade(self.ring, fill),
            theme::fade(self.dot, progress),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{FadeAnimation, Timing};

    const COLORS: ButtonColors = ButtonColors {
        color: Color::from_rgb(0.1, 0.2, 0.3),
        pressed: Color::from_rgb(0.7, 0.1, 0.1),
        text: Color::WHITE,
        disabled: Color::from_rgb(0.5, 0.5, 0.5),
    };

    #[test]
    fn test_filled_button_branches() {
        let idle = ButtonAppearance::resolve(Interaction::Idle, true, false, &COLORS);
        assert_eq!(idle.fill, COLORS.color);
        assert_eq!(idle.border, None);
        assert_eq!(idle.text, COLORS.text);

        let pressed = ButtonAppearance::resolve(Interaction::Pressed, true, false, &COLORS);
        assert_eq!(pressed.fill, COLORS.pressed);
        assert_eq!(pressed.text, COLORS.text);
    }

    #[test]
    fn test_disabled_overrides_pressed_fill() {
        let appearance = ButtonAppearance::resolve(Interaction::Pressed, false, false, &COLORS);
        assert_eq!(appearance.fill, COLORS.disabled);
        assert_eq!(appearance.text, COLORS.text);
    }

    #[test]
    fn test_outline_button_branches() {
        let idle = ButtonAppearance::resolve(Interaction::Idle, true, true, &COLORS);
        assert_eq!(idle.fill, Color::TRANSPARENT);
        assert_eq!(idle.border, Some(COLORS.color));
        assert_eq!(idle.text, COLORS.color);

        let pressed = ButtonAppearance::resolve(Interaction::Pressed, true, true, &COLORS);
        assert_eq!(pressed.fill, theme::with_alpha(COLORS.pressed, 0.1));
        assert_eq!(pressed.border, Some(COLORS.pressed));
        assert_eq!(pressed.text, COLORS.pressed);

        let disabled = ButtonAppearance::resolve(Interaction::Idle, false, true, &COLORS);
        assert_eq!(disabled.fill, Color::TRANSPARENT);
        assert_eq!(disabled.border, Some(COLORS.disabled));
        assert_eq!(disabled.text, COLORS.disabled);
    }

    #[test]
    fn test_blend_endpoints_match_resolve() {
        for outline in [false, true] {
            let idle = ButtonAppearance::resolve(Interaction::Idle, true, outline, &COLORS);
            let pressed = ButtonAppearance::resolve(Interaction::Pressed, true, outline, &COLORS);

            assert_eq!(ButtonAppearance::blend(true, outline, &COLORS, 0.0), idle);
            assert_eq!(ButtonAppearance::blend(true, outline, &COLORS, 1.0), pressed);
        }
    }

    #[test]
    fn test_checkbox_filled_checked() {
        let colors = CheckboxColors::default();
        let appearance = CheckboxAppearance::resolve(true, false, &colors);
        let (fill, mark) = appearance.at(1.0);

        assert_eq!(fill, colors.box_color);
        assert_eq!(mark, colors.checkmark);
        assert_eq!(appearance.box_color, colors.box_color);
    }

    #[test]
    fn test_checkbox_outline_checked() {
        let colors = CheckboxColors::default();
        let appearance = CheckboxAppearance::resolve(true, true, &colors);
        let (fill, mark) = appearance.at(1.0);

        assert_eq!(fill.a, 0.0);
        assert_eq!(mark, colors.box_color);
    }

    #[test]
    fn test_checkbox_toggle_round_trip() {
        let colors = CheckboxColors::default();
        let appearance = CheckboxAppearance::resolve(true, false, &colors);
        let mut fade = FadeAnimation::new(false, Timing::instant());

        let mut alphas = Vec::new();
        for checked in [false, true, false] {
            fade.set_visible(checked);
            alphas.push(appearance.at(fade.value()).0.a);
        }

        assert_eq!(alphas, vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_checkbox_unchecked_paints_nothing_inside() {
        let appearance = CheckboxAppearance::resolve(true, false, &CheckboxColors::default());
        let (fill, mark) = appearance.at(0.0);

        assert_eq!(fill.a, 0.0);
        assert_eq!(mark.a, 0.0);
    }

    #[test]
    fn test_checkbox_disabled_colors() {
        let colors = CheckboxColors::from_palette(&Palette::LIGHT);

        let outline = CheckboxAppearance::resolve(false, true, &colors);
        let (fill, mark) = outline.at(1.0);
        assert_eq!(outline.box_color, colors.disabled);
        assert_eq!(fill.a, 0.0);
        assert_eq!(mark, colors.disabled);

        let filled = CheckboxAppearance::resolve(false, false, &colors);
        let (fill, mark) = filled.at(1.0);
        assert_eq!(fill, colors.disabled);
        assert_eq!(mark, colors.checkmark);
    }

    #[test]
    fn test_radio_variants() {
        let colors = RadioColors::default();

        let outline = RadioAppearance::resolve(true, true, &colors);
        let (fill, dot) = outline.at(1.0);
        assert_eq!(fill.a, 0.0);
        assert_eq!(dot, colors.ring);

        let filled = RadioAppearance::resolve(true, false, &colors);
        let (fill, dot) = filled.at(1.0);
        assert_eq!(fill, colors.ring);
        assert_eq!(dot, colors.dot);

        let disabled = RadioAppearance::resolve(false, true, &colors);
        let (_, dot) = disabled.at(0.0);
        assert_eq!(disabled.ring, colors.disabled);
        assert_eq!(dot.a, 0.0);
    }
}
