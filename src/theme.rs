//! Palette consumed by the zephyr controls
//! Supports both dark and light iced themes with one accent family

use iced::color;
use iced::{Color, Theme};

// ============================================================================
// Color Palette
// ============================================================================

/// Accent used for pressed buttons and checked boxes
pub const PRIMARY: Color = color!(0x3d5afe);

/// Resting button color
pub const TERTIARY_ONE: Color = color!(0x8c9eff);

/// Disabled controls (dark mode default)
pub const DISABLED: Color = color!(0x5c5c5c);

/// Content drawn on top of filled controls
pub const ON_PRIMARY: Color = Color::WHITE;

mod light {
    use super::*;
    pub const PRIMARY: Color = color!(0x304ffe);
    pub const TERTIARY_ONE: Color = color!(0x536dfe);
    pub const DISABLED: Color = color!(0xbdbdbd);
}

/// Check if theme is dark mode
pub fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Named colors shared by every control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary: Color,
    pub tertiary: Color,
    pub disabled: Color,
    pub on_primary: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        primary: PRIMARY,
        tertiary: TERTIARY_ONE,
        disabled: DISABLED,
        on_primary: ON_PRIMARY,
    };

    pub const LIGHT: Self = Self {
        primary: light::PRIMARY,
        tertiary: light::TERTIARY_ONE,
        disabled: light::DISABLED,
        on_primary: ON_PRIMARY,
    };

    /// Pick the palette matching an iced theme
    pub fn for_theme(theme: &Theme) -> Self {
        if is_dark(theme) { Self::DARK } else { Self::LIGHT }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}

/// Same color with its alpha replaced
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Same color with its alpha multiplied by `factor`
pub fn fade(color: Color, factor: f32) -> Color {
    with_alpha(color, color.a * factor.clamp(0.0, 1.0))
}

/// Linear interpolation between two colors, `t` in [0, 1]
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 {
        return from;
    }
    if t == 1.0 {
        return to;
    }

    let lerp = |a: f32, b: f32| a + (b - a) * t;
    Color {
        r: lerp(from.r, to.r),
        g: lerp(from.g, to.g),
        b: lerp(from.b, to.b),
        a: lerp(from.a, to.a),
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional)
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.is_ascii() || !(digits.len() == 6 || digits.len() == 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let a = if digits.len() == 8 { channel(6)? } else { 255 };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}
